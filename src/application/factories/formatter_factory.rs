use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::RecordFormatter;

/// Factory for creating record formatters
///
/// Picks the formatter adapter for an output format so the CLI never names
/// adapter types directly.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for `format`. `pretty` only affects JSON output.
    ///
    /// # Examples
    /// ```
    /// use tanzu_records::application::dto::OutputFormat;
    /// use tanzu_records::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, true);
    /// ```
    pub fn create(format: OutputFormat, pretty: bool) -> Box<dyn RecordFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new(pretty)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Status line shown on stderr before formatting
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Rendering records as JSON...",
            OutputFormat::Markdown => "📝 Rendering records as Markdown...",
        }
    }
}
