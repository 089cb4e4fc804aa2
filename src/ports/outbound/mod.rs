/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the materialize use case and the CLI
/// use to reach the file system and the console.
pub mod formatter;
pub mod output_presenter;
pub mod payload_reader;

pub use formatter::RecordFormatter;
pub use output_presenter::OutputPresenter;
pub use payload_reader::PayloadReader;
