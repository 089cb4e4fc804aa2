use crate::application::dto::MaterializeResponse;
use crate::materializer::{FieldShape, FieldSpec};
use crate::ports::outbound::RecordFormatter;
use crate::shared::Result;
use serde_json::Value;

/// Markdown table header for single-record output
const FIELD_TABLE_HEADER: &str = "| Field | Value |\n";

/// Markdown table separator line for single-record output
const FIELD_TABLE_SEPARATOR: &str = "|-------|-------|\n";

/// Cell text for a field the payload did not supply
const ABSENT: &str = "N/A";

/// MarkdownFormatter adapter for human-readable record tables
///
/// Column layout comes from the record kind's field table, so every kind
/// renders without a dedicated template. A single record becomes a
/// field/value table followed by one section per nested list; a sequence
/// becomes one table with a row per record.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and line breaks (LF, CRLF, CR) for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|")
            .replace("\r\n", " ")
            .replace(['\r', '\n'], " ")
    }

    fn render_cell(value: Option<&Value>) -> String {
        match value {
            None | Some(Value::Null) => ABSENT.to_string(),
            Some(Value::String(text)) => Self::escape_markdown_table_cell(text),
            Some(other) => Self::escape_markdown_table_cell(&other.to_string()),
        }
    }

    fn render_table_head(output: &mut String, columns: &[&str]) {
        output.push('|');
        for column in columns {
            output.push_str(&format!(" {} |", column));
        }
        output.push_str("\n|");
        for column in columns {
            output.push_str(&"-".repeat(column.len() + 2));
            output.push('|');
        }
        output.push('\n');
    }

    fn render_row(output: &mut String, cells: &[String]) {
        output.push('|');
        for cell in cells {
            output.push_str(&format!(" {} |", cell));
        }
        output.push('\n');
    }

    fn row_for(record: &Value, fields: &[FieldSpec]) -> Vec<String> {
        fields
            .iter()
            .map(|field| Self::render_cell(record.get(field.name)))
            .collect()
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_record(
        &self,
        output: &mut String,
        name: &str,
        fields: &[FieldSpec],
        record: &Value,
    ) {
        output.push_str(&format!("# {}\n\n", name));
        output.push_str(FIELD_TABLE_HEADER);
        output.push_str(FIELD_TABLE_SEPARATOR);

        let (nested, flat): (Vec<&FieldSpec>, Vec<&FieldSpec>) = fields.iter().partition(|f| {
            matches!(f.shape, FieldShape::Sequence(_) | FieldShape::Map(_))
        });

        for field in flat {
            output.push_str(&format!(
                "| {} | {} |\n",
                field.name,
                Self::render_cell(record.get(field.name))
            ));
        }
        output.push('\n');

        for field in nested {
            self.render_nested(output, field, record.get(field.name));
        }
    }

    fn render_nested(&self, output: &mut String, field: &FieldSpec, value: Option<&Value>) {
        output.push_str(&format!("## {}\n\n", field.name));

        match (field.shape, value) {
            (FieldShape::Sequence(columns), Some(Value::Array(items))) if !items.is_empty() => {
                let names: Vec<&str> = columns.iter().map(|c| c.name).collect();
                Self::render_table_head(output, &names);
                for item in items {
                    Self::render_row(output, &Self::row_for(item, columns));
                }
            }
            (FieldShape::Map(columns), Some(Value::Object(entries))) if !entries.is_empty() => {
                let names: Vec<&str> = std::iter::once("Key")
                    .chain(columns.iter().map(|c| c.name))
                    .collect();
                Self::render_table_head(output, &names);
                for (key, item) in entries {
                    let mut cells = vec![Self::escape_markdown_table_cell(key)];
                    cells.extend(Self::row_for(item, columns));
                    Self::render_row(output, &cells);
                }
            }
            (_, None) => output.push_str("*Not provided.*\n"),
            _ => output.push_str("*No entries.*\n"),
        }
        output.push('\n');
    }

    fn render_sequence(
        &self,
        output: &mut String,
        name: &str,
        fields: &[FieldSpec],
        records: &[Value],
    ) {
        output.push_str(&format!("# {} ({})\n\n", name, records.len()));

        if records.is_empty() {
            output.push_str("*No records.*\n");
            return;
        }

        let names: Vec<&str> = fields.iter().map(|f| f.name).collect();
        Self::render_table_head(output, &names);
        for record in records {
            Self::render_row(output, &Self::row_for(record, fields));
        }
        output.push('\n');
    }
}

impl RecordFormatter for MarkdownFormatter {
    fn format(&self, response: &MaterializeResponse) -> Result<String> {
        let mut output = String::new();
        let name = response.kind.name();
        let fields = response.kind.fields();

        if response.sequence {
            self.render_sequence(&mut output, name, fields, &response.records);
        } else {
            let empty = Value::Object(serde_json::Map::new());
            let record = response.records.first().unwrap_or(&empty);
            self.render_record(&mut output, name, fields, record);
        }

        Ok(output)
    }
}
