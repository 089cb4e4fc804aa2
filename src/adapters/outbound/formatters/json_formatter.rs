use crate::application::dto::MaterializeResponse;
use crate::ports::outbound::RecordFormatter;
use crate::shared::Result;
use serde_json::Value;

/// JsonFormatter adapter for normalized JSON output
///
/// A single record renders as an object, a sequence as an array. Absent
/// fields are already dropped from the response, so the output only carries
/// what the payload supplied in the declared shape.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn encode(&self, value: &Value) -> Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl RecordFormatter for JsonFormatter {
    fn format(&self, response: &MaterializeResponse) -> Result<String> {
        let mut output = if response.sequence {
            self.encode(&Value::Array(response.records.clone()))?
        } else {
            match response.records.first() {
                Some(record) => self.encode(record)?,
                None => self.encode(&Value::Object(serde_json::Map::new()))?,
            }
        };
        output.push('\n');
        Ok(output)
    }
}
