use crate::records::RecordKind;
use serde_json::Value;

/// MaterializeResponse - Result of the materialize use case
///
/// Records are held as their normalized JSON (absent fields dropped) so
/// formatters can render any kind through its field table.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterializeResponse {
    pub kind: RecordKind,
    pub records: Vec<Value>,
    /// Whether the payload was read as a sequence; a sequence of one record
    /// still renders as a list.
    pub sequence: bool,
}

impl MaterializeResponse {
    pub fn new(kind: RecordKind, records: Vec<Value>, sequence: bool) -> Self {
        Self {
            kind,
            records,
            sequence,
        }
    }
}
