use super::PayloadInput;
use crate::records::RecordKind;

/// MaterializeRequest - Internal request DTO for the materialize use case
#[derive(Debug, Clone)]
pub struct MaterializeRequest {
    /// Record shape the payload is materialized as
    pub kind: RecordKind,
    /// Where the payload text comes from
    pub input: PayloadInput,
    /// Treat the payload as a top-level sequence of records
    pub sequence: bool,
}

impl MaterializeRequest {
    pub fn new(kind: RecordKind, input: PayloadInput, sequence: bool) -> Self {
        Self {
            kind,
            input,
            sequence,
        }
    }
}
