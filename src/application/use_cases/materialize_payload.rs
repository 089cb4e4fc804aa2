use crate::application::dto::{MaterializeRequest, MaterializeResponse};
use crate::ports::outbound::PayloadReader;
use crate::shared::Result;

/// MaterializePayloadUseCase - reads a backend payload and materializes it
///
/// # Type Parameters
/// * `R` - PayloadReader implementation
pub struct MaterializePayloadUseCase<R> {
    payload_reader: R,
}

impl<R> MaterializePayloadUseCase<R>
where
    R: PayloadReader,
{
    pub fn new(payload_reader: R) -> Self {
        Self { payload_reader }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Returns an error if the payload cannot be read, or a
    /// [`RecordError::Parse`](crate::shared::RecordError::Parse) if it is not JSON.
    pub fn execute(&self, request: MaterializeRequest) -> Result<MaterializeResponse> {
        let text = self.payload_reader.read_payload(&request.input)?;
        tracing::debug!(
            kind = %request.kind,
            input = %request.input,
            bytes = text.len(),
            sequence = request.sequence,
            "materializing payload"
        );

        let records = request.kind.materialize(text.as_str(), request.sequence)?;
        tracing::debug!(kind = %request.kind, count = records.len(), "materialized records");

        Ok(MaterializeResponse::new(
            request.kind,
            records,
            request.sequence,
        ))
    }
}
