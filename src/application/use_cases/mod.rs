/// Use cases module containing application orchestration
mod materialize_payload;

pub use materialize_payload::MaterializePayloadUseCase;
