/// Result alias used by the application and adapter layers.
/// The materializer itself returns `Result<T, RecordError>`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
