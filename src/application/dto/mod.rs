/// Data Transfer Objects for application layer
///
/// DTOs carry requests into the materialize use case and its results
/// out to the formatters, keeping the CLI types out of the core.
mod materialize_request;
mod materialize_response;
mod output_format;
mod payload_input;

pub use materialize_request::MaterializeRequest;
pub use materialize_response::MaterializeResponse;
pub use output_format::OutputFormat;
pub use payload_input::PayloadInput;
