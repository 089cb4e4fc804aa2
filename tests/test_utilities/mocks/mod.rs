/// Mock implementations for testing
mod mock_output_presenter;
mod mock_payload_reader;

pub use mock_output_presenter::MockOutputPresenter;
pub use mock_payload_reader::MockPayloadReader;
