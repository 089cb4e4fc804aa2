use std::cell::RefCell;
use tanzu_records::prelude::*;

/// Mock PayloadReader for testing
pub struct MockPayloadReader {
    pub content: String,
    pub should_fail: bool,
    /// Every input the reader was asked for, in call order
    pub requested: RefCell<Vec<PayloadInput>>,
}

impl MockPayloadReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            should_fail: false,
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
            requested: RefCell::new(Vec::new()),
        }
    }
}

impl PayloadReader for MockPayloadReader {
    fn read_payload(&self, input: &PayloadInput) -> Result<String> {
        self.requested.borrow_mut().push(input.clone());
        if self.should_fail {
            anyhow::bail!("Mock payload read failure");
        }
        Ok(self.content.clone())
    }
}

/// Lets a test keep the mock after handing it to a use case
impl PayloadReader for &MockPayloadReader {
    fn read_payload(&self, input: &PayloadInput) -> Result<String> {
        (**self).read_payload(input)
    }
}
