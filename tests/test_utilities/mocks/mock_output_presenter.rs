use std::cell::RefCell;
use tanzu_records::prelude::*;

/// Mock OutputPresenter that keeps what it was given
#[derive(Default)]
pub struct MockOutputPresenter {
    pub presented: RefCell<Vec<String>>,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<String> {
        self.presented.borrow().last().cloned()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.presented.borrow_mut().push(content.to_string());
        Ok(())
    }
}
