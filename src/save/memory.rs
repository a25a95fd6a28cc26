use super::store::Store;
use std::cell::RefCell;

/// In-process store that still goes through the text codec.
#[derive(Debug, Default)]
pub struct Memory(RefCell<Option<String>>);

impl Memory {
    /// Last saved text, if any.
    pub fn text(&self) -> Option<String> {
        self.0.borrow().clone()
    }
}

impl From<&str> for Memory {
    fn from(text: &str) -> Self {
        Self(RefCell::new(Some(text.to_string())))
    }
}

impl Store for Memory {
    fn read(&self) -> anyhow::Result<Option<String>> {
        Ok(self.text())
    }
    fn write(&self, text: &str) -> anyhow::Result<()> {
        self.0.replace(Some(text.to_string()));
        Ok(())
    }
}
