use super::store::Store;
use anyhow::Context;
use std::path::Path;
use std::path::PathBuf;

/// File-backed store. One file per installation, rewritten whole on save.
#[derive(Debug, Clone)]
pub struct Disk {
    path: PathBuf,
}

impl Disk {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
    /// Check if file exists on disk.
    pub fn exists(&self) -> bool {
        std::fs::metadata(&self.path).is_ok()
    }
    /// Delete the file. Deleting a missing file is not an error.
    pub fn forget(&self) -> anyhow::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("remove {}", self.path.display())),
        }
    }
}

impl Default for Disk {
    /// `.roshambo` in the current working directory.
    fn default() -> Self {
        Self::new(
            std::env::current_dir()
                .unwrap_or_default()
                .join(crate::DATABASE),
        )
    }
}

impl Store for Disk {
    fn read(&self) -> anyhow::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("read {}", self.path.display())),
        }
    }
    fn write(&self, text: &str) -> anyhow::Result<()> {
        std::fs::write(&self.path, text)
            .with_context(|| format!("write {}", self.path.display()))
    }
}
