use crate::Lookahead;
use crate::oracle::Oracle;

/// Somewhere an [`Oracle`] can be loaded from and saved to.
///
/// Implementors only move text around; the codec and the recovery policy
/// live in the provided methods. There is no locking: two stores pointed at
/// the same place overwrite each other and the last save wins.
pub trait Store {
    /// Current contents, or `None` when nothing has been saved yet.
    fn read(&self) -> anyhow::Result<Option<String>>;
    /// Replace the contents in one shot.
    fn write(&self, text: &str) -> anyhow::Result<()>;

    /// Never fails. Missing, unreadable or malformed contents degrade
    /// to whatever could be recovered, down to a fresh oracle.
    fn load(&self, limit: Lookahead) -> Oracle {
        match self.read() {
            Ok(Some(text)) => Oracle::decode(&text, limit),
            Ok(None) => {
                log::info!("no database yet, starting fresh");
                Oracle::new(limit)
            }
            Err(e) => {
                log::warn!("failed to read database, starting fresh: {:#}", e);
                Oracle::new(limit)
            }
        }
    }
    fn save(&self, oracle: &Oracle) -> anyhow::Result<()> {
        self.write(&oracle.encode())?;
        log::debug!(
            "saved {} moves of history and {} contexts",
            oracle.history().len(),
            oracle.table().len()
        );
        Ok(())
    }
}
