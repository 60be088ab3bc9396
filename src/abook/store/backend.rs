use super::Snapshot;
use crate::error::Result;

/// Abstract interface for raw snapshot I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while AddressBook handles the "what" (keys, lookups, pagination).
pub trait StorageBackend {
    /// Load the last saved snapshot.
    /// Returns Ok(None) when nothing was ever saved; that is a fresh, empty book.
    fn load_snapshot(&self) -> Result<Option<Snapshot>>;

    /// Replace the stored snapshot wholesale.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_snapshot(&self, snapshot: &Snapshot) -> Result<()>;

    /// Human readable location, used in log events.
    fn location(&self) -> String;
}
