use super::backend::StorageBackend;
use super::Snapshot;
use crate::error::{AbookError, Result};
use std::cell::{Cell, RefCell};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since abook is single-threaded,
/// which lets `StorageBackend` take `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    snapshot: RefCell<Option<Snapshot>>,
    saves: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a previously saved snapshot, as if rehydrating from disk.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: RefCell::new(Some(snapshot)),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// The last snapshot written, if any.
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.snapshot.borrow().clone()
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves.get()
    }
}

impl StorageBackend for MemBackend {
    fn load_snapshot(&self) -> Result<Option<Snapshot>> {
        Ok(self.snapshot.borrow().clone())
    }

    fn save_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(AbookError::Store("Simulated write error".to_string()));
        }
        *self.snapshot.borrow_mut() = Some(snapshot.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory://contacts".to_string()
    }
}
