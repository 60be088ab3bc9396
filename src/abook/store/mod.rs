//! # Storage Layer
//!
//! [`AddressBook`] is the keyed store of [`Record`]s. It owns every record and
//! writes a full snapshot through its [`StorageBackend`] after each mutation.
//!
//! ## Split of Responsibilities
//!
//! - [`book::AddressBook`] handles the "what": keys, ordering, lookups, pagination.
//! - [`backend::StorageBackend`] handles the "how": where the snapshot bytes live.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: a single JSON document on disk, replaced atomically.
//! - [`mem_backend::MemBackend`]: keeps the last snapshot in memory, for tests.
//!
//! ## Snapshot Format
//!
//! ```text
//! {
//!   "version": 1,
//!   "contacts": [
//!     { "name": "John Smith", "phones": ["5551234567"], "birthday": "01-01-2000" }
//!   ]
//! }
//! ```
//!
//! Contacts are written in store order so pagination survives a restart. Field
//! values are stored as their canonical text and re-validated on load.

use crate::record::Record;
use serde::{Deserialize, Serialize};

pub mod backend;
pub mod book;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

pub use backend::StorageBackend;
pub use book::{AddressBook, DEFAULT_PAGE_SIZE};

pub const SNAPSHOT_VERSION: u32 = 1;

/// Everything persisted between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub contacts: Vec<Record>,
}

impl Snapshot {
    pub fn new(contacts: Vec<Record>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            contacts,
        }
    }
}
