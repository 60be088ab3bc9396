use super::backend::StorageBackend;
use super::{Snapshot, SNAPSHOT_VERSION};
use crate::error::{AbookError, Result};
use crate::fields::Name;
use crate::record::Record;
use std::fmt;
use std::slice::Chunks;
use tracing::{debug, info};

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Records keyed by the string form of their [`Name`], in insertion order.
///
/// The key is always derived from the record itself, so there is exactly one
/// record per name. Every mutating method saves a full snapshot once the
/// change is complete.
pub struct AddressBook<B: StorageBackend> {
    backend: B,
    records: Vec<Record>,
}

impl<B: StorageBackend> AddressBook<B> {
    /// An empty book. Nothing is read from the backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            records: Vec::new(),
        }
    }

    /// A book rehydrated from the backend's last snapshot.
    pub fn open(backend: B) -> Result<Self> {
        let mut book = Self::with_backend(backend);
        book.load()?;
        Ok(book)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Replaces the in-memory records with the stored snapshot.
    /// A missing snapshot leaves the book empty.
    pub fn load(&mut self) -> Result<()> {
        self.records.clear();
        let Some(snapshot) = self.backend.load_snapshot()? else {
            info!(location = %self.backend.location(), "no snapshot found, starting empty");
            return Ok(());
        };
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(AbookError::Store(format!(
                "Unsupported snapshot version {} (expected {})",
                snapshot.version, SNAPSHOT_VERSION
            )));
        }
        for record in snapshot.contacts {
            self.insert(record);
        }
        info!(
            location = %self.backend.location(),
            contacts = self.records.len(),
            "loaded address book"
        );
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.backend
            .save_snapshot(&Snapshot::new(self.records.clone()))?;
        debug!(
            location = %self.backend.location(),
            contacts = self.records.len(),
            "saved address book"
        );
        Ok(())
    }

    /// Inserts under the record's name. An existing record with that name is
    /// replaced where it stands; the two are never merged.
    pub fn add(&mut self, record: Record) -> Result<String> {
        let message = format!("Contact {} added successfully", record);
        self.insert(record);
        self.save()?;
        Ok(message)
    }

    pub fn delete(&mut self, name: &str) -> Result<String> {
        match self.position(name) {
            Some(index) => {
                self.records.remove(index);
                self.save()?;
                Ok(format!("Contact with name '{}' deleted successfully", name))
            }
            None => Ok(format!(
                "No contact with name '{}' in the address book",
                name
            )),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// In-place access for several edits under one save. Call [`AddressBook::save`]
    /// afterwards; changing the name here leaves the record under its old key.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Applies `edit` to the record stored under `name` and saves.
    /// Returns `Ok(None)` without saving when there is no such record.
    ///
    /// Renaming through `edit` is not supported; use [`AddressBook::rename`].
    pub fn update<T>(
        &mut self,
        name: &str,
        edit: impl FnOnce(&mut Record) -> T,
    ) -> Result<Option<T>> {
        let Some(index) = self.position(name) else {
            return Ok(None);
        };
        let outcome = edit(&mut self.records[index]);
        self.save()?;
        Ok(Some(outcome))
    }

    /// Moves the record stored under `name` to the key of `new_name`, keeping
    /// its place in store order.
    pub fn rename(&mut self, name: &str, new_name: Name) -> Result<String> {
        let index = self
            .position(name)
            .ok_or_else(|| AbookError::NotFound(name.to_string()))?;
        if new_name.as_str() != name && self.contains(new_name.as_str()) {
            return Err(AbookError::Validation(format!(
                "Contact {} already exists in the address book.",
                new_name
            )));
        }
        let message = self.records[index].change_name(new_name);
        self.save()?;
        Ok(message)
    }

    /// Case-insensitive substring match against the name or any phone.
    pub fn find(&self, query: &str) -> Vec<&Record> {
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                record.name().as_str().to_lowercase().contains(&query)
                    || record
                        .phones()
                        .iter()
                        .any(|phone| phone.as_str().contains(&query))
            })
            .collect()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn pages(&self) -> Chunks<'_, Record> {
        self.pages_of(DEFAULT_PAGE_SIZE)
    }

    /// Consecutive chunks of at most `size` records in store order.
    /// Each call starts a fresh traversal. A `size` of zero is treated as one.
    pub fn pages_of(&self, size: usize) -> Chunks<'_, Record> {
        self.records.chunks(size.max(1))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }

    fn insert(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }
}

impl<B: StorageBackend> fmt::Display for AddressBook<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.records.iter().map(Record::to_string).collect();
        f.write_str(&lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Birthday, Phone};
    use crate::store::mem_backend::MemBackend;
    use crate::store::memory::fixtures::BookFixture;
    use crate::store::memory::InMemoryBook;

    fn record(name: &str, phone: Option<&str>) -> Record {
        Record::new(
            Name::new(name, None),
            phone.map(|p| Phone::new(p).unwrap()),
            None,
        )
    }

    #[test]
    fn add_persists_and_reports() {
        let mut book = InMemoryBook::new();
        let message = book.add(record("John", Some("5551234567"))).unwrap();

        assert_eq!(message, "Contact John: 5551234567 added successfully");
        assert_eq!(book.backend().saves(), 1);
        assert_eq!(book.backend().snapshot().unwrap().contacts.len(), 1);
    }

    #[test]
    fn get_mut_then_save() {
        let mut book = BookFixture::new().with_contact("John", &[]).book;
        let saves = book.backend().saves();

        let john = book.get_mut("John").unwrap();
        john.add_phone(Phone::new("5551234567").unwrap());
        john.add_phone(Phone::new("5559876543").unwrap());
        assert_eq!(book.backend().saves(), saves);

        book.save().unwrap();
        let stored = book.backend().snapshot().unwrap();
        assert_eq!(stored.contacts[0].phones().len(), 2);
        assert!(book.get_mut("Jane").is_none());
    }

    #[test]
    fn add_under_existing_name_replaces_in_place() {
        let mut book = BookFixture::new().with_contacts(3).book;
        book.add(record("Contact 2", Some("5550000000"))).unwrap();

        assert_eq!(book.len(), 3);
        assert_eq!(book.records()[1].name().as_str(), "Contact 2");
        assert_eq!(book.records()[1].phones()[0].as_str(), "5550000000");
    }

    #[test]
    fn delete_existing_and_missing() {
        let mut book = BookFixture::new().with_contact("John", &["5551234567"]).book;
        let saves_before = book.backend().saves();

        let missing = book.delete("Jane").unwrap();
        assert_eq!(missing, "No contact with name 'Jane' in the address book");
        assert_eq!(book.backend().saves(), saves_before);

        let deleted = book.delete("John").unwrap();
        assert_eq!(deleted, "Contact with name 'John' deleted successfully");
        assert!(book.is_empty());
        assert_eq!(book.backend().saves(), saves_before + 1);
    }

    #[test]
    fn get_is_exact() {
        let book = BookFixture::new().with_contact("John Smith", &[]).book;
        assert!(book.get("John Smith").is_some());
        assert!(book.get("john smith").is_none());
        assert!(book.get("John").is_none());
    }

    #[test]
    fn find_matches_name_or_phone_ignoring_case() {
        let book = BookFixture::new()
            .with_contact("John Smith", &["5551234567"])
            .with_contact("Jane Doe", &["5559876543"])
            .with_contact("Bob", &["5550001234"])
            .book;

        let by_name: Vec<&str> = book.find("JOHN").into_iter().map(|r| r.name().as_str()).collect();
        assert_eq!(by_name, vec!["John Smith"]);

        let by_phone: Vec<&str> = book.find("1234").into_iter().map(|r| r.name().as_str()).collect();
        assert_eq!(by_phone, vec!["John Smith", "Bob"]);

        assert!(book.find("nobody").is_empty());
    }

    #[test]
    fn pages_split_in_store_order_and_restart() {
        let book = BookFixture::new().with_contacts(12).book;

        let sizes: Vec<usize> = book.pages().map(|chunk| chunk.len()).collect();
        assert_eq!(sizes, vec![5, 5, 2]);

        let names: Vec<&str> = book
            .pages()
            .flatten()
            .map(|r| r.name().as_str())
            .collect();
        let expected: Vec<String> = (1..=12).map(|i| format!("Contact {}", i)).collect();
        assert_eq!(names, expected);

        let again: Vec<usize> = book.pages().map(|chunk| chunk.len()).collect();
        assert_eq!(again, sizes);
    }

    #[test]
    fn pages_of_empty_book_is_empty() {
        let book = InMemoryBook::new();
        assert_eq!(book.pages().count(), 0);
        assert_eq!(book.pages_of(0).count(), 0);
    }

    #[test]
    fn update_saves_only_when_found() {
        let mut book = BookFixture::new().with_contact("John", &[]).book;
        let saves_before = book.backend().saves();

        let missing = book.update("Jane", |r| r.add_phone(Phone::new("5551234567").unwrap()));
        assert!(missing.unwrap().is_none());
        assert_eq!(book.backend().saves(), saves_before);

        let found = book
            .update("John", |r| r.add_phone(Phone::new("5551234567").unwrap()))
            .unwrap();
        assert_eq!(found.as_deref(), Some("phone 5551234567 add to contact John"));
        assert_eq!(book.backend().saves(), saves_before + 1);
    }

    #[test]
    fn rename_moves_key_and_keeps_position() {
        let mut book = BookFixture::new().with_contacts(3).book;
        let message = book.rename("Contact 2", Name::new("Renamed", None)).unwrap();

        assert_eq!(message, "Name changed to Renamed for contact Renamed");
        assert!(book.get("Contact 2").is_none());
        assert_eq!(book.records()[1].name().as_str(), "Renamed");
    }

    #[test]
    fn rename_refuses_to_clobber_another_contact() {
        let mut book = BookFixture::new().with_contacts(2).book;
        let err = book
            .rename("Contact 1", Name::new("Contact", Some("2")))
            .unwrap_err();
        assert!(matches!(err, AbookError::Validation(_)));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn rename_missing_contact_is_not_found() {
        let mut book = InMemoryBook::new();
        let err = book.rename("Ghost", Name::new("Casper", None)).unwrap_err();
        assert!(matches!(err, AbookError::NotFound(name) if name == "Ghost"));
    }

    #[test]
    fn open_rehydrates_from_snapshot() {
        let mut original = BookFixture::new()
            .with_contact("John", &["5551234567", "5559876543"])
            .book;
        original
            .update("John", |r| r.change_birthday(Birthday::new("01-01-2000").unwrap()))
            .unwrap();
        let snapshot = original.backend().snapshot().unwrap();

        let reopened = AddressBook::open(MemBackend::with_snapshot(snapshot)).unwrap();
        assert_eq!(reopened.records(), original.records());
    }

    #[test]
    fn open_rejects_unknown_version() {
        let snapshot = Snapshot {
            version: 99,
            contacts: Vec::new(),
        };
        let result = AddressBook::open(MemBackend::with_snapshot(snapshot));
        assert!(matches!(result, Err(AbookError::Store(_))));
    }

    #[test]
    fn write_errors_propagate() {
        let mut book = InMemoryBook::new();
        book.backend().set_simulate_write_error(true);
        let result = book.add(record("John", None));
        assert!(matches!(result, Err(AbookError::Store(_))));
    }

    #[test]
    fn display_lists_one_record_per_line() {
        let book = BookFixture::new()
            .with_contact("John", &["5551234567"])
            .with_contact("Jane", &[])
            .book;
        assert_eq!(book.to_string(), "John: 5551234567\nJane: ");
    }
}
