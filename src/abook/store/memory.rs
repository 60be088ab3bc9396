use super::book::AddressBook;
use super::mem_backend::MemBackend;

pub type InMemoryBook = AddressBook<MemBackend>;

impl Default for InMemoryBook {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBook {
    pub fn new() -> Self {
        AddressBook::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::fields::{Birthday, Name, Phone};
    use crate::record::Record;

    pub struct BookFixture {
        pub book: InMemoryBook,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: InMemoryBook::new(),
            }
        }

        /// Adds `Contact 1` .. `Contact <count>`, each with one phone.
        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 1..=count {
                let phone = Phone::new(&format!("{:010}", i)).unwrap();
                let record = Record::new(Name::new("Contact", Some(&i.to_string())), Some(phone), None);
                self.book.add(record).unwrap();
            }
            self
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(Name::new(name, None), None, None);
            for phone in phones {
                record.add_phone(Phone::new(phone).unwrap());
            }
            self.book.add(record).unwrap();
            self
        }

        pub fn with_birthday(mut self, name: &str, birthday: &str) -> Self {
            let birthday = Birthday::new(birthday).unwrap();
            self.book
                .update(name, |record| record.change_birthday(birthday))
                .unwrap();
            self
        }
    }
}
