use crate::fields::{Birthday, Name, Phone};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a name, its phone numbers in insertion order, and an optional birthday.
///
/// Phones never repeat by value. Mutators return a human readable confirmation
/// rather than failing; validation already happened when the fields were built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredRecord")]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

/// A record as read from a snapshot, before phones are deduplicated.
#[derive(Deserialize)]
struct StoredRecord {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl From<StoredRecord> for Record {
    fn from(stored: StoredRecord) -> Self {
        let mut record = Record::new(stored.name, None, stored.birthday);
        for phone in stored.phones {
            record.add_phone(phone);
        }
        record
    }
}

impl Record {
    pub fn new(name: Name, phone: Option<Phone>, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones: phone.into_iter().collect(),
            birthday,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn has_phone(&self, phone: &Phone) -> bool {
        self.phones.contains(phone)
    }

    pub fn add_phone(&mut self, phone: Phone) -> String {
        if self.has_phone(&phone) {
            return format!("{} present in phones of contact {}", phone, self.name);
        }
        let message = format!("phone {} add to contact {}", phone, self.name);
        self.phones.push(phone);
        message
    }

    /// Replaces the first phone equal to `old`. Leaves the record untouched when absent.
    pub fn change_phone(&mut self, old: &Phone, new: Phone) -> String {
        match self.phones.iter_mut().find(|p| **p == *old) {
            Some(slot) => {
                let message = format!("old phone {} change to {}", old, new);
                *slot = new;
                message
            }
            None => format!("{} not present in phones of contact {}", old, self.name),
        }
    }

    /// Renames the record. Inside an address book, go through
    /// `AddressBook::rename` so the store key follows.
    pub fn change_name(&mut self, new_name: Name) -> String {
        self.name = new_name;
        format!("Name changed to {} for contact {}", self.name, self.name)
    }

    pub fn change_birthday(&mut self, birthday: Birthday) -> String {
        let message = format!("Birthday changed to {} for contact {}", birthday, self.name);
        self.birthday = Some(birthday);
        message
    }

    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` to the next occurrence of the birthday, `0` when it is today.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;
        let mut next = birthday.occurrence_in(today.year())?;
        if next < today {
            next = birthday.occurrence_in(today.year() + 1)?;
        }
        Some((next - today).num_days())
    }

    /// `"<name>: <phones>[, Days to birthday: <n>]"` evaluated on `today`.
    pub fn summary_on(&self, today: NaiveDate) -> String {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        match self.days_to_birthday_from(today) {
            Some(days) => format!("{}: {}, Days to birthday: {}", self.name, phones, days),
            None => format!("{}: {}", self.name, phones),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary_on(Local::now().date_naive()))
    }
}
