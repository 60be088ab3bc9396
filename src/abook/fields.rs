//! Validated field types for a contact.
//!
//! - [`Name`]: display name and natural key of a record. Never fails.
//! - [`Phone`]: exactly ten ASCII digits, no separators.
//! - [`Birthday`]: a real calendar date written as `dd-mm-yyyy`.
//!
//! Each type renders to its canonical text through `Display`, and serializes as
//! that same text so a persisted snapshot re-validates on load.

use crate::error::{AbookError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const PHONE_DIGITS: usize = 10;
const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";
const INVALID_PHONE: &str =
    "Invalid phone number format. Please enter 10 digits without spaces or separators.";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Joins the two parts with a single space. An empty last part is ignored.
    pub fn new(first: &str, last: Option<&str>) -> Self {
        match last.filter(|l| !l.is_empty()) {
            Some(last) => Self(format!("{} {}", first, last)),
            None => Self(first.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self> {
        if !Self::is_valid(raw) {
            return Err(AbookError::Validation(INVALID_PHONE.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// True when `raw` is exactly ten ASCII digits.
    pub fn is_valid(raw: &str) -> bool {
        raw.len() == PHONE_DIGITS && raw.bytes().all(|b| b.is_ascii_digit())
    }

    /// Replaces the number, applying the same rule as [`Phone::new`].
    /// On failure the current value is kept.
    pub fn set(&mut self, raw: &str) -> Result<()> {
        *self = Self::new(raw)?;
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Phone {
    type Error = AbookError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(raw: &str) -> Result<Self> {
        if !has_birthday_shape(raw) {
            return Err(AbookError::InvalidBirthday);
        }
        let date = NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map_err(|_| AbookError::InvalidBirthday)?;
        // Year zero parses in the proleptic calendar but is not a real birthday.
        if date.year() < 1 {
            return Err(AbookError::InvalidBirthday);
        }
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The birthday's month and day placed in `year`.
    ///
    /// A 29 February birthday falls on 28 February in common years.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }
}

/// `dd-mm-yyyy`, digits only.
fn has_birthday_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl TryFrom<String> for Birthday {
    type Error = AbookError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn name_joins_parts_with_single_space() {
        assert_eq!(Name::new("John", None).to_string(), "John");
        assert_eq!(Name::new("John", Some("Smith")).to_string(), "John Smith");
        assert_eq!(Name::new("John", Some("")).to_string(), "John");
    }

    #[test]
    fn phone_rejects_separators_and_wrong_length() {
        for raw in ["555-123-456", "555123456", "55512345678", "555 123 4567", "", "abcdefghij"] {
            assert!(
                matches!(Phone::new(raw), Err(AbookError::Validation(_))),
                "accepted {:?}",
                raw
            );
        }
    }

    #[test]
    fn phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not ASCII.
        assert!(Phone::new("٠١٢٣٤٥٦٧٨٩").is_err());
    }

    #[test]
    fn phone_setter_revalidates() {
        let mut phone = Phone::new("5551234567").unwrap();
        assert!(phone.set("bad").is_err());
        assert_eq!(phone.as_str(), "5551234567");

        phone.set("5559876543").unwrap();
        assert_eq!(phone.as_str(), "5559876543");
    }

    #[test]
    fn birthday_round_trips() {
        let birthday = Birthday::new("07-03-1990").unwrap();
        assert_eq!(birthday.to_string(), "07-03-1990");
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 3, 7).unwrap());
    }

    #[test]
    fn birthday_rejects_impossible_dates() {
        for raw in ["30-02-2020", "31-04-2021", "00-01-2000", "01-13-2000", "29-02-2023"] {
            assert!(
                matches!(Birthday::new(raw), Err(AbookError::InvalidBirthday)),
                "accepted {}",
                raw
            );
        }
    }

    #[test]
    fn birthday_rejects_wrong_shape() {
        for raw in ["1-1-2000", "2000-01-01", "01/01/2000", "01-01-00", "aa-bb-cccc", ""] {
            assert!(matches!(Birthday::new(raw), Err(AbookError::InvalidBirthday)));
        }
    }

    #[test]
    fn leap_day_birthday_falls_back_in_common_years() {
        let birthday = Birthday::new("29-02-2000").unwrap();
        assert_eq!(
            birthday.occurrence_in(2023),
            NaiveDate::from_ymd_opt(2023, 2, 28)
        );
        assert_eq!(
            birthday.occurrence_in(2024),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn fields_serialize_as_canonical_text() {
        let phone = Phone::new("5551234567").unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"5551234567\"");

        let birthday = Birthday::new("01-01-2000").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"01-01-2000\"");

        assert!(serde_json::from_str::<Phone>("\"12345\"").is_err());
        assert!(serde_json::from_str::<Birthday>("\"30-02-2000\"").is_err());
    }

    proptest! {
        #[test]
        fn any_ten_digit_string_is_a_phone(raw in "[0-9]{10}") {
            let phone = Phone::new(&raw).unwrap();
            prop_assert_eq!(phone.to_string(), raw);
        }

        #[test]
        fn other_strings_are_not_phones(raw in "\\PC*") {
            prop_assume!(!(raw.len() == 10 && raw.bytes().all(|b| b.is_ascii_digit())));
            prop_assert!(Phone::new(&raw).is_err());
        }

        #[test]
        fn real_dates_round_trip(year in 1i32..=9999, ordinal in 1u32..=365) {
            let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
            let raw = date.format("%d-%m-%Y").to_string();
            let birthday = Birthday::new(&raw).unwrap();
            prop_assert_eq!(birthday.to_string(), raw);
            prop_assert_eq!(birthday.date(), date);
        }
    }
}
