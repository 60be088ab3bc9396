use super::helpers::{optional, required};
use super::{Arg, CmdMessage, CmdResult};
use crate::error::{AbookError, Result};
use crate::fields::{Birthday, Name};
use crate::store::{AddressBook, StorageBackend};

/// `edit <name> <new name> [birthday]`
///
/// With a birthday only the birthday changes and the new name is ignored;
/// without one the contact is renamed.
pub fn run<B: StorageBackend>(book: &mut AddressBook<B>, args: &[Arg]) -> Result<CmdResult> {
    let name = required(args, 0, "name")?;
    let new_name = Name::new(required(args, 1, "new name")?, None);
    let birthday = optional(args, 2).map(Birthday::new).transpose()?;

    let message = match birthday {
        Some(birthday) => book
            .update(name, |record| record.change_birthday(birthday))?
            .ok_or_else(|| AbookError::NotFound(name.to_string()))?,
        None => book.rename(name, new_name)?,
    };

    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::args;
    use crate::store::memory::fixtures::BookFixture;

    fn padded(raw: &[&str]) -> Vec<Arg> {
        let mut list = args(raw);
        list.push(None);
        list
    }

    #[test]
    fn renames_when_no_birthday_given() {
        let mut book = BookFixture::new().with_contact("John", &["5551234567"]).book;
        let result = run(&mut book, &padded(&["John", "Johnny"])).unwrap();

        assert_eq!(
            result.messages[0].content,
            "Name changed to Johnny for contact Johnny"
        );
        assert!(book.get("John").is_none());
        assert_eq!(book.get("Johnny").unwrap().phones()[0].as_str(), "5551234567");
    }

    #[test]
    fn birthday_overrides_rename() {
        let mut book = BookFixture::new().with_contact("John", &[]).book;
        let result = run(&mut book, &args(&["John", "Johnny", "01-01-2000"])).unwrap();

        assert_eq!(
            result.messages[0].content,
            "Birthday changed to 01-01-2000 for contact John"
        );
        assert!(book.get("Johnny").is_none());
        assert!(book.get("John").unwrap().birthday().is_some());
    }

    #[test]
    fn unknown_contact_is_not_found() {
        let mut book = BookFixture::new().book;
        let err = run(&mut book, &padded(&["Ghost", "Casper"])).unwrap_err();
        assert!(matches!(err, AbookError::NotFound(_)));

        let err = run(&mut book, &args(&["Ghost", "Casper", "01-01-2000"])).unwrap_err();
        assert!(matches!(err, AbookError::NotFound(_)));
    }

    #[test]
    fn bad_birthday_is_reported() {
        let mut book = BookFixture::new().with_contact("John", &[]).book;
        let err = run(&mut book, &args(&["John", "Johnny", "1999-01-01"])).unwrap_err();
        assert!(matches!(err, AbookError::InvalidBirthday));
    }

    #[test]
    fn missing_new_name_is_an_argument_error() {
        let mut book = BookFixture::new().with_contact("John", &[]).book;
        let err = run(&mut book, &padded(&["John"])).unwrap_err();
        assert!(matches!(err, AbookError::Argument(_)));
    }
}
