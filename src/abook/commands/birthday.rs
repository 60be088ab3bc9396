use super::helpers::required;
use super::{Arg, CmdMessage, CmdResult};
use crate::error::{AbookError, Result};
use crate::fields::{Birthday, Name};
use crate::store::{AddressBook, StorageBackend};

/// `bday <name> <dd-mm-yyyy>`: sets or overwrites the birthday of an existing contact.
pub fn run<B: StorageBackend>(book: &mut AddressBook<B>, args: &[Arg]) -> Result<CmdResult> {
    let name = Name::new(required(args, 0, "name")?, None);
    let birthday = Birthday::new(required(args, 1, "birthday")?)?;

    let key = name.to_string();
    let content = book
        .update(&key, |record| record.change_birthday(birthday))?
        .ok_or(AbookError::NotFound(key))?;
    Ok(CmdResult::default().with_message(CmdMessage::success(content)))
}
