use super::helpers::{optional, required};
use super::{Arg, CmdMessage, CmdResult};
use crate::error::{AbookError, Result};
use crate::fields::{Birthday, Name, Phone};
use crate::store::{AddressBook, StorageBackend};

/// `change <name> <old phone> <new phone> [birthday]`
///
/// Every value is validated before the contact is looked up. The birthday, when
/// given, is applied before the phone swap.
pub fn run<B: StorageBackend>(book: &mut AddressBook<B>, args: &[Arg]) -> Result<CmdResult> {
    let name = Name::new(required(args, 0, "name")?, None);
    let old = Phone::new(required(args, 1, "old phone")?)?;
    let new = Phone::new(required(args, 2, "new phone")?)?;
    let birthday = optional(args, 3).map(Birthday::new).transpose()?;

    let key = name.to_string();
    let message = book
        .update(&key, |record| {
            if let Some(birthday) = birthday {
                record.change_birthday(birthday);
            }
            if record.has_phone(&old) {
                CmdMessage::success(record.change_phone(&old, new))
            } else {
                CmdMessage::warning(record.change_phone(&old, new))
            }
        })?
        .ok_or(AbookError::NotFound(key))?;

    Ok(CmdResult::default().with_message(message))
}
