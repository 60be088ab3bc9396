use super::helpers::tokens;
use super::{Arg, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{AddressBook, StorageBackend};

/// `del <name>`. All remaining words form the name, so `del John Smith`
/// removes the contact stored as `John Smith`.
///
/// This differs from `change`, `bday` and `edit`, which read a one-word name
/// from the first argument. Extra words are never ignored here:
/// `del John 5551234567` looks for a contact named `John 5551234567` and
/// leaves `John` in place.
pub fn run<B: StorageBackend>(book: &mut AddressBook<B>, args: &[Arg]) -> Result<CmdResult> {
    let name = tokens(args).join(" ");
    if name.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(
            "Please provide a name to delete the contact.",
        )));
    }

    let existed = book.contains(&name);
    let content = book.delete(&name)?;
    let message = if existed {
        CmdMessage::success(content)
    } else {
        CmdMessage::warning(content)
    };
    Ok(CmdResult::default().with_message(message))
}
