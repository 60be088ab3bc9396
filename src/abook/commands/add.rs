use super::helpers::tokens;
use super::{Arg, CmdMessage, CmdResult};
use crate::error::{AbookError, Result};
use crate::fields::{Birthday, Name, Phone};
use crate::record::Record;
use crate::store::{AddressBook, StorageBackend};

/// Positional roles of `add` arguments before validation.
#[derive(Debug, Default, PartialEq, Eq)]
struct AddArgs<'a> {
    first: &'a str,
    last: Option<&'a str>,
    phone: Option<&'a str>,
    birthday: Option<&'a str>,
}

/// `add <first> [last] [phone] [birthday]`, with the roles decided by whether
/// the last token looks like a phone number:
///
/// ```text
/// add John 5551234567                     -> first, phone
/// add John Smith 5551234567               -> first, last, phone
/// add John Smith 01-01-2000 5551234567    -> first, last, birthday, phone
/// add John Smith                          -> first, last
/// add John Smith 5551234567 01-01-2000    -> first, last, phone, birthday
/// ```
fn split_args<'a>(tokens: &[&'a str]) -> Result<AddArgs<'a>> {
    let (&first, rest) = tokens
        .split_first()
        .ok_or_else(|| AbookError::Argument("Missing argument: name".to_string()))?;
    let mut parsed = AddArgs {
        first,
        ..AddArgs::default()
    };
    let Some(&tail) = rest.last() else {
        return Ok(parsed);
    };

    if Phone::is_valid(tail) {
        parsed.phone = Some(tail);
        if tokens.len() >= 3 {
            parsed.last = Some(tokens[1]);
        }
        if tokens.len() >= 4 {
            parsed.birthday = Some(tokens[2]);
        }
    } else {
        parsed.last = Some(tokens[1]);
        parsed.phone = tokens.get(2).copied();
        if parsed.phone.is_some() {
            parsed.birthday = tokens.get(3).copied();
        }
    }
    Ok(parsed)
}

pub fn run<B: StorageBackend>(book: &mut AddressBook<B>, args: &[Arg]) -> Result<CmdResult> {
    let parsed = split_args(&tokens(args))?;
    let phone = parsed.phone.map(Phone::new).transpose()?;
    let birthday = parsed.birthday.map(Birthday::new).transpose()?;
    let name = Name::new(parsed.first, parsed.last);
    let key = name.to_string();

    let message = if book.contains(&key) {
        match (phone, birthday) {
            (Some(phone), _) => book
                .update(&key, |record| {
                    if record.has_phone(&phone) {
                        CmdMessage::warning(record.add_phone(phone))
                    } else {
                        CmdMessage::success(record.add_phone(phone))
                    }
                })?
                .ok_or_else(|| AbookError::NotFound(key.clone()))?,
            (None, Some(birthday)) => book
                .update(&key, |record| CmdMessage::success(record.change_birthday(birthday)))?
                .ok_or_else(|| AbookError::NotFound(key.clone()))?,
            (None, None) => CmdMessage::warning(format!(
                "Contact {} already exists in the address book.",
                key
            )),
        }
    } else {
        CmdMessage::success(book.add(Record::new(name, phone, birthday))?)
    };

    Ok(CmdResult::default().with_message(message))
}
