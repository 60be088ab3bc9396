use super::helpers::required;
use super::{Arg, CmdMessage, CmdResult, Listing};
use crate::error::Result;
use crate::store::{AddressBook, StorageBackend};

pub fn run<B: StorageBackend>(book: &AddressBook<B>, args: &[Arg]) -> Result<CmdResult> {
    let query = required(args, 0, "query")?;
    let matches: Vec<_> = book.find(query).into_iter().cloned().collect();

    if matches.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "No records found for the query: {}",
            query
        ))));
    }
    Ok(CmdResult::default().with_listing(Listing::Matches(matches)))
}
