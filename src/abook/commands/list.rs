use super::{CmdMessage, CmdResult, Listing};
use crate::store::{AddressBook, StorageBackend};

const EMPTY_BOOK: &str = "No contacts saved.";

/// `show all`
pub fn show_all<B: StorageBackend>(book: &AddressBook<B>) -> CmdResult {
    if book.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info(EMPTY_BOOK));
    }
    CmdResult::default().with_listing(Listing::All(book.records().to_vec()))
}

/// `page`: the whole book, `page_size` records per page.
pub fn page<B: StorageBackend>(book: &AddressBook<B>, page_size: usize) -> CmdResult {
    if book.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info(EMPTY_BOOK));
    }
    let pages = book.pages_of(page_size).map(<[_]>::to_vec).collect();
    CmdResult::default().with_listing(Listing::Pages(pages))
}
