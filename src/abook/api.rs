//! # API Facade
//!
//! [`AbookApi`] is the single entry point for a session. It owns the
//! [`AddressBook`], turns a line of text into a command through the parser, and
//! dispatches to the command modules.
//!
//! ## Error Wrapper
//!
//! [`AbookApi::execute`] never fails. Whatever a command raises (a bad phone, an
//! impossible birthday, an unknown contact, a missing argument, a failed save) is
//! caught here and returned as a [`CmdResult`] holding one error message. The
//! read loop only ever prints results.
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `AbookApi<FsBackend>`
//! - Testing: `AbookApi<MemBackend>`

use crate::commands::parser::{self, Command};
use crate::commands::{self, Arg, CmdResult};
use crate::error::Result;
use crate::store::{AddressBook, StorageBackend, DEFAULT_PAGE_SIZE};
use tracing::{debug, warn};

pub use crate::commands::{CmdMessage, Listing, MessageLevel};

pub struct AbookApi<B: StorageBackend> {
    book: AddressBook<B>,
    page_size: usize,
}

impl<B: StorageBackend> AbookApi<B> {
    pub fn new(book: AddressBook<B>) -> Self {
        Self {
            book,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn book(&self) -> &AddressBook<B> {
        &self.book
    }

    /// Parses and runs one line of input. Errors come back as messages.
    pub fn execute(&mut self, line: &str) -> CmdResult {
        let parsed = parser::parse(line);
        debug!(command = ?parsed.command, args = parsed.args.len(), "dispatching");
        self.dispatch(parsed.command, &parsed.args)
            .unwrap_or_else(|err| {
                warn!(command = ?parsed.command, error = %err, "command failed");
                CmdResult::from_error(&err)
            })
    }

    /// Runs `command` without the error wrapper.
    pub fn dispatch(&mut self, command: Command, args: &[Arg]) -> Result<CmdResult> {
        match command {
            Command::Add => commands::add::run(&mut self.book, args),
            Command::Change => commands::change::run(&mut self.book, args),
            Command::Edit => commands::edit::run(&mut self.book, args),
            Command::Delete => commands::delete::run(&mut self.book, args),
            Command::Find => commands::find::run(&self.book, args),
            Command::Birthday => commands::birthday::run(&mut self.book, args),
            Command::ShowAll => Ok(commands::list::show_all(&self.book)),
            Command::Page => Ok(commands::list::page(&self.book, self.page_size)),
            Command::Hello => Ok(commands::session::hello()),
            Command::Exit => Ok(commands::session::exit()),
            Command::Unknown => Ok(CmdResult::default()),
        }
    }
}
