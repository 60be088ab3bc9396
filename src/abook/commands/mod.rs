//! # Command Layer
//!
//! Each command lives in its own submodule as a plain `run` function that takes
//! the [`AddressBook`](crate::store::AddressBook) and the tokenized arguments
//! produced by [`parser`].
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: no stdout or stderr; they return a [`CmdResult`]
//! - **Error recovery**: they return `Err` at the point of detection and let the
//!   API facade turn it into a message
//! - **Rendering**: listings carry records, the UI decides how to draw them
//!
//! ## Command Modules
//!
//! - [`add`]: create a contact or extend an existing one
//! - [`change`]: replace a phone number
//! - [`edit`]: rename a contact, or set its birthday
//! - [`delete`]: remove a contact
//! - [`find`]: search by name or phone
//! - [`birthday`]: set a birthday
//! - [`list`]: `show all` and `page`
//! - [`session`]: `hello` and `exit`
//! - [`parser`]: alias table and tokenizer
//! - [`helpers`]: argument access shared by the commands

use crate::error::AbookError;
use crate::record::Record;
use serde::Serialize;

pub mod add;
pub mod birthday;
pub mod change;
pub mod delete;
pub mod edit;
pub mod find;
pub mod helpers;
pub mod list;
pub mod parser;
pub mod session;

/// One whitespace-separated argument. `None` marks a padding slot added by the parser.
pub type Arg = Option<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, content)
    }
}

/// Records a command wants displayed, and how.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Listing {
    #[default]
    None,
    /// Search hits.
    Matches(Vec<Record>),
    /// The whole book in one table.
    All(Vec<Record>),
    /// The whole book split into pages.
    Pages(Vec<Vec<Record>>),
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listing: Listing,
    pub messages: Vec<CmdMessage>,
    /// Set by `exit`; the caller stops reading commands.
    pub should_exit: bool,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listing(mut self, listing: Listing) -> Self {
        self.listing = listing;
        self
    }

    pub fn exiting(mut self) -> Self {
        self.should_exit = true;
        self
    }

    /// A result carrying nothing but `err`, rendered as an error message.
    pub fn from_error(err: &AbookError) -> Self {
        Self::default().with_message(CmdMessage::error(err.to_string()))
    }

    /// True when there is nothing to show, as for an unknown command.
    pub fn is_silent(&self) -> bool {
        self.messages.is_empty() && self.listing == Listing::None
    }
}
