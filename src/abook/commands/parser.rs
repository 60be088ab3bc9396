//! Maps a line of input to a [`Command`] and its arguments.
//!
//! The alias table is scanned in order; the first alias the line starts with
//! (ignoring case) wins. Order matters: `del` is tried before `find`, `bye`
//! before `bday`, and so on. The matched prefix is dropped and the rest is split
//! on whitespace.

use super::Arg;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Change,
    Exit,
    Delete,
    Find,
    ShowAll,
    Hello,
    Edit,
    Page,
    Birthday,
    Unknown,
}

pub const COMMANDS: &[(Command, &[&str])] = &[
    (Command::Add, &["add", "+", "2"]),
    (Command::Change, &["change", "зміни", "3"]),
    (Command::Exit, &["bye", "exit", "end", "0"]),
    (Command::Delete, &["del", "8"]),
    (Command::Find, &["find", "4"]),
    (Command::ShowAll, &["show all", "5"]),
    (Command::Hello, &["hello", "1"]),
    (Command::Edit, &["edit", "7"]),
    (Command::Page, &["page", "**"]),
    (Command::Birthday, &["bday", "6"]),
];

/// Commands whose third argument is optional; the parser pads them to three slots.
const PADDED: &[Command] = &[Command::Change, Command::Edit];
const PADDED_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Command,
    pub args: Vec<Arg>,
}

impl ParsedInput {
    fn unknown() -> Self {
        Self {
            command: Command::Unknown,
            args: Vec::new(),
        }
    }
}

/// Aliases must start the line; only trailing whitespace (the newline) is dropped.
pub fn parse(line: &str) -> ParsedInput {
    let text = line.trim_end();
    for (command, aliases) in COMMANDS {
        for alias in aliases.iter() {
            if let Some(rest) = strip_prefix_ignore_case(text, alias) {
                let mut args: Vec<Arg> = rest.split_whitespace().map(|s| Some(s.to_string())).collect();
                if PADDED.contains(command) && args.len() < PADDED_LEN {
                    args.push(None);
                }
                return ParsedInput {
                    command: *command,
                    args,
                };
            }
        }
    }
    ParsedInput::unknown()
}

/// The remainder of `text` after `prefix`, compared case-insensitively, with the
/// original casing of the remainder preserved.
fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let prefix_chars = prefix.chars().count();
    let mut boundaries = text.char_indices().map(|(i, _)| i).chain(std::iter::once(text.len()));
    let end = boundaries.nth(prefix_chars)?;
    let (head, rest) = text.split_at(end);
    (head.to_lowercase() == prefix).then_some(rest)
}
