//! # CLI Behavior
//!
//! One possible UI client for abook. It is the only place that knows about
//! terminal I/O, exit codes and output formatting.
//!
//! ## Session
//!
//! `abook` opens the book under its home directory and reads commands from
//! stdin, one per line, after a `--->>> ` prompt. The session ends on an exit
//! alias (`bye`, `exit`, `end`, `0`) or at end of input.
//!
//! ## Home Directory
//!
//! Resolved in order: `--home`, `ABOOK_HOME`, then the platform data directory.
//! It holds `config.json` and the contacts file.
//!
//! ## Logging
//!
//! Diagnostics go to stderr through `tracing`. The filter comes from `ABOOK_LOG`
//! (e.g. `ABOOK_LOG=abook=debug`); `-v` raises the default from `warn` to `debug`.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and the read loop
//! - `render`: Messages and contact tables
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
