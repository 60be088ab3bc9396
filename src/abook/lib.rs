//! # Abook Architecture
//!
//! Abook is a personal contact book driven by short text commands
//! (`add John 5551234567`, `find joh`, `page`). The core is a library; the
//! interactive prompt is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Flags, config resolution, the read loop, table output    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses a line, dispatches to a command                   │
//! │  - Turns every command error into a message                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Alias parser and one module per command                  │
//! │  - Returns `Result<CmdResult>`, no I/O                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - AddressBook, persisted after every mutation              │
//! │  - StorageBackend trait: FsBackend, MemBackend              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Model
//!
//! A [`record::Record`] holds a validated [`fields::Name`], any number of
//! [`fields::Phone`] numbers (exactly ten digits) and an optional
//! [`fields::Birthday`] (`dd-mm-yyyy`). Values are checked when they are built,
//! so a record in the book is always valid.
//!
//! ## Testing Strategy
//!
//! 1. **Fields, records, store**: unit tests plus property tests for validation
//!    and birthday arithmetic.
//! 2. **Commands**: unit tests against an in-memory book (`store::memory`).
//! 3. **API**: end-to-end command lines through [`api::AbookApi::execute`].
//! 4. **Binary**: `tests/` drives the real executable over stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and error wrapper
//! - [`commands`]: Parser and business logic for each command
//! - [`store`]: Address book and storage backends
//! - [`record`]: The contact record
//! - [`fields`]: Name, phone and birthday value types
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Flags, the prompt loop and table rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod record;
pub mod store;
