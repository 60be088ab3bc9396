//! # Abook CLI
//!
//! The binary is thin: the prompt loop lives in `cli/`, and this file only
//! invokes `cli::run()` and handles process termination. Everything from
//! `abook::api` inward is UI agnostic.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
