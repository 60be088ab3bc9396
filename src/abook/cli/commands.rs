use super::render::{print_messages, render_listing};
use super::setup::Cli;
use abook::api::AbookApi;
use abook::config::{resolve_home, AbookConfig};
use abook::store::fs_backend::FsBackend;
use abook::store::AddressBook;
use anyhow::Context;
use clap::Parser;
use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

pub const PROMPT: &str = "--->>> ";
const LOG_ENV: &str = "ABOOK_LOG";

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut api = init_api(&cli)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        let mut raw = Vec::new();
        if stdin.lock().read_until(b'\n', &mut raw)? == 0 {
            debug!("end of input");
            println!();
            break;
        }
        let line = String::from_utf8_lossy(&raw);
        if matches!(line, Cow::Owned(_)) {
            warn!("input line is not valid UTF-8, invalid bytes replaced");
        }

        let result = api.execute(&line);
        let listing = render_listing(&result.listing);
        if !listing.is_empty() {
            print!("{}", listing);
        }
        print_messages(&result.messages);

        if result.should_exit {
            break;
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn init_api(cli: &Cli) -> anyhow::Result<AbookApi<FsBackend>> {
    let home = resolve_home(cli.home.clone())?;
    let mut config = AbookConfig::load(&home)
        .with_context(|| format!("Failed to read config in {}", home.display()))?;
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    config.validate()?;

    let backend = FsBackend::new(config.data_path(&home));
    let book = AddressBook::open(backend).context("Failed to open address book")?;
    info!(
        home = %home.display(),
        contacts = book.len(),
        page_size = config.page_size,
        "session started"
    );
    Ok(AbookApi::new(book).with_page_size(config.page_size))
}
