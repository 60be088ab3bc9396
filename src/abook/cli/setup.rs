use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "abook", bin_name = "abook", version)]
#[command(about = "Command-driven contact book for the terminal", long_about = None)]
pub struct Cli {
    /// Directory holding config.json and the contacts file
    #[arg(long, env = "ABOOK_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Records per page for the `page` command (overrides config)
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
