//! CLI argument parsing for templatefill

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tf")]
#[command(author, version, about = "Fill missing readonly/maxHits defaults in song templates", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Report what would change without writing any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Template files to update (overrides the configured list)
    pub paths: Vec<PathBuf>,
}
