use std::path::PathBuf;

use clap::Parser;
use ct_harvest::keyword::KeywordPolicy;

/// Resolve an organization's Chinese name to its English name and collect
/// every certificate name crt.sh has seen for it.
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Organization name in Chinese (prompted for when omitted)
    pub target: Option<String>,

    /// Keyword policy: choose a prefix interactively, or take the first word
    #[arg(short = 'p', long, value_enum)]
    pub policy: Option<KeywordPolicy>,

    /// Answer the keyword prompt with this 1-based index instead of asking
    #[arg(short = 's', long, value_name = "N")]
    pub select: Option<i64>,

    /// Output file for the collected names (overwritten each run)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Error log file (appended)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Request timeout in seconds (default: 30)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// JSON config file; flags given here take precedence
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Encyclopedia page base URL
    #[arg(long, value_name = "URL")]
    pub encyclopedia_base: Option<String>,

    /// Certificate log aggregator base URL
    #[arg(long, value_name = "URL")]
    pub aggregator_base: Option<String>,

    /// Enable detailed debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
