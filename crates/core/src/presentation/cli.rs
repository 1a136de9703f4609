// crates/core/src/presentation/cli.rs
use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "file_stats",
    version,
    about = "Directory scan statistics: file count, extension breakdown and total size"
)]
pub struct Args {
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Directory to scan; prompts on stdin when omitted
    pub path: Option<PathBuf>,
}

/// Runtime configuration materialised from CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub format: OutputFormat,
    pub root: Option<PathBuf>,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        Self { format: args.format, root: args.path }
    }
}

/// Parse the command line into a runtime configuration.
pub fn load_config() -> Config {
    Config::from_args(Args::parse())
}
