use crate::types::{LogLevel, OutputFormat, SortArg};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flowboard")]
#[command(about = "Browse, tag and prune AirOps workflows from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml (default: $FLOWBOARD_PATH or the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Write logs to this file instead of stderr (the dashboard only logs when set)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive dashboard (default)
    Dashboard {
        /// Load the payload from a JSON file instead of the AirOps API
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Print one page of workflows
    List {
        /// Case-insensitive match on type, name or tag
        #[arg(long, short)]
        query: Option<String>,

        #[arg(long)]
        sort: Option<SortArg>,

        /// Flip the sort direction
        #[arg(long)]
        desc: bool,

        #[arg(long, default_value = "1")]
        page: usize,

        /// Load the payload from a JSON file instead of the AirOps API
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Derive AIROPS_HASHED_USER_ID from AIROPS_API_KEY and AIROPS_USER_ID
    HashUserId,
}
