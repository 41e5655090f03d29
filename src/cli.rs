use crate::entry::Category;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docindex")]
#[command(about = "Inspect, validate and serve documentation search indices", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the MCP tools over stdio (the default)
    Serve {
        /// Index to open on startup
        #[arg(short, long, env = "DOCINDEX_PATH")]
        index: Option<String>,
    },
    /// Check an index and exit non-zero on errors
    Validate { path: PathBuf },
    /// List entries in navigation order
    List {
        path: PathBuf,
        #[arg(short, long)]
        category: Option<Category>,
        #[arg(short, long)]
        page: Option<String>,
    },
    /// Look up entries by title
    Find {
        path: PathBuf,
        query: String,
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },
    /// Print entry counts
    Stats { path: PathBuf },
    /// Re-serialize an index as script or JSON
    Convert {
        path: PathBuf,
        #[arg(long, value_enum, default_value = "json")]
        to: OutputFormat,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Js,
    Json,
}
