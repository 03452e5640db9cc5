//! CLI argument parsing for parsim
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use parsim_core::format::OutputFormat;

/// Parsim - paragraph proximity analysis for text corpora
#[derive(Parser, Debug)]
#[command(name = "parsim")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a corpus directory and export proximity matrices
    Run(RunArgs),

    /// Split one article file into paragraphs
    Segment {
        /// Article file to segment
        file: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Directory of plain-text articles, one file per article
    #[arg(long, short)]
    pub input: PathBuf,

    /// Directory for exported matrices and reports
    #[arg(long, short)]
    pub output: PathBuf,

    /// Number of closest paragraphs reported per paragraph
    #[arg(long)]
    pub top_k: Option<usize>,

    /// Embedding endpoint URL
    #[arg(long, env = "PARSIM_EMBEDDING_URL")]
    pub endpoint: Option<String>,

    /// Embedding model name
    #[arg(long, env = "PARSIM_EMBEDDING_MODEL")]
    pub model: Option<String>,

    /// Embedding request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Exclude paragraph self-similarity from article self-averages
    #[arg(long)]
    pub exclude_diagonal: bool,

    /// Path to a parsim.toml configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}
