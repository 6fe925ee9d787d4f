//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use deeply_core::Operation;

#[derive(Parser, Debug)]
#[command(name = "deeply")]
#[command(about = "Compare, match and rank JSON values")]
#[command(version)]
pub struct Args {
    /// Engine configuration file (JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a boolean comparison; exits 0 on match and 1 on mismatch
    Compare {
        /// equals, equals_ignore_order, contains, contains_ignore_order,
        /// matches or matches_ignore_order
        operation: Operation,

        /// File holding the expected value
        #[arg(short, long)]
        expect: PathBuf,

        /// File holding the actual value
        #[arg(short, long)]
        actual: PathBuf,
    },

    /// Order candidates by similarity to the expected value, best first
    Rank {
        /// File holding the expected value
        #[arg(short, long)]
        expect: PathBuf,

        /// File holding a JSON array of candidates
        #[arg(short, long)]
        candidates: PathBuf,

        /// Print only the best N candidates
        #[arg(short = 'n', long)]
        top: Option<usize>,
    },

    /// Levenshtein distance and similarity of two strings
    Distance { left: String, right: String },
}
