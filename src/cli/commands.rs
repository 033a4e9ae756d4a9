//! CLI command definitions

use crate::error::{JournalyzeError, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "journalyze")]
#[command(about = "Journal with sentiment and keyword analysis", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add a new journal entry
    Add {
        /// Entry title
        title: String,

        /// Entry content; omitted content is read from stdin, or composed
        /// in the configured editor when stdin is a terminal
        content: Option<String>,
    },

    /// List stored entries, newest first
    List {
        /// Only entries on or after this date (DD-MM-YYYY)
        #[arg(long)]
        from: Option<String>,

        /// Only entries on or before this date (DD-MM-YYYY)
        #[arg(long)]
        to: Option<String>,

        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show a stored entry
    Show {
        /// Entry id or title
        entry: String,
    },

    /// Report the sentiment polarity of an entry's content
    Sentiment {
        /// Entry id or title
        entry: String,
    },

    /// Extract the most frequent keywords from an entry's content
    Keywords {
        /// Entry id or title
        entry: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

/// Parse a DD-MM-YYYY date flag
pub fn parse_cli_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%d-%m-%Y")
        .map_err(|_| JournalyzeError::Config(format!("Invalid date format: {}", input)))
}
