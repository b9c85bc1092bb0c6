//! Argument handling for the `topwords` binary.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `word: count` line per entry.
    #[default]
    Lines,
    Json,
}

/// Report the K most frequent whitespace-delimited words of a document.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "topwords")]
pub struct CliArgs {
    /// Document to read
    pub path: PathBuf,

    /// How many words to report
    pub k: usize,

    /// JSON output mode
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Lines
        }
    }
}
