//! Command line argument parsing for Lectern CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::search::QaConfig;

/// Lectern - answer questions from a directory of text files
#[derive(Parser, Debug, Clone)]
#[command(name = "lectern")]
#[command(about = "Answer a question with the most relevant sentence from a text corpus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LecternArgs {
    /// Directory holding the corpus files
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Verbosity level (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE", env = "LECTERN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of documents to shortlist
    #[arg(long = "files", value_name = "N")]
    pub file_matches: Option<usize>,

    /// Number of sentences to print
    #[arg(long = "sentences", value_name = "N")]
    pub sentence_matches: Option<usize>,

    /// Extension of the corpus files to load
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Newline-separated stop word file
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// Regex used to tokenize instead of Unicode word boundaries
    #[arg(long, value_name = "REGEX")]
    pub token_pattern: Option<String>,

    /// Query text (read from stdin when omitted)
    #[arg(long)]
    pub query: Option<String>,
}

impl LecternArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }

    /// Log level for the effective verbosity: quiet shows errors only, the
    /// default shows warnings.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    /// Build the effective configuration: config file first, then flags.
    pub fn to_config(&self) -> Result<QaConfig> {
        let mut config = match &self.config {
            Some(path) => QaConfig::from_file(path)?,
            None => QaConfig::default(),
        };

        if let Some(n) = self.file_matches {
            config.file_matches = n;
        }
        if let Some(n) = self.sentence_matches {
            config.sentence_matches = n;
        }
        if let Some(extension) = &self.extension {
            config.extension = extension.clone();
        }
        if let Some(path) = &self.stop_words {
            config.stop_words = Some(path.clone());
        }
        if let Some(pattern) = &self.token_pattern {
            config.token_pattern = Some(pattern.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One answer sentence per line
    Human,
    /// Query, documents, and scored sentences as JSON
    Json,
}
