//! # Lectern
//!
//! A small TF-IDF question answering library for Rust.
//!
//! ## Features
//!
//! - Loads a directory of plain-text files as a corpus
//! - Pluggable text analysis pipeline
//! - Two-stage retrieval: TF-IDF document ranking, then IDF and
//!   query-term-density sentence ranking
//! - A command line front end (`lectern`)

pub mod analysis;
pub mod cli;
pub mod corpus;
pub mod document;
pub mod error;
pub mod scoring;
pub mod search;

pub mod prelude {
    pub use crate::analysis::{Analyzer, EnglishAnalyzer, StopFilter};
    pub use crate::corpus::{Corpus, load_files};
    pub use crate::error::{LecternError, Result};
    pub use crate::search::{Answer, QaConfig, QuestionAnswerer};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
