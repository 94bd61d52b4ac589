//! Text analysis module for Lectern.
//!
//! This module turns raw corpus and query text into the normalized terms the
//! scoring layer works with: lowercased, punctuation-free, stopword-free.
//!
//! ```text
//! Raw Text → Tokenizer → Normalize → Punctuation → Stop Words → Terms
//! ```
//!
//! Documents are additionally split into sentences by [`sentence::SentenceSplitter`]
//! before their sentences are analyzed.

pub mod analyzer;
pub mod sentence;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use sentence::SentenceSplitter;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
