//! Tokenized units of text that the rankers score.
//!
//! Both [`Document`] and [`Sentence`] implement [`Passage`], so the IDF
//! engine and the rankers are written once and applied to either scope.

pub mod document;
pub mod passage;
pub mod sentence;

pub use document::Document;
pub use passage::Passage;
pub use sentence::Sentence;
