//! Question answering over a corpus: the two-stage retrieval driver.
//!
//! [`QuestionAnswerer`] owns the tokenized corpus and its document-scope
//! IDF table, and answers each query by shortlisting documents, extracting
//! their sentences, and ranking those sentences.

pub mod answer;
pub mod config;
pub mod engine;

pub use answer::{Answer, RankedDocument, RankedSentence};
pub use config::QaConfig;
pub use engine::QuestionAnswerer;
