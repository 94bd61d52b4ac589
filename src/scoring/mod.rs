//! TF-IDF scoring and two-stage ranking.
//!
//! - [`idf::compute_idfs`] - inverse document frequency over any collection
//! - [`document_ranker::top_files`] - documents by summed TF-IDF
//! - [`sentence_ranker::top_sentences`] - sentences by matched IDF, then query density
//!
//! All three are pure functions of their inputs. A document-scope
//! [`IdfTable`] and a sentence-scope one are separate values built by the
//! same function; nothing here merges them.

pub mod document_ranker;
pub mod idf;
pub mod query;
pub mod sentence_ranker;

pub use document_ranker::{DocumentScore, rank_documents, top_files};
pub use idf::{IdfTable, compute_idfs};
pub use query::Query;
pub use sentence_ranker::{SentenceScore, ScoredSentence, rank_sentences, top_sentences};
