//! Owned query results.

use serde::{Deserialize, Serialize};

use crate::scoring::{DocumentScore, ScoredSentence};

/// A shortlisted document and its TF-IDF score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedDocument {
    pub name: String,
    pub score: f64,
}

impl From<DocumentScore<'_>> for RankedDocument {
    fn from(scored: DocumentScore<'_>) -> Self {
        RankedDocument {
            name: scored.name.to_string(),
            score: scored.score,
        }
    }
}

/// A returned sentence and its ranking key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedSentence {
    pub text: String,
    pub matched_idf: f64,
    pub density: f64,
}

impl From<ScoredSentence<'_>> for RankedSentence {
    fn from(scored: ScoredSentence<'_>) -> Self {
        RankedSentence {
            text: scored.text.to_string(),
            matched_idf: scored.score.matched_idf,
            density: scored.score.density,
        }
    }
}

/// Everything one query produced, best results first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// The analyzed query terms, sorted
    pub query: Vec<String>,

    /// Documents the sentences were drawn from
    pub documents: Vec<RankedDocument>,

    /// The answer sentences
    pub sentences: Vec<RankedSentence>,
}

impl Answer {
    /// The answer sentence texts, in ranked order.
    pub fn sentence_texts(&self) -> Vec<&str> {
        self.sentences.iter().map(|s| s.text.as_str()).collect()
    }
}
