//! Sentences extracted from shortlisted documents.

use serde::{Deserialize, Serialize};

use crate::document::passage::Passage;

/// A sentence identified by its exact text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text as it appears in the source document
    pub text: String,

    /// Normalized terms of the sentence, repeats included
    pub terms: Vec<String>,
}

impl Sentence {
    /// Create a new sentence from its text and terms.
    pub fn new<S, I, T>(text: S, terms: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Sentence {
            text: text.into(),
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this sentence has any terms left after analysis.
    ///
    /// Sentences without terms are never scorable.
    pub fn is_scorable(&self) -> bool {
        !self.terms.is_empty()
    }
}

impl Passage for Sentence {
    fn id(&self) -> &str {
        &self.text
    }

    fn terms(&self) -> &[String] {
        &self.terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_identity_is_text() {
        let sentence = Sentence::new("The cat sat.", ["cat", "sat"]);

        assert_eq!(sentence.id(), "The cat sat.");
        assert!(sentence.is_scorable());
        assert!(!Sentence::new("Is it?", Vec::<String>::new()).is_scorable());
    }
}
