//! Corpus documents.

use serde::{Deserialize, Serialize};

use crate::document::passage::Passage;

/// A corpus document identified by its file name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The document name (file name in the corpus directory)
    pub name: String,

    /// Normalized terms of the whole document, repeats included
    pub terms: Vec<String>,
}

impl Document {
    /// Create a new document from a name and its terms.
    pub fn new<S, I, T>(name: S, terms: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Document {
            name: name.into(),
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }
}

impl Passage for Document {
    fn id(&self) -> &str {
        &self.name
    }

    fn terms(&self) -> &[String] {
        &self.terms
    }
}
