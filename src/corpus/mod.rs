//! Raw corpus text, keyed by document name.
//!
//! [`loader::load_files`] builds a [`Corpus`] from a directory; tests and
//! embedders can also assemble one in memory with [`Corpus::from_entries`].

pub mod loader;

use ahash::AHashMap;

pub use loader::load_files;

/// One raw corpus file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorpusEntry {
    /// The document name
    pub name: String,

    /// The full, unprocessed text
    pub text: String,
}

/// An ordered mapping from document name to raw text.
///
/// Iteration order is insertion order. This order is the tie-break the
/// document ranker falls back on for equal scores.
#[derive(Clone, Debug, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
    /// Position of each name in `entries`
    index: AHashMap<String, usize>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Corpus::default()
    }

    /// Build a corpus from `(name, text)` pairs, keeping their order.
    pub fn from_entries<I, N, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: Into<String>,
    {
        let mut corpus = Corpus::new();
        for (name, text) in entries {
            corpus.insert(name, text);
        }
        corpus
    }

    /// Add a document. Re-inserting a name replaces its text in place.
    pub fn insert<N: Into<String>, T: Into<String>>(&mut self, name: N, text: T) {
        let name = name.into();
        let text = text.into();
        match self.index.get(&name) {
            Some(&position) => self.entries[position].text = text,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push(CorpusEntry { name, text });
            }
        }
    }

    /// Get the raw text of a document.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&position| self.entries[position].text.as_str())
    }

    /// Iterate over the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &CorpusEntry> {
        self.entries.iter()
    }

    /// Get the document names in order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the corpus holds no documents.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
