//! Inverse document frequency.
//!
//! For a collection of `N` passages, `idf(t) = ln(N / df(t))` where `df(t)`
//! counts the passages containing `t` at least once.
//!
//! # Examples
//!
//! ```
//! use lectern::document::Document;
//! use lectern::scoring::compute_idfs;
//!
//! let docs = vec![
//!     Document::new("A", ["the", "cat", "sat"]),
//!     Document::new("B", ["the", "dog", "ran"]),
//!     Document::new("C", ["cats", "and", "dogs"]),
//! ];
//! let idfs = compute_idfs(&docs).unwrap();
//!
//! assert!((idfs.get("the").unwrap() - (3.0f64 / 2.0).ln()).abs() < 1e-12);
//! assert!((idfs.get("cat").unwrap() - 3.0f64.ln()).abs() < 1e-12);
//! assert_eq!(idfs.get("bird"), None);
//! ```

use ahash::{AHashMap, AHashSet};

use crate::document::Passage;
use crate::error::{LecternError, Result};

/// A mapping from term to its IDF value within one collection.
///
/// Every term that occurs in at least one member of the collection has an
/// entry; all values are non-negative. A term without an entry is unknown
/// vocabulary and contributes nothing wherever it is looked up.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdfTable {
    values: AHashMap<String, f64>,
}

impl IdfTable {
    /// Get the IDF of a term, or `None` if the term never occurred.
    pub fn get(&self, term: &str) -> Option<f64> {
        self.values.get(term).copied()
    }

    /// Check whether the term occurred in the collection.
    pub fn contains(&self, term: &str) -> bool {
        self.values.contains_key(term)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the table holds no terms.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(term, idf)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(term, idf)| (term.as_str(), *idf))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for IdfTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        IdfTable {
            values: iter.into_iter().map(|(term, idf)| (term.into(), idf)).collect(),
        }
    }
}

/// Compute the IDF of every distinct term in `collection`.
///
/// Each member adds at most one to a term's document frequency no matter how
/// often the term repeats inside it. An empty collection is rejected with
/// [`LecternError::InvalidInput`].
pub fn compute_idfs<P: Passage>(collection: &[P]) -> Result<IdfTable> {
    if collection.is_empty() {
        return Err(LecternError::invalid_input(
            "cannot compute IDF values over an empty collection",
        ));
    }

    let mut doc_freq: AHashMap<&str, usize> = AHashMap::new();
    for member in collection {
        let distinct: AHashSet<&str> = member.terms().iter().map(String::as_str).collect();
        for term in distinct {
            *doc_freq.entry(term).or_insert(0) += 1;
        }
    }

    let total = collection.len() as f64;
    let values = doc_freq
        .into_iter()
        .map(|(term, df)| (term.to_string(), (total / df as f64).ln()))
        .collect();

    Ok(IdfTable { values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, Sentence};

    fn corpus() -> Vec<Document> {
        vec![
            Document::new("A", ["the", "cat", "sat"]),
            Document::new("B", ["the", "dog", "ran"]),
            Document::new("C", ["cats", "and", "dogs"]),
        ]
    }

    #[test]
    fn test_reference_values() {
        let idfs = compute_idfs(&corpus()).unwrap();

        assert!((idfs.get("the").unwrap() - 0.405_465_108).abs() < 1e-6);
        assert!((idfs.get("cat").unwrap() - 1.098_612_289).abs() < 1e-6);
        assert_eq!(idfs.len(), 8);
    }

    #[test]
    fn test_repeats_count_once_per_member() {
        let docs = vec![
            Document::new("A", ["cat", "cat", "cat"]),
            Document::new("B", ["dog"]),
        ];
        let idfs = compute_idfs(&docs).unwrap();

        assert!((idfs.get("cat").unwrap() - 2.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_zero_only_when_in_every_member() {
        let docs = vec![
            Document::new("A", ["common", "x"]),
            Document::new("B", ["common", "y"]),
        ];
        let idfs = compute_idfs(&docs).unwrap();

        assert_eq!(idfs.get("common"), Some(0.0));
        for (term, idf) in idfs.iter() {
            assert!(idf >= 0.0);
            if term != "common" {
                assert!(idf > 0.0);
            }
        }
    }

    #[test]
    fn test_member_without_terms_still_counts_toward_n() {
        let sentences = vec![
            Sentence::new("Cats.", ["cats"]),
            Sentence::new("...", Vec::<String>::new()),
        ];
        let idfs = compute_idfs(&sentences).unwrap();

        assert!((idfs.get("cats").unwrap() - 2.0f64.ln()).abs() < 1e-12);
        assert_eq!(idfs.len(), 1);
    }

    #[test]
    fn test_empty_collection_is_invalid_input() {
        let docs: Vec<Document> = Vec::new();
        let err = compute_idfs(&docs).unwrap_err();

        assert!(matches!(err, LecternError::InvalidInput(_)));
    }

    #[test]
    fn test_table_from_iter() {
        let idfs: IdfTable = [("cat", 1.0)].into_iter().collect();

        assert!(idfs.contains("cat"));
        assert!(!idfs.contains("dog"));
        assert!(!idfs.is_empty());
    }
}
