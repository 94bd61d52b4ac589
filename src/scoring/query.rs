//! Query terms.

use std::collections::BTreeSet;

use crate::analysis::Analyzer;
use crate::error::Result;

/// A deduplicated set of normalized query terms.
///
/// Terms iterate in sorted order, so every score summed over a query is
/// computed in the same order on every run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    terms: BTreeSet<String>,
}

impl Query {
    /// Build a query from already normalized terms.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Query {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    /// Analyze free-form user input into a query.
    pub fn parse<A: Analyzer + ?Sized>(analyzer: &A, text: &str) -> Result<Self> {
        Ok(Self::new(analyzer.terms(text)?))
    }

    /// Iterate over the distinct terms.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Check whether `term` is part of the query.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the query has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::EnglishAnalyzer;

    #[test]
    fn test_parse_deduplicates() {
        let analyzer = EnglishAnalyzer::new();
        let query = Query::parse(&analyzer, "What do cats eat? Cats eat fish.").unwrap();

        assert_eq!(query.terms().collect::<Vec<_>>(), vec!["cats", "eat", "fish"]);
        assert_eq!(query.len(), 3);
        assert!(query.contains("fish"));
    }

    #[test]
    fn test_stop_word_only_query_is_empty() {
        let analyzer = EnglishAnalyzer::new();
        assert!(Query::parse(&analyzer, "What is it?").unwrap().is_empty());
    }
}
