//! The common view over documents and sentences.

/// A named, ordered sequence of normalized terms.
///
/// The term sequence keeps repeats and source order. Implementors are
/// immutable once built.
pub trait Passage {
    /// The identifier of this passage within its collection.
    fn id(&self) -> &str;

    /// The normalized terms of this passage, in order of appearance.
    fn terms(&self) -> &[String];

    /// Number of occurrences of `term` in this passage.
    fn term_frequency(&self, term: &str) -> usize {
        self.terms().iter().filter(|t| t.as_str() == term).count()
    }

    /// Whether `term` occurs at least once in this passage.
    fn contains_term(&self, term: &str) -> bool {
        self.terms().iter().any(|t| t.as_str() == term)
    }
}
