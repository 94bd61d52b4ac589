//! Sentence ranking by matched IDF with a query-density tie-break.
//!
//! Each sentence gets a [`SentenceScore`]:
//!
//! - `matched_idf`: sum of `idf(t)` over the distinct query terms present in
//!   the sentence (presence, not count)
//! - `density`: the share of the sentence's own terms that are query-term
//!   occurrences
//!
//! Sentences whose matched IDF is zero are dropped rather than ranked last.
//! The rest are ordered by `(matched_idf, density)`, both descending; full
//! ties keep input order.

use std::cmp::Ordering;

use serde::Serialize;

use crate::document::Passage;
use crate::scoring::idf::IdfTable;
use crate::scoring::query::Query;

/// Composite ranking key of one sentence.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SentenceScore {
    /// Summed IDF of the distinct query terms the sentence contains
    pub matched_idf: f64,

    /// Fraction of the sentence's terms that are query terms, in `(0, 1]`
    pub density: f64,
}

impl SentenceScore {
    /// Compare two scores lexicographically on `(matched_idf, density)`.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.matched_idf
            .total_cmp(&other.matched_idf)
            .then_with(|| self.density.total_cmp(&other.density))
    }
}

/// A sentence identifier with its score.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScoredSentence<'a> {
    /// The sentence text
    pub text: &'a str,

    /// The ranking key
    #[serde(flatten)]
    pub score: SentenceScore,
}

/// Score one sentence, or `None` if it matches no scorable query term.
pub fn score_sentence<P: Passage>(
    query: &Query,
    sentence: &P,
    idfs: &IdfTable,
) -> Option<SentenceScore> {
    let matched_idf: f64 = query
        .terms()
        .filter(|term| sentence.contains_term(term))
        .filter_map(|term| idfs.get(term))
        .sum();

    if matched_idf == 0.0 {
        return None;
    }

    // A non-zero match implies at least one term, so the division is safe.
    let terms = sentence.terms();
    let occurrences = terms.iter().filter(|term| query.contains(term)).count();
    let density = occurrences as f64 / terms.len() as f64;

    Some(SentenceScore {
        matched_idf,
        density,
    })
}

/// Score every sentence and return the matching ones, best first.
pub fn rank_sentences<'a, P: Passage>(
    query: &Query,
    sentences: &'a [P],
    idfs: &IdfTable,
) -> Vec<ScoredSentence<'a>> {
    let mut ranked: Vec<ScoredSentence<'a>> = sentences
        .iter()
        .filter_map(|sentence| {
            score_sentence(query, sentence, idfs).map(|score| ScoredSentence {
                text: sentence.id(),
                score,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.score.rank_cmp(&a.score));
    ranked
}

/// Return the `n` best sentences for `query`.
///
/// The result holds `min(n, matching sentences)` identifiers and is empty,
/// not an error, when nothing matches.
pub fn top_sentences<'a, P: Passage>(
    query: &Query,
    sentences: &'a [P],
    idfs: &IdfTable,
    n: usize,
) -> Vec<&'a str> {
    rank_sentences(query, sentences, idfs)
        .into_iter()
        .take(n)
        .map(|scored| scored.text)
        .collect()
}
