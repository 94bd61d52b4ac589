//! Document ranking by summed TF-IDF.
//!
//! `score(d) = Σ tf(t, d) × idf(t)` over the query terms `t` that have an
//! IDF entry. Query terms outside the IDF table are unknown vocabulary and
//! add nothing.
//!
//! Ranking is a stable sort by descending score: documents with equal
//! scores keep the order in which they were passed in, which for a loaded
//! corpus is file-name order.

use serde::Serialize;

use crate::document::Passage;
use crate::scoring::idf::IdfTable;
use crate::scoring::query::Query;

/// A document identifier with its TF-IDF score.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DocumentScore<'a> {
    /// The document identifier
    pub name: &'a str,

    /// Summed TF-IDF over the query terms
    pub score: f64,
}

/// Compute the TF-IDF score of one document.
pub fn tf_idf_score<P: Passage>(query: &Query, document: &P, idfs: &IdfTable) -> f64 {
    query
        .terms()
        .filter_map(|term| idfs.get(term).map(|idf| (term, idf)))
        .map(|(term, idf)| document.term_frequency(term) as f64 * idf)
        .sum()
}

/// Score every document and return all of them, best first.
pub fn rank_documents<'a, P: Passage>(
    query: &Query,
    documents: &'a [P],
    idfs: &IdfTable,
) -> Vec<DocumentScore<'a>> {
    let mut ranked: Vec<DocumentScore<'a>> = documents
        .iter()
        .map(|document| DocumentScore {
            name: document.id(),
            score: tf_idf_score(query, document, idfs),
        })
        .collect();

    // `sort_by` is stable: ties keep input order.
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Return the identifiers of the `n` best documents for `query`.
///
/// The result holds `min(n, documents.len())` identifiers.
pub fn top_files<'a, P: Passage>(
    query: &Query,
    documents: &'a [P],
    idfs: &IdfTable,
    n: usize,
) -> Vec<&'a str> {
    rank_documents(query, documents, idfs)
        .into_iter()
        .take(n)
        .map(|scored| scored.name)
        .collect()
}
