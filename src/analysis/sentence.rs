//! Sentence segmentation.
//!
//! Documents are first cut into passages at line breaks, then each passage is
//! cut at Unicode sentence boundaries (UAX #29). UAX #29 ends a sentence after
//! any period followed by a capital, so a boundary right after a known
//! abbreviation such as `Mr.` or `Dr.` is undone. A sentence is identified by
//! its exact trimmed text.
//!
//! ```
//! use lectern::analysis::sentence::SentenceSplitter;
//!
//! let splitter = SentenceSplitter::new();
//! let sentences: Vec<_> = splitter.split("Dr. Who sleeps. Dogs bark!\nBirds sing").collect();
//!
//! assert_eq!(sentences, vec!["Dr. Who sleeps.", "Dogs bark!", "Birds sing"]);
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token_filter::normalize_word;

/// Abbreviations that end in a period without ending the sentence.
///
/// Written lowercase and without the final period.
const DEFAULT_ENGLISH_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "hon", "sr", "jr", "st", "mt", "ft", "gen", "col",
    "capt", "lt", "sgt", "gov", "sen", "rep", "pres", "messrs", "vs", "etc", "e.g", "i.e",
    "cf", "approx", "fig", "vol", "ch", "inc", "ltd", "co", "corp", "bros", "dept",
    "univ", "u.s", "u.k", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept",
    "oct", "nov", "dec",
];

static DEFAULT_ENGLISH_ABBREVIATIONS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_ABBREVIATIONS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// Splits text into passages and passages into sentences.
#[derive(Clone, Debug)]
pub struct SentenceSplitter {
    abbreviations: Arc<HashSet<String>>,
}

impl SentenceSplitter {
    /// Splitter with the built-in English abbreviations.
    pub fn new() -> Self {
        Self::with_abbreviations(DEFAULT_ENGLISH_ABBREVIATIONS_SET.clone())
    }

    /// Splitter that only treats `abbreviations` as non-terminal.
    ///
    /// Entries are matched after normalization and without their final
    /// period, so `"Mr."`, `"mr."` and `"mr"` are the same entry.
    pub fn with_abbreviations(abbreviations: HashSet<String>) -> Self {
        let abbreviations = abbreviations
            .iter()
            .map(|word| normalize_word(word.trim().trim_end_matches('.')))
            .filter(|word| !word.is_empty())
            .collect();
        SentenceSplitter {
            abbreviations: Arc::new(abbreviations),
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_abbreviations(words.into_iter().map(Into::into).collect())
    }

    /// Check whether `segment` ends with a known abbreviation and its period.
    pub fn ends_with_abbreviation(&self, segment: &str) -> bool {
        let Some(stem) = segment.trim_end().strip_suffix('.') else {
            return false;
        };
        let last_word = stem
            .rsplit(|c: char| c.is_whitespace() || c == '(' || c == '"')
            .next()
            .unwrap_or(stem);
        !last_word.is_empty() && self.abbreviations.contains(&normalize_word(last_word))
    }

    /// Iterate over the non-empty sentences of `text`, in order of appearance.
    pub fn split<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.split('\n')
            .flat_map(move |passage| self.split_passage(passage))
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
    }

    /// Cut one passage at sentence boundaries, merging a segment that ends in
    /// an abbreviation with the segment after it.
    fn split_passage<'a>(&self, passage: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut pending: Option<usize> = None;

        for (offset, segment) in passage.split_sentence_bound_indices() {
            let start = *pending.get_or_insert(offset);
            if self.ends_with_abbreviation(segment) {
                continue;
            }
            sentences.push(&passage[start..offset + segment.len()]);
            pending = None;
        }
        if let Some(start) = pending {
            sentences.push(&passage[start..]);
        }

        sentences
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}
