//! Case and apostrophe normalization.
//!
//! Stop words and query terms are compared by exact text, so every variant
//! spelling of a word has to collapse to one form first: `Don’t`, `DON'T`
//! and `don't` all become `don't`.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

const RIGHT_SINGLE_QUOTE: char = '\u{2019}';
const LEFT_SINGLE_QUOTE: char = '\u{2018}';
const MODIFIER_APOSTROPHE: char = '\u{02BC}';

/// Lowercase `word` and fold typographic apostrophes to `'`.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .map(|c| match c {
            RIGHT_SINGLE_QUOTE | LEFT_SINGLE_QUOTE | MODIFIER_APOSTROPHE => '\'',
            _ => c,
        })
        .collect::<String>()
        .to_lowercase()
}

/// Applies [`normalize_word`] to every token.
#[derive(Clone, Debug, Default)]
pub struct NormalizeFilter;

impl NormalizeFilter {
    pub fn new() -> Self {
        NormalizeFilter
    }
}

impl Filter for NormalizeFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(
            tokens.map(|token| Token::new(normalize_word(&token.text))),
        ))
    }

    fn name(&self) -> &'static str {
        "normalize"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(words: &[&str]) -> Vec<String> {
        let tokens: Vec<Token> = words.iter().copied().map(Token::from).collect();
        NormalizeFilter::new()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .map(Token::into_text)
            .collect()
    }

    #[test]
    fn test_lowercases() {
        assert_eq!(run(&["Hello", "WORLD", "ÉCOLE"]), vec!["hello", "world", "école"]);
    }

    #[test]
    fn test_folds_curly_apostrophes() {
        assert_eq!(run(&["Don\u{2019}t", "it\u{2019}s", "o\u{02BC}clock"]), vec![
            "don't", "it's", "o'clock"
        ]);
    }
}
