//! Word tokenization by UAX #29 word boundaries.
//!
//! Boundary segments without a letter or digit (whitespace, punctuation runs)
//! are dropped here, so filters only ever see words. Contractions such as
//! `don't` and decimal numbers such as `3.14` stay in one piece.
//!
//! ```
//! use lectern::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
//!
//! let words: Vec<_> = UnicodeWordTokenizer::new()
//!     .tokenize("Pi is 3.14, isn't it?")
//!     .unwrap()
//!     .map(|token| token.text)
//!     .collect();
//!
//! assert_eq!(words, vec!["Pi", "is", "3.14", "isn't", "it"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// The default corpus and query tokenizer.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        // Segments borrow `text`, so they are copied out before boxing.
        let words: Vec<Token> = text
            .split_word_bounds()
            .filter(|segment| segment.chars().any(char::is_alphanumeric))
            .map(Token::from)
            .collect();

        Ok(Box::new(words.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
