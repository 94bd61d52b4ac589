//! Tokenizers: raw text in, word tokens out.
//!
//! [`UnicodeWordTokenizer`] is the default. [`RegexTokenizer`] takes a
//! user-supplied pattern. Neither changes case; that is left to the filters.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Splits text into word tokens, in order of appearance.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Short name shown in analyzer debug output.
    fn name(&self) -> &'static str;
}

pub mod regex;
pub mod unicode_word;

pub use self::regex::RegexTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
