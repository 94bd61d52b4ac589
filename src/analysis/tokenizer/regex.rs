//! Tokenization by an arbitrary regular expression.
//!
//! Selected with the `token_pattern` setting; every non-empty match of the
//! pattern becomes one token.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{LecternError, Result};

/// Default pattern: runs of word characters.
const WORD_PATTERN: &str = r"\w+";

#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    regex: Arc<Regex>,
}

impl RegexTokenizer {
    /// Tokenizer over [`WORD_PATTERN`].
    pub fn new() -> Result<Self> {
        Self::with_pattern(WORD_PATTERN)
    }

    /// Compile `pattern`. A pattern that does not compile is an analysis error.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(|regex| RegexTokenizer {
                regex: Arc::new(regex),
            })
            .map_err(|e| LecternError::analysis(format!("invalid token pattern {pattern:?}: {e}")))
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let matches: Vec<Token> = self
            .regex
            .find_iter(text)
            .map(|found| found.as_str())
            .filter(|found| !found.is_empty())
            .map(Token::from)
            .collect();

        Ok(Box::new(matches.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
