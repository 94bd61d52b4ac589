//! Punctuation filter implementation.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Drops tokens made up entirely of ASCII punctuation.
///
/// The Unicode word tokenizer never emits these; a user-supplied token
/// pattern such as `\S+` does.
#[derive(Clone, Debug, Default)]
pub struct PunctuationFilter;

impl PunctuationFilter {
    pub fn new() -> Self {
        PunctuationFilter
    }

    /// Check whether a token's text is punctuation only.
    pub fn is_punctuation(text: &str) -> bool {
        !text.is_empty() && text.chars().all(|c| c.is_ascii_punctuation())
    }
}

impl Filter for PunctuationFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(
            tokens.filter(|token| !Self::is_punctuation(&token.text)),
        ))
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_punctuation_filter() {
        let tokens: Vec<Token> = ["hello", ",", "--", "e-mail"].into_iter().map(Token::from).collect();

        let result: Vec<String> = PunctuationFilter::new()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .map(Token::into_text)
            .collect();

        assert_eq!(result, vec!["hello", "e-mail"]);
    }

    #[test]
    fn test_is_punctuation() {
        assert!(PunctuationFilter::is_punctuation("?!"));
        assert!(!PunctuationFilter::is_punctuation(""));
        assert!(!PunctuationFilter::is_punctuation("a."));
    }
}
