//! Token types for text analysis.

use std::fmt;

/// One word flowing through the analysis pipeline.
///
/// Filters rewrite the text or drop the token; nothing downstream of the
/// analyzer looks at anything but the final text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub text: String,
}

impl Token {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Token { text: text.into() }
    }

    /// Consume the token, keeping its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Token::new(text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A lazily evaluated sequence of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_text() {
        let token = Token::from("Hello");

        assert_eq!(format!("{token}"), "Hello");
        assert_eq!(token.into_text(), "Hello");
    }
}
