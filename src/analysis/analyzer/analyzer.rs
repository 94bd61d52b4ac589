//! The analyzer trait.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Turns raw text into the terms the rankers score.
///
/// `Send + Sync` so one analyzer can serve every query a process handles.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Short name shown in debug output.
    fn name(&self) -> &'static str;

    /// Analyze `text` and collect the surviving terms in order, repeats included.
    fn terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.into_text()).collect())
    }
}
