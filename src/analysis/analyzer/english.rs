//! English analyzer used for both corpus and query text.
//!
//! Tokenize on Unicode word boundaries (or a caller-supplied tokenizer),
//! normalize case and apostrophes, drop punctuation tokens, drop stop words.
//!
//! ```
//! use lectern::analysis::analyzer::{Analyzer, EnglishAnalyzer};
//!
//! let analyzer = EnglishAnalyzer::new();
//! assert_eq!(analyzer.terms("What is the cat doing on the mat?").unwrap(), vec!["cat", "mat"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{NormalizeFilter, PunctuationFilter, StopFilter};
use crate::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct EnglishAnalyzer {
    inner: PipelineAnalyzer,
}

impl EnglishAnalyzer {
    /// Unicode word tokenizer with the built-in English stop words.
    pub fn new() -> Self {
        Self::with_stop_filter(StopFilter::new())
    }

    pub fn with_stop_filter(stop_filter: StopFilter) -> Self {
        Self::with_components(Arc::new(UnicodeWordTokenizer::new()), stop_filter)
    }

    pub fn with_components(tokenizer: Arc<dyn Tokenizer>, stop_filter: StopFilter) -> Self {
        let inner = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(NormalizeFilter::new()))
            .add_filter(Arc::new(PunctuationFilter::new()))
            .add_filter(Arc::new(stop_filter))
            .with_name("english");

        EnglishAnalyzer { inner }
    }
}

impl Default for EnglishAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for EnglishAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
