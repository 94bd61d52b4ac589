//! Token filters.
//!
//! Chained in an analyzer, filters implement the normalization every term
//! goes through:
//!
//! ```text
//! Tokenizer → Normalize → Punctuation → Stop Words
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A transformation from one token stream to another.
pub trait Filter: Send + Sync {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Short name shown in analyzer debug output.
    fn name(&self) -> &'static str;
}

pub mod normalize;
pub mod punctuation;
pub mod stop;

pub use normalize::{NormalizeFilter, normalize_word};
pub use punctuation::PunctuationFilter;
pub use stop::StopFilter;
