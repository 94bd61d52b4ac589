//! Configuration for question answering.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::{EnglishAnalyzer, RegexTokenizer, StopFilter, Tokenizer, UnicodeWordTokenizer};
use crate::error::{LecternError, Result};

/// Tunables for corpus loading, analysis, and ranking.
///
/// Missing fields in a JSON config file fall back to [`Default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QaConfig {
    /// Number of documents shortlisted before sentence extraction.
    pub file_matches: usize,

    /// Number of sentences returned per query.
    pub sentence_matches: usize,

    /// Extension of the corpus files to load, without the dot.
    pub extension: String,

    /// Newline-separated stop word file replacing the built-in English list.
    pub stop_words: Option<PathBuf>,

    /// Regex to tokenize with instead of Unicode word boundaries.
    pub token_pattern: Option<String>,
}

impl Default for QaConfig {
    fn default() -> Self {
        Self {
            file_matches: 1,
            sentence_matches: 1,
            extension: "txt".to_string(),
            stop_words: None,
            token_pattern: None,
        }
    }
}

impl QaConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LecternError::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config: QaConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if self.file_matches == 0 {
            return Err(LecternError::config("file_matches must be at least 1"));
        }
        if self.sentence_matches == 0 {
            return Err(LecternError::config("sentence_matches must be at least 1"));
        }
        if self.extension.trim_start_matches('.').is_empty() {
            return Err(LecternError::config("extension must not be empty"));
        }
        Ok(())
    }

    /// Build the analyzer this configuration describes.
    ///
    /// Stop words are loaded here, once, and handed to the analyzer.
    pub fn build_analyzer(&self) -> Result<EnglishAnalyzer> {
        let stop_filter = match &self.stop_words {
            Some(path) => {
                let filter = StopFilter::from_file(path)?;
                if filter.is_empty() {
                    warn!("Stop word file {} lists no words", path.display());
                }
                info!("Loaded {} stop word(s) from {}", filter.len(), path.display());
                filter
            }
            None => StopFilter::new(),
        };
        let tokenizer: Arc<dyn Tokenizer> = match &self.token_pattern {
            Some(pattern) => {
                let tokenizer = RegexTokenizer::with_pattern(pattern)?;
                debug!("Tokenizing with pattern {}", tokenizer.pattern());
                Arc::new(tokenizer)
            }
            None => Arc::new(UnicodeWordTokenizer::new()),
        };
        Ok(EnglishAnalyzer::with_components(tokenizer, stop_filter))
    }
}
