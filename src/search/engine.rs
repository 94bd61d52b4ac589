//! The question answering engine.
//!
//! A query runs through these steps, all scoped to that one call:
//!
//! ```text
//! query text → Query → top documents → sentences → sentence IDF → top sentences
//! ```
//!
//! The documents and their IDF table are built once in
//! [`QuestionAnswerer::new`] and only read afterwards, so a single engine
//! can be shared across threads.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::analysis::{Analyzer, SentenceSplitter};
use crate::corpus::{Corpus, load_files};
use crate::document::{Document, Sentence};
use crate::error::{LecternError, Result};
use crate::scoring::{IdfTable, Query, compute_idfs, rank_documents, rank_sentences};
use crate::search::answer::{Answer, RankedDocument, RankedSentence};
use crate::search::config::QaConfig;

/// Answers natural-language queries from a fixed corpus.
pub struct QuestionAnswerer {
    corpus: Corpus,
    documents: Vec<Document>,
    idfs: IdfTable,
    analyzer: Arc<dyn Analyzer>,
    splitter: SentenceSplitter,
    config: QaConfig,
}

impl QuestionAnswerer {
    /// Tokenize the corpus and compute its document-scope IDF table.
    ///
    /// Fails with [`LecternError::InvalidInput`] if the corpus is empty.
    pub fn new(corpus: Corpus, analyzer: Arc<dyn Analyzer>, config: QaConfig) -> Result<Self> {
        config.validate()?;

        let documents = corpus
            .iter()
            .map(|entry| Ok(Document::new(entry.name.as_str(), analyzer.terms(&entry.text)?)))
            .collect::<Result<Vec<_>>>()?;

        let idfs = compute_idfs(&documents).map_err(|e| match e {
            LecternError::InvalidInput(_) => {
                LecternError::invalid_input("the corpus contains no documents")
            }
            other => other,
        })?;

        info!(
            "Indexed {} document(s), {} distinct term(s)",
            documents.len(),
            idfs.len()
        );

        Ok(QuestionAnswerer {
            corpus,
            documents,
            idfs,
            analyzer,
            splitter: SentenceSplitter::new(),
            config,
        })
    }

    /// Load the corpus in `directory` and build an engine from `config`.
    pub fn from_directory<P: AsRef<Path>>(directory: P, config: QaConfig) -> Result<Self> {
        config.validate()?;
        let analyzer = Arc::new(config.build_analyzer()?);
        let corpus = load_files(directory, &config.extension)?;
        Self::new(corpus, analyzer, config)
    }

    /// Replace the sentence splitter, e.g. to use another abbreviation list.
    pub fn with_splitter(mut self, splitter: SentenceSplitter) -> Self {
        self.splitter = splitter;
        self
    }

    /// Answer `text` with the configured number of sentences, best first.
    pub fn answer(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .answer_detailed(text)?
            .sentences
            .into_iter()
            .map(|sentence| sentence.text)
            .collect())
    }

    /// Answer `text`, keeping the query terms, shortlisted documents, and scores.
    pub fn answer_detailed(&self, text: &str) -> Result<Answer> {
        let query = Query::parse(self.analyzer.as_ref(), text)?;
        let mut answer = Answer {
            query: query.terms().map(str::to_string).collect(),
            ..Answer::default()
        };
        if query.is_empty() {
            warn!("Query has no searchable terms after analysis");
            return Ok(answer);
        }

        let shortlisted: Vec<_> = rank_documents(&query, &self.documents, &self.idfs)
            .into_iter()
            .take(self.config.file_matches)
            .collect();
        for scored in &shortlisted {
            debug!("Shortlisted {} (score {:.4})", scored.name, scored.score);
        }

        let names: Vec<&str> = shortlisted.iter().map(|scored| scored.name).collect();
        let sentences = self.extract_sentences(&names)?;
        answer.documents = shortlisted.into_iter().map(RankedDocument::from).collect();
        if sentences.is_empty() {
            return Ok(answer);
        }

        let sentence_idfs = compute_idfs(&sentences)?;
        answer.sentences = rank_sentences(&query, &sentences, &sentence_idfs)
            .into_iter()
            .take(self.config.sentence_matches)
            .map(RankedSentence::from)
            .collect();

        Ok(answer)
    }

    /// Split the named documents into scorable sentences.
    ///
    /// Documents are visited in the given order and sentences in order of
    /// appearance. Repeated sentence texts keep their first position;
    /// sentences without terms are left out.
    fn extract_sentences(&self, names: &[&str]) -> Result<Vec<Sentence>> {
        let mut seen = HashSet::new();
        let mut sentences = Vec::new();

        for &name in names {
            let text = self
                .corpus
                .get(name)
                .ok_or_else(|| LecternError::other(format!("document {name} is not in the corpus")))?;

            for sentence in self.splitter.split(text) {
                if !seen.insert(sentence) {
                    continue;
                }
                let terms = self.analyzer.terms(sentence)?;
                if !terms.is_empty() {
                    sentences.push(Sentence::new(sentence, terms));
                }
            }
        }

        debug!("{} candidate sentence(s)", sentences.len());
        Ok(sentences)
    }

    /// The raw corpus.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// The tokenized documents, in corpus order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// The document-scope IDF table.
    pub fn idfs(&self) -> &IdfTable {
        &self.idfs
    }

    /// The active configuration.
    pub fn config(&self) -> &QaConfig {
        &self.config
    }
}

impl std::fmt::Debug for QuestionAnswerer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuestionAnswerer")
            .field("documents", &self.documents.len())
            .field("terms", &self.idfs.len())
            .field("analyzer", &self.analyzer.name())
            .field("config", &self.config)
            .finish()
    }
}
