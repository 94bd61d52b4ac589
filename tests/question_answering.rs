//! Integration tests for loading a corpus and answering questions.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;

use lectern::analysis::{EnglishAnalyzer, StopFilter};
use lectern::corpus::load_files;
use lectern::document::{Document, Sentence};
use lectern::error::{LecternError, Result};
use lectern::scoring::{Query, compute_idfs, top_files, top_sentences};
use lectern::search::{QaConfig, QuestionAnswerer};

fn write_corpus(dir: &Path) {
    fs::write(
        dir.join("python.txt"),
        "Python is a programming language.\n\
         Python was created by Guido van Rossum. It was first released in 1991.",
    )
    .unwrap();
    fs::write(
        dir.join("networks.txt"),
        "Neural networks are computing systems. Networks of neurons learn from data.\n\
         A neural network has layers.",
    )
    .unwrap();
    fs::write(
        dir.join("ocean.txt"),
        "The ocean covers most of the planet. Whales live in the ocean.",
    )
    .unwrap();
    fs::write(dir.join("notes.md"), "Python Python Python Python.").unwrap();
}

#[test]
fn test_answer_from_directory() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path());

    let qa = QuestionAnswerer::from_directory(dir.path(), QaConfig::default())?;

    assert_eq!(qa.corpus().names(), vec!["networks.txt", "ocean.txt", "python.txt"]);
    assert_eq!(
        qa.answer("Who created Python?")?,
        vec!["Python was created by Guido van Rossum."]
    );
    assert_eq!(qa.answer("Where do whales live?")?, vec!["Whales live in the ocean."]);

    Ok(())
}

#[test]
fn test_extension_selects_files() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path());

    let config = QaConfig {
        extension: "md".to_string(),
        ..QaConfig::default()
    };
    let qa = QuestionAnswerer::from_directory(dir.path(), config)?;

    assert_eq!(qa.corpus().len(), 1);
    // A single sentence pool makes every term's IDF zero.
    assert!(qa.answer("python")?.is_empty());

    Ok(())
}

#[test]
fn test_detailed_answer() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path());

    let config = QaConfig {
        file_matches: 2,
        sentence_matches: 2,
        ..QaConfig::default()
    };
    let qa = QuestionAnswerer::from_directory(dir.path(), config)?;
    let answer = qa.answer_detailed("How do neural networks learn?")?;

    assert_eq!(answer.query, vec!["learn", "networks", "neural"]);
    assert_eq!(answer.documents.len(), 2);
    assert_eq!(answer.documents[0].name, "networks.txt");
    assert_eq!(answer.sentences.len(), 2);
    assert!(answer.sentences[0].matched_idf >= answer.sentences[1].matched_idf);
    assert_eq!(answer.sentence_texts(), qa.answer("How do neural networks learn?")?);

    Ok(())
}

#[test]
fn test_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let err = QuestionAnswerer::from_directory(dir.path().join("nope"), QaConfig::default())
        .unwrap_err();

    assert!(matches!(err, LecternError::Corpus(_)));
}

#[test]
fn test_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let err = QuestionAnswerer::from_directory(dir.path(), QaConfig::default()).unwrap_err();

    assert!(matches!(err, LecternError::InvalidInput(_)));
}

#[test]
fn test_stop_words_from_file() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("corpus");
    fs::create_dir(&corpus).unwrap();
    write_corpus(&corpus);
    let stop_words = dir.path().join("stop.txt");
    fs::write(&stop_words, "# custom list\npython\n").unwrap();

    let config = QaConfig {
        stop_words: Some(stop_words),
        ..QaConfig::default()
    };
    let qa = QuestionAnswerer::from_directory(&corpus, config)?;

    assert!(!qa.idfs().contains("python"));
    assert!(qa.answer("python")?.is_empty());

    Ok(())
}

#[test]
fn test_shared_across_threads() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path());
    let qa = Arc::new(QuestionAnswerer::from_directory(dir.path(), QaConfig::default())?);

    let handles: Vec<_> = ["Who created Python?", "Where do whales live?"]
        .into_iter()
        .map(|question| {
            let qa = Arc::clone(&qa);
            thread::spawn(move || qa.answer(question).unwrap())
        })
        .collect();
    let answers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(answers[0], vec!["Python was created by Guido van Rossum."]);
    assert_eq!(answers[1], vec!["Whales live in the ocean."]);

    Ok(())
}

#[test]
fn test_document_ranking_scenario() -> Result<()> {
    let docs = vec![
        Document::new("A", ["the", "cat", "sat"]),
        Document::new("B", ["the", "dog", "ran"]),
        Document::new("C", ["cats", "and", "dogs"]),
    ];
    let idfs = compute_idfs(&docs)?;

    assert!((idfs.get("the").unwrap() - (1.5f64).ln()).abs() < 1e-12);
    assert!((idfs.get("cat").unwrap() - (3.0f64).ln()).abs() < 1e-12);
    assert_eq!(top_files(&Query::new(["cat"]), &docs, &idfs, 1), vec!["A"]);
    // Unknown terms contribute nothing and keep corpus order.
    assert_eq!(top_files(&Query::new(["zebra"]), &docs, &idfs, 3), vec!["A", "B", "C"]);

    Ok(())
}

#[test]
fn test_sentence_ranking_scenario() -> Result<()> {
    let sentences = vec![
        Sentence::new("S1", ["cat", "sat", "mat"]),
        Sentence::new("S2", ["cat", "cat"]),
        Sentence::new("S3", ["dog"]),
    ];
    let idfs = compute_idfs(&sentences)?;

    assert_eq!(
        top_sentences(&Query::new(["cat"]), &sentences, &idfs, 1),
        vec!["S2"]
    );
    assert_eq!(
        top_sentences(&Query::new(["cat"]), &sentences, &idfs, 10),
        vec!["S2", "S1"]
    );

    Ok(())
}

#[test]
fn test_custom_analyzer() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path());
    let corpus = load_files(dir.path(), "txt")?;

    let analyzer = EnglishAnalyzer::with_stop_filter(StopFilter::from_words(Vec::<String>::new()));
    let qa = QuestionAnswerer::new(corpus, Arc::new(analyzer), QaConfig::default())?;

    assert!(qa.idfs().contains("the"));
    assert_eq!(qa.answer("of the planet")?, vec!["The ocean covers most of the planet."]);

    Ok(())
}

#[test]
fn test_abbreviations_do_not_split_answers() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("acme.txt"),
        "Mr. Smith founded Acme in 1990. Acme makes rockets.",
    )
    .unwrap();
    fs::write(dir.path().join("other.txt"), "Dr. Jones studies whales.").unwrap();

    let qa = QuestionAnswerer::from_directory(dir.path(), QaConfig::default())?;

    assert_eq!(
        qa.answer("Who did Mr. Smith found?")?,
        vec!["Mr. Smith founded Acme in 1990."]
    );

    Ok(())
}
