//! String-level API behavior across ingestion, confirmation and alignment.

use libalign::{Aligner, Config};

fn trained_aligner() -> Aligner {
    let mut aligner = Aligner::new();
    aligner.add_corpus(
        &["the cat", "a dog", "the red house"],
        &["le chat", "un chien", "la maison rouge"],
    );
    aligner
}

#[test]
fn suggestions_cover_the_source_sentence() {
    let aligner = trained_aligner();
    let suggestions = aligner.align("the dog", "le chien", 3);
    assert!(!suggestions.is_empty());

    for suggestion in &suggestions {
        let mut covered: Vec<usize> = suggestion
            .predictions()
            .iter()
            .flat_map(|p| p.source().tokens().iter().map(|t| t.position()))
            .collect();
        covered.sort_unstable();
        covered.dedup();
        assert_eq!(covered, vec![0, 1], "suggestion must cover every source token once");
    }
}

#[test]
fn suggestions_arrive_best_first() {
    let aligner = trained_aligner();
    let suggestions = aligner.align("the dog", "le chien", 5);
    for pair in suggestions.windows(2) {
        assert!(pair[0].compound_confidence() >= pair[1].compound_confidence());
    }
}

#[test]
fn confirming_an_alignment_changes_later_suggestions() {
    let mut aligner = Aligner::new();
    aligner.add_corpus(&["the cat"], &["le chat"]);

    // Without confirmations the engine has only weak enumeration evidence.
    aligner.confirm("the", "le");
    aligner.confirm("cat", "chat");

    let suggestions = aligner.align("the cat", "le chat", 1);
    let covers: Vec<String> = suggestions[0]
        .predictions()
        .iter()
        .map(|p| p.alignment().to_string())
        .collect();
    assert_eq!(covers, vec!["the -> le", "cat -> chat"]);
}

#[test]
fn custom_config_is_respected() {
    let mut config = Config::default();
    config.max_ngram_length = 1;
    let mut aligner = Aligner::with_config(config);
    aligner.add_corpus(&["the cat"], &["le chat"]);

    let suggestions = aligner.align("the cat", "le chat", 1);
    // With 1-grams only, no prediction may span more than one token.
    for prediction in suggestions[0].predictions() {
        assert!(prediction.source().len() <= 1);
        assert!(prediction.target().len() <= 1);
    }
}
