//! Suggest alignments for a sentence pair against a toy corpus.
//!
//! Usage: cargo run --example suggest -- "the dog" "le chien"

use anyhow::Result;
use libalign::Aligner;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} \"source sentence\" \"target sentence\"", args[0]);
        std::process::exit(1);
    }
    let source = &args[1];
    let target = &args[2];

    let mut aligner = Aligner::new();
    aligner.add_corpus(
        &["the cat", "a dog", "the cat sat"],
        &["le chat", "un chien", "le chat était assis"],
    );

    println!("Aligning \"{}\" with \"{}\"", source, target);
    println!();

    let suggestions = aligner.align(source, target, 5);
    if suggestions.is_empty() {
        println!("No suggestions.");
        return Ok(());
    }

    for (rank, suggestion) in suggestions.iter().enumerate() {
        println!(
            "#{} (confidence {:.4})",
            rank + 1,
            suggestion.compound_confidence()
        );
        for prediction in suggestion.predictions() {
            println!("  {}", prediction);
        }
        println!();
    }
    Ok(())
}
