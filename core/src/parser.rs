//! Candidate enumeration: n-grams of a sentence and the alignment
//! permutation space of a sentence pair.

use crate::alignment::Alignment;
use crate::ngram::Ngram;
use crate::token::Token;

/// Enumerate every contiguous token run of length 1..=`max_length`, in
/// source order.
pub fn ngrams(tokens: &[Token], max_length: usize) -> Vec<Ngram> {
    let mut out = Vec::new();
    if max_length == 0 {
        return out;
    }
    for start in 0..tokens.len() {
        let longest = max_length.min(tokens.len() - start);
        for len in 1..=longest {
            out.push(Ngram::new(tokens[start..start + len].to_vec()));
        }
    }
    out
}

/// Enumerate the candidate alignment space of a sentence pair: the cross
/// product of source and target n-grams, plus a source -> empty null
/// alignment per source n-gram when `include_null` is set.
///
/// Null alignments let a source span be left untranslated, so a full cover
/// of the source sentence always exists.
pub fn alignment_permutations(
    source: &[Token],
    target: &[Token],
    max_length: usize,
    include_null: bool,
) -> Vec<Alignment> {
    let source_ngrams = ngrams(source, max_length);
    let target_ngrams = ngrams(target, max_length);

    let per_source = target_ngrams.len() + usize::from(include_null);
    let mut out = Vec::with_capacity(source_ngrams.len() * per_source);
    for s in &source_ngrams {
        for t in &target_ngrams {
            out.push(Alignment::new(s.clone(), t.clone()));
        }
        if include_null {
            out.push(Alignment::new(s.clone(), Ngram::empty()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize;

    #[test]
    fn ngrams_enumerates_contiguous_runs_in_order() {
        let tokens = tokenize("a b c");
        let grams = ngrams(&tokens, 2);
        let texts: Vec<String> = grams.iter().map(|n| n.to_string()).collect();
        assert_eq!(texts, vec!["a", "a:b", "b", "b:c", "c"]);
    }

    #[test]
    fn ngrams_respects_max_length() {
        let tokens = tokenize("a b c d");
        assert!(ngrams(&tokens, 1).iter().all(|n| n.len() == 1));
        assert!(ngrams(&tokens, 3).iter().all(|n| n.len() <= 3));
        assert!(ngrams(&tokens, 0).is_empty());
    }

    #[test]
    fn permutations_cover_the_cross_product() {
        let source = tokenize("the dog");
        let target = tokenize("le chien");
        // 3 source n-grams x 3 target n-grams.
        let without_null = alignment_permutations(&source, &target, 2, false);
        assert_eq!(without_null.len(), 9);

        // One extra null alignment per source n-gram.
        let with_null = alignment_permutations(&source, &target, 2, true);
        assert_eq!(with_null.len(), 12);
        assert_eq!(with_null.iter().filter(|a| a.target().is_empty()).count(), 3);
    }

    #[test]
    fn permutations_keep_token_positions() {
        let source = tokenize("the dog");
        let target = tokenize("le chien");
        let candidates = alignment_permutations(&source, &target, 1, false);
        let dog_chien = candidates
            .iter()
            .find(|a| a.source().to_string() == "dog" && a.target().to_string() == "chien")
            .expect("cross product includes dog -> chien");
        assert_eq!(dog_chien.source().token_position(), 1);
        assert_eq!(dog_chien.target().token_position(), 1);
    }
}
