#![allow(dead_code)]

use shellwords_rs::split;

/// Helper: split `input` and assert the exact word sequence.
pub fn assert_words(input: &str, expected: &[&str]) {
    let words = split(input).unwrap_or_else(|e| {
        panic!("split failed on {input:?}: {e}");
    });
    assert_eq!(words, expected, "wrong words for input {input:?}");
}

/// Helper: join words with single spaces, re-split, and assert the
/// sequence is unchanged.
pub fn assert_rejoin_stable(words: &[String]) {
    let joined = words.join(" ");
    let reparsed = split(&joined).unwrap_or_else(|e| {
        panic!("split failed on rejoined input {joined:?}: {e}");
    });
    assert_eq!(
        reparsed, words,
        "round-trip mismatch for rejoined input {joined:?}"
    );
}
