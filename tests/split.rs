//! Whole-string splitting: the public catalogue of behaviours.

mod common;

use common::assert_words;
use shellwords_rs::{ScanError, split};

// -----------------------------------------------------------
// Basic splitting.
// -----------------------------------------------------------

#[test]
fn split_empty_string() {
    assert_words("", &[]);
}

#[test]
fn split_whitespace_only() {
    assert_words(" \t\r\n ", &[]);
}

#[test]
fn split_simple_words() {
    assert_words("one two three", &["one", "two", "three"]);
}

#[test]
fn split_collapses_runs_of_whitespace() {
    assert_words("a   b\t\tc", &["a", "b", "c"]);
}

#[test]
fn split_double_quoted_section() {
    assert_words("one \"two three\" four", &["one", "two three", "four"]);
}

#[test]
fn split_single_quoted_section() {
    assert_words("one 'two three' four", &["one", "two three", "four"]);
}

#[test]
fn split_adjacent_segments_concatenate() {
    assert_words("a'b'c", &["abc"]);
    assert_words("a\"b\"c", &["abc"]);
    assert_words("'a'\"b\"", &["ab"]);
}

#[test]
fn split_empty_quotes_yield_an_empty_word() {
    assert_words("\"\"", &[""]);
    assert_words("a '' b", &["a", "", "b"]);
}

#[test]
fn split_escaped_space_does_not_break_the_word() {
    assert_words(r"a\ b", &["a b"]);
}

#[test]
fn split_backslash_is_literal_in_single_quotes() {
    assert_words(r"'a\b'", &[r"a\b"]);
}

#[test]
fn split_pipe_is_ordinary_text() {
    assert_words("a | b", &["a", "|", "b"]);
}

#[test]
fn split_comment_is_consumed() {
    assert_words("# a comment\nword", &["word"]);
}

#[test]
fn split_mid_word_hash_is_kept() {
    assert_words("log#3 next", &["log#3", "next"]);
}

// -----------------------------------------------------------
// Round-trip stability.
// -----------------------------------------------------------

#[test]
fn split_is_stable_under_rejoin() {
    let words = split("alpha beta_1 c,d e.f").expect("split");
    common::assert_rejoin_stable(&words);
}

// -----------------------------------------------------------
// Errors carry partial progress.
// -----------------------------------------------------------

#[test]
fn split_error_unterminated_quote_keeps_prior_words() {
    let err = split("one \"unterminated").unwrap_err();
    assert_eq!(err.words, ["one"]);
    assert!(matches!(err.source, ScanError::UnterminatedQuote));
}

#[test]
fn split_error_unterminated_quote_alone_keeps_nothing() {
    let err = split("\"unterminated").unwrap_err();
    assert!(err.words.is_empty());
}

#[test]
fn split_error_trailing_escape() {
    let err = split("trailing\\").unwrap_err();
    assert!(err.words.is_empty());
    assert!(matches!(err.source, ScanError::TrailingEscape));
}

#[test]
fn split_error_unrecognized_character_keeps_prior_words() {
    let err = split("a b $").unwrap_err();
    assert_eq!(err.words, ["a", "b"]);
    assert!(matches!(
        err.source,
        ScanError::UnrecognizedCharacter('$')
    ));
}

#[test]
fn split_error_display_matches_the_scan_failure() {
    let err = split("\"open").unwrap_err();
    assert_eq!(err.to_string(), "end of input inside quotes");
}
