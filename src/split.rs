//! Whole-string splitting.

use crate::lexer::Lexer;
use crate::tokenizer::ScanError;

/// Error from [`split`]: the scan failure plus every word that was
/// completed before it.
#[derive(Debug, thiserror::Error)]
#[error("{source}")]
pub struct SplitError {
    /// Words fully produced before the scan failed.
    pub words: Vec<String>,
    /// The underlying scan failure.
    pub source: ScanError,
}

/// Splits `input` into words using shell-style quoting, escaping,
/// and comment rules.
///
/// # Errors
///
/// A malformed input (unterminated quote or escape, unrecognized
/// character) aborts the scan; the returned [`SplitError`] carries
/// the words completed up to that point, so partial progress is
/// never discarded.
pub fn split(input: &str) -> Result<Vec<String>, SplitError> {
    let mut lexer = Lexer::new(input.as_bytes());
    let mut words = Vec::new();
    loop {
        match lexer.next_word() {
            Ok(Some(word)) => words.push(word),
            Ok(None) => return Ok(words),
            Err(source) => return Err(SplitError { words, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_words_survive_a_failed_scan() {
        let err = split("one two \"unterminated").unwrap_err();
        assert_eq!(err.words, ["one", "two"]);
        assert!(matches!(err.source, ScanError::UnterminatedQuote));
    }

    #[test]
    fn error_display_names_the_failure() {
        let err = split("trailing\\").unwrap_err();
        assert_eq!(err.to_string(), "end of input after escape character");
    }
}
