//! Word-level filtering over the tokenizer.

use std::io::Read;
use std::sync::Arc;

use crate::classifier::Classifier;
use crate::token::TokenKind;
use crate::tokenizer::{ScanError, Tokenizer};

/// Produces words from a character stream, discarding comments.
pub struct Lexer<R> {
    tokenizer: Tokenizer<R>,
}

impl<R: Read> Lexer<R> {
    /// Lexer over `input` with the default classifier.
    #[must_use]
    pub fn new(input: R) -> Self {
        Self {
            tokenizer: Tokenizer::new(input),
        }
    }

    /// Lexer over `input` with a shared classifier.
    #[must_use]
    pub const fn with_classifier(input: R, classifier: Arc<Classifier>) -> Self {
        Self {
            tokenizer: Tokenizer::with_classifier(input, classifier),
        }
    }

    /// Returns the next word, skipping comment tokens. `Ok(None)`
    /// signals end of stream.
    ///
    /// # Errors
    ///
    /// Propagates [`ScanError`] from the tokenizer unchanged; a token
    /// of any kind other than word or comment surfaces as
    /// [`ScanError::UnexpectedToken`].
    pub fn next_word(&mut self) -> Result<Option<String>, ScanError> {
        loop {
            let Some(token) = self.tokenizer.next_token()? else {
                return Ok(None);
            };
            match token.kind {
                TokenKind::Word => return Ok(Some(token.text)),
                TokenKind::Comment => {}
                kind => return Err(ScanError::UnexpectedToken(kind)),
            }
        }
    }
}
