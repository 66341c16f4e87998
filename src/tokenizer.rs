//! The scanning state machine.
//!
//! A single-pass scanner that reads one classified character at a
//! time and produces one token per call, using one character of
//! pushback to give back the whitespace that terminates a word.

use std::io::{self, Read};
use std::sync::Arc;

use crate::classifier::{CharClass, Classifier};
use crate::reader::CharReader;
use crate::token::{Token, TokenKind};

/// Error produced while scanning the character stream.
///
/// End of stream is not an error; it is reported as a successful
/// `None` by [`Tokenizer::next_token`] and [`crate::Lexer::next_word`].
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The escape character was the last character before end of
    /// input, inside or outside quotes.
    #[error("end of input after escape character")]
    TrailingEscape,
    /// End of input inside a quoted section.
    #[error("end of input inside quotes")]
    UnterminatedQuote,
    /// A character outside every configured class was encountered.
    #[error("unrecognized character {0:?}")]
    UnrecognizedCharacter(char),
    /// The tokenizer produced a kind the lexer cannot filter.
    #[error("unexpected token kind {0:?}")]
    UnexpectedToken(TokenKind),
    /// The byte stream is not valid UTF-8.
    #[error("input is not valid utf-8")]
    InvalidUtf8,
    /// Failure reported by the underlying source, propagated
    /// verbatim and without retry.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Scanner states. `Start` is the initial state and the state the
/// machine returns to after a completed comment line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    InWord,
    Escaping,
    EscapingQuoted,
    QuotingEscaping,
    Quoting,
    Comment,
}

const TOKEN_TEXT_CAPACITY: usize = 100;

/// Streaming tokenizer: turns a character stream into typed tokens.
///
/// Owns its input cursor and in-progress token buffer; the classifier
/// is shared read-only and may back any number of tokenizers at once.
pub struct Tokenizer<R> {
    input: CharReader<R>,
    classifier: Arc<Classifier>,
}

impl<R: Read> Tokenizer<R> {
    /// Tokenizer over `input` with the default classifier.
    #[must_use]
    pub fn new(input: R) -> Self {
        Self::with_classifier(input, Arc::new(Classifier::new()))
    }

    /// Tokenizer over `input` with a shared classifier.
    #[must_use]
    pub const fn with_classifier(input: R, classifier: Arc<Classifier>) -> Self {
        Self {
            input: CharReader::new(input),
            classifier,
        }
    }

    /// Produces the next token. `Ok(None)` signals end of stream.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] on an unterminated escape or quote, an
    /// unrecognized character, invalid UTF-8, or a source fault. A
    /// scan error aborts the current token; no partial token is
    /// returned.
    pub fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        self.scan()
    }

    #[allow(clippy::too_many_lines, clippy::cognitive_complexity)]
    fn scan(&mut self) -> Result<Option<Token>, ScanError> {
        let mut state = State::Start;
        let mut kind = TokenKind::Unknown;
        let mut text = String::with_capacity(TOKEN_TEXT_CAPACITY);

        loop {
            let next = self
                .input
                .read_char()?
                .map(|ch| (ch, self.classifier.classify(ch)));

            match state {
                // No token material consumed yet.
                State::Start => match next {
                    None => return Ok(None),
                    Some((_, CharClass::Whitespace)) => {}
                    Some((ch, CharClass::Ordinary)) => {
                        kind = TokenKind::Word;
                        text.push(ch);
                        state = State::InWord;
                    }
                    Some((_, CharClass::EscapingQuote)) => {
                        kind = TokenKind::Word;
                        state = State::QuotingEscaping;
                    }
                    Some((_, CharClass::NonEscapingQuote)) => {
                        kind = TokenKind::Word;
                        state = State::Quoting;
                    }
                    Some((_, CharClass::Escape)) => {
                        kind = TokenKind::Word;
                        state = State::Escaping;
                    }
                    Some((_, CharClass::CommentMarker)) => {
                        kind = TokenKind::Comment;
                        state = State::Comment;
                    }
                    Some((ch, CharClass::Unrecognized | CharClass::EndOfInput)) => {
                        return Err(ScanError::UnrecognizedCharacter(ch));
                    }
                },
                // In an unquoted word.
                State::InWord => match next {
                    None => return Ok(Some(Token { kind, text })),
                    // A `#` inside an already-started word is literal
                    // text; comments only open at a word boundary.
                    Some((ch, CharClass::Ordinary | CharClass::CommentMarker)) => {
                        text.push(ch);
                    }
                    Some((ch, CharClass::Whitespace)) => {
                        self.input.unread_char(ch);
                        return Ok(Some(Token { kind, text }));
                    }
                    Some((_, CharClass::EscapingQuote)) => state = State::QuotingEscaping,
                    Some((_, CharClass::NonEscapingQuote)) => state = State::Quoting,
                    Some((_, CharClass::Escape)) => state = State::Escaping,
                    Some((ch, CharClass::Unrecognized | CharClass::EndOfInput)) => {
                        return Err(ScanError::UnrecognizedCharacter(ch));
                    }
                },
                // Just consumed a backslash outside quotes; the next
                // character loses any special meaning.
                State::Escaping => match next {
                    None => return Err(ScanError::TrailingEscape),
                    Some((ch, CharClass::Unrecognized | CharClass::EndOfInput)) => {
                        return Err(ScanError::UnrecognizedCharacter(ch));
                    }
                    Some((ch, _)) => {
                        text.push(ch);
                        state = State::InWord;
                    }
                },
                // Just consumed a backslash inside double quotes.
                State::EscapingQuoted => match next {
                    None => return Err(ScanError::TrailingEscape),
                    Some((ch, CharClass::Unrecognized | CharClass::EndOfInput)) => {
                        return Err(ScanError::UnrecognizedCharacter(ch));
                    }
                    Some((ch, _)) => {
                        text.push(ch);
                        state = State::QuotingEscaping;
                    }
                },
                // Inside double quotes, escape processing enabled.
                State::QuotingEscaping => match next {
                    None => return Err(ScanError::UnterminatedQuote),
                    Some((
                        ch,
                        CharClass::Ordinary
                        | CharClass::Whitespace
                        | CharClass::NonEscapingQuote
                        | CharClass::CommentMarker,
                    )) => text.push(ch),
                    Some((_, CharClass::EscapingQuote)) => state = State::InWord,
                    Some((_, CharClass::Escape)) => state = State::EscapingQuoted,
                    Some((ch, CharClass::Unrecognized | CharClass::EndOfInput)) => {
                        return Err(ScanError::UnrecognizedCharacter(ch));
                    }
                },
                // Inside single quotes; even backslash is literal.
                State::Quoting => match next {
                    None => return Err(ScanError::UnterminatedQuote),
                    Some((
                        ch,
                        CharClass::Ordinary
                        | CharClass::Whitespace
                        | CharClass::EscapingQuote
                        | CharClass::Escape
                        | CharClass::CommentMarker,
                    )) => text.push(ch),
                    Some((_, CharClass::NonEscapingQuote)) => state = State::InWord,
                    Some((ch, CharClass::Unrecognized | CharClass::EndOfInput)) => {
                        return Err(ScanError::UnrecognizedCharacter(ch));
                    }
                },
                // Inside a comment. Only a newline ends it; other
                // whitespace is literal comment text. The newline is
                // consumed but not appended.
                State::Comment => match next {
                    None | Some(('\n', CharClass::Whitespace)) => {
                        return Ok(Some(Token { kind, text }));
                    }
                    Some((
                        ch,
                        CharClass::Ordinary
                        | CharClass::Whitespace
                        | CharClass::EscapingQuote
                        | CharClass::NonEscapingQuote
                        | CharClass::Escape
                        | CharClass::CommentMarker,
                    )) => text.push(ch),
                    Some((ch, CharClass::Unrecognized | CharClass::EndOfInput)) => {
                        return Err(ScanError::UnrecognizedCharacter(ch));
                    }
                },
            }
        }
    }
}
