//! Denting pipeline for indentation-sensitive token streams
//!
//! This module turns a raw token stream, which knows about positions but not
//! about block structure, into an augmented stream carrying explicit
//! NEWLINE, INDENT and DEDENT markers. The pipeline consists of:
//! 1. A pull-based token source (any [`TokenSource`]; the built-in
//!    [`lexer`] is one such source)
//! 2. The [`Denter`] transducer, which owns the indentation level stack and
//!    the pending token queue
//!
//! Indentation Handling
//!
//! The raw lexer stays entirely structure-free: its newline rule swallows
//! the line break together with the following line's leading whitespace, so
//! a newline token's text is the only thing the denter has to inspect to
//! know the next line's indentation width. The denter compares that width
//! against its stack of open levels and emits indent/dedent events, which
//! map nicely to brace tokens for more standard syntaxes.
//!
//! The rationale for this split is:
//! - The lexer needs no custom state; any scanner that reports accurate
//!   positions and a stable end-of-stream token can feed the denter.
//! - All block-structure logic lives in one stateful filter, separate from
//!   tokenization, which keeps both sides small and testable.
//! - Downstream grammars consume the augmented stream one token at a time
//!   through the same pull contract the scanner exposes upstream.

pub mod denter;
pub mod lexer;
pub mod source;
pub mod tokens;

pub use denter::{DentError, Denter};
pub use source::{BufferSource, TokenSource};
pub use tokens::{Token, TokenKind};

use crate::dent::lexer::ScriptKind;

/// Lex script source with the built-in lexer and run the denter over it.
///
/// Returns the augmented stream up to and including the end-of-stream
/// token. This is the one-call pipeline used by the CLI and the
/// integration tests; library consumers with their own scanner construct a
/// [`Denter`] directly.
pub fn dent(source: &str) -> Result<Vec<Token<ScriptKind>>, DentError> {
    let mut tokens = lexer::tokenize(source);
    let terminal = match tokens.pop() {
        Some(token) => token,
        // tokenize always ends with an end-of-stream token
        None => return Ok(Vec::new()),
    };
    let feed = BufferSource::new(tokens, terminal);
    let denter = Denter::new(
        feed,
        ScriptKind::Newline,
        ScriptKind::Indent,
        ScriptKind::Dedent,
    )?;
    denter.drain()
}
