//! Token types shared by raw scanners and the denting transducer.
//!
//! The denter never owns a grammar's token vocabulary. It works against the
//! generic [`Token`] record plus the [`TokenKind`] trait, which is the only
//! thing it needs to recognize the scanner's end-of-stream marker.

use std::fmt;
use std::ops::Range;

use serde::Serialize;

/// Diagnostic text carried by synthetic NEWLINE tokens.
pub const NEWLINE_TEXT: &str = "newline";
/// Diagnostic text carried by synthetic INDENT tokens.
pub const INDENT_TEXT: &str = "indent";
/// Diagnostic text carried by synthetic DEDENT tokens.
pub const DEDENT_TEXT: &str = "dedent";

/// Discriminant seam between the denter and a grammar's token vocabulary.
pub trait TokenKind: Copy + PartialEq + fmt::Debug {
    /// True for the scanner's stable end-of-stream kind.
    fn is_end_of_stream(&self) -> bool;
}

/// A classified unit of lexical input with its source position.
///
/// Synthetic tokens produced by the denter are ordinary `Token` values;
/// consumers can only tell them apart from real tokens by their kind (and
/// by their fixed diagnostic text, which is never a real lexeme).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token<K> {
    pub kind: K,
    pub text: String,
    /// 1-based source line.
    pub line: usize,
    /// 0-based source column (byte offset within the line).
    pub column: usize,
    /// Byte range in the source.
    pub span: Range<usize>,
}

impl<K> Token<K> {
    pub fn new(
        kind: K,
        text: impl Into<String>,
        line: usize,
        column: usize,
        span: Range<usize>,
    ) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
            column,
            span,
        }
    }

    /// Build a synthetic token positioned on `from`.
    ///
    /// The position fields reference the triggering real token so that
    /// downstream diagnostics point at the line that caused the structural
    /// change.
    pub fn synthetic(kind: K, text: &str, from: &Token<K>) -> Self {
        Token {
            kind,
            text: text.to_string(),
            line: from.line,
            column: from.column,
            span: from.span.clone(),
        }
    }
}

impl<K: fmt::Debug> fmt::Display for Token<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} at {}:{}",
            self.kind, self.text, self.line, self.column
        )
    }
}
