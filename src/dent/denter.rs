//! The denting transducer
//!
//!     A stateful filter between a raw token source and a token consumer.
//!     The denter owns two pieces of state: a stack of open indentation
//!     widths (bottom sentinel 0, strictly increasing while valid) and a
//!     FIFO queue of tokens waiting to be handed to the consumer.
//!
//!     Raw newline tokens are never forwarded. Each run of them is
//!     collapsed into a single synthetic NEWLINE, and the whitespace
//!     carried by the last newline in the run decides whether the next
//!     line opens a block (INDENT), closes one or more blocks (DEDENT,
//!     each immediately followed by a NEWLINE) or stays level. End of
//!     input closes every open block so the consumer always sees a
//!     balanced stream.
//!
//! Recovery
//!
//!     A dedent to a width that matches no open level does not fail.
//!     The denter closes levels down past the target, then reopens a
//!     synthetic level at the target width with one INDENT and carries
//!     on. The unusual token sequence is left for the parser to report
//!     as a syntax error; the denter itself never desynchronizes.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use crate::dent::source::TokenSource;
use crate::dent::tokens::{Token, TokenKind, DEDENT_TEXT, INDENT_TEXT, NEWLINE_TEXT};

/// Number of columns a tab character occupies when measuring indentation.
const TAB_WIDTH: usize = 4;

/// Failures the denter can surface.
///
/// Structural oddities in the input (mismatched dedents) are handled by
/// recovery, not by erroring; these variants all indicate a contract
/// violation, either by the caller at construction time or by the
/// upstream scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DentError {
    /// The newline/indent/dedent kinds passed at construction overlap.
    AliasedKinds(String),
    /// Non-whitespace found where pure indentation was expected after tab
    /// expansion. The upstream scanner fed a malformed newline token.
    MalformedIndentation {
        line: usize,
        column: usize,
        found: char,
    },
    /// The level stack would have lost its bottom sentinel.
    LevelStackExhausted { line: usize, column: usize },
}

impl fmt::Display for DentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DentError::AliasedKinds(msg) => write!(f, "aliased token kinds: {msg}"),
            DentError::MalformedIndentation {
                line,
                column,
                found,
            } => write!(
                f,
                "malformed indentation at {line}:{column}: found {found:?} where whitespace was expected"
            ),
            DentError::LevelStackExhausted { line, column } => write!(
                f,
                "indentation level stack exhausted at {line}:{column}"
            ),
        }
    }
}

impl std::error::Error for DentError {}

/// The indentation transducer.
///
/// Construct one around a [`TokenSource`] and the three token kinds the
/// downstream grammar understands, then pull tokens with
/// [`next_token`](Denter::next_token). The stream is lazy, stateful and
/// non-restartable: after end of input it keeps yielding the scanner's
/// end-of-stream token.
#[derive(Debug)]
pub struct Denter<K, S> {
    source: S,
    newline_kind: K,
    indent_kind: K,
    dedent_kind: K,
    /// Open indentation widths; `levels[0]` is always 0 once primed.
    levels: Vec<usize>,
    /// Tokens queued for the consumer, real and synthetic.
    pending: VecDeque<Token<K>>,
    primed: bool,
    end_of_stream_done: bool,
}

impl<K, S> Denter<K, S>
where
    K: TokenKind,
    S: TokenSource<K>,
{
    /// Create a denter over `source`.
    ///
    /// `newline_kind` identifies the scanner's newline tokens;
    /// `indent_kind` and `dedent_kind` are the kinds stamped on the
    /// synthetic block markers. The three must be pairwise distinct,
    /// otherwise the roles would silently alias.
    pub fn new(
        source: S,
        newline_kind: K,
        indent_kind: K,
        dedent_kind: K,
    ) -> Result<Self, DentError> {
        if newline_kind == indent_kind
            || newline_kind == dedent_kind
            || indent_kind == dedent_kind
        {
            return Err(DentError::AliasedKinds(format!(
                "newline {newline_kind:?}, indent {indent_kind:?} and dedent {dedent_kind:?} must be pairwise distinct"
            )));
        }
        Ok(Denter {
            source,
            newline_kind,
            indent_kind,
            dedent_kind,
            levels: Vec::new(),
            pending: VecDeque::new(),
            primed: false,
            end_of_stream_done: false,
        })
    }

    /// Return the next token of the augmented stream.
    ///
    /// Exactly one token per call; real tokens are never skipped,
    /// duplicated or reordered. Not reentrant: the denter drives its
    /// source synchronously from inside this call.
    pub fn next_token(&mut self) -> Result<Token<K>, DentError> {
        if !self.primed {
            self.prime();
        }
        loop {
            match self.pending.pop_front() {
                Some(token) if token.kind.is_end_of_stream() && !self.end_of_stream_done => {
                    self.finish(token)?;
                }
                Some(token) => return Ok(token),
                None => self.refill()?,
            }
        }
    }

    /// Current depth of the indentation stack (1 when only the bottom
    /// sentinel is open).
    pub fn open_levels(&self) -> usize {
        self.levels.len()
    }

    /// Collect the stream up to and including the first end-of-stream
    /// token.
    pub fn drain(mut self) -> Result<Vec<Token<K>>, DentError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind.is_end_of_stream();
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// First-call setup: open the sentinel level, skip leading blank
    /// lines and queue the first real token, indenting first if that
    /// token does not start at column 0.
    fn prime(&mut self) {
        self.primed = true;
        self.levels.push(0);
        let mut first = self.source.pull();
        while first.kind == self.newline_kind {
            first = self.source.pull();
        }
        if first.column > 0 {
            self.pending
                .push_back(Token::synthetic(self.indent_kind, INDENT_TEXT, &first));
            self.levels.push(first.column);
        }
        self.pending.push_back(first);
    }

    /// Pull one raw token and queue its consequences.
    fn refill(&mut self) -> Result<(), DentError> {
        let token = self.source.pull();
        if token.kind == self.newline_kind {
            self.process_newline(token)
        } else {
            self.pending.push_back(token);
            Ok(())
        }
    }

    /// Handle a raw newline: collapse the run of blank lines behind it,
    /// measure the whitespace before the next real token and queue the
    /// structural markers for the level change.
    fn process_newline(&mut self, newline: Token<K>) -> Result<(), DentError> {
        let mut last = newline.clone();
        let mut next = self.source.pull();
        while next.kind == self.newline_kind {
            last = next;
            next = self.source.pull();
        }
        if next.kind.is_end_of_stream() {
            // End-of-stream processing owns the closing newline; emitting
            // one here as well would double-terminate the last line.
            self.pending.push_back(next);
            return Ok(());
        }

        let width = indentation_width(&last)?;
        self.pending
            .push_back(Token::synthetic(self.newline_kind, NEWLINE_TEXT, &newline));

        match width.cmp(&self.current_level()) {
            Ordering::Equal => {}
            Ordering::Greater => {
                self.pending
                    .push_back(Token::synthetic(self.indent_kind, INDENT_TEXT, &next));
                self.levels.push(width);
            }
            Ordering::Less => self.unwind(&next, width)?,
        }

        self.pending.push_back(next);
        Ok(())
    }

    /// Close open levels down to `target`, one DEDENT+NEWLINE pair per
    /// level. A target matching no open level reopens a synthetic level
    /// at the target width with one INDENT and stops unwinding.
    fn unwind(&mut self, from: &Token<K>, target: usize) -> Result<(), DentError> {
        while self.current_level() != target {
            self.pending
                .push_back(Token::synthetic(self.dedent_kind, DEDENT_TEXT, from));
            self.pending
                .push_back(Token::synthetic(self.newline_kind, NEWLINE_TEXT, from));
            self.levels.pop();
            if self.levels.is_empty() {
                // unreachable while the caller only targets widths >= 0
                return Err(DentError::LevelStackExhausted {
                    line: from.line,
                    column: from.column,
                });
            }
            if target > self.current_level() {
                self.pending
                    .push_back(Token::synthetic(self.indent_kind, INDENT_TEXT, from));
                self.levels.push(target);
                break;
            }
        }
        Ok(())
    }

    /// End-of-stream processing, run at most once: terminate the last
    /// line, close every open level and queue the end token itself.
    fn finish(&mut self, end: Token<K>) -> Result<(), DentError> {
        self.pending
            .push_back(Token::synthetic(self.newline_kind, NEWLINE_TEXT, &end));
        self.unwind(&end, 0)?;
        self.pending.push_back(end);
        self.end_of_stream_done = true;
        Ok(())
    }

    fn current_level(&self) -> usize {
        self.levels.last().copied().unwrap_or(0)
    }
}

/// Measure the indentation carried by a raw newline token.
///
/// The token text is the line break plus the next line's leading
/// whitespace. Leading CR/LF characters are stripped, tabs expand to
/// [`TAB_WIDTH`] columns, and anything else is a scanner bug surfaced as
/// [`DentError::MalformedIndentation`].
fn indentation_width<K>(newline: &Token<K>) -> Result<usize, DentError> {
    let indentation = newline.text.trim_start_matches(|c| c == '\r' || c == '\n');
    let mut width = 0;
    for ch in indentation.chars() {
        match ch {
            ' ' => width += 1,
            '\t' => width += TAB_WIDTH,
            other => {
                return Err(DentError::MalformedIndentation {
                    line: newline.line,
                    column: newline.column,
                    found: other,
                })
            }
        }
    }
    Ok(width)
}
