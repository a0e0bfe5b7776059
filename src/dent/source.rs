//! Upstream pull seam: where raw tokens come from.

use std::collections::VecDeque;

use crate::dent::tokens::Token;

/// A pull-based supplier of raw tokens.
///
/// Contract: tokens are returned in strict source order with accurate
/// line/column/span information, and once the end-of-stream token has been
/// reached the source keeps returning it on every subsequent pull.
pub trait TokenSource<K> {
    /// Pull the next raw token from the underlying scanner.
    fn pull(&mut self) -> Token<K>;
}

/// Any zero-argument closure producing tokens is a source.
impl<K, F> TokenSource<K> for F
where
    F: FnMut() -> Token<K>,
{
    fn pull(&mut self) -> Token<K> {
        self()
    }
}

/// A source backed by an in-memory token buffer.
///
/// Pulls drain the buffer front to back; once it is exhausted the terminal
/// token is repeated forever, which satisfies the end-of-stream contract
/// when the terminal is the scanner's end-of-stream token.
#[derive(Debug)]
pub struct BufferSource<K> {
    pending: VecDeque<Token<K>>,
    terminal: Token<K>,
}

impl<K: Clone> BufferSource<K> {
    pub fn new(tokens: Vec<Token<K>>, terminal: Token<K>) -> Self {
        BufferSource {
            pending: tokens.into(),
            terminal,
        }
    }
}

impl<K: Clone> TokenSource<K> for BufferSource<K> {
    fn pull(&mut self) -> Token<K> {
        self.pending
            .pop_front()
            .unwrap_or_else(|| self.terminal.clone())
    }
}
