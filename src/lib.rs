//! # dent
//!
//! An indentation token-stream post-processor (a "denter").
//!
//! The denter sits between a raw lexer and a parser, synthesizing
//! NEWLINE/INDENT/DEDENT tokens from whitespace so that a context-free
//! grammar can express Python-like block structure. All real tokens pass
//! through unchanged and in order; only line boundaries and block
//! boundaries are made explicit.

pub mod dent;
