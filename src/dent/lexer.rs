//! Built-in raw lexer for an indentation-structured script notation
//!
//! The tokenization itself is handled entirely by logos. The one rule that
//! matters to the denter is the newline rule: it matches the line break
//! together with the next line's leading whitespace (`\r?\n[ \t]*`), so a
//! newline token's text carries exactly the indentation the denter
//! measures. Everything else is an ordinary structure-free vocabulary of
//! words, numbers and punctuation.
//!
//! This lexer exists to exercise the denter from the CLI and the
//! integration tests; the denter itself accepts any [`TokenSource`]
//! honoring the same position contract.
//!
//! [`TokenSource`]: crate::dent::source::TokenSource

use logos::Logos;
use serde::Serialize;

use crate::dent::tokens::{Token, TokenKind};

/// Lexical categories of the script notation.
///
/// `Indent` and `Dedent` never come out of the raw lexer; they are the
/// kinds the denter stamps on its synthetic block markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScriptKind {
    Newline,
    Word,
    Number,
    Colon,
    Dash,
    Indent,
    Dedent,
    EndOfStream,
}

impl TokenKind for ScriptKind {
    fn is_end_of_stream(&self) -> bool {
        matches!(self, ScriptKind::EndOfStream)
    }
}

/// Raw matcher; the public vocabulary above adds the synthetic kinds.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t]+")]
enum RawScript {
    #[regex(r"\r?\n[ \t]*")]
    Newline,
    #[regex(r"[0-9]+")]
    Number,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,
    #[token(":")]
    Colon,
    #[token("-")]
    Dash,
}

impl RawScript {
    fn kind(self) -> ScriptKind {
        match self {
            RawScript::Newline => ScriptKind::Newline,
            RawScript::Number => ScriptKind::Number,
            RawScript::Word => ScriptKind::Word,
            RawScript::Colon => ScriptKind::Colon,
            RawScript::Dash => ScriptKind::Dash,
        }
    }
}

/// Tokenize script source into positioned raw tokens.
///
/// The result always ends with a single end-of-stream token positioned at
/// the end of the input. Lines are 1-based, columns 0-based byte offsets
/// within the line. Unmatched characters are dropped.
pub fn tokenize(source: &str) -> Vec<Token<ScriptKind>> {
    let mut lexer = RawScript::lexer(source);
    let mut tokens = Vec::new();
    let mut line = 1usize;
    let mut line_start = 0usize;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        if let Ok(raw) = result {
            let text = lexer.slice();
            tokens.push(Token::new(
                raw.kind(),
                text,
                line,
                span.start - line_start,
                span.clone(),
            ));
            if raw == RawScript::Newline {
                if let Some(break_at) = text.find('\n') {
                    line += 1;
                    line_start = span.start + break_at + 1;
                }
            }
        }
    }

    let end = source.len();
    tokens.push(Token::new(
        ScriptKind::EndOfStream,
        "",
        line,
        end - line_start,
        end..end,
    ));
    tokens
}
