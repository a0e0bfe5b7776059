//! End-to-end scenarios through the built-in lexer and the denter.
//!
//! Each case feeds script source through `dent::dent::dent` and asserts
//! the exact kind sequence of the augmented stream.

use dent::dent::dent;
use dent::dent::lexer::ScriptKind::{self, *};
use rstest::rstest;

fn dented_kinds(source: &str) -> Vec<ScriptKind> {
    dent(source)
        .expect("denting should succeed")
        .iter()
        .map(|t| t.kind)
        .collect()
}

#[rstest]
#[case::flat_lines(
    "a\nb\n",
    vec![Word, Newline, Word, Newline, EndOfStream]
)]
#[case::single_nested_block(
    "a\n  b\nc\n",
    vec![Word, Newline, Indent, Word, Newline, Dedent, Newline, Word, Newline, EndOfStream]
)]
#[case::no_trailing_newline(
    "a",
    vec![Word, Newline, EndOfStream]
)]
#[case::two_levels_then_flat(
    "a\n    b\n        c\nd\n",
    vec![
        Word, Newline, Indent, Word, Newline, Indent, Word, Newline,
        Dedent, Newline, Dedent, Newline, Word, Newline, EndOfStream
    ]
)]
#[case::tab_equals_four_spaces(
    "a\n\tb\n",
    vec![Word, Newline, Indent, Word, Newline, Dedent, Newline, EndOfStream]
)]
#[case::blank_lines_collapse(
    "a\n\n\n  b\n",
    vec![Word, Newline, Indent, Word, Newline, Dedent, Newline, EndOfStream]
)]
#[case::mismatched_dedent_recovers(
    "a\n    b\n        c\n  d\n",
    vec![
        Word, Newline, Indent, Word, Newline, Indent, Word, Newline,
        Dedent, Newline, Dedent, Newline, Indent, Word, Newline,
        Dedent, Newline, EndOfStream
    ]
)]
#[case::leading_blank_lines_discarded(
    "\n\na\n",
    vec![Word, Newline, EndOfStream]
)]
#[case::indented_first_line(
    "  a\n",
    vec![Indent, Word, Newline, Dedent, Newline, EndOfStream]
)]
#[case::crlf_line_endings(
    "a\r\n  b\r\n",
    vec![Word, Newline, Indent, Word, Newline, Dedent, Newline, EndOfStream]
)]
#[case::punctuation_passes_through(
    "task: 1\n  - a\n",
    vec![
        Word, Colon, Number, Newline, Indent, Dash, Word, Newline,
        Dedent, Newline, EndOfStream
    ]
)]
#[case::empty_source(
    "",
    vec![Newline, EndOfStream]
)]
fn denter_kind_sequences(#[case] source: &str, #[case] expected: Vec<ScriptKind>) {
    assert_eq!(dented_kinds(source), expected);
}

#[test]
fn every_dedent_is_followed_by_a_newline() {
    let tokens = dent("a\n  b\n    c\nd\n  e\nf\n").unwrap();
    for window in tokens.windows(2) {
        if window[0].kind == Dedent {
            assert_eq!(window[1].kind, Newline, "dedent not newline-terminated");
        }
    }
}

#[test]
fn real_tokens_keep_their_order_and_text() {
    let source = "alpha: 1\n  beta\n    gamma - 2\ndelta\n";
    let words_in: Vec<&str> = vec!["alpha", "beta", "gamma", "delta"];

    let tokens = dent(source).unwrap();
    let words_out: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == Word)
        .map(|t| t.text.as_str())
        .collect();

    assert_eq!(words_out, words_in);
}

#[test]
fn synthetic_tokens_reference_source_positions() {
    let tokens = dent("a\n  b\n").unwrap();

    // The indent is positioned on "b", the first token of the new block
    let indent = tokens.iter().find(|t| t.kind == Indent).unwrap();
    assert_eq!(indent.text, "indent");
    assert_eq!((indent.line, indent.column), (2, 2));

    // Dedents raised at end of input sit on the end-of-stream position
    let dedent = tokens.iter().find(|t| t.kind == Dedent).unwrap();
    assert_eq!(dedent.text, "dedent");
    assert_eq!(dedent.line, 3);
}

#[test]
fn deep_nesting_fully_unwinds() {
    let source = "a\n b\n  c\n   d\n    e\n";
    let tokens = dent(source).unwrap();

    let indents = tokens.iter().filter(|t| t.kind == Indent).count();
    let dedents = tokens.iter().filter(|t| t.kind == Dedent).count();
    assert_eq!(indents, 4);
    assert_eq!(dedents, 4);
    assert_eq!(tokens.last().unwrap().kind, EndOfStream);
}
