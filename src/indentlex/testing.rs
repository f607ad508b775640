//! Fixture base tokenizers for exercising the adapter.
//!
//!     The adapter never scans text, so its tests need a real (if small) base
//!     tokenizer. Two are bundled here, both logos-backed:
//!
//!         ArrowTokenizer   `-->` / `==>` arrows as visible indentation
//!                          sources, `\w+` words, single `\n` newlines. Two
//!                          distinct arrow kinds make prefix-consistency
//!                          failures easy to provoke on purpose.
//!
//!         PlainTokenizer   ordinary tab/space/newline whitespace, for
//!                          exercising the default control token recognizer.
//!
//!     Both tokenize their chunk eagerly on `reset` and snapshot as a plain
//!     cursor, which makes save/restore exact and cheap. Downstream crates
//!     can use them in their own tests as well.

use logos::Logos;
use std::ops::Range;

use crate::indentlex::base::BaseTokenizer;
use crate::indentlex::options::ControlTokenRecognizer;
use crate::indentlex::token::Token;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum ArrowSyntax {
    #[token("-->")]
    IndentSource,
    #[token("==>")]
    IndentSourceAlt,
    #[regex(r"\w+")]
    Word,
    #[token("\n")]
    Newline,
}

impl ArrowSyntax {
    fn kind(self) -> &'static str {
        match self {
            ArrowSyntax::IndentSource => "indent_source",
            ArrowSyntax::IndentSourceAlt => "indent_source_alt",
            ArrowSyntax::Word => "word",
            ArrowSyntax::Newline => "newline",
        }
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum PlainSyntax {
    #[regex(r"\w+")]
    Word,
    #[regex(r"[ \t]+")]
    Space,
    #[regex(r"[\r\n]+")]
    Eol,
}

impl PlainSyntax {
    fn kind(self) -> &'static str {
        match self {
            PlainSyntax::Word => "word",
            PlainSyntax::Space => "space",
            PlainSyntax::Eol => "eol",
        }
    }
}

/// Attach line/col/offset metadata to a scanned (kind, span) sequence.
fn assemble(source: &str, raw: Vec<(&'static str, Range<usize>)>) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(raw.len());
    let mut cursor = 0;
    let mut line = 1;
    let mut col = 1;

    for (kind, span) in raw {
        for ch in source[cursor..span.start].chars() {
            if ch == '\n' {
                line += 1;
                col = 1;
            } else {
                col += 1;
            }
        }
        cursor = span.start;

        tokens.push(Token::new(kind, &source[span.clone()], line, col, span.start));
    }

    tokens
}

fn scan_arrows(source: &str) -> Vec<Token> {
    let mut lexer = ArrowSyntax::lexer(source);
    let mut raw = Vec::new();
    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            raw.push((token.kind(), lexer.span()));
        }
    }
    assemble(source, raw)
}

fn scan_plain(source: &str) -> Vec<Token> {
    let mut lexer = PlainSyntax::lexer(source);
    let mut raw = Vec::new();
    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            raw.push((token.kind(), lexer.span()));
        }
    }
    assemble(source, raw)
}

/// Arrow-language base tokenizer: `-->`/`==>` indentation sources, words,
/// and single-`\n` newlines.
#[derive(Debug, Default)]
pub struct ArrowTokenizer {
    tokens: Vec<Token>,
    cursor: usize,
}

impl ArrowTokenizer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BaseTokenizer for ArrowTokenizer {
    type State = usize;

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn save(&self) -> usize {
        self.cursor
    }

    fn reset(&mut self, chunk: &str, state: Option<&usize>) {
        self.tokens = scan_arrows(chunk);
        self.cursor = state.copied().unwrap_or(0);
    }

    fn has(&self, name: &str) -> bool {
        matches!(
            name,
            "indent_source" | "indent_source_alt" | "word" | "newline"
        )
    }

    fn format_error(&self, token: &Token, message: &str) -> String {
        format!("{message} at line {} col {}", token.line, token.col)
    }
}

/// Whitespace-language base tokenizer: words, tab/space runs, newline runs.
#[derive(Debug, Default)]
pub struct PlainTokenizer {
    tokens: Vec<Token>,
    cursor: usize,
}

impl PlainTokenizer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BaseTokenizer for PlainTokenizer {
    type State = usize;

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn save(&self) -> usize {
        self.cursor
    }

    fn reset(&mut self, chunk: &str, state: Option<&usize>) {
        self.tokens = scan_plain(chunk);
        self.cursor = state.copied().unwrap_or(0);
    }

    fn has(&self, name: &str) -> bool {
        matches!(name, "word" | "space" | "eol")
    }

    fn format_error(&self, token: &Token, message: &str) -> String {
        format!("{message} at line {} col {}", token.line, token.col)
    }
}

/// The classifier the arrow tests use: both arrow kinds are indentation,
/// newlines terminate lines, words are ordinary, and any other kind is
/// reported as-is (which the adapter rejects as an unknown classification).
pub fn arrow_recognizer() -> ControlTokenRecognizer {
    Box::new(|token| match token.kind.as_str() {
        "word" => None,
        "indent_source" | "indent_source_alt" => Some("indent".to_string()),
        "newline" => Some("newline".to_string()),
        other => Some(other.to_string()),
    })
}
