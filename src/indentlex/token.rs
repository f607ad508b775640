//! Token record shared by the base tokenizer contract and the adapter.
//!
//!     Tokens are deliberately schema-light: a kind tag, the literal text, and
//!     position metadata. The adapter treats raw tokens as opaque apart from
//!     classification, and synthesized tokens reuse the same shape so that the
//!     downstream parser sees one uniform stream.

use serde::{Deserialize, Serialize};

/// Kind tag of a synthesized end-of-line token.
pub const EOL: &str = "eol";
/// Kind tag of a synthesized block-open token.
pub const INDENT: &str = "indent";
/// Kind tag of a synthesized block-close token.
pub const DEDENT: &str = "dedent";

/// A single token, raw or synthesized.
///
/// Raw tokens are produced and owned by the base tokenizer; the adapter
/// treats them as immutable and clones them when deriving structural tokens.
/// Synthesized tokens carry `kind` one of [EOL], [INDENT], [DEDENT], with
/// position metadata copied from a base token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Kind tag, e.g. `word`, `newline`, or a synthesized kind.
    pub kind: String,
    /// Literal text value.
    pub value: String,
    /// One-based line of the token's first character.
    pub line: usize,
    /// One-based column of the token's first character.
    pub col: usize,
    /// Byte offset of the token's first character.
    pub offset: usize,
}

impl Token {
    /// Create a token at an explicit position.
    pub fn new(kind: &str, value: &str, line: usize, col: usize, offset: usize) -> Self {
        Self {
            kind: kind.to_string(),
            value: value.to_string(),
            line,
            col,
            offset,
        }
    }
}

impl Default for Token {
    /// The stand-in token used for position metadata when a stream ends
    /// before any real token was seen.
    fn default() -> Self {
        Self {
            kind: String::new(),
            value: String::new(),
            line: 1,
            col: 1,
            offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_token_position() {
        let token = Token::default();
        assert_eq!(token.kind, "");
        assert_eq!(token.value, "");
        assert_eq!(token.line, 1);
        assert_eq!(token.col, 1);
        assert_eq!(token.offset, 0);
    }

    #[test]
    fn test_token_serializes_to_json() {
        let token = Token::new("word", "blah", 2, 5, 12);
        let json = serde_json::to_string(&token).unwrap();
        assert!(json.contains("\"kind\":\"word\""));
        assert!(json.contains("\"offset\":12"));
    }
}
