//! Control token classification.
//!
//!     Every raw token gets classified three ways: indentation, line break, or
//!     ordinary content. Only the first two drive the state machine; ordinary
//!     tokens pass through (and end the leading-whitespace run of a line).
//!     Classification is pluggable so that the adapter works with any base
//!     tokenizer's notion of whitespace; the default recognizes runs of tabs
//!     and spaces, and runs of newlines, by matching the token's value.
//!
//!     Recognizers never see end-of-stream: the state machine short-circuits
//!     on an exhausted base tokenizer, so a custom recognizer only ever
//!     receives a real token.

use crate::indentlex::token::Token;
use once_cell::sync::Lazy;
use regex::Regex;

/// Classification of a control token, parsed from a recognizer's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlTokenKind {
    /// Leading-whitespace material (tabs/spaces, or whatever the recognizer
    /// deems indentation).
    Indent,
    /// A line terminator.
    Newline,
}

static INDENT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\t ]+$").expect("valid pattern"));
static NEWLINE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\n|\r\n)+$").expect("valid pattern"));

/// The default control token recognizer.
///
/// Classifies by the token's value: a run of tabs/spaces is `indent`, a run
/// of newlines (`\n` or `\r\n`) is `newline`, anything else is ordinary.
pub fn default_control_token_recognizer(token: &Token) -> Option<String> {
    if NEWLINE_RUN.is_match(&token.value) {
        Some("newline".to_string())
    } else if INDENT_RUN.is_match(&token.value) {
        Some("indent".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(value: &str) -> Token {
        Token::new("raw", value, 1, 1, 0)
    }

    #[test]
    fn test_indent_runs() {
        assert_eq!(
            default_control_token_recognizer(&tok("    ")),
            Some("indent".to_string())
        );
        assert_eq!(
            default_control_token_recognizer(&tok("\t")),
            Some("indent".to_string())
        );
        assert_eq!(
            default_control_token_recognizer(&tok(" \t ")),
            Some("indent".to_string())
        );
    }

    #[test]
    fn test_newline_runs() {
        assert_eq!(
            default_control_token_recognizer(&tok("\n")),
            Some("newline".to_string())
        );
        assert_eq!(
            default_control_token_recognizer(&tok("\r\n\n")),
            Some("newline".to_string())
        );
    }

    #[test]
    fn test_ordinary_content() {
        assert_eq!(default_control_token_recognizer(&tok("blah")), None);
        // Mixed whitespace and content is not a control token.
        assert_eq!(default_control_token_recognizer(&tok("  x")), None);
        // A carriage return on its own is not a newline run.
        assert_eq!(default_control_token_recognizer(&tok("\r")), None);
        assert_eq!(default_control_token_recognizer(&tok("")), None);
    }
}
