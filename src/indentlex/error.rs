//! Errors surfaced by the adapter.
//!
//!     All error kinds are fatal: they surface synchronously from the `next()`
//!     call that detected them, nothing is retried internally, and the adapter
//!     state is undefined afterwards until a fresh `reset`. Callers that need
//!     resilience snapshot before a risky pull and restore on failure.

use std::fmt;

/// Result type for adapter operations.
pub type Result<T> = std::result::Result<T, IndentError>;

/// Errors that can occur while adapting a token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndentError {
    /// The control token recognizer returned a classification other than
    /// indent, newline, or nothing. A configuration error in the supplied
    /// recognizer; carries the offending raw token rendered as JSON.
    UnknownClassification {
        /// The classification string the recognizer returned.
        classification: String,
        /// The raw token being classified, serialized for diagnosis.
        token: String,
    },
    /// A dedent's computed depth matched no currently-open indentation level.
    InconsistentDedent {
        /// The offending line's indentation text.
        indent: String,
    },
    /// Consecutive non-blank lines' indentation strings are not in a prefix
    /// relationship.
    InconsistentIndent {
        /// Indent text of the previously checked line.
        previous: String,
        /// Indent text of the line that failed the check.
        current: String,
    },
}

impl fmt::Display for IndentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndentError::UnknownClassification {
                classification,
                token,
            } => write!(
                f,
                "control token recognizer returned an unknown type: must be \
                 \"indent\", \"newline\", or nothing; was {classification:?}; \
                 failed on token {token}"
            ),
            IndentError::InconsistentDedent { indent } => write!(
                f,
                "inconsistent indent: no open indentation level matches {indent:?}"
            ),
            IndentError::InconsistentIndent { previous, current } => write!(
                f,
                "inconsistent indent: {current:?} is not a prefix extension or \
                 reduction of {previous:?}"
            ),
        }
    }
}

impl std::error::Error for IndentError {}
