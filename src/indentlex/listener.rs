//! Per-line observation.
//!
//!     Line listeners are notified exactly once per logical line, at the
//!     moment the line's leading indentation becomes fully known: either an
//!     ordinary token ended the run, a newline made the line blank, or the
//!     stream ended. Listeners are observers; they may keep private state of
//!     their own, but they only ever receive borrows of adapter state.
//!
//!     The one built-in listener, and the default configuration, is the
//!     [ConsistentIndentEnforcer]. Depth comparison alone is lossy (two
//!     different indentation strings can report equal depth), so the enforcer
//!     independently requires the actual indentation strings of consecutive
//!     non-blank lines to be prefixes of one another.

use crate::indentlex::error::IndentError;
use crate::indentlex::token::Token;

/// What ended a line's leading indentation, when anything did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBreak {
    /// A newline-classified token: the line was blank.
    Newline,
}

/// Observer notified once per logical line with its full leading-indentation
/// context.
///
/// `breaking_token` is the token that ended the indentation run: a newline
/// for blank lines, the line's first ordinary token otherwise. Both
/// `breaking_token` and `break_kind` are `None` only for the terminal blank
/// "line" at true end of stream. `break_kind` is `None` whenever an ordinary
/// token broke the run, since ordinary tokens carry no control
/// classification.
pub trait LineListener {
    /// Observe one logical line. An error propagates out of the `next()`
    /// call that completed the line.
    fn on_line(
        &mut self,
        indent_text: &str,
        indent_tokens: &[Token],
        breaking_token: Option<&Token>,
        break_kind: Option<LineBreak>,
    ) -> Result<(), IndentError>;
}

/// Enforces that indentation strings form a prefix chain across consecutive
/// non-blank lines.
///
/// Blank lines are neither checked nor remembered: their indentation is
/// structurally meaningless (a blank line belongs to whatever block encloses
/// it), so it must not poison the chain.
#[derive(Debug, Default)]
pub struct ConsistentIndentEnforcer {
    previous: String,
}

impl ConsistentIndentEnforcer {
    /// Create an enforcer with no remembered line; the first line it checks
    /// always passes.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LineListener for ConsistentIndentEnforcer {
    fn on_line(
        &mut self,
        indent_text: &str,
        _indent_tokens: &[Token],
        _breaking_token: Option<&Token>,
        break_kind: Option<LineBreak>,
    ) -> Result<(), IndentError> {
        if break_kind == Some(LineBreak::Newline) {
            // Pure blank line.
            return Ok(());
        }

        if !indent_text.starts_with(&self.previous) && !self.previous.starts_with(indent_text) {
            return Err(IndentError::InconsistentIndent {
                previous: self.previous.clone(),
                current: indent_text.to_string(),
            });
        }

        self.previous = indent_text.to_string();
        Ok(())
    }
}
