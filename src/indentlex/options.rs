//! Construction options: the adapter's pluggable capability set.
//!
//!     Classification, synthesis, depth measurement, blank-line handling, and
//!     line observation are each independently substitutable, and each has a
//!     default matching the common tabs-and-spaces case. Options left unset
//!     fall back to those defaults at construction.

use crate::indentlex::classify::default_control_token_recognizer;
use crate::indentlex::listener::{ConsistentIndentEnforcer, LineListener};
use crate::indentlex::token::Token;

/// Classifies a raw token: `Some("indent")`, `Some("newline")`, or `None`
/// for ordinary content. Any other answer is a fatal configuration error.
pub type ControlTokenRecognizer = Box<dyn Fn(&Token) -> Option<String>>;

/// Builds a structural token from a kind tag, a display value, and a base
/// token supplying position metadata.
pub type TokenBuilder = Box<dyn Fn(&str, &str, &Token) -> Token>;

/// Maps a line's collected indent tokens and their concatenated text to a
/// comparable depth.
pub type IndentDepthFn = Box<dyn Fn(&[Token], &str) -> usize>;

/// Invoked once per blank line with the triggering newline token (`None` for
/// the terminal blank line at end of stream) and an emit callback; emitted
/// tokens go to the output queue in order.
pub type EmptyLineStrategy = Box<dyn Fn(Option<&Token>, &mut dyn FnMut(Token))>;

/// Optional overrides for the adapter's hooks. `Default` leaves everything
/// unset, selecting the documented default behavior per hook.
#[derive(Default)]
pub struct IndentLexerOptions {
    /// Token classifier override.
    pub control_token_recognizer: Option<ControlTokenRecognizer>,
    /// Structural token synthesizer override.
    pub token_builder: Option<TokenBuilder>,
    /// Indentation depth comparator override. Default: byte length of the
    /// indent text.
    pub determine_indent_level: Option<IndentDepthFn>,
    /// Blank-line strategy override. Default: blank lines produce no tokens.
    pub empty_line_strategy: Option<EmptyLineStrategy>,
    /// Line listener set. Replaces the default single
    /// [ConsistentIndentEnforcer] when supplied; an empty vec disables line
    /// observation entirely.
    pub line_listeners: Option<Vec<Box<dyn LineListener>>>,
    /// Stand-in token for position metadata when the stream ends before any
    /// real token was seen.
    pub default_token: Option<Token>,
}

pub(crate) fn default_recognizer() -> ControlTokenRecognizer {
    Box::new(default_control_token_recognizer)
}

pub(crate) fn default_token_builder() -> TokenBuilder {
    Box::new(|kind, value, base| {
        let mut token = base.clone();
        token.kind = kind.to_string();
        token.value = value.to_string();
        token
    })
}

pub(crate) fn default_depth() -> IndentDepthFn {
    Box::new(|_tokens, text| text.len())
}

pub(crate) fn default_empty_line_strategy() -> EmptyLineStrategy {
    Box::new(|_token, _emit| {})
}

pub(crate) fn default_line_listeners() -> Vec<Box<dyn LineListener>> {
    vec![Box::new(ConsistentIndentEnforcer::new())]
}
