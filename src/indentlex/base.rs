//! The contract the adapter consumes: a pull-based, rewindable tokenizer.

use crate::indentlex::token::Token;
use std::fmt;

/// A raw tokenizer the adapter can sit on top of.
///
/// The adapter pulls tokens one at a time, and delegates `has` and
/// `format_error` so that it can stand in for the base tokenizer wherever
/// one is expected. Because the adapter itself is rewindable, the base
/// tokenizer must be too: `save` captures an opaque snapshot and `reset`
/// reinitializes against a chunk of input, either fresh or at a snapshot.
pub trait BaseTokenizer {
    /// Opaque snapshot of the tokenizer's position within a chunk.
    type State: Clone + PartialEq + fmt::Debug;

    /// Produce the next raw token, or `None` at end of stream.
    fn next(&mut self) -> Option<Token>;

    /// Capture the current position as an independent snapshot.
    fn save(&self) -> Self::State;

    /// Reinitialize against `chunk`, fresh or at a previously saved state.
    fn reset(&mut self, chunk: &str, state: Option<&Self::State>);

    /// Whether this tokenizer can ever produce a token of the named kind.
    fn has(&self, name: &str) -> bool;

    /// Render a token-anchored error message for diagnostics.
    fn format_error(&self, token: &Token, message: &str) -> String;
}
