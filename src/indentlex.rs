//! Indentation adapter
//!
//!     This module turns a flat raw token stream into an indentation-aware one.
//!     The base tokenizer produces raw tokens; the adapter classifies each as
//!     indentation, line break, or ordinary content, and synthesizes `eol`,
//!     `indent`, and `dedent` tokens at the structural boundaries. Downstream,
//!     indent/dedent map nicely to open/close braces in more c-style grammars,
//!     so a parser written against flat tokens can handle nested blocks without
//!     knowing anything about whitespace.
//!
//! Pull Model
//!
//!     The parser drives everything by pulling tokens one at a time. When the
//!     adapter's output queue runs dry it runs a single "ready more tokens"
//!     cycle against the base tokenizer, which may buffer several output
//!     tokens at once (a dedent cascade, say) before the first of the batch is
//!     handed out. Nothing runs in the background and nothing is pulled from
//!     the base tokenizer ahead of need.
//!
//! Pluggable Hooks
//!
//!     Classification, token synthesis, depth measurement, blank-line
//!     handling, and per-line observation are all hooks supplied at
//!     construction through [IndentLexerOptions](options::IndentLexerOptions).
//!     Each has a default: regex classification of tab/space and newline runs,
//!     clone-the-base synthesis, byte-length depth, no tokens for blank lines,
//!     and a single [ConsistentIndentEnforcer](listener::ConsistentIndentEnforcer)
//!     that requires consecutive lines' indentation strings to form a prefix
//!     chain.
//!
//! Rewindability
//!
//!     Backtracking parsers explore grammar alternatives and must be able to
//!     abandon a dead-end path. [IndentLexer::save](lexer::IndentLexer::save)
//!     captures the complete mutable state (including the base tokenizer's own
//!     snapshot) as an independent copy, and
//!     [IndentLexer::reset](lexer::IndentLexer::reset) replays from it
//!     deterministically. Divergent branches can never corrupt each other's
//!     state because snapshots alias nothing.

pub mod base;
pub mod classify;
pub mod error;
pub mod lexer;
pub mod listener;
pub mod options;
pub mod testing;
pub mod token;

pub use base::BaseTokenizer;
pub use classify::{default_control_token_recognizer, ControlTokenKind};
pub use error::{IndentError, Result};
pub use lexer::{IndentLexer, SavedState};
pub use listener::{ConsistentIndentEnforcer, LineBreak, LineListener};
pub use options::IndentLexerOptions;
pub use token::{Token, DEDENT, EOL, INDENT};
