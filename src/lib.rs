//! # indentlex
//!
//! An indentation-sensitivity adapter for token streams.
//!
//! indentlex sits between a raw, whitespace-insensitive tokenizer and a
//! token-driven parser. It pulls raw tokens on demand, watches the leading
//! whitespace of every line, and weaves synthesized `eol`, `indent`, and
//! `dedent` tokens into the stream so that whitespace-significant grammars
//! (Python-style blocks) can be parsed with an otherwise flat token grammar.
//!
//! The adapter never scans text itself. Tokenization stays the base
//! tokenizer's job; indentlex only classifies the tokens it is handed and
//! does stack bookkeeping on top of them. Because backtracking parsers need
//! to explore grammar alternatives, the whole adapter state can be saved and
//! restored deterministically.
//!
//! See the [indentlex] module for the design documentation.

pub mod indentlex;
