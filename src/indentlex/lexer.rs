//! The indentation state machine.
//!
//!     This is the adapter's core: a pull-driven loop that takes raw tokens
//!     from the base tokenizer, classifies each, and maintains two pieces of
//!     line state: the pending leading indentation of the current line, and
//!     an indent stack of the currently-open indentation levels, outermost
//!     first. The stack's depths are strictly increasing bottom-to-top; it is
//!     mutated only here, pushed on deeper indentation and popped on dedent,
//!     never edited in place.
//!
//! Line Shape
//!
//!     A line is parsed in two phases. In the `Indent` phase every
//!     indent-classified token is collected (not emitted); the phase ends with
//!     the line's first ordinary token, with a newline (the line was blank),
//!     or with end of stream. In the `Content` phase tokens pass through
//!     untouched, including indentation tokens embedded mid-line, until a
//!     newline sends the machine back to `Indent`.
//!
//!     The moment the leading indentation is fully known, the depth comparator
//!     sizes it and the stack bookkeeping runs: deeper pushes a level and
//!     queues one `indent`; shallower pops levels (one `dedent` each) until an
//!     exactly matching depth is exposed, and fails if none is; equal queues
//!     nothing. The first non-blank line of a stream establishes the baseline
//!     level without emitting anything, and end-of-stream cleanup unwinds the
//!     stack back down to that baseline.
//!
//! Snapshots
//!
//!     `save` deep-copies every mutable field, along with the base tokenizer's
//!     own snapshot, into a [SavedState]; `reset` replays from one. Two
//!     snapshots compare equal exactly when they were taken at equivalent
//!     replay points, which is what lets a backtracking parser verify it is
//!     back where it started.

use std::collections::VecDeque;

use crate::indentlex::base::BaseTokenizer;
use crate::indentlex::classify::ControlTokenKind;
use crate::indentlex::error::{IndentError, Result};
use crate::indentlex::listener::{LineBreak, LineListener};
use crate::indentlex::options::{
    default_depth, default_empty_line_strategy, default_line_listeners, default_recognizer,
    default_token_builder, ControlTokenRecognizer, EmptyLineStrategy, IndentDepthFn,
    IndentLexerOptions, TokenBuilder,
};
use crate::indentlex::token::{Token, DEDENT, EOL, INDENT};

/// One open indentation level.
#[derive(Debug, Clone, PartialEq, Eq)]
struct IndentLevel {
    depth: usize,
    text: String,
}

/// Where the machine is within the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Consuming leading whitespace; initial, and re-entered after every
    /// line terminator.
    Indent,
    /// Past the first ordinary token of the line.
    Content,
    /// End-of-stream cleanup ran; terminal, no further raw pulls occur.
    Done,
}

/// The raw indent tokens collected so far on the current line, plus their
/// concatenated text. Reset at every line boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct PendingIndent {
    tokens: Vec<Token>,
    text: String,
}

impl PendingIndent {
    fn push(&mut self, token: Token) {
        self.text.push_str(&token.value);
        self.tokens.push(token);
    }

    fn clear(&mut self) {
        self.tokens.clear();
        self.text.clear();
    }
}

/// An independent deep copy of all adapter state, including the base
/// tokenizer's own snapshot. Opaque to callers; structurally comparable, and
/// two snapshots are equal iff they were taken at equivalent replay points.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedState<S> {
    base: S,
    indent_stack: Vec<IndentLevel>,
    queue: VecDeque<Token>,
    parse_state: ParseState,
    last_real_token: Option<Token>,
    pending: PendingIndent,
}

/// The indentation adapter: wraps a [BaseTokenizer] and yields its token
/// stream with synthesized `eol`, `indent`, and `dedent` tokens woven in.
pub struct IndentLexer<B: BaseTokenizer> {
    base: B,
    recognizer: ControlTokenRecognizer,
    token_builder: TokenBuilder,
    determine_indent_level: IndentDepthFn,
    empty_line_strategy: EmptyLineStrategy,
    listeners: Vec<Box<dyn LineListener>>,
    default_token: Token,

    indent_stack: Vec<IndentLevel>,
    queue: VecDeque<Token>,
    parse_state: ParseState,
    last_real_token: Option<Token>,
    pending: PendingIndent,
}

impl<B: BaseTokenizer> IndentLexer<B> {
    /// Wrap a base tokenizer with the default hooks.
    pub fn new(base: B) -> Self {
        Self::with_options(base, IndentLexerOptions::default())
    }

    /// Wrap a base tokenizer, overriding any of the pluggable hooks.
    pub fn with_options(base: B, options: IndentLexerOptions) -> Self {
        Self {
            base,
            recognizer: options
                .control_token_recognizer
                .unwrap_or_else(default_recognizer),
            token_builder: options.token_builder.unwrap_or_else(default_token_builder),
            determine_indent_level: options
                .determine_indent_level
                .unwrap_or_else(default_depth),
            empty_line_strategy: options
                .empty_line_strategy
                .unwrap_or_else(default_empty_line_strategy),
            listeners: options.line_listeners.unwrap_or_else(default_line_listeners),
            default_token: options.default_token.unwrap_or_default(),
            indent_stack: Vec::new(),
            queue: VecDeque::new(),
            parse_state: ParseState::Indent,
            last_real_token: None,
            pending: PendingIndent::default(),
        }
    }

    /// Pull the next token, or `None` at true end of stream.
    ///
    /// Refills the output queue with at most one state-machine cycle when it
    /// is empty. Any error surfaces from the `next()` call that detected it;
    /// afterwards the adapter state is undefined until a fresh [reset].
    ///
    /// [reset]: IndentLexer::reset
    pub fn next(&mut self) -> Result<Option<Token>> {
        if self.queue.is_empty() {
            self.ready_more_tokens()?;
        }
        Ok(self.queue.pop_front())
    }

    /// Capture the complete adapter state as an independent snapshot.
    pub fn save(&self) -> SavedState<B::State> {
        SavedState {
            base: self.base.save(),
            indent_stack: self.indent_stack.clone(),
            queue: self.queue.clone(),
            parse_state: self.parse_state,
            last_real_token: self.last_real_token.clone(),
            pending: self.pending.clone(),
        }
    }

    /// Reinitialize against `chunk`, either fresh or at a saved snapshot.
    ///
    /// Restoring a snapshot taken at point P, after arbitrary further pulls,
    /// resumes the stream exactly as it stood at P.
    pub fn reset(&mut self, chunk: &str, state: Option<&SavedState<B::State>>) {
        match state {
            Some(saved) => {
                self.base.reset(chunk, Some(&saved.base));
                self.indent_stack = saved.indent_stack.clone();
                self.queue = saved.queue.clone();
                self.parse_state = saved.parse_state;
                self.last_real_token = saved.last_real_token.clone();
                self.pending = saved.pending.clone();
            }
            None => {
                self.base.reset(chunk, None);
                self.indent_stack = Vec::new();
                self.queue = VecDeque::new();
                self.parse_state = ParseState::Indent;
                self.last_real_token = None;
                self.pending = PendingIndent::default();
            }
        }
    }

    /// Whether the adapted stream can produce the named token kind.
    ///
    /// Always true for the synthesized kinds, regardless of the base
    /// tokenizer's answer.
    pub fn has(&self, name: &str) -> bool {
        name == EOL || name == INDENT || name == DEDENT || self.base.has(name)
    }

    /// Delegate error formatting to the base tokenizer, unmodified.
    pub fn format_error(&self, token: &Token, message: &str) -> String {
        self.base.format_error(token, message)
    }

    /// One "ready more tokens" cycle: pull raw tokens until end of stream or
    /// an ordinary token, queuing output along the way.
    fn ready_more_tokens(&mut self) -> Result<()> {
        if self.parse_state == ParseState::Done {
            return Ok(());
        }

        loop {
            let latest = self.base.next();
            if let Some(token) = &latest {
                self.last_real_token = Some(token.clone());
            }

            let Some(token) = latest else {
                return self.finish_stream();
            };

            match self.classify(&token)? {
                Some(ControlTokenKind::Indent) => {
                    if self.parse_state == ParseState::Indent {
                        self.pending.push(token);
                    } else {
                        // Indentation in the middle of a line. Not
                        // interesting to us; pass it along unchanged.
                        self.queue.push_back(token);
                    }
                }
                Some(ControlTokenKind::Newline) => self.end_of_line(token)?,
                None => return self.begin_content(token),
            }
        }
    }

    /// Wrap the recognizer: parse its stringly answer, rejecting anything
    /// other than indent, newline, or ordinary.
    fn classify(&self, token: &Token) -> Result<Option<ControlTokenKind>> {
        match (self.recognizer)(token) {
            None => Ok(None),
            Some(kind) if kind == "indent" => Ok(Some(ControlTokenKind::Indent)),
            Some(kind) if kind == "newline" => Ok(Some(ControlTokenKind::Newline)),
            Some(other) => Err(IndentError::UnknownClassification {
                classification: other,
                token: render_token(token),
            }),
        }
    }

    /// A newline-classified token: blank line or content line terminator.
    fn end_of_line(&mut self, token: Token) -> Result<()> {
        if self.parse_state == ParseState::Indent {
            // The line held only whitespace, or nothing.
            self.run_empty_line_strategy(Some(&token));
            self.notify_line(Some(&token), Some(LineBreak::Newline))?;
        } else {
            let eol = (self.token_builder)(EOL, &token.value, &token);
            self.queue.push_back(eol);
        }

        self.pending.clear();
        self.parse_state = ParseState::Indent;
        Ok(())
    }

    /// The line's first ordinary token (or a mid-line one): do the indent
    /// bookkeeping if the line is just beginning, then pass the token along.
    fn begin_content(&mut self, token: Token) -> Result<()> {
        if self.parse_state == ParseState::Indent {
            let depth = (self.determine_indent_level)(&self.pending.tokens, &self.pending.text);
            self.notify_line(Some(&token), None)?;

            match self.indent_stack.last().map(|level| level.depth) {
                None => {
                    // First non-blank line: establish the baseline level
                    // without emitting anything.
                    self.indent_stack.push(IndentLevel {
                        depth,
                        text: self.pending.text.clone(),
                    });
                }
                Some(established) if depth < established => {
                    while self.indent_stack.last().map(|level| level.depth) != Some(depth) {
                        self.indent_stack.pop();
                        if self.indent_stack.is_empty() {
                            // Dedent depths must align exactly with a
                            // previously-pushed level; no nearest match.
                            return Err(IndentError::InconsistentDedent {
                                indent: self.pending.text.clone(),
                            });
                        }
                        let dedent = (self.token_builder)(DEDENT, &self.pending.text, &token);
                        self.queue.push_back(dedent);
                    }
                }
                Some(established) if depth > established => {
                    self.indent_stack.push(IndentLevel {
                        depth,
                        text: self.pending.text.clone(),
                    });
                    let indent = (self.token_builder)(INDENT, &self.pending.text, &token);
                    self.queue.push_back(indent);
                }
                Some(_) => {
                    // Same level; text mismatches at equal depth are the
                    // line listeners' concern.
                }
            }

            self.parse_state = ParseState::Content;
        }

        self.queue.push_back(token);
        Ok(())
    }

    /// End-of-stream cleanup: close the final line, then unwind the indent
    /// stack down to the baseline, one dedent per level.
    fn finish_stream(&mut self) -> Result<()> {
        let anchor = self
            .last_real_token
            .get_or_insert_with(|| self.default_token.clone())
            .clone();

        match self.parse_state {
            ParseState::Content => {
                let eol = (self.token_builder)(EOL, &anchor.value, &anchor);
                self.queue.push_back(eol);
            }
            ParseState::Indent => {
                // A trailing blank "line" with no terminator.
                self.run_empty_line_strategy(None);
                self.notify_line(None, None)?;
            }
            ParseState::Done => {}
        }
        self.parse_state = ParseState::Done;
        self.pending.clear();

        while self.indent_stack.len() > 1 {
            self.indent_stack.pop();
            let exposed = self
                .indent_stack
                .last()
                .map(|level| level.text.clone())
                .unwrap_or_default();
            let dedent = (self.token_builder)(DEDENT, &exposed, &anchor);
            self.queue.push_back(dedent);
        }

        Ok(())
    }

    fn run_empty_line_strategy(&mut self, trigger: Option<&Token>) {
        let mut emitted = Vec::new();
        (self.empty_line_strategy)(trigger, &mut |token| emitted.push(token));
        self.queue.extend(emitted);
    }

    fn notify_line(
        &mut self,
        breaking_token: Option<&Token>,
        break_kind: Option<LineBreak>,
    ) -> Result<()> {
        let text = self.pending.text.clone();
        let tokens = self.pending.tokens.clone();
        for listener in &mut self.listeners {
            listener.on_line(&text, &tokens, breaking_token, break_kind)?;
        }
        Ok(())
    }
}

fn render_token(token: &Token) -> String {
    serde_json::to_string(token).unwrap_or_else(|_| format!("{token:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indentlex::testing::{arrow_recognizer, ArrowTokenizer};

    fn drain(lexer: &mut IndentLexer<ArrowTokenizer>) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next().unwrap() {
            tokens.push(token);
        }
        tokens
    }

    fn arrow_lexer(chunk: &str) -> IndentLexer<ArrowTokenizer> {
        let mut lexer = IndentLexer::with_options(
            ArrowTokenizer::new(),
            IndentLexerOptions {
                control_token_recognizer: Some(arrow_recognizer()),
                ..IndentLexerOptions::default()
            },
        );
        lexer.reset(chunk, None);
        lexer
    }

    #[test]
    fn test_empty_stream_yields_nothing() {
        let mut lexer = arrow_lexer("");
        assert_eq!(lexer.next().unwrap(), None);
        // Pulling again after exhaustion stays quiet.
        assert_eq!(lexer.next().unwrap(), None);
    }

    #[test]
    fn test_first_line_baseline_emits_no_structural_tokens() {
        // The first non-blank line establishes the baseline, even indented.
        let mut lexer = arrow_lexer("-->word");
        let kinds: Vec<String> = drain(&mut lexer).into_iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec!["word", "eol"]);
    }

    #[test]
    fn test_eol_carries_newline_position() {
        let mut lexer = arrow_lexer("word\nword");
        let tokens = drain(&mut lexer);
        assert_eq!(tokens[1].kind, "eol");
        assert_eq!(tokens[1].value, "\n");
        assert_eq!(tokens[1].line, 1);
        assert_eq!(tokens[1].offset, 4);
    }

    #[test]
    fn test_dedent_value_is_current_line_indent() {
        let mut lexer = arrow_lexer("word\n-->word\nword");
        let tokens = drain(&mut lexer);
        let dedent = tokens.iter().find(|t| t.kind == "dedent").unwrap();
        assert_eq!(dedent.value, "");
    }

    #[test]
    fn test_final_dedent_value_is_exposed_level_text() {
        let mut lexer = arrow_lexer("word\n-->word");
        let tokens = drain(&mut lexer);
        let dedent = tokens.last().unwrap();
        assert_eq!(dedent.kind, "dedent");
        // Unwinding exposes the baseline level, whose indent text is empty.
        assert_eq!(dedent.value, "");
    }

    #[test]
    fn test_queue_drains_before_refilling() {
        // A dedent cascade is buffered in one cycle and handed out one
        // token per pull.
        let mut lexer = arrow_lexer("word\n-->word\n-->-->word");
        let kinds: Vec<String> = drain(&mut lexer).into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                "word", "eol", "indent", "word", "eol", "indent", "word", "eol", "dedent",
                "dedent"
            ]
        );
    }
}
