//! Line listener protocol: one call per logical line, with the full
//! leading-indentation context, in registration order.

use std::cell::RefCell;
use std::rc::Rc;

use indentlex::indentlex::testing::{arrow_recognizer, ArrowTokenizer};
use indentlex::indentlex::{
    IndentError, IndentLexer, IndentLexerOptions, LineBreak, LineListener, Token,
};

/// What one `on_line` call looked like, flattened to values.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LineCall {
    indent_values: Vec<String>,
    indent_text: String,
    breaking_value: Option<String>,
    break_kind: Option<LineBreak>,
}

#[derive(Default)]
struct Recorder {
    calls: Rc<RefCell<Vec<LineCall>>>,
}

impl LineListener for Recorder {
    fn on_line(
        &mut self,
        indent_text: &str,
        indent_tokens: &[Token],
        breaking_token: Option<&Token>,
        break_kind: Option<LineBreak>,
    ) -> Result<(), IndentError> {
        self.calls.borrow_mut().push(LineCall {
            indent_values: indent_tokens.iter().map(|t| t.value.clone()).collect(),
            indent_text: indent_text.to_string(),
            breaking_value: breaking_token.map(|t| t.value.clone()),
            break_kind,
        });
        Ok(())
    }
}

fn call(
    indent_values: &[&str],
    indent_text: &str,
    breaking_value: Option<&str>,
    break_kind: Option<LineBreak>,
) -> LineCall {
    LineCall {
        indent_values: indent_values.iter().map(|v| v.to_string()).collect(),
        indent_text: indent_text.to_string(),
        breaking_value: breaking_value.map(String::from),
        break_kind,
    }
}

#[test]
fn one_call_per_logical_line() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let recorder = Recorder {
        calls: Rc::clone(&calls),
    };

    let mut lexer = IndentLexer::with_options(
        ArrowTokenizer::new(),
        IndentLexerOptions {
            control_token_recognizer: Some(arrow_recognizer()),
            line_listeners: Some(vec![Box::new(recorder)]),
            ..IndentLexerOptions::default()
        },
    );
    lexer.reset(
        "word-->word\n-->word\n-->-->word\n-->\n-->word\n\nword\n",
        None,
    );
    while lexer.next().unwrap().is_some() {}

    assert_eq!(
        *calls.borrow(),
        vec![
            call(&[], "", Some("word"), None),
            call(&["-->"], "-->", Some("word"), None),
            call(&["-->", "-->"], "-->-->", Some("word"), None),
            // Blank line with leading whitespace: broken by its newline.
            call(&["-->"], "-->", Some("\n"), Some(LineBreak::Newline)),
            call(&["-->"], "-->", Some("word"), None),
            call(&[], "", Some("\n"), Some(LineBreak::Newline)),
            call(&[], "", Some("word"), None),
            // Terminal blank "line" at true end of stream.
            call(&[], "", None, None),
        ]
    );
}

#[test]
fn listeners_run_in_registration_order() {
    let calls = Rc::new(RefCell::new(Vec::new()));

    struct Tagger {
        tag: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }
    impl LineListener for Tagger {
        fn on_line(
            &mut self,
            _indent_text: &str,
            _indent_tokens: &[Token],
            _breaking_token: Option<&Token>,
            _break_kind: Option<LineBreak>,
        ) -> Result<(), IndentError> {
            self.log.borrow_mut().push(self.tag);
            Ok(())
        }
    }

    let mut lexer = IndentLexer::with_options(
        ArrowTokenizer::new(),
        IndentLexerOptions {
            control_token_recognizer: Some(arrow_recognizer()),
            line_listeners: Some(vec![
                Box::new(Tagger {
                    tag: "first",
                    log: Rc::clone(&calls),
                }),
                Box::new(Tagger {
                    tag: "second",
                    log: Rc::clone(&calls),
                }),
            ]),
            ..IndentLexerOptions::default()
        },
    );
    lexer.reset("word\n", None);
    while lexer.next().unwrap().is_some() {}

    // One content line plus the terminal end-of-stream line.
    assert_eq!(*calls.borrow(), vec!["first", "second", "first", "second"]);
}

#[test]
fn listener_errors_surface_from_next() {
    struct Tripwire;
    impl LineListener for Tripwire {
        fn on_line(
            &mut self,
            indent_text: &str,
            _indent_tokens: &[Token],
            _breaking_token: Option<&Token>,
            _break_kind: Option<LineBreak>,
        ) -> Result<(), IndentError> {
            if indent_text == "-->" {
                return Err(IndentError::InconsistentIndent {
                    previous: String::new(),
                    current: indent_text.to_string(),
                });
            }
            Ok(())
        }
    }

    let mut lexer = IndentLexer::with_options(
        ArrowTokenizer::new(),
        IndentLexerOptions {
            control_token_recognizer: Some(arrow_recognizer()),
            line_listeners: Some(vec![Box::new(Tripwire)]),
            ..IndentLexerOptions::default()
        },
    );
    lexer.reset("word\n-->word", None);

    let err = loop {
        match lexer.next() {
            Ok(Some(_)) => continue,
            Ok(None) => panic!("expected the tripwire to fire"),
            Err(err) => break err,
        }
    };
    assert!(matches!(err, IndentError::InconsistentIndent { .. }));
}
