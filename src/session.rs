//! Line-at-a-time interpreter sessions
//!
//! A [`Session`] feeds already-segmented lines through the
//! tokenize → parse → evaluate pipeline against one shared evaluator.
//! A failing line is reported and the next line runs with the same
//! environment; bindings from earlier lines are never rolled back.

use crate::error::{Error, Result};
use crate::lexer::{tokenize, Token};
use crate::parser::{parse, Program, Statement};
use crate::runtime::{Environment, Evaluator, OutputSink, StdoutSink, Value};

/// Session behaviour
#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    /// Stop `run_source` at the first failing line
    pub stop_on_error: bool,
}

/// Result of running one non-blank source line
#[derive(Clone, Debug, PartialEq)]
pub struct LineOutcome {
    /// 1-based line number within the source passed to `run_source`
    pub line_number: usize,
    /// The trimmed line text
    pub source: String,
    /// Value of the line's last statement, or the error that stopped it
    pub result: Result<Option<Value>>,
}

impl LineOutcome {
    /// Returns true if the line failed
    pub fn is_err(&self) -> bool {
        self.result.is_err()
    }
}

/// Observes the stages of each line a session runs
///
/// Every method defaults to doing nothing. `()` is the no-op hook used by
/// [`Session::run_line`] and [`Session::run_source`].
pub trait LineHook {
    /// Called with the tokens of a line that tokenized cleanly
    fn on_tokens(&mut self, _tokens: &[Token]) {}

    /// Called with the program of a line that parsed cleanly
    fn on_program(&mut self, _program: &Program) {}

    /// Called after each statement that evaluated successfully
    fn on_statement(&mut self, _statement: &Statement, _value: &Value) {}

    /// Called once per non-blank line by `run_source_with`
    fn on_outcome(&mut self, _outcome: &LineOutcome) {}
}

impl LineHook for () {}

/// One interpreter session: a single evaluator shared by every line
pub struct Session<S: OutputSink = StdoutSink> {
    evaluator: Evaluator<S>,
    config: SessionConfig,
}

impl Session<StdoutSink> {
    /// Creates a session printing to standard output
    pub fn new() -> Self {
        Session::with_sink(StdoutSink)
    }
}

impl Default for Session<StdoutSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: OutputSink> Session<S> {
    /// Creates a session with a custom sink and default configuration
    pub fn with_sink(sink: S) -> Self {
        Session::with_config(sink, SessionConfig::default())
    }

    /// Creates a session with a custom sink and configuration
    pub fn with_config(sink: S, config: SessionConfig) -> Self {
        Session {
            evaluator: Evaluator::with_sink(sink),
            config,
        }
    }

    /// Session configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The underlying evaluator
    pub fn evaluator(&self) -> &Evaluator<S> {
        &self.evaluator
    }

    /// Current variable bindings
    pub fn environment(&self) -> &Environment {
        self.evaluator.environment()
    }

    /// Consumes the session, returning its evaluator
    pub fn into_evaluator(self) -> Evaluator<S> {
        self.evaluator
    }

    /// Runs every statement of one line, returning the last statement's value
    pub fn run_line(&mut self, line: &str) -> Result<Option<Value>> {
        self.run_line_with(line, &mut ())
    }

    /// Like [`Session::run_line`], reporting each stage to `hook`
    pub fn run_line_with<H: LineHook>(
        &mut self,
        line: &str,
        hook: &mut H,
    ) -> Result<Option<Value>> {
        let tokens = tokenize(line)?;
        hook.on_tokens(&tokens);

        let program = parse(tokens)?;
        hook.on_program(&program);

        let mut last_val = None;
        for statement in &program.statements {
            let value = self.evaluator.evaluate(statement)?;
            hook.on_statement(statement, &value);
            last_val = Some(value);
        }

        Ok(last_val)
    }

    /// Runs each non-blank line of `source` in order
    pub fn run_source(&mut self, source: &str) -> Vec<LineOutcome> {
        self.run_source_with(source, &mut ())
    }

    /// Like [`Session::run_source`], reporting each stage and outcome to `hook`
    pub fn run_source_with<H: LineHook>(&mut self, source: &str, hook: &mut H) -> Vec<LineOutcome> {
        let mut outcomes = Vec::new();

        for (index, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let result = self.run_line_with(line, hook);
            if let Err(err) = &result {
                tracing::warn!(
                    line = index + 1,
                    category = %err.category(),
                    error = %err,
                    "line failed"
                );
            }

            let outcome = LineOutcome {
                line_number: index + 1,
                source: line.to_string(),
                result,
            };
            hook.on_outcome(&outcome);

            let failed = outcome.is_err();
            outcomes.push(outcome);

            if failed && self.config.stop_on_error {
                break;
            }
        }

        outcomes
    }
}

/// First error among `outcomes`, if any
pub fn first_error(outcomes: &[LineOutcome]) -> Option<&Error> {
    outcomes.iter().find_map(|o| o.result.as_ref().err())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;
    use crate::runtime::WriterSink;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl LineHook for Recorder {
        fn on_tokens(&mut self, tokens: &[Token]) {
            self.events.push(format!("tokens {}", tokens.len()));
        }

        fn on_program(&mut self, program: &Program) {
            self.events.push(format!("program {}", program.statements.len()));
        }

        fn on_statement(&mut self, statement: &Statement, value: &Value) {
            self.events.push(format!("{} => {}", statement, value));
        }

        fn on_outcome(&mut self, outcome: &LineOutcome) {
            let status = if outcome.is_err() { "err" } else { "ok" };
            self.events.push(format!("line {} {}", outcome.line_number, status));
        }
    }

    #[test]
    fn test_variables_program() {
        let mut session = Session::with_sink(Vec::<Value>::new());
        let outcomes = session.run_source(
            "
            let x = 10
            let y = x + 5
            let z = y * 2
            print(z)
            ",
        );

        assert_eq!(outcomes.len(), 4);
        assert!(outcomes.iter().all(|o| !o.is_err()));
        assert_eq!(outcomes[0].line_number, 2);
        assert_eq!(outcomes[3].source, "print(z)");
        assert_eq!(session.evaluator().sink(), &vec![Value::Int(30)]);
    }

    #[test]
    fn test_errors_do_not_stop_later_lines() {
        let mut session = Session::with_sink(Vec::<Value>::new());
        let outcomes = session.run_source(
            "let a = 1\nlet b = @\nprint(a)\nlet c =\nprint(nope)\nprint(a + 1)",
        );

        let categories: Vec<Option<ErrorCategory>> = outcomes
            .iter()
            .map(|o| o.result.as_ref().err().map(Error::category))
            .collect();
        assert_eq!(
            categories,
            vec![
                None,
                Some(ErrorCategory::Lexical),
                None,
                Some(ErrorCategory::Syntax),
                Some(ErrorCategory::Name),
                None,
            ]
        );
        assert_eq!(session.evaluator().sink(), &vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(session.environment().len(), 1);
    }

    #[test]
    fn test_stop_on_error() {
        let config = SessionConfig {
            stop_on_error: true,
        };
        let mut session = Session::with_config(Vec::<Value>::new(), config);
        let outcomes = session.run_source("let a = 1\n5 / 0\nlet b = 2");

        assert_eq!(outcomes.len(), 2);
        assert_eq!(first_error(&outcomes), Some(&Error::DivisionByZero));
        assert!(!session.environment().exists("b"));
    }

    #[test]
    fn test_run_line_runs_all_statements() {
        let mut session = Session::with_sink(Vec::<Value>::new());
        let last = session.run_line("let a = 2 print(a * 3) a + 1").unwrap();

        assert_eq!(last, Some(Value::Int(3)));
        assert_eq!(session.into_evaluator().into_sink(), vec![Value::Int(6)]);
    }

    #[test]
    fn test_partial_line_keeps_earlier_statements() {
        let mut session = Session::with_sink(Vec::<Value>::new());
        assert!(session.run_line("let a = 2 let b = a / 0").is_err());

        assert_eq!(session.environment().get("a"), Ok(Value::Int(2)));
        assert!(!session.environment().exists("b"));
    }

    #[test]
    fn test_hook_sees_each_stage() {
        let mut session = Session::with_sink(Vec::<Value>::new());
        let mut recorder = Recorder::default();
        let source = "let a = 4\n\na / 8\nlet b = @\nprint(c)";
        let outcomes = session.run_source_with(source, &mut recorder);

        assert_eq!(outcomes.len(), 4);
        assert_eq!(
            recorder.events,
            vec![
                "tokens 5",
                "program 1",
                "let a = 4 => 4",
                "line 1 ok",
                "tokens 4",
                "program 1",
                "(a / 8) => 0.5",
                "line 3 ok",
                "line 4 err",
                "tokens 5",
                "program 1",
                "line 5 err",
            ]
        );
    }

    #[test]
    fn test_float_output_formatting() {
        let mut session = Session::with_sink(WriterSink::new(Vec::<u8>::new()));
        let outcomes = session.run_source(
            "print(10000000000000000 / 1)\nprint(1 / 3000000)\nprint(8 / 2)\nprint(1 / 4)",
        );
        assert!(first_error(&outcomes).is_none());

        let written = session.into_evaluator().into_sink().into_inner();
        assert_eq!(
            String::from_utf8(written).unwrap(),
            "1e+16\n3.3333333333333335e-07\n4.0\n0.25\n"
        );
    }
}
