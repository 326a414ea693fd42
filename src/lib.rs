//! # TinyLang - a minimal expression language
//!
//! A small interpreter demonstrating the classic pipeline:
//!
//! ```text
//! Source Code → Scanner → Tokens → Parser → AST → Evaluator → Value
//! ```
//!
//! The language has integer literals, `+ - * /` with the usual precedence,
//! parentheses, `let` declarations and `print(...)`. Division always yields
//! a float: `8 / 2` is `4.0`.
//!
//! ## Quick Start
//!
//! ```rust
//! use tinylang::{parse, tokenize, Evaluator, Value};
//!
//! # fn main() -> tinylang::Result<()> {
//! let mut evaluator = Evaluator::with_sink(Vec::<Value>::new());
//!
//! for line in ["let x = 10", "let y = x + 5", "print(y)"] {
//!     let tokens = tokenize(line)?;
//!     let program = parse(tokens)?;
//!     evaluator.execute(&program)?;
//! }
//!
//! assert_eq!(evaluator.sink(), &vec![Value::Int(15)]);
//! # Ok(())
//! # }
//! ```
//!
//! ### Sessions
//!
//! [`Session`] runs multi-line source one line at a time and keeps going
//! after a failing line:
//!
//! ```rust
//! use tinylang::{ErrorCategory, Session, Value};
//!
//! let mut session = Session::with_sink(Vec::<Value>::new());
//! let outcomes = session.run_source("let a = 1\nprint(b)\nprint(a)");
//!
//! let err = outcomes[1].result.as_ref().unwrap_err();
//! assert_eq!(err.category(), ErrorCategory::Name);
//! assert_eq!(session.evaluator().sink(), &vec![Value::Int(1)]);
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! # use tinylang::{parse, tokenize, Error, Evaluator, Value};
//! let program = parse(tokenize("5 / 0").unwrap()).unwrap();
//! let mut evaluator = Evaluator::with_sink(Vec::<Value>::new());
//!
//! assert_eq!(evaluator.execute(&program), Err(Error::DivisionByZero));
//! ```

// Module declarations
/// Version of the TinyLang interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;
pub mod session;

// Re-export main types
pub use error::{Error, ErrorCategory, Result};
pub use lexer::{tokenize, Scanner, Token, TokenKind};
pub use parser::{parse, BinaryOp, Expression, Parser, Program, Statement};
pub use runtime::{Environment, Evaluator, OutputSink, StdoutSink, Value, WriterSink};
pub use session::{LineHook, LineOutcome, Session, SessionConfig};
