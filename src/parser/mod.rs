//! TinyLang Parser Module
//!
//! Parses token sequences into Abstract Syntax Trees (AST) by recursive descent.

mod ast;
#[allow(clippy::module_inception)]
mod parser;

pub use ast::{BinaryOp, Expression, Program, Statement};
pub use parser::Parser;

use crate::error::Result;
use crate::lexer::Token;

/// Parses a token sequence into the statements it contains
pub fn parse(tokens: Vec<Token>) -> Result<Program> {
    Parser::new(tokens).parse()
}
