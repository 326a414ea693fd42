//! Lexical analysis for TinyLang
//!
//! Converts one line of source text into a stream of tokens.

mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Token, TokenKind};

use crate::error::Result;

/// Tokenizes `source`, returning tokens terminated by exactly one `Eof`
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Scanner::new(source).scan_tokens()
}
