use serde::{Deserialize, Serialize};

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token
    pub lexeme: String,
    /// 0-based character offset where the token starts
    pub position: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: String, position: usize) -> Self {
        Token {
            kind,
            lexeme,
            position,
        }
    }
}

/// All possible token types in TinyLang
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Integer literal
    Number(i64),
    /// `let` keyword
    Let,
    /// `print` keyword
    Print,
    /// Identifier
    Identifier(String),

    /// Assignment operator (=)
    Assign,
    /// Plus operator (+)
    Plus,
    /// Minus operator (-)
    Minus,
    /// Star operator (*)
    Star,
    /// Slash operator (/)
    Slash,

    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,

    /// End of input marker
    Eof,
}

impl TokenKind {
    /// Keyword for the given word, if it is one
    pub fn keyword(s: &str) -> Option<TokenKind> {
        match s {
            "let" => Some(TokenKind::Let),
            "print" => Some(TokenKind::Print),
            _ => None,
        }
    }

    /// Check if token is a keyword
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::Let | TokenKind::Print)
    }

    /// Kind name without payload, as used in syntax errors
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Number(_) => "NUMBER",
            TokenKind::Let => "LET",
            TokenKind::Print => "PRINT",
            TokenKind::Identifier(_) => "IDENTIFIER",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "MULTIPLY",
            TokenKind::Slash => "DIVIDE",
            TokenKind::LeftParen => "LPAREN",
            TokenKind::RightParen => "RPAREN",
            TokenKind::Eof => "EOF",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "NUMBER({})", n),
            TokenKind::Identifier(id) => write!(f, "IDENTIFIER({})", id),
            _ => f.write_str(self.name()),
        }
    }
}
