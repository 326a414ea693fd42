//! Error types for the TinyLang pipeline

use thiserror::Error;

/// TinyLang errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Lexical errors
    /// Character that starts no token
    ///
    /// **Triggered by:** Any character outside digits, letters, `_`, whitespace and `+ - * / ( ) =`
    /// **Example:** `let x = 5 @ 2`
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter {
        /// Offending character
        character: char,
        /// 0-based character offset
        position: usize,
    },

    /// Digit run that does not fit a 64-bit integer
    #[error("Invalid number literal '{literal}' at position {position}")]
    InvalidNumber {
        /// Digits as written
        literal: String,
        /// 0-based character offset of the first digit
        position: usize,
    },

    // Syntax errors
    /// Token did not match what the grammar expects
    ///
    /// **Triggered by:** Incomplete or malformed statements
    /// **Example:** `let x =` (expression missing after `=`)
    #[error("Syntax error at position {position}: expected {expected}, got {got}")]
    UnexpectedToken {
        /// Expected token kind(s)
        expected: String,
        /// Actual token kind
        got: String,
        /// 0-based character offset of the actual token
        position: usize,
    },

    // Runtime errors
    /// Reference to a variable that was never declared
    ///
    /// **Prevention:** Declare with `let name = value` before use
    #[error("Undefined variable: {name}")]
    UndefinedVariable {
        /// Variable name
        name: String,
    },

    /// Division by zero error
    #[error("Division by zero")]
    DivisionByZero,

    /// Integer arithmetic left the 64-bit range
    #[error("Integer overflow: {left} {op} {right}")]
    IntegerOverflow {
        /// Operator symbol
        op: char,
        /// Left operand
        left: i64,
        /// Right operand
        right: i64,
    },

    /// Operator symbol outside `+ - * /`
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    /// The output sink rejected a value
    #[error("Output error: {0}")]
    OutputError(String),
}

/// Error category, one per failure class of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Tokenizer rejected the input
    Lexical,
    /// Parser rejected the token sequence
    Syntax,
    /// Undefined variable
    Name,
    /// Division by zero or integer overflow
    Arithmetic,
    /// Invariant violation or sink failure
    Internal,
}

impl Error {
    /// Classify the error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::UnexpectedCharacter { .. } | Error::InvalidNumber { .. } => {
                ErrorCategory::Lexical
            }
            Error::UnexpectedToken { .. } => ErrorCategory::Syntax,
            Error::UndefinedVariable { .. } => ErrorCategory::Name,
            Error::DivisionByZero | Error::IntegerOverflow { .. } => ErrorCategory::Arithmetic,
            Error::UnknownOperator(_) | Error::OutputError(_) => ErrorCategory::Internal,
        }
    }

    /// Create a syntax error from expected/actual descriptions
    pub fn unexpected_token(
        expected: impl Into<String>,
        got: impl Into<String>,
        position: usize,
    ) -> Self {
        Error::UnexpectedToken {
            expected: expected.into(),
            got: got.into(),
            position,
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            ErrorCategory::Lexical => "LexicalError",
            ErrorCategory::Syntax => "SyntaxError",
            ErrorCategory::Name => "NameError",
            ErrorCategory::Arithmetic => "ArithmeticError",
            ErrorCategory::Internal => "InternalError",
        };
        f.write_str(name)
    }
}

/// Result type for TinyLang operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        let lexical = Error::UnexpectedCharacter {
            character: '@',
            position: 3,
        };
        assert_eq!(lexical.category(), ErrorCategory::Lexical);
        assert_eq!(
            Error::unexpected_token("IDENTIFIER", "ASSIGN", 4).category(),
            ErrorCategory::Syntax
        );
        assert_eq!(
            Error::UndefinedVariable {
                name: "y".to_string()
            }
            .category(),
            ErrorCategory::Name
        );
        assert_eq!(Error::DivisionByZero.category(), ErrorCategory::Arithmetic);
        assert_eq!(
            Error::UnknownOperator("%".to_string()).category(),
            ErrorCategory::Internal
        );
    }

    #[test]
    fn test_messages() {
        let err = Error::UnexpectedCharacter {
            character: '@',
            position: 6,
        };
        assert_eq!(err.to_string(), "Unexpected character '@' at position 6");
        assert_eq!(Error::DivisionByZero.to_string(), "Division by zero");
        assert_eq!(ErrorCategory::Name.to_string(), "NameError");
    }
}
