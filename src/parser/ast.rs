use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;
use crate::runtime::Value;

/// Parsed program: the statements of one line, in source order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    /// Top-level statements in the program
    pub statements: Vec<Statement>,
}

impl Program {
    /// Returns true if the line held no statements
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// Statements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// Variable declaration: `let name = value`
    VariableDeclaration {
        /// Name of the variable to bind
        name: String,
        /// Expression value to bind
        value: Expression,
    },

    /// Print statement: `print(expr)`
    Print(Expression),

    /// Expression statement
    Expression(Expression),
}

/// Expressions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Numeric literal
    NumberLiteral(Value),

    /// Binary operation
    Binary {
        /// Left operand
        left: Box<Expression>,
        /// Operator
        op: BinaryOp,
        /// Right operand
        right: Box<Expression>,
    },

    /// Variable reference
    Variable(String),
}

impl Expression {
    /// Builds a binary expression node
    pub fn binary(left: Expression, op: BinaryOp, right: Expression) -> Self {
        Expression::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

/// Binary operators, serialized as their source symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BinaryOp {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Sub,
    /// Multiplication (*)
    Mul,
    /// Division (/), always floating-point
    Div,
}

impl BinaryOp {
    /// Source symbol of the operator
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }

    /// Operator for a source symbol; anything else is an unknown operator
    pub fn from_symbol(symbol: &str) -> Result<Self, Error> {
        match symbol {
            "+" => Ok(BinaryOp::Add),
            "-" => Ok(BinaryOp::Sub),
            "*" => Ok(BinaryOp::Mul),
            "/" => Ok(BinaryOp::Div),
            other => Err(Error::UnknownOperator(other.to_string())),
        }
    }
}

impl TryFrom<String> for BinaryOp {
    type Error = Error;

    fn try_from(symbol: String) -> Result<Self, Self::Error> {
        BinaryOp::from_symbol(&symbol)
    }
}

impl From<BinaryOp> for String {
    fn from(op: BinaryOp) -> Self {
        op.symbol().to_string()
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::NumberLiteral(v) => write!(f, "{}", v),
            Expression::Binary { left, op, right } => write!(f, "({} {} {})", left, op, right),
            Expression::Variable(name) => write!(f, "{}", name),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Statement::VariableDeclaration { name, value } => write!(f, "let {} = {}", name, value),
            Statement::Print(expr) => write!(f, "print({})", expr),
            Statement::Expression(expr) => write!(f, "{}", expr),
        }
    }
}
