use super::ast::{BinaryOp, Expression, Program, Statement};
use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};
use crate::runtime::Value;

/// Recursive-descent parser over the LL(1) TinyLang grammar
///
/// ```text
/// statement           := variableDeclaration | printStatement | expression
/// variableDeclaration := "let" IDENTIFIER "=" expression
/// printStatement      := "print" "(" expression ")"
/// expression          := term (("+" | "-") term)*
/// term                := factor (("*" | "/") factor)*
/// factor              := NUMBER | IDENTIFIER | "(" expression ")"
/// ```
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    /// Creates a new parser; a sequence missing its `Eof` gets one appended
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| &t.kind) != Some(&TokenKind::Eof) {
            let position = tokens
                .last()
                .map(|t| t.position + t.lexeme.chars().count())
                .unwrap_or(0);
            tokens.push(Token::new(TokenKind::Eof, String::new(), position));
        }
        Parser { tokens, current: 0 }
    }

    /// Parses statements until the end-of-input token
    pub fn parse(&mut self) -> Result<Program> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        tracing::trace!(count = statements.len(), "parsed statements");
        Ok(Program { statements })
    }

    fn parse_statement(&mut self) -> Result<Statement> {
        match self.peek_kind() {
            TokenKind::Let => self.parse_variable_declaration(),
            TokenKind::Print => self.parse_print(),
            _ => Ok(Statement::Expression(self.parse_expression()?)),
        }
    }

    fn parse_variable_declaration(&mut self) -> Result<Statement> {
        self.consume(TokenKind::Let)?;
        let name = self.consume_identifier()?;
        self.consume(TokenKind::Assign)?;
        let value = self.parse_expression()?;
        Ok(Statement::VariableDeclaration { name, value })
    }

    fn parse_print(&mut self) -> Result<Statement> {
        self.consume(TokenKind::Print)?;
        self.consume(TokenKind::LeftParen)?;
        let expr = self.parse_expression()?;
        self.consume(TokenKind::RightParen)?;
        Ok(Statement::Print(expr))
    }

    fn parse_expression(&mut self) -> Result<Expression> {
        let mut left = self.parse_term()?;

        while let Some(op) = self.match_operator(&[TokenKind::Plus, TokenKind::Minus]) {
            let right = self.parse_term()?;
            left = Expression::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expression> {
        let mut left = self.parse_factor()?;

        while let Some(op) = self.match_operator(&[TokenKind::Star, TokenKind::Slash]) {
            let right = self.parse_factor()?;
            left = Expression::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Expression> {
        match self.peek_kind().clone() {
            TokenKind::Number(n) => {
                self.advance();
                Ok(Expression::NumberLiteral(Value::Int(n)))
            }
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(Expression::Variable(name))
            }
            TokenKind::LeftParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.consume(TokenKind::RightParen)?;
                Ok(expr)
            }
            other => Err(Error::unexpected_token(
                "NUMBER, IDENTIFIER or LPAREN",
                other.name(),
                self.peek().position,
            )),
        }
    }

    /// Consumes the current token if it is one of `kinds`, returning its operator
    fn match_operator(&mut self, kinds: &[TokenKind]) -> Option<BinaryOp> {
        let op = match self.peek_kind() {
            kind if !kinds.contains(kind) => return None,
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            _ => return None,
        };
        self.advance();
        Some(op)
    }

    fn consume(&mut self, expected: TokenKind) -> Result<()> {
        if self.peek_kind() == &expected {
            self.advance();
            Ok(())
        } else {
            Err(self.mismatch(expected.name()))
        }
    }

    fn consume_identifier(&mut self) -> Result<String> {
        match self.peek_kind() {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.mismatch("IDENTIFIER")),
        }
    }

    fn mismatch(&self, expected: &str) -> Error {
        let token = self.peek();
        Error::unexpected_token(expected, token.kind.name(), token.position)
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek_kind(), TokenKind::Eof)
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn peek_kind(&self) -> &TokenKind {
        &self.peek().kind
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }
}
