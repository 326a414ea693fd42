use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::parser::{BinaryOp, Expression, Program, Statement};
use crate::runtime::{Environment, OutputSink, StdoutSink, Value};

/// Tree-walking evaluator
///
/// Owns the session's [`Environment`] and the sink `print` writes to.
/// Bindings made by one statement are visible to every later statement
/// evaluated by the same instance.
pub struct Evaluator<S: OutputSink = StdoutSink> {
    env: Environment,
    sink: S,
}

impl Evaluator<StdoutSink> {
    /// Creates an evaluator printing to standard output
    pub fn new() -> Self {
        Evaluator::with_sink(StdoutSink)
    }
}

impl Default for Evaluator<StdoutSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: OutputSink> Evaluator<S> {
    /// Creates an evaluator with an empty environment and a custom sink
    pub fn with_sink(sink: S) -> Self {
        Evaluator::with_environment(Environment::new(), sink)
    }

    /// Creates an evaluator resuming from an existing environment
    pub fn with_environment(env: Environment, sink: S) -> Self {
        Evaluator { env, sink }
    }

    /// Current variable bindings
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Copy of the current variable bindings
    pub fn snapshot(&self) -> HashMap<String, Value> {
        self.env.snapshot()
    }

    /// The output sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the output sink
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the evaluator, returning its sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Consumes the evaluator, returning environment and sink
    pub fn into_parts(self) -> (Environment, S) {
        (self.env, self.sink)
    }

    /// Drops every binding
    pub fn reset(&mut self) {
        self.env.clear();
    }

    /// Executes statements in order, returning the value of the last one
    ///
    /// Stops at the first failure; effects of earlier statements are kept.
    pub fn execute(&mut self, program: &Program) -> Result<Option<Value>> {
        let mut last_val = None;

        for statement in &program.statements {
            last_val = Some(self.evaluate(statement)?);
        }

        Ok(last_val)
    }

    /// Evaluates one statement
    pub fn evaluate(&mut self, stmt: &Statement) -> Result<Value> {
        match stmt {
            Statement::VariableDeclaration { name, value } => {
                let val = self.evaluate_expression(value)?;
                tracing::debug!(name = %name, value = %val, "bind variable");
                self.env.define(name.clone(), val);
                Ok(val)
            }

            Statement::Print(expr) => {
                let val = self.evaluate_expression(expr)?;
                tracing::debug!(value = %val, "print");
                self.sink.emit(&val)?;
                Ok(val)
            }

            Statement::Expression(expr) => self.evaluate_expression(expr),
        }
    }

    /// Evaluates one expression
    pub fn evaluate_expression(&self, expr: &Expression) -> Result<Value> {
        match expr {
            Expression::NumberLiteral(v) => Ok(*v),

            Expression::Binary { left, op, right } => {
                let left_val = self.evaluate_expression(left)?;
                let right_val = self.evaluate_expression(right)?;
                apply_binary_op(*op, left_val, right_val)
            }

            Expression::Variable(name) => self.env.get(name),
        }
    }
}

/// Applies a binary operator
///
/// `+ - *` stay integral when both operands are integers and promote to
/// float otherwise. `/` is always floating-point division.
pub fn apply_binary_op(op: BinaryOp, left: Value, right: Value) -> Result<Value> {
    match op {
        BinaryOp::Div => {
            if right.is_zero() {
                return Err(Error::DivisionByZero);
            }
            Ok(Value::Float(left.as_float() / right.as_float()))
        }
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul => match (left, right) {
            (Value::Int(l), Value::Int(r)) => {
                let result = match op {
                    BinaryOp::Add => l.checked_add(r),
                    BinaryOp::Sub => l.checked_sub(r),
                    _ => l.checked_mul(r),
                };
                result.map(Value::Int).ok_or(Error::IntegerOverflow {
                    op: op.symbol(),
                    left: l,
                    right: r,
                })
            }
            _ => {
                let (l, r) = (left.as_float(), right.as_float());
                let result = match op {
                    BinaryOp::Add => l + r,
                    BinaryOp::Sub => l - r,
                    _ => l * r,
                };
                Ok(Value::Float(result))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::parse;

    fn run(evaluator: &mut Evaluator<Vec<Value>>, source: &str) -> Result<Option<Value>> {
        let program = parse(tokenize(source)?)?;
        evaluator.execute(&program)
    }

    fn eval(source: &str) -> Result<Option<Value>> {
        run(&mut Evaluator::with_sink(Vec::<Value>::new()), source)
    }

    #[test]
    fn test_arithmetic_precedence() {
        assert_eq!(eval("5 + 3 * 2").unwrap(), Some(Value::Int(11)));
        assert_eq!(eval("8 - 4").unwrap(), Some(Value::Int(4)));
        assert_eq!(eval("(5 + 3) * 2").unwrap(), Some(Value::Int(16)));
        assert_eq!(eval("10 - 4 - 3").unwrap(), Some(Value::Int(3)));
    }

    #[test]
    fn test_division_is_float() {
        assert_eq!(eval("(10 + 5) / 3").unwrap(), Some(Value::Float(5.0)));
        assert_eq!(eval("8 / 2").unwrap(), Some(Value::Float(4.0)));
        assert_eq!(eval("7 / 2").unwrap(), Some(Value::Float(3.5)));
    }

    #[test]
    fn test_float_promotion() {
        assert_eq!(eval("8 / 2 + 1").unwrap(), Some(Value::Float(5.0)));
        assert_eq!(eval("3 * (1 / 2)").unwrap(), Some(Value::Float(1.5)));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval("5 / 0"), Err(Error::DivisionByZero));
        assert_eq!(eval("5 / (2 - 2)"), Err(Error::DivisionByZero));
        assert_eq!(eval("5 / (0 / 1)"), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_integer_overflow() {
        let err = eval("9223372036854775807 + 1").unwrap_err();
        assert!(matches!(err, Error::IntegerOverflow { op: '+', .. }));
    }

    #[test]
    fn test_variables_persist() {
        let mut evaluator = Evaluator::with_sink(Vec::<Value>::new());
        run(&mut evaluator, "let x = 10").unwrap();
        run(&mut evaluator, "let y = x + 5").unwrap();
        let printed = run(&mut evaluator, "print(y)").unwrap();

        assert_eq!(printed, Some(Value::Int(15)));
        assert_eq!(evaluator.sink(), &vec![Value::Int(15)]);
    }

    #[test]
    fn test_redeclaration_rebinds() {
        let mut evaluator = Evaluator::with_sink(Vec::<Value>::new());
        run(&mut evaluator, "let x = 1").unwrap();
        run(&mut evaluator, "let x = x + 1").unwrap();
        run(&mut evaluator, "print(x)").unwrap();

        assert_eq!(evaluator.into_sink(), vec![Value::Int(2)]);
    }

    #[test]
    fn test_declaration_yields_value() {
        assert_eq!(eval("let z = 2 * 3").unwrap(), Some(Value::Int(6)));
    }

    #[test]
    fn test_undefined_variable_prints_nothing() {
        let mut evaluator = Evaluator::with_sink(Vec::<Value>::new());
        let err = run(&mut evaluator, "print(undefined_name)").unwrap_err();

        assert_eq!(
            err,
            Error::UndefinedVariable {
                name: "undefined_name".to_string()
            }
        );
        assert!(evaluator.sink().is_empty());
    }

    #[test]
    fn test_left_operand_evaluated_first() {
        let mut evaluator = Evaluator::with_sink(Vec::<Value>::new());
        let err = run(&mut evaluator, "print(missing1 + missing2)").unwrap_err();
        assert_eq!(
            err,
            Error::UndefinedVariable {
                name: "missing1".to_string()
            }
        );
        assert!(evaluator.sink().is_empty());

        // The left subtree fails before the right one divides by zero
        assert_eq!(
            eval("(1 * missing) + 1 / 0"),
            Err(Error::UndefinedVariable {
                name: "missing".to_string()
            })
        );
        assert_eq!(eval("1 / 0 - missing"), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_failed_declaration_keeps_old_binding() {
        let mut evaluator = Evaluator::with_sink(Vec::<Value>::new());
        run(&mut evaluator, "let x = 3").unwrap();
        assert!(run(&mut evaluator, "let x = x / 0").is_err());
        assert!(run(&mut evaluator, "let y = missing").is_err());

        assert_eq!(evaluator.environment().get("x"), Ok(Value::Int(3)));
        assert!(!evaluator.environment().exists("y"));
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(eval("").unwrap(), None);
    }

    #[test]
    fn test_reset_and_parts() {
        let mut evaluator = Evaluator::with_sink(Vec::<Value>::new());
        run(&mut evaluator, "let a = 1").unwrap();
        let (env, _) = evaluator.into_parts();

        let mut resumed = Evaluator::with_environment(env, Vec::<Value>::new());
        assert_eq!(run(&mut resumed, "a + 1").unwrap(), Some(Value::Int(2)));

        resumed.reset();
        assert!(resumed.snapshot().is_empty());
    }

    #[test]
    fn test_apply_binary_op_mixed() {
        assert_eq!(
            apply_binary_op(BinaryOp::Sub, Value::Float(1.5), Value::Int(1)),
            Ok(Value::Float(0.5))
        );
        assert_eq!(
            apply_binary_op(BinaryOp::Div, Value::Int(1), Value::Float(0.0)),
            Err(Error::DivisionByZero)
        );
    }
}
