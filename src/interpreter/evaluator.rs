use crate::ast::{CompareOp, Expr, Stmt};
use crate::lexer::tokenize;
use crate::token::strip_quotes;
use crate::value::Value;
use crate::Error;

use super::environment::Environment;
use super::error::RuntimeError;
use super::output::{OutputSink, StdoutSink};
use super::parser::TokenParser;

/// Tree-walking executor.
///
/// Owns the variable environment for one program run and borrows the
/// output sink for its lifetime. Statements execute eagerly and in
/// order; evaluation reads the environment but never writes it — all
/// mutation happens in `let`.
pub struct Interpreter<'a> {
    env: Environment,
    out: &'a mut dyn OutputSink,
}

impl<'a> Interpreter<'a> {
    pub fn new(out: &'a mut dyn OutputSink) -> Self {
        Self {
            env: Environment::new(),
            out,
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn into_env(self) -> Environment {
        self.env
    }

    /// Executes each top-level statement in order, aborting on the first
    /// runtime error.
    pub fn run(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            self.execute_statement(statement)?;
        }
        Ok(())
    }

    fn execute_statement(&mut self, statement: &Stmt) -> Result<(), RuntimeError> {
        match statement {
            Stmt::Print(text) => {
                self.out.write_line(strip_quotes(text));
                Ok(())
            }
            Stmt::Assign { name, value } => {
                let val = self.evaluate(value)?;
                self.env.set(name.clone(), val);
                Ok(())
            }
            Stmt::If { condition, body } => {
                if self.truth_value(condition, "if")? {
                    self.execute_statement(body)?;
                }
                Ok(())
            }
            Stmt::Repeat { count, body } => {
                for _ in 0..*count {
                    self.execute_statement(body)?;
                }
                Ok(())
            }
            Stmt::While { condition, body } => {
                // Re-evaluated before every iteration; zero iterations
                // when initially false.
                while self.truth_value(condition, "while")? {
                    for statement in body {
                        self.execute_statement(statement)?;
                    }
                }
                Ok(())
            }
        }
    }

    fn evaluate(&self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Number(value) => Ok(Value::Int(*value)),
            Expr::String(text) => Ok(Value::Str(text.clone())),
            Expr::Identifier(name) => self
                .env
                .get(name)
                .cloned()
                .ok_or_else(|| RuntimeError::undefined_variable(name.clone())),
            Expr::Comparison { op, left, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                compare(*op, &left_val, &right_val)
            }
        }
    }

    /// Evaluates a condition that the grammar requires to be boolean.
    fn truth_value(&self, condition: &Expr, construct: &str) -> Result<bool, RuntimeError> {
        let value = self.evaluate(condition)?;
        value.as_bool().ok_or_else(|| {
            RuntimeError::type_error(format!(
                "{} condition must be a boolean, got {}",
                construct,
                value.type_name()
            ))
        })
    }
}

/// Applies a relational operator to two values. Operands must be of the
/// same type; numbers and strings support all three operators, booleans
/// support equality only. Nothing is coerced.
fn compare(op: CompareOp, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    let result = match (left, right) {
        (Value::Int(left_num), Value::Int(right_num)) => match op {
            CompareOp::GreaterThan => left_num > right_num,
            CompareOp::LessThan => left_num < right_num,
            CompareOp::EqualTo => left_num == right_num,
        },
        (Value::Str(left_str), Value::Str(right_str)) => match op {
            CompareOp::GreaterThan => left_str > right_str,
            CompareOp::LessThan => left_str < right_str,
            CompareOp::EqualTo => left_str == right_str,
        },
        (Value::Bool(left_bool), Value::Bool(right_bool)) => match op {
            CompareOp::EqualTo => left_bool == right_bool,
            CompareOp::GreaterThan | CompareOp::LessThan => {
                return Err(RuntimeError::type_error(
                    "booleans support `is equal to` only",
                ));
            }
        },
        _ => {
            return Err(RuntimeError::type_error(format!(
                "cannot compare {} with {}",
                left.type_name(),
                right.type_name()
            )));
        }
    };
    Ok(Value::Bool(result))
}

/// Public entry point: lex, parse and execute a source program, writing
/// `say` output to stdout.
pub fn run(source: &str) -> Result<(), Error> {
    let mut sink = StdoutSink;
    run_with_sink(source, &mut sink)?;
    Ok(())
}

/// Runs a source program against a caller-supplied output sink and
/// returns the final variable environment.
pub fn run_with_sink(source: &str, sink: &mut dyn OutputSink) -> Result<Environment, Error> {
    let tokens = tokenize(source);
    let mut parser = TokenParser::new(tokens);
    let statements = parser.parse()?;

    let mut interpreter = Interpreter::new(sink);
    interpreter.run(&statements)?;
    Ok(interpreter.into_env())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::output::MemorySink;

    fn run_source(source: &str) -> (Vec<String>, Environment) {
        let mut sink = MemorySink::new();
        let env = run_with_sink(source, &mut sink).expect("program should run");
        (sink.into_lines(), env)
    }

    fn run_source_err(source: &str) -> Error {
        let mut sink = MemorySink::new();
        run_with_sink(source, &mut sink).expect_err("program should fail")
    }

    #[test]
    fn test_print_strips_quotes() {
        let (lines, env) = run_source("say \"Hello, World!\"");
        assert_eq!(lines, ["Hello, World!"]);
        assert!(env.is_empty());
    }

    #[test]
    fn test_assign_then_lookup() {
        let (_, env) = run_source("let x be 5 let y be x");
        assert_eq!(env.get("x"), Some(&Value::Int(5)));
        assert_eq!(env.get("y"), Some(&Value::Int(5)));
    }

    #[test]
    fn test_repeat_zero_is_silent() {
        let (lines, _) = run_source("repeat 0 times say \"never\"");
        assert!(lines.is_empty());
    }

    #[test]
    fn test_compare_int() {
        assert_eq!(
            compare(CompareOp::GreaterThan, &Value::Int(5), &Value::Int(3)),
            Ok(Value::Bool(true))
        );
        assert_eq!(
            compare(CompareOp::LessThan, &Value::Int(5), &Value::Int(3)),
            Ok(Value::Bool(false))
        );
        assert_eq!(
            compare(CompareOp::EqualTo, &Value::Int(5), &Value::Int(5)),
            Ok(Value::Bool(true))
        );
    }

    #[test]
    fn test_compare_strings_lexicographic() {
        let apple = Value::Str("apple".to_string());
        let pear = Value::Str("pear".to_string());
        assert_eq!(
            compare(CompareOp::LessThan, &apple, &pear),
            Ok(Value::Bool(true))
        );
        assert_eq!(
            compare(CompareOp::EqualTo, &apple, &apple),
            Ok(Value::Bool(true))
        );
    }

    #[test]
    fn test_compare_cross_type_is_error() {
        let err = compare(
            CompareOp::EqualTo,
            &Value::Str("5".to_string()),
            &Value::Int(5),
        )
        .expect_err("should fail");
        assert!(matches!(err, RuntimeError::TypeError { .. }));
    }

    #[test]
    fn test_compare_bool_ordering_is_error() {
        let err = compare(CompareOp::GreaterThan, &Value::Bool(true), &Value::Bool(false))
            .expect_err("should fail");
        assert!(matches!(err, RuntimeError::TypeError { .. }));
    }

    #[test]
    fn test_if_condition_must_be_boolean() {
        let err = run_source_err("if 5 then say \"x\"");
        assert!(matches!(
            err,
            Error::Runtime(RuntimeError::TypeError { .. })
        ));
    }

    #[test]
    fn test_undefined_variable() {
        let err = run_source_err("let y be x");
        assert!(matches!(
            err,
            Error::Runtime(RuntimeError::UndefinedVariable { name }) if name == "x"
        ));
    }
}
