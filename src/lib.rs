pub mod ast;
pub mod interpreter;
pub mod lexer;
pub mod token;
pub mod value;

pub use ast::{CompareOp, Expr, Stmt};
pub use token::{Token, TokenKind};
pub use value::Value;

use interpreter::{RuntimeError, SyntaxError};
use std::fmt;

/// Any failure a program run can surface: the parse aborted, or a
/// statement hit a runtime error. Both abort the run immediately.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Syntax(SyntaxError),
    Runtime(RuntimeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax(err) => write!(f, "{}", err),
            Error::Runtime(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Syntax(err) => Some(err),
            Error::Runtime(err) => Some(err),
        }
    }
}

impl From<SyntaxError> for Error {
    fn from(err: SyntaxError) -> Self {
        Error::Syntax(err)
    }
}

impl From<RuntimeError> for Error {
    fn from(err: RuntimeError) -> Self {
        Error::Runtime(err)
    }
}
