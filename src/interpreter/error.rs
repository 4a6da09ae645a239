use std::fmt;

/// An error raised while executing a program. Execution aborts on the
/// first error; there is no recovery or partial-result reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// An identifier was evaluated before any `let` bound it.
    UndefinedVariable { name: String },
    /// An operation was applied to values of the wrong type.
    TypeError { message: String },
}

impl RuntimeError {
    pub fn undefined_variable(name: impl Into<String>) -> Self {
        Self::UndefinedVariable { name: name.into() }
    }

    pub fn type_error(message: impl Into<String>) -> Self {
        Self::TypeError {
            message: message.into(),
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::UndefinedVariable { name } => {
                write!(f, "undefined variable `{}`", name)
            }
            RuntimeError::TypeError { message } => write!(f, "type error: {}", message),
        }
    }
}

impl std::error::Error for RuntimeError {}
