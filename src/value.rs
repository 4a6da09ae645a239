use std::fmt;

/// A runtime value: the language knows integers, strings and booleans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Str(String),
    Bool(bool),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        if let Value::Int(numeric_value) = self {
            Some(*numeric_value)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::Str(string_value) = self {
            Some(string_value.as_str())
        } else {
            None
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(bool_value) = self {
            Some(*bool_value)
        } else {
            None
        }
    }

    /// User-facing name of the value's type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(numeric_value) => write!(f, "{}", numeric_value),
            Value::Str(string_value) => write!(f, "{}", string_value),
            Value::Bool(bool_value) => write!(f, "{}", bool_value),
        }
    }
}
