use std::fmt;

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A quoted string literal. The lexeme keeps its surrounding quotes.
    String,
    /// An unsigned integer literal.
    Number,
    /// A variable name.
    Identifier,
    /// A reserved word or multi-word phrase such as `is greater than`.
    Keyword,
    /// Synthetic marker appended once at the end of every token stream.
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::String => "string literal",
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::EndOfInput => "end of input",
        };
        write!(f, "{}", name)
    }
}

/// A classified lexical unit: its kind plus the exact matched source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    pub fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, "")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == TokenKind::EndOfInput {
            write!(f, "end of input")
        } else {
            write!(f, "`{}`", self.lexeme)
        }
    }
}

/// Drops the surrounding quote characters from a string-literal lexeme.
pub fn strip_quotes(lexeme: &str) -> &str {
    lexeme
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(lexeme)
}
