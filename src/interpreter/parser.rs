use std::fmt;

use crate::ast::{CompareOp, Expr, Stmt};
use crate::token::{strip_quotes, Token, TokenKind};

/// A parse failure, carrying the token the parser stopped on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub found: Token,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, found: Token) -> Self {
        Self {
            message: message.into(),
            found,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "syntax error: {}, found {}", self.message, self.found)
    }
}

impl std::error::Error for SyntaxError {}

/// Recursive-descent parser over the lexer's token stream.
///
/// Holds nothing but the tokens and an integer cursor; the grammar is
/// LL(1) after lexing, so one token of lookahead decides every rule and
/// no backtracking is ever required. Parsing aborts on the first error.
pub struct TokenParser {
    tokens: Vec<Token>,
    current: usize,
}

impl TokenParser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        // The grammar relies on a trailing end-of-input marker; restore it
        // if the caller built the token list by hand without one.
        if tokens.last().map(|t| t.kind) != Some(TokenKind::EndOfInput) {
            tokens.push(Token::end_of_input());
        }
        Self { tokens, current: 0 }
    }

    /// Parses every statement up to end of input.
    pub fn parse(&mut self) -> Result<Vec<Stmt>, SyntaxError> {
        let mut statements = Vec::new();
        while !self.matches(TokenKind::EndOfInput, None) {
            statements.push(self.statement()?);
        }
        Ok(statements)
    }

    fn statement(&mut self) -> Result<Stmt, SyntaxError> {
        let token = self.peek().clone();
        if token.kind == TokenKind::Keyword {
            match token.lexeme.as_str() {
                "say" => {
                    self.advance();
                    return self.print_statement();
                }
                "let" => {
                    self.advance();
                    return self.assign_statement();
                }
                "if" => {
                    self.advance();
                    return self.if_statement();
                }
                "repeat" => {
                    self.advance();
                    return self.repeat_statement();
                }
                "while" => {
                    self.advance();
                    return self.while_statement();
                }
                _ => {}
            }
        }
        Err(SyntaxError::new("expected a statement", token))
    }

    fn print_statement(&mut self) -> Result<Stmt, SyntaxError> {
        let text = self.consume(TokenKind::String, None)?;
        Ok(Stmt::Print(text.lexeme))
    }

    fn assign_statement(&mut self) -> Result<Stmt, SyntaxError> {
        let name = self.consume(TokenKind::Identifier, None)?;
        self.consume(TokenKind::Keyword, Some("be"))?;
        let value = self.expression()?;
        Ok(Stmt::Assign {
            name: name.lexeme,
            value,
        })
    }

    fn if_statement(&mut self) -> Result<Stmt, SyntaxError> {
        let condition = self.expression()?;
        self.consume(TokenKind::Keyword, Some("then"))?;
        let body = self.statement()?;
        Ok(Stmt::If {
            condition,
            body: Box::new(body),
        })
    }

    fn repeat_statement(&mut self) -> Result<Stmt, SyntaxError> {
        let count_token = self.consume(TokenKind::Number, None)?;
        let count = count_token
            .lexeme
            .parse::<u64>()
            .map_err(|_| SyntaxError::new("repeat count out of range", count_token.clone()))?;
        self.consume(TokenKind::Keyword, Some("times"))?;
        let body = self.statement()?;
        Ok(Stmt::Repeat {
            count,
            body: Box::new(body),
        })
    }

    fn while_statement(&mut self) -> Result<Stmt, SyntaxError> {
        let condition = self.expression()?;
        self.consume(TokenKind::Keyword, Some("do"))?;

        let mut body = Vec::new();
        while !self.matches(TokenKind::Keyword, Some("end")) {
            if self.matches(TokenKind::EndOfInput, None) {
                return Err(SyntaxError::new(
                    "unterminated while block, expected `end`",
                    self.peek().clone(),
                ));
            }
            body.push(self.statement()?);
        }
        self.consume(TokenKind::Keyword, Some("end"))?;

        Ok(Stmt::While { condition, body })
    }

    /// A primary, optionally followed by an infix comparison keyword and
    /// a right-hand primary. Comparisons do not nest, so there is no
    /// precedence chain.
    fn expression(&mut self) -> Result<Expr, SyntaxError> {
        let left = self.primary()?;
        if let Some(op) = self.comparison_op() {
            self.advance();
            let right = self.primary()?;
            return Ok(Expr::Comparison {
                op,
                left: Box::new(left),
                right: Box::new(right),
            });
        }
        Ok(left)
    }

    fn primary(&mut self) -> Result<Expr, SyntaxError> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::Number => {
                self.advance();
                let value = token
                    .lexeme
                    .parse::<i64>()
                    .map_err(|_| SyntaxError::new("number literal out of range", token.clone()))?;
                Ok(Expr::Number(value))
            }
            TokenKind::String => {
                self.advance();
                Ok(Expr::String(strip_quotes(&token.lexeme).to_string()))
            }
            TokenKind::Identifier => {
                self.advance();
                Ok(Expr::Identifier(token.lexeme))
            }
            _ => Err(SyntaxError::new("expected an expression", token)),
        }
    }

    /// Non-consuming check for a comparison keyword at the cursor.
    fn comparison_op(&self) -> Option<CompareOp> {
        let token = self.peek();
        if token.kind != TokenKind::Keyword {
            return None;
        }
        match token.lexeme.as_str() {
            "is greater than" => Some(CompareOp::GreaterThan),
            "is less than" => Some(CompareOp::LessThan),
            "is equal to" => Some(CompareOp::EqualTo),
            _ => None,
        }
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    /// Non-consuming test of the current token's kind and, when given,
    /// its exact lexeme.
    fn matches(&self, kind: TokenKind, lexeme: Option<&str>) -> bool {
        let token = self.peek();
        token.kind == kind && lexeme.is_none_or(|expected| token.lexeme == expected)
    }

    /// Asserting advance: returns the current token when it matches,
    /// otherwise fails without consuming it.
    fn consume(&mut self, kind: TokenKind, lexeme: Option<&str>) -> Result<Token, SyntaxError> {
        if self.matches(kind, lexeme) {
            Ok(self.advance())
        } else {
            let expected = match lexeme {
                Some(word) => format!("expected `{}`", word),
                None => format!("expected {}", kind),
            };
            Err(SyntaxError::new(expected, self.peek().clone()))
        }
    }

    /// Returns the current token and moves the cursor forward, holding at
    /// the end-of-input marker.
    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.current < self.tokens.len() - 1 {
            self.current += 1;
        }
        token
    }
}
