use chumsky::prelude::*;

use crate::token::{Token, TokenKind};

/// Builds the token-level lexer for the language.
///
/// Categories are tried in a fixed priority order at every position:
/// string literal, multi-word comparison keyword, number, then word.
/// Single-word keywords are recognized by mapping the maximal identifier
/// slice through the reserved-word table, so a keyword can never be
/// misread as an identifier and an identifier with a keyword prefix
/// (`sayonara`, `endless`) is never split. Characters matching no
/// category are discarded, which makes the lexer total.
pub fn lexer<'a>() -> impl Parser<'a, &'a str, Vec<Token>, extra::Err<Simple<'a, char>>> {
    // No escape handling and no embedded quotes; the lexeme keeps both
    // quote characters.
    let string = just('"')
        .then(none_of('"').repeated())
        .then(just('"'))
        .to_slice()
        .map(|s: &str| Token::new(TokenKind::String, s));

    let word_char = any().filter(|c: &char| c.is_alphanumeric() || *c == '_');

    // Multi-word phrases must be matched before plain words, and only at
    // a word boundary: `is greater thanks` is three identifiers.
    let comparison = choice((
        just("is greater than"),
        just("is less than"),
        just("is equal to"),
    ))
    .then_ignore(word_char.not())
    .map(|s: &str| Token::new(TokenKind::Keyword, s));

    let number = text::digits(10)
        .to_slice()
        .map(|s: &str| Token::new(TokenKind::Number, s));

    let word = text::ident().map(|s: &str| match s {
        "say" | "let" | "be" | "if" | "then" | "repeat" | "times" | "while" | "do" | "end" => {
            Token::new(TokenKind::Keyword, s)
        }
        _ => Token::new(TokenKind::Identifier, s),
    });

    let token = choice((string, comparison, number, word));

    token
        .padded()
        .map(Some)
        .or(any().to(None))
        .repeated()
        .collect::<Vec<Option<Token>>>()
        .then_ignore(end())
        .map(|raw| {
            let mut tokens: Vec<Token> = raw.into_iter().flatten().collect();
            tokens.push(Token::end_of_input());
            tokens
        })
}

/// Converts source text into tokens, terminated by one `EndOfInput`.
pub fn tokenize(source: &str) -> Vec<Token> {
    lexer()
        .parse(source)
        .into_output()
        .unwrap_or_else(|| vec![Token::end_of_input()])
}
