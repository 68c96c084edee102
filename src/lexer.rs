use std::{error::Error, fmt::Display};

use logos::{Lexer, Logos};

use crate::util::span::{Span, Spanned};

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub enum LexingError {
    #[default]
    UnknownSymbol,
}

pub type LexerError = Spanned<LexingError>;

impl Display for LexingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexingError::UnknownSymbol => write!(f, "unknown symbol"),
        }
    }
}

impl Error for LexingError {}

/// Tokens of the reverse Polish regex notation.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(error = LexingError)]
pub enum Token {
    #[regex(r"[a-z]", |lex| lex.slice().chars().next())]
    Letter(char),
    #[token("1")]
    Eps,
    #[token("*")]
    Star,
    #[token("+")]
    Union,
    #[token(".")]
    Concat,
}

pub fn lex_plain(s: &str) -> impl Iterator<Item = (Result<Token, LexingError>, Span)> + '_ {
    let lex: Lexer<Token> = Token::lexer(s);
    lex.spanned()
}

pub fn lex(src: &str) -> Result<Vec<Spanned<Token>>, LexerError> {
    lex_plain(src)
        .map(|(tok, span)| match tok {
            Ok(tok) => Ok(Spanned::new(tok, span)),
            Err(e) => Err(Spanned::new(e, span)),
        })
        .collect()
}

impl Token {
    pub fn to_str(&self) -> &'static str {
        match self {
            Token::Letter(_) => "letter",
            Token::Eps => "1",
            Token::Star => "*",
            Token::Union => "+",
            Token::Concat => ".",
        }
    }
    /// Number of operands the token pops off the stack.
    pub fn arity(&self) -> usize {
        match self {
            Token::Letter(_) | Token::Eps => 0,
            Token::Star => 1,
            Token::Union | Token::Concat => 2,
        }
    }
}
