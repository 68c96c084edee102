//! Reverse Polish notation for regexes.
//!
//! Letters `a`..`z` push a character, `1` pushes ε, `*` stars the top of the
//! stack, `+` joins the top two with a union and `.` concatenates them in the
//! order they were pushed, so `ab.c+*` is `(ab+c)*`.

use std::fmt::Display;

use crate::lexer::{self, LexingError, Token};
use crate::util::span::Spanned;

use super::regex::{char_, eps, Regex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolishErrorKind {
    Lexer(LexingError),
    MissingOperand(Token),
    UnusedOperands(usize),
    Empty,
}

pub type PolishError = Spanned<PolishErrorKind>;

impl Display for PolishErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolishErrorKind::Lexer(e) => write!(f, "{e}"),
            PolishErrorKind::MissingOperand(t) => write!(
                f,
                "operator `{}` needs {} operand(s) on the stack",
                t.to_str(),
                t.arity()
            ),
            PolishErrorKind::UnusedOperands(n) => {
                write!(f, "{n} operands are left without an operator")
            }
            PolishErrorKind::Empty => write!(f, "empty expression"),
        }
    }
}

pub fn parse(src: &str) -> Result<Regex, PolishError> {
    let toks = lexer::lex(src).map_err(|e| e.map(PolishErrorKind::Lexer))?;
    let mut stack: Vec<Regex> = vec![];
    for tok in &toks {
        let missing = || {
            Spanned::new(
                PolishErrorKind::MissingOperand(tok.val),
                tok.span.clone(),
            )
        };
        let at = stack.len().checked_sub(tok.arity()).ok_or_else(missing)?;
        let mut operands = stack.split_off(at).into_iter();
        let r = match (tok.val, operands.next(), operands.next()) {
            (Token::Letter(c), None, None) => char_(c),
            (Token::Eps, None, None) => eps(),
            (Token::Star, Some(e), None) => e.star(),
            (Token::Union, Some(left), Some(right)) => left + right,
            (Token::Concat, Some(left), Some(right)) => left * right,
            _ => return Err(missing()),
        };
        stack.push(r);
    }
    match (stack.pop(), stack.len()) {
        (None, _) => Err(Spanned::new(PolishErrorKind::Empty, 0..src.len())),
        (Some(r), 0) => Ok(r),
        (Some(_), n) => Err(Spanned::new(
            PolishErrorKind::UnusedOperands(n + 1),
            0..src.len(),
        )),
    }
}
