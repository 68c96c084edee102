use std::str::FromStr;

use peg::{error::ParseError, str::LineCol};

use super::regex::{char_, eps, is_special_char, zero, Regex};

// Accepts everything `Display` prints, plus `|` for union, `1` for ε and
// whitespace between tokens.
#[cfg_attr(rustfmt, rustfmt_skip)]
peg::parser! {
    pub grammar regex_parser() for str {
        rule _ = quiet!{[c if c.is_whitespace()]*}

        pub rule expr() -> Regex
            = _ e:expr_sum() _ { e }

        rule expr_sum() -> Regex
            = e:expr_seq() es:(_ ['+' | '|'] _ e:expr_seq() { e })* {
                es.into_iter().fold(e, |r, e| r + e)
            }

        rule expr_seq() -> Regex
            = es:(e:expr_un() _ { e })+ {
                es.into_iter().fold(eps(), |r, e| r * e)
            }

        rule expr_un() -> Regex
            = e:expr_atom() stars:(_ ['*'])* {
                if stars.is_empty() { e } else { e.star() }
            }

        rule expr_atom() -> Regex
            = ['('] _ [')'] { zero() }
            / ['('] _ e:expr_sum() _ [')'] { e }
            / ['∅'] { zero() }
            / ['ε' | '1'] { eps() }
            / c:letter() { char_(c) }

        rule letter() -> char
            = c:[c if !is_special_char(c)] { c }
            / ['\\'] c:[c if is_special_char(c)] { c }
    }
}

impl Regex {
    pub fn parse(s: &str) -> Result<Self, ParseError<LineCol>> {
        regex_parser::expr(s)
    }
}

impl FromStr for Regex {
    type Err = ParseError<LineCol>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Regex::parse(s)
    }
}
