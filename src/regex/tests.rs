use std::collections::BTreeSet;

use crate::lexer::{lex, LexingError, Token};
use crate::regex::polish::{self, PolishErrorKind};
use crate::regex::*;

fn a() -> Regex {
    char_('a')
}
fn b() -> Regex {
    char_('b')
}
fn c() -> Regex {
    char_('c')
}

#[test]
fn smart_constructors() {
    assert_eq!(eps() * a(), a());
    assert_eq!(a() * eps(), a());
    assert_eq!(zero() * a(), zero());
    assert_eq!(a() * zero(), zero());
    assert_eq!(zero() + a(), a());
    assert_eq!(a() + zero(), a());
    assert_eq!(a() + b() + c(), Regex::Sum(vec![a(), b(), c()]));
    assert_eq!(a() * b() * c(), Regex::Concat(vec![a(), b(), c()]));
    assert_eq!(union(a(), b()), a().union(&b()));
    assert_eq!(concat(a(), b()), a().concat(&b()));
    assert_eq!(Regex::char('a'), a());
}

#[test]
fn assign_operators() {
    let mut e = zero();
    e += a();
    e += b();
    assert_eq!(e, a() + b());
    let mut e = eps();
    e *= a();
    e *= b();
    assert_eq!(e, word("ab"));
}

#[test]
fn words() {
    assert_eq!(word(""), eps());
    assert_eq!(word("a"), a());
    assert_eq!(word("abc"), Regex::Concat(vec![a(), b(), c()]));
    assert_eq!(word("abc").size(), 4);
    assert_eq!((word("ab") + c()).star().size(), 6);
}

#[test]
fn star_rules() {
    assert_eq!(eps().star(), eps());
    assert_eq!(zero().star(), eps());
    assert_eq!(star(a()), Regex::Star(Box::new(a())));
    assert_eq!(a().star().star(), a().star());
}

#[test]
fn predicates() {
    assert!(eps().is_empty());
    assert!(zero().is_zero());
    assert!(!eps().is_zero());
    assert!(a().is_char());
    assert!(eps().is_char());
    assert_eq!(a().as_letter(), Some('a'));
    assert_eq!(eps().as_letter(), None);
    assert_eq!(Regex::default(), Regex::empty());
    assert_eq!(Regex::zero(), zero());
}

#[test]
fn alphabet() {
    let e = (word("ab") + c()).star() * eps();
    assert_eq!(e.alphabet(), BTreeSet::from(['a', 'b', 'c']));
    assert!(eps().alphabet().is_empty());
}

#[test]
fn display() {
    assert_eq!(eps().to_string(), "ε");
    assert_eq!(zero().to_string(), "∅");
    assert_eq!(word("ab").to_string(), "ab");
    assert_eq!((a() + b()).to_string(), "(a+b)");
    assert_eq!(a().star().to_string(), "a*");
    assert_eq!((a() + b()).star().to_string(), "(a+b)*");
    assert_eq!(word("ab").star().to_string(), "(ab)*");
    assert_eq!(((a() + b()).star() * c()).to_string(), "(a+b)*c");
}

#[test]
fn display_escapes_special_letters() {
    for c in ['1', '+', '*', '(', ')', '|', '\\', 'ε', '∅', ' '] {
        let e = char_(c);
        assert_eq!(e.to_string(), format!("\\{c}"));
        assert_eq!(Regex::parse(&e.to_string()).unwrap(), e, "{c:?}");
    }
    let e = char_('1') * char_('a') + char_('+');
    assert_eq!(e.to_string(), "(\\1a+\\+)");
    assert_eq!(Regex::parse(&e.to_string()).unwrap(), e);
}

#[test]
fn parse_basic() {
    assert_eq!(Regex::parse("a").unwrap(), a());
    assert_eq!(Regex::parse("ab").unwrap(), word("ab"));
    assert_eq!(Regex::parse(" a b ").unwrap(), word("ab"));
    assert_eq!(Regex::parse("a+b").unwrap(), a() + b());
    assert_eq!(Regex::parse("a|b").unwrap(), a() + b());
    assert_eq!(Regex::parse("a**").unwrap(), a().star());
    assert_eq!(Regex::parse("ε").unwrap(), eps());
    assert_eq!(Regex::parse("1").unwrap(), eps());
    assert_eq!(Regex::parse("∅").unwrap(), zero());
    assert_eq!(Regex::parse("()").unwrap(), zero());
    assert_eq!(Regex::parse("\\+").unwrap(), char_('+'));
    assert_eq!(
        "(a+b)*c".parse::<Regex>().unwrap(),
        (a() + b()).star() * c()
    );
}

#[test]
fn parse_precedence() {
    // Star binds tighter than concatenation, which binds tighter than union.
    assert_eq!(Regex::parse("ab*+c").unwrap(), a() * b().star() + c());
}

#[test]
fn parse_errors() {
    assert!(Regex::parse("").is_err());
    assert!(Regex::parse("a+").is_err());
    assert!(Regex::parse("(a").is_err());
    assert!(Regex::parse("*a").is_err());
    let e = Regex::parse("ab)").unwrap_err();
    assert_eq!(e.location.offset, 2);
}

#[test]
fn parse_display_round_trip() {
    for src in [
        "(ab+ba)*(ε+a+ba)",
        "(a+b)*c",
        "a*b*",
        "(a+(ab)*)*",
        "∅",
        "ε",
        "\\1",
        "\\+",
        "\\(",
        "(\\*+a\\ )\\ε*",
    ] {
        let e = Regex::parse(src).unwrap();
        assert_eq!(e.to_string(), src);
        assert_eq!(Regex::parse(&e.to_string()).unwrap(), e);
    }
}

#[test]
fn derivatives() {
    assert_eq!(word("ab").deriv('a'), b());
    assert_eq!(word("ab").deriv('b'), zero());
    assert_eq!(a().star().deriv('a'), a().star());
    assert_eq!(eps().deriv('a'), zero());
    assert_eq!((a() + b()).deriv('b'), eps());
    assert!(a().star().nullable());
    assert!(!word("ab").nullable());
    assert!((a() + eps()).nullable());
    assert!(!zero().nullable());
}

#[test]
fn accepts() {
    let e = Regex::parse("(a+b)*c").unwrap();
    assert!(e.accepts("c"));
    assert!(e.accepts("abc"));
    assert!(e.accepts("bbac"));
    assert!(!e.accepts(""));
    assert!(!e.accepts("ca"));
    assert!(!e.accepts("ab"));

    let e = Regex::parse("(ab+ba)*(ε+a+ba)").unwrap();
    for w in ["", "a", "ab", "ba", "abba", "baba", "aba"] {
        assert!(e.accepts(w), "{w:?}");
    }
    for w in ["b", "aa", "bb", "abb"] {
        assert!(!e.accepts(w), "{w:?}");
    }

    assert!(eps().accepts(""));
    assert!(!eps().accepts("a"));
    assert!(!zero().accepts(""));
    assert!(!zero().accepts("a"));
}

#[test]
fn reversed() {
    assert_eq!(word("abc").reversed(), word("cba"));
    let e = (word("ab") + c()).star() * word("ca");
    let r = e.reversed();
    assert!(e.accepts("abcca"));
    assert!(r.accepts("accba"));
    assert!(!r.accepts("abcca"));
    assert_eq!(r.reversed(), e);
}

#[test]
fn lexer() {
    let toks = lex("a b.1*+").unwrap();
    let toks = toks.into_iter().map(|t| t.val).collect::<Vec<_>>();
    assert_eq!(
        toks,
        vec![
            Token::Letter('a'),
            Token::Letter('b'),
            Token::Concat,
            Token::Eps,
            Token::Star,
            Token::Union,
        ]
    );
    let e = lex("aB").unwrap_err();
    assert_eq!(e.val, LexingError::UnknownSymbol);
    assert_eq!(e.span, 1..2);
}

#[test]
fn polish() {
    assert_eq!(polish::parse("a"), Ok(a()));
    assert_eq!(polish::parse("ab."), Ok(word("ab")));
    assert_eq!(polish::parse("ab.c+*"), Ok((word("ab") + c()).star()));
    assert_eq!(polish::parse("a1."), Ok(a()));
    assert_eq!(polish::parse("ab+c."), Ok((a() + b()) * c()));
    assert_eq!(polish::parse("1*"), Ok(eps()));
    assert_eq!(polish::parse("ab+*c*."), Ok((a() + b()).star() * c().star()));
}

#[test]
fn polish_errors() {
    let e = polish::parse("a.").unwrap_err();
    assert_eq!(e.val, PolishErrorKind::MissingOperand(Token::Concat));
    assert_eq!(e.span, 1..2);
    assert_eq!(
        polish::parse("ab").unwrap_err().val,
        PolishErrorKind::UnusedOperands(2)
    );
    assert_eq!(polish::parse(" ").unwrap_err().val, PolishErrorKind::Empty);
    assert_eq!(
        polish::parse("a?").unwrap_err().val,
        PolishErrorKind::Lexer(LexingError::UnknownSymbol)
    );
    assert_eq!(
        polish::parse("*").unwrap_err().val,
        PolishErrorKind::MissingOperand(Token::Star)
    );
    let e = polish::parse("ab.+").unwrap_err();
    assert_eq!(e.val, PolishErrorKind::MissingOperand(Token::Union));
    assert_eq!(e.span, 3..4);
    assert_eq!(
        polish::parse("abc.").unwrap_err().val,
        PolishErrorKind::UnusedOperands(2)
    );
}

#[test]
fn random_regexes() {
    for _ in 0..100 {
        let e = rand_regex(20);
        assert!(e.alphabet().is_subset(&BTreeSet::from(RANDOM_ALPHABET)));
        let reparsed = Regex::parse(&e.to_string()).unwrap();
        for w in ["", "a", "ab", "cba", "abcabc"] {
            assert_eq!(e.accepts(w), reparsed.accepts(w), "{e} on {w:?}");
        }
    }
}
