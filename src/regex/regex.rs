use std::collections::BTreeSet;
use std::fmt::Display;
use std::ops::{Add, AddAssign, Mul, MulAssign};

/// The character standing for the empty word inside a `Char`.
pub const EPSILON: char = '\0';

// Syntax

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Regex {
    Char(char),
    Concat(Vec<Regex>),
    Sum(Vec<Regex>),
    Star(Box<Regex>),
}

// Smart constructors

pub use Regex::Char as char_;

pub fn eps() -> Regex {
    Regex::Char(EPSILON)
}
pub fn zero() -> Regex {
    Regex::Sum(vec![])
}
pub fn union(e1: Regex, e2: Regex) -> Regex {
    e1 + e2
}
pub fn concat(e1: Regex, e2: Regex) -> Regex {
    e1 * e2
}
pub fn star(e: Regex) -> Regex {
    e.star()
}
pub fn word(s: &str) -> Regex {
    Regex::word(s)
}

impl Default for Regex {
    fn default() -> Self {
        eps()
    }
}

impl Regex {
    pub fn empty() -> Regex {
        eps()
    }
    pub fn zero() -> Regex {
        zero()
    }
    pub fn char(c: char) -> Regex {
        char_(c)
    }
    /// Concatenation of the letters of `s`, in order. The empty string gives ε.
    pub fn word(s: &str) -> Regex {
        s.chars().fold(eps(), |r, c| r * char_(c))
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Regex::Sum(es) if es.is_empty())
    }
    pub fn is_empty(&self) -> bool {
        matches!(self, Regex::Char(EPSILON))
    }
    pub fn is_char(&self) -> bool {
        matches!(self, Regex::Char(_))
    }
    /// The letter of a non-ε `Char`.
    pub fn as_letter(&self) -> Option<char> {
        match self {
            Regex::Char(c) if *c != EPSILON => Some(*c),
            _ => None,
        }
    }

    pub fn union(&self, right: &Regex) -> Regex {
        self + right
    }
    pub fn concat(&self, right: &Regex) -> Regex {
        self * right
    }

    pub fn union_with(&mut self, right: Regex) {
        if self.is_zero() {
            *self = right;
            return;
        }
        if right.is_zero() {
            return;
        }
        match self {
            Regex::Sum(es) => es.push(right),
            _ => {
                let left = std::mem::take(self);
                *self = Regex::Sum(vec![left, right]);
            }
        }
    }
    pub fn concat_with(&mut self, right: Regex) {
        if self.is_zero() {
            return;
        }
        if right.is_zero() {
            *self = zero();
            return;
        }
        if self.is_empty() {
            *self = right;
            return;
        }
        if right.is_empty() {
            return;
        }
        match self {
            Regex::Concat(es) => es.push(right),
            _ => {
                let left = std::mem::take(self);
                *self = Regex::Concat(vec![left, right]);
            }
        }
    }
    /// Kleene closure. Both ε* and ∅* collapse to ε, and starring a star is a no-op.
    pub fn star(&self) -> Regex {
        if self.is_empty() || self.is_zero() {
            return eps();
        }
        match self {
            Regex::Star(_) => self.clone(),
            _ => Regex::Star(Box::new(self.clone())),
        }
    }

    pub fn fill_alphabet(&self, alphabet: &mut BTreeSet<char>) {
        match self {
            Regex::Char(c) => {
                if *c != EPSILON {
                    alphabet.insert(*c);
                }
            }
            Regex::Concat(es) | Regex::Sum(es) => {
                for e in es {
                    e.fill_alphabet(alphabet);
                }
            }
            Regex::Star(e) => e.fill_alphabet(alphabet),
        }
    }
    pub fn alphabet(&self) -> BTreeSet<char> {
        let mut alphabet = BTreeSet::new();
        self.fill_alphabet(&mut alphabet);
        alphabet
    }

    /// Regex of the language whose words are the reversed words of `self`.
    pub fn reversed(&self) -> Regex {
        match self {
            Regex::Char(_) => self.clone(),
            Regex::Concat(es) => Regex::Concat(es.iter().rev().map(Regex::reversed).collect()),
            Regex::Sum(es) => Regex::Sum(es.iter().map(Regex::reversed).collect()),
            Regex::Star(e) => Regex::Star(Box::new(e.reversed())),
        }
    }

    /// Size of the syntax tree, counting every node once.
    pub fn size(&self) -> usize {
        match self {
            Regex::Char(_) => 1,
            Regex::Concat(es) | Regex::Sum(es) => 1 + es.iter().map(Regex::size).sum::<usize>(),
            Regex::Star(e) => 1 + e.size(),
        }
    }
}

// Brzozowski derivatives, used as a matcher that does not go through automata.

impl Regex {
    pub fn nullable(&self) -> bool {
        match self {
            Regex::Char(c) => *c == EPSILON,
            Regex::Concat(es) => es.iter().all(Regex::nullable),
            Regex::Sum(es) => es.iter().any(Regex::nullable),
            Regex::Star(_) => true,
        }
    }
    pub fn deriv(&self, c: char) -> Regex {
        match self {
            Regex::Char(c2) if *c2 != EPSILON && *c2 == c => eps(),
            Regex::Char(_) => zero(),
            Regex::Concat(es) => deriv_seq(es, c),
            Regex::Sum(es) => es.iter().fold(zero(), |r, e| r + e.deriv(c)),
            Regex::Star(e) => e.deriv(c) * self.clone(),
        }
    }
    pub fn deriv_word(&self, cs: impl IntoIterator<Item = char>) -> Regex {
        let mut r = self.clone();
        for c in cs {
            if r.is_zero() {
                break;
            }
            r = r.deriv(c);
        }
        r
    }
    pub fn accepts(&self, word: &str) -> bool {
        self.deriv_word(word.chars()).nullable()
    }
}

fn deriv_seq(es: &[Regex], c: char) -> Regex {
    match es.split_first() {
        None => zero(),
        Some((e, rest)) => {
            let tail = rest.iter().fold(eps(), |r, e| r * e.clone());
            let d = e.deriv(c) * tail;
            if e.nullable() {
                d + deriv_seq(rest, c)
            } else {
                d
            }
        }
    }
}

// Operators: `+` is union, `*` is concatenation.

impl AddAssign for Regex {
    fn add_assign(&mut self, rhs: Regex) {
        self.union_with(rhs)
    }
}
impl MulAssign for Regex {
    fn mul_assign(&mut self, rhs: Regex) {
        self.concat_with(rhs)
    }
}
impl Add for Regex {
    type Output = Regex;
    fn add(mut self, rhs: Regex) -> Regex {
        self.union_with(rhs);
        self
    }
}
impl Mul for Regex {
    type Output = Regex;
    fn mul(mut self, rhs: Regex) -> Regex {
        self.concat_with(rhs);
        self
    }
}
impl<'a> Add<&'a Regex> for &'a Regex {
    type Output = Regex;
    fn add(self, rhs: &'a Regex) -> Regex {
        self.clone() + rhs.clone()
    }
}
impl<'a> Mul<&'a Regex> for &'a Regex {
    type Output = Regex;
    fn mul(self, rhs: &'a Regex) -> Regex {
        self.clone() * rhs.clone()
    }
}

// Display

/// Characters with a meaning of their own in the infix syntax. As letters they
/// are written with a leading backslash.
pub(crate) fn is_special_char(c: char) -> bool {
    match c {
        '(' | ')' | '\\' | '+' | '|' | '*' => true,
        'ε' | '∅' | '1' => true,
        _ => c.is_whitespace(),
    }
}

impl Display for Regex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Regex::Char(EPSILON) => write!(f, "ε"),
            Regex::Char(c) if is_special_char(*c) => write!(f, "\\{c}"),
            Regex::Char(c) => write!(f, "{c}"),
            Regex::Concat(es) => {
                for e in es {
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            Regex::Sum(es) if es.is_empty() => write!(f, "∅"),
            Regex::Sum(es) => {
                write!(f, "(")?;
                for (i, e) in es.iter().enumerate() {
                    if i != 0 {
                        write!(f, "+")?;
                    }
                    write!(f, "{e}")?;
                }
                write!(f, ")")
            }
            Regex::Star(e) => match **e {
                Regex::Char(_) | Regex::Sum(_) if !e.is_zero() => write!(f, "{e}*"),
                _ => write!(f, "({e})*"),
            },
        }
    }
}
