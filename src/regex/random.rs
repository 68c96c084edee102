use rand::random;

use crate::regex::parser::regex_parser;

use super::Regex;

pub const RANDOM_ALPHABET: [char; 3] = ['a', 'b', 'c'];

/// Random regex over `a`, `b` and `c` with at most `max_len` symbols of
/// infix syntax. Letters are laid out first, then some of them are
/// overwritten with parentheses, unions and stars.
pub fn rand_regex(max_len: usize) -> Regex {
    let is_op = |c| c == '+' || c == '*';
    let is_paren = |c| c == '(' || c == ')';
    let is_lhs = |c| !is_op(c) && c != '(';
    let is_rhs = |c| !is_op(c) && c != ')';

    let len = 1 + random::<usize>() % max_len.max(1);
    let mut buf: Vec<char> = (0..len)
        .map(|_| RANDOM_ALPHABET[random::<usize>() % RANDOM_ALPHABET.len()])
        .collect();
    if len > 2 {
        let num_parens = random::<usize>() % (len / 3);
        for _ in 0..num_parens {
            let begin = random::<usize>() % (len - 2);
            let end = begin + 2 + (random::<usize>() % (len - (begin + 2)));
            if is_paren(buf[begin]) || is_paren(buf[end]) {
                continue;
            }
            let mut depth = 0i32;
            let balanced = buf[begin + 1..end].iter().all(|c| {
                match c {
                    '(' => depth += 1,
                    ')' => depth -= 1,
                    _ => {}
                }
                depth >= 0
            });
            if balanced && depth == 0 {
                buf[begin] = '(';
                buf[end] = ')';
            }
        }
        let num_binops = random::<usize>() % (len / 3);
        for _ in 0..num_binops {
            let i = 1 + (random::<usize>() % (len - 2));
            if is_lhs(buf[i - 1]) && is_rhs(buf[i + 1]) && !is_paren(buf[i]) {
                buf[i] = '+';
            }
        }
    }
    if len > 2 {
        let num_unops = random::<usize>() % (len / 2);
        for _ in 0..num_unops {
            let i = 1 + (random::<usize>() % (len - 2));
            if is_lhs(buf[i - 1]) && !is_paren(buf[i]) {
                buf[i] = '*';
            }
        }
    }
    let s = buf.into_iter().collect::<String>();
    regex_parser::expr(&s).unwrap_or_else(|e| panic!("generated invalid regex {s:?}: {e}"))
}
