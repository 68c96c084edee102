pub mod args;
pub mod automaton;
pub mod error_reporting;
pub mod lexer;
pub mod regex;
pub mod util;
