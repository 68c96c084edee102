pub mod parser;
pub mod polish;
pub mod random;
pub mod regex;

#[cfg(test)]
mod tests;

#[doc(inline)]
pub use self::random::*;
#[doc(inline)]
pub use self::regex::*;
