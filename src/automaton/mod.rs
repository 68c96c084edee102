pub mod automaton;
pub mod collapser;
pub mod completer;
pub mod determinator;
pub mod epsilon_remover;
pub mod graphviz;
pub mod inverter;
pub mod minifier;
pub mod optimizer;
pub mod pipeline;
pub mod simplifier;
pub mod to_regex;


#[doc(inline)]
pub use self::automaton::*;
#[doc(inline)]
pub use self::collapser::*;
#[doc(inline)]
pub use self::completer::*;
#[doc(inline)]
pub use self::determinator::*;
#[doc(inline)]
pub use self::epsilon_remover::*;
#[doc(inline)]
pub use self::graphviz::*;
#[doc(inline)]
pub use self::inverter::*;
#[doc(inline)]
pub use self::minifier::*;
#[doc(inline)]
pub use self::optimizer::*;
#[doc(inline)]
pub use self::simplifier::*;
#[doc(inline)]
pub use self::to_regex::*;
