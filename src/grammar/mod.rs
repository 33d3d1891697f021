pub mod eliminate_epsilon;
pub mod grammar;
pub mod nullable;
pub mod parse;
pub mod pretty_print;
pub use grammar::Grammar;
pub use nullable::NullableSet;
pub use parse::ParseError;

pub const EPSILON: &str = "ε";
pub const EPSILON_ALIASES: [&str; 1] = ["ϵ"];
