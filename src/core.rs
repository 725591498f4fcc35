//! Core data structures and logic algorithms

pub mod goal;
pub mod logic_variable;
pub mod operation;
pub mod pair;
pub mod reify;
pub mod state;
pub mod stream;
pub mod substitution;
pub mod term;
