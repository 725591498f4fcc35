//! Library of goals

pub mod combinators;
pub mod list;
pub mod numbers;
pub mod primitive;
