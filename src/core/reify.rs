//! Externally visible results.
//!
//! A solved [`State`](crate::core::state::State) still speaks in terms of
//! variables and bindings. Reification turns the value of a variable into a
//! [`Match`], which contains no variables: anything left unbound becomes
//! [`Match::Unknown`].

use crate::core::term::Term;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// A reified value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Match {
    /// The empty list.
    Nil,
    Str(String),
    Int(i64),
    Bool(bool),
    /// A proper list.
    List(Vec<Match>),
    /// A list that does not end in `Nil`, such as a list with an unbound tail.
    Improper(Vec<Match>, Box<Match>),
    /// A variable that no binding determined.
    Unknown,
}

/// One reified value per tracked variable, in introduction order.
pub type Row = Vec<Match>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReifyError {
    #[error("expected {expected}, found `{found}`")]
    UnexpectedShape { expected: &'static str, found: Match },
}

impl Match {
    /// Convert a fully walked term.
    pub(crate) fn from_resolved(term: &Term) -> Match {
        match term {
            Term::Unit => Match::Nil,
            Term::Str(s) => Match::Str(s.clone()),
            Term::Int(i) => Match::Int(*i),
            Term::Bool(b) => Match::Bool(*b),
            Term::Var(_) | Term::Expr(..) => Match::Unknown,
            Term::Pair(..) => {
                let (items, tail) = term.split_list();
                let items = items.into_iter().map(Match::from_resolved).collect();
                match tail {
                    Term::Unit => Match::List(items),
                    tail => Match::Improper(items, Box::new(Match::from_resolved(tail))),
                }
            }
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Match::Unknown)
    }

    fn unexpected(self, expected: &'static str) -> ReifyError {
        ReifyError::UnexpectedShape {
            expected,
            found: self,
        }
    }
}

impl From<i32> for Match {
    fn from(i: i32) -> Self {
        Match::Int(i.into())
    }
}

impl From<i64> for Match {
    fn from(i: i64) -> Self {
        Match::Int(i)
    }
}

impl From<bool> for Match {
    fn from(b: bool) -> Self {
        Match::Bool(b)
    }
}

impl From<&str> for Match {
    fn from(s: &str) -> Self {
        Match::Str(s.to_string())
    }
}

impl From<String> for Match {
    fn from(s: String) -> Self {
        Match::Str(s)
    }
}

impl<T: Into<Match>> From<Vec<T>> for Match {
    fn from(items: Vec<T>) -> Self {
        if items.is_empty() {
            Match::Nil
        } else {
            Match::List(items.into_iter().map(Into::into).collect())
        }
    }
}

impl TryFrom<Match> for i64 {
    type Error = ReifyError;

    fn try_from(m: Match) -> Result<Self, Self::Error> {
        match m {
            Match::Int(i) => Ok(i),
            other => Err(other.unexpected("an integer")),
        }
    }
}

impl TryFrom<Match> for bool {
    type Error = ReifyError;

    fn try_from(m: Match) -> Result<Self, Self::Error> {
        match m {
            Match::Bool(b) => Ok(b),
            other => Err(other.unexpected("a boolean")),
        }
    }
}

impl TryFrom<Match> for String {
    type Error = ReifyError;

    fn try_from(m: Match) -> Result<Self, Self::Error> {
        match m {
            Match::Str(s) => Ok(s),
            other => Err(other.unexpected("a string")),
        }
    }
}

impl TryFrom<Match> for Vec<Match> {
    type Error = ReifyError;

    fn try_from(m: Match) -> Result<Self, Self::Error> {
        match m {
            Match::Nil => Ok(vec![]),
            Match::List(items) => Ok(items),
            other => Err(other.unexpected("a proper list")),
        }
    }
}

impl Display for Match {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        fn items(f: &mut Formatter, items: &[Match]) -> fmt::Result {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", item)?;
            }
            Ok(())
        }

        match self {
            Match::Nil => write!(f, "nil"),
            Match::Str(s) => write!(f, "{:?}", s),
            Match::Int(i) => write!(f, "{}", i),
            Match::Bool(b) => write!(f, "{}", b),
            Match::Unknown => write!(f, "?"),
            Match::List(list) => {
                write!(f, "[")?;
                items(f, list)?;
                write!(f, "]")
            }
            Match::Improper(list, tail) => {
                write!(f, "[")?;
                items(f, list)?;
                write!(f, " | {}]", tail)
            }
        }
    }
}
