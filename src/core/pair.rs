//! Pairs and the lists built from them.

use crate::core::term::Term;
use std::fmt::{Debug, Formatter, Result};

impl Term {
    /// Build a list from `items` ending in `tail` instead of `Unit`.
    pub fn list_with_tail(items: impl IntoIterator<Item = Term>, tail: Term) -> Term {
        let items: Vec<Term> = items.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(tail, |list, item| Term::pair(item, list))
    }

    /// Split a pair chain into its elements and whatever terminates it.
    ///
    /// A proper list yields a `Unit` terminator, any other term is its own
    /// terminator with no elements.
    pub fn split_list(&self) -> (Vec<&Term>, &Term) {
        let mut items = vec![];
        let mut cursor = self;
        while let Term::Pair(car, cdr) = cursor {
            items.push(&**car);
            cursor = cdr;
        }
        (items, cursor)
    }

    pub fn car(&self) -> Option<&Term> {
        match self {
            Term::Pair(car, _) => Some(car),
            _ => None,
        }
    }

    pub fn cdr(&self) -> Option<&Term> {
        match self {
            Term::Pair(_, cdr) => Some(cdr),
            _ => None,
        }
    }
}

impl FromIterator<Term> for Term {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Term::list_with_tail(iter, Term::Unit)
    }
}

impl Debug for Term {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Term::Unit => write!(f, "()"),
            Term::Str(s) => write!(f, "{:?}", s),
            Term::Int(i) => write!(f, "{}", i),
            Term::Bool(b) => write!(f, "{}", b),
            Term::Var(v) => write!(f, "{:?}", v),
            Term::Expr(lhs, op, rhs) => write!(f, "({:?} {} {:?})", lhs, op, rhs),
            Term::Pair(..) => {
                let (items, tail) = self.split_list();
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{:?}", item)?;
                }
                if *tail != Term::Unit {
                    write!(f, " . {:?}", tail)?;
                }
                write!(f, ")")
            }
        }
    }
}
