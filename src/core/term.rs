use crate::core::logic_variable::Var;
use crate::core::operation::BinaryOp;
use std::ops::{Add, BitAnd, BitOr, Div, Mul, Rem, Sub};
use std::rc::Rc;

/// The value domain of logic programs.
///
/// Lists are encoded as chains of `Pair`s. A proper list ends in `Unit`,
/// an open list ends in an unbound variable. `Expr` is an arithmetic or
/// boolean expression whose evaluation is deferred until both operands are
/// known.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Unit,
    Str(String),
    Int(i64),
    Bool(bool),
    Var(Var),
    Pair(Rc<Term>, Rc<Term>),
    Expr(Rc<Term>, BinaryOp, Rc<Term>),
}

impl Term {
    pub fn new(val: impl Into<Term>) -> Self {
        val.into()
    }

    pub fn unit() -> Self {
        Term::Unit
    }

    pub fn var(v: Var) -> Self {
        Term::Var(v)
    }

    pub fn pair(car: impl Into<Term>, cdr: impl Into<Term>) -> Self {
        Term::Pair(Rc::new(car.into()), Rc::new(cdr.into()))
    }

    pub fn expr(lhs: impl Into<Term>, op: BinaryOp, rhs: impl Into<Term>) -> Self {
        Term::Expr(Rc::new(lhs.into()), op, Rc::new(rhs.into()))
    }

    pub fn as_var(&self) -> Option<Var> {
        match self {
            Term::Var(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_var(&self) -> bool {
        self.as_var().is_some()
    }

    /// Strings, integers and booleans: the values operators work on.
    pub fn is_atom(&self) -> bool {
        matches!(self, Term::Str(_) | Term::Int(_) | Term::Bool(_))
    }
}

impl From<()> for Term {
    fn from(_: ()) -> Self {
        Term::Unit
    }
}

impl From<i32> for Term {
    fn from(i: i32) -> Self {
        Term::Int(i.into())
    }
}

impl From<i64> for Term {
    fn from(i: i64) -> Self {
        Term::Int(i)
    }
}

impl From<bool> for Term {
    fn from(b: bool) -> Self {
        Term::Bool(b)
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::Str(s.to_string())
    }
}

impl From<String> for Term {
    fn from(s: String) -> Self {
        Term::Str(s)
    }
}

impl From<Var> for Term {
    fn from(v: Var) -> Self {
        Term::Var(v)
    }
}

impl From<&Term> for Term {
    fn from(t: &Term) -> Self {
        t.clone()
    }
}

impl<A: Into<Term>, D: Into<Term>> From<(A, D)> for Term {
    fn from((car, cdr): (A, D)) -> Self {
        Term::pair(car, cdr)
    }
}

impl<T: Into<Term>> From<Vec<T>> for Term {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().map(Into::into).collect()
    }
}

impl PartialEq<i64> for Term {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Term::Int(i) if i == other)
    }
}

impl PartialEq<i32> for Term {
    fn eq(&self, other: &i32) -> bool {
        matches!(self, Term::Int(i) if *i == i64::from(*other))
    }
}

impl PartialEq<bool> for Term {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Term::Bool(b) if b == other)
    }
}

impl PartialEq<&str> for Term {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Term::Str(s) if s == *other)
    }
}

macro_rules! expression_operator {
    ($($trait:ident :: $method:ident => $op:expr;)*) => {
        $(
            impl<R: Into<Term>> $trait<R> for Term {
                type Output = Term;
                fn $method(self, rhs: R) -> Term {
                    Term::expr(self, $op, rhs)
                }
            }

            impl<R: Into<Term>> $trait<R> for &Term {
                type Output = Term;
                fn $method(self, rhs: R) -> Term {
                    Term::expr(self.clone(), $op, rhs)
                }
            }
        )*
    };
}

// `&` and `|` stand in for `&&` and `||`, which cannot be overloaded.
expression_operator! {
    Add::add => BinaryOp::Add;
    Sub::sub => BinaryOp::Sub;
    Mul::mul => BinaryOp::Mul;
    Div::div => BinaryOp::Div;
    Rem::rem => BinaryOp::Rem;
    BitAnd::bitand => BinaryOp::And;
    BitOr::bitor => BinaryOp::Or;
}
