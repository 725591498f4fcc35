//! Arithmetic relations.
//!
//! These are thin wrappers around unification with expressions. Each works
//! in every direction where at most one of its arguments is unknown.

use crate::core::goal::Goal;
use crate::core::term::Term;
use crate::goals::primitive::eq;

/// Creates a goal that succeeds if a + b equals c
pub fn pluso(a: impl Into<Term>, b: impl Into<Term>, c: impl Into<Term>) -> Goal {
    let a: Term = a.into();
    eq(a + b, c)
}

/// Creates a goal that succeeds if a - b equals c
pub fn minuso(a: impl Into<Term>, b: impl Into<Term>, c: impl Into<Term>) -> Goal {
    let a: Term = a.into();
    eq(a - b, c)
}

/// Creates a goal that succeeds if a * b equals c
pub fn timeso(a: impl Into<Term>, b: impl Into<Term>, c: impl Into<Term>) -> Goal {
    let a: Term = a.into();
    eq(a * b, c)
}

/// Creates a goal that succeeds if a / b equals c, rounding toward zero.
pub fn divo(a: impl Into<Term>, b: impl Into<Term>, c: impl Into<Term>) -> Goal {
    let a: Term = a.into();
    eq(a / b, c)
}

/// Creates a goal that succeeds if b is one more than a.
pub fn succo(a: impl Into<Term>, b: impl Into<Term>) -> Goal {
    pluso(a, 1, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use crate::testing::{fails, succeeds};
    use crate::{row, run};

    #[test]
    fn pluso_succeeds_for_correct_addition() {
        succeeds(pluso(2, 3, 5));
        fails(pluso(2, 3, 6));
    }

    #[test]
    fn pluso_computes_in_every_direction() {
        assert_eq!(run!(*, q, pluso(2, 3, &q)), vec![row![5]]);
        assert_eq!(run!(*, q, pluso(&q, 3, 5)), vec![row![2]]);
        assert_eq!(run!(*, q, pluso(2, &q, 5)), vec![row![3]]);
    }

    #[test]
    fn pluso_concatenates_strings() {
        assert_eq!(run!(*, q, pluso("micro", &q, "microKanren")), vec![row!["Kanren"]]);
    }

    #[test]
    fn pluso_needs_all_but_one_argument() {
        assert!(run!(*, (x, y), pluso(&x, &y, 5)).is_empty());
    }

    #[test]
    fn minuso_computes_differences() {
        assert_eq!(run!(*, q, minuso(7, &q, 10)), vec![row![-3]]);
        assert_eq!(run!(*, q, minuso(&q, 3, 10)), vec![row![13]]);
    }

    #[test]
    fn timeso_only_inverts_exactly() {
        assert_eq!(run!(*, q, timeso(&q, 4, 12)), vec![row![3]]);
        assert!(run!(*, q, timeso(&q, 4, 13)).is_empty());
        assert!(run!(*, q, timeso(&q, 0, 0)).is_empty());
    }

    #[test]
    fn divo_enumerates_every_dividend() {
        assert_eq!(run!(*, q, divo(&q, 3, 2)), vec![row![6], row![7], row![8]]);
        assert_eq!(run!(*, q, divo(7, &q, 2)), vec![row![3]]);
        fails(divo(1, 0, 0));
    }

    #[test]
    fn succo_relates_neighbors() {
        assert_eq!(run!(*, q, succo(&q, 10)), vec![row![9]]);
        assert_eq!(run!(*, q, succo(10, &q)), vec![row![11]]);
    }

    #[test]
    fn chained_relations_resolve_once_inputs_are_known() {
        let rows = run!(*, (x, y), pluso(&x, 1, &y), eq(&x, 4));
        assert_eq!(rows, vec![row![4, 5]]);
    }
}
