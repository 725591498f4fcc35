//! Search states and unification.

use crate::core::logic_variable::Var;
use crate::core::operation::BinaryOp;
use crate::core::reify::{Match, Row};
use crate::core::stream::Stream;
use crate::core::substitution::Substitution;
use crate::core::term::Term;
use std::fmt::{self, Display, Formatter};

/// A point in the search: the bindings made so far and the number of
/// variables introduced so far.
///
/// States are immutable. Every operation that changes bindings or allocates
/// variables returns a new state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    subs: Substitution,
    next_var: usize,
}

impl State {
    /// The initial state: no bindings, no variables.
    pub fn empty() -> Self {
        State::default()
    }

    /// Number of variables introduced so far, which is also the id the next
    /// fresh variable receives.
    pub fn var_count(&self) -> usize {
        self.next_var
    }

    pub fn fresh_var(&self) -> (Var, State) {
        let var = Var::new(self.next_var);
        let state = State {
            subs: self.subs.clone(),
            next_var: self.next_var + 1,
        };
        (var, state)
    }

    /// Allocate `N` consecutive variables.
    pub fn fresh_vars<const N: usize>(&self) -> ([Term; N], State) {
        let first = self.next_var;
        let vars = std::array::from_fn(|i| Term::var(Var::new(first + i)));
        let state = State {
            subs: self.subs.clone(),
            next_var: first + N,
        };
        (vars, state)
    }

    pub fn walk<'a>(&'a self, term: &'a Term) -> &'a Term {
        self.subs.walk(term)
    }

    pub fn walk_star(&self, term: &Term) -> Term {
        self.subs.walk_star(term)
    }

    fn bind(&self, var: Var, term: Term) -> State {
        State {
            subs: self.subs.extended(var, term),
            next_var: self.next_var,
        }
    }

    /// Every way of making `u` and `v` equal under this state.
    ///
    /// Structural unification has at most one result. Expressions solved by
    /// inverse evaluation can have several, one per candidate operand.
    pub fn unify(&self, u: &Term, v: &Term) -> Stream<State> {
        let u = self.walk(u);
        let v = self.walk(v);
        match (u, v) {
            (Term::Var(a), Term::Var(b)) if a == b => Stream::singleton(self.clone()),
            (Term::Var(a), _) => Stream::singleton(self.bind(*a, v.clone())),
            (_, Term::Var(b)) => Stream::singleton(self.bind(*b, u.clone())),
            (Term::Pair(car_u, cdr_u), Term::Pair(car_v, cdr_v)) => {
                let cdr_u = cdr_u.clone();
                let cdr_v = cdr_v.clone();
                self.unify(car_u, car_v)
                    .flat_map(move |s| s.unify(&cdr_u, &cdr_v))
            }
            (Term::Expr(..), _) | (_, Term::Expr(..)) => self.unify_expr(u, v),
            (Term::Unit, Term::Unit) => Stream::singleton(self.clone()),
            (a, b) if a.is_atom() && a == b => Stream::singleton(self.clone()),
            _ => Stream::Empty,
        }
    }

    fn unify_expr(&self, u: &Term, v: &Term) -> Stream<State> {
        let u = self.walk_star(u);
        let v = self.walk_star(v);
        match (&u, &v) {
            (Term::Expr(lhs_u, op_u, rhs_u), Term::Expr(lhs_v, op_v, rhs_v)) => {
                if op_u != op_v {
                    return Stream::Empty;
                }
                let rhs_u = rhs_u.clone();
                let rhs_v = rhs_v.clone();
                self.unify(lhs_u, lhs_v)
                    .flat_map(move |s| s.unify(&rhs_u, &rhs_v))
            }
            (Term::Expr(lhs, op, rhs), result) | (result, Term::Expr(lhs, op, rhs)) => {
                self.solve(lhs, *op, rhs, result)
            }
            // both sides evaluated
            _ => self.unify(&u, &v),
        }
    }

    /// Unify `lhs op rhs` with `result` by solving for the unknown operand.
    fn solve(&self, lhs: &Term, op: BinaryOp, rhs: &Term, result: &Term) -> Stream<State> {
        if !result.is_atom() {
            return Stream::Empty;
        }
        let unknown = |t: &Term| t.is_var() || matches!(t, Term::Expr(..));
        let (operand, candidates) = match (unknown(lhs), unknown(rhs)) {
            (true, false) => (lhs, op.reverse_evaluate_lhs(rhs, result)),
            (false, true) => (rhs, op.reverse_evaluate_rhs(lhs, result)),
            (false, false) => {
                if let Err(err) = op.evaluate(lhs, rhs) {
                    tracing::trace!(%err, "expression does not evaluate");
                }
                return Stream::Empty;
            }
            (true, true) => return Stream::Empty,
        };
        match candidates {
            Ok(candidates) => {
                let operand = operand.clone();
                let state = self.clone();
                candidates.flat_map(move |candidate| state.unify(&operand, &candidate))
            }
            Err(err) => {
                tracing::trace!(%err, %op, "operand cannot be solved");
                Stream::Empty
            }
        }
    }

    /// Succeed with this state unchanged exactly when `u` and `v` do not unify.
    pub fn disunify(&self, u: &Term, v: &Term) -> Stream<State> {
        match self.unify(u, v).into_iter().next() {
            None => Stream::singleton(self.clone()),
            Some(_) => Stream::Empty,
        }
    }

    pub fn reify(&self, term: &Term) -> Match {
        Match::from_resolved(&self.walk_star(term))
    }

    /// Reify each of `vars`, in order.
    pub fn reify_all(&self, vars: &[Term]) -> Row {
        vars.iter().map(|var| self.reify(var)).collect()
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, (var, term)) in self.subs.bindings().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} = {:?}", var, term)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;
    use proptest::prelude::*;

    fn vars<const N: usize>() -> ([Term; N], State) {
        State::empty().fresh_vars()
    }

    fn unique(states: Stream<State>) -> State {
        let mut states = states.into_vec();
        assert_eq!(states.len(), 1, "expected exactly one state");
        states.remove(0)
    }

    #[test]
    fn fresh_variables_are_numbered_consecutively() {
        let (x, s) = State::empty().fresh_var();
        let ([y, z], s) = s.fresh_vars();
        assert_eq!(x, Var::new(0));
        assert_eq!(y, Term::var(Var::new(1)));
        assert_eq!(z, Term::var(Var::new(2)));
        assert_eq!(s.var_count(), 3);
    }

    #[test]
    fn unify_same_var_does_not_modify_state() {
        let ([x], s) = vars();
        assert_eq!(unique(s.unify(&x, &x)), s);
    }

    #[test]
    fn unify_value_with_var_binds_var() {
        let ([x], s) = vars();
        let s = unique(s.unify(&Term::from(0), &x));
        assert_eq!(s.walk(&x), &Term::from(0));
    }

    #[test]
    fn unify_same_values_does_not_modify_state() {
        let s = State::empty();
        assert_eq!(unique(s.unify(&Term::from(42), &Term::from(42))), s);
        assert_eq!(unique(s.unify(&Term::Unit, &Term::Unit)), s);
    }

    #[test]
    fn unify_different_values_fails() {
        let s = State::empty();
        assert!(s.unify(&Term::from(1), &Term::from(2)).is_empty());
        assert!(s.unify(&Term::from(1), &Term::from("1")).is_empty());
        assert!(s.unify(&Term::Unit, &list![1]).is_empty());
    }

    #[test]
    fn pairs_unify_in_stages() {
        let ([x], s) = vars();
        assert!(s.unify(&list![&x, &x], &list![1, 2]).is_empty());

        let s = unique(s.unify(&list![&x, &x], &list![3, 3]));
        assert_eq!(s.reify(&x), Match::Int(3));
    }

    #[test]
    fn expressions_solve_for_a_variable_operand() {
        let ([x], s) = vars();
        let s = unique(s.unify(&(&x + 5), &Term::from(9)));
        assert_eq!(s.reify(&x), Match::Int(4));
    }

    #[test]
    fn expressions_solve_for_nested_operands() {
        let ([x], s) = vars();
        let s = unique(s.unify(&Term::from(8), &((&x + 1) * 2)));
        assert_eq!(s.reify(&x), Match::Int(3));
    }

    #[test]
    fn underdetermined_expressions_yield_every_candidate() {
        let ([x], s) = vars();
        let found: Vec<_> = s
            .unify(&(&x & false), &Term::from(false))
            .into_iter()
            .map(|s| s.reify(&x))
            .collect();
        assert_eq!(found, vec![Match::Bool(false), Match::Bool(true)]);
    }

    #[test]
    fn expressions_with_bound_operands_evaluate_before_unifying() {
        let ([x, y], s) = vars();
        let s = unique(s.unify(&x, &Term::from(2)));
        let s = unique(s.unify(&y, &(&x * 21)));
        assert_eq!(s.reify(&y), Match::Int(42));
        assert!(s.unify(&(&x * 21), &Term::from(41)).is_empty());
    }

    #[test]
    fn variables_bound_to_expressions_are_solved_later() {
        let ([n, m], s) = vars();
        let s = unique(s.unify(&n, &(&m + 1)));
        let s = unique(s.unify(&n, &Term::from(3)));
        assert_eq!(s.reify(&m), Match::Int(2));
        assert_eq!(s.reify(&n), Match::Int(3));
    }

    #[test]
    fn expressions_with_two_unknowns_do_not_unify_with_values() {
        let ([x, y], s) = vars();
        assert!(s.unify(&(&x + &y), &Term::from(3)).is_empty());
    }

    #[test]
    fn deferred_expressions_unify_componentwise() {
        let ([x, y], s) = vars();
        let s = unique(s.unify(&(&x + 1), &(&y + 1)));
        assert_eq!(s.walk(&x), &y);
        assert!(s.unify(&(&x + 1), &(&y - 1)).is_empty());
    }

    #[test]
    fn ill_typed_expressions_fail() {
        let ([x], s) = vars();
        assert!(s.unify(&(Term::from(1) + "a"), &Term::from(1)).is_empty());
        assert!(s.unify(&(&x + 1), &Term::from("one")).is_empty());
        assert!(s.unify(&(&x % 2), &Term::from(1)).is_empty());
        assert!(s.unify(&(&x + 1), &list![1]).is_empty());
    }

    #[test]
    fn disunify_succeeds_only_when_unification_fails() {
        let ([x], s) = vars();
        assert_eq!(unique(s.disunify(&Term::from(1), &Term::from(2))), s);
        assert!(s.disunify(&Term::from(1), &Term::from(1)).is_empty());
        assert!(s.disunify(&x, &Term::from(1)).is_empty());
    }

    #[test]
    fn reify_replaces_unbound_variables_with_unknown() {
        let ([x, y], s) = vars();
        let s = unique(s.unify(&x, &list![1 ; &y]));
        assert_eq!(
            s.reify(&x),
            Match::Improper(vec![Match::Int(1)], Box::new(Match::Unknown))
        );
        assert_eq!(s.reify_all(&[x, y]), vec![
            Match::Improper(vec![Match::Int(1)], Box::new(Match::Unknown)),
            Match::Unknown
        ]);
    }

    #[test]
    fn states_display_their_bindings() {
        let ([x, y], s) = vars();
        let s = unique(s.unify(&list![&y, &x], &list!["b", 5]));
        assert_eq!(s.to_string(), "[.0 = 5, .1 = \"b\"]");
    }

    fn atom() -> impl Strategy<Value = Term> {
        prop_oneof![
            any::<i64>().prop_map(Term::from),
            any::<bool>().prop_map(Term::from),
            "[a-c]{0,2}".prop_map(Term::from),
        ]
    }

    fn ground_term() -> impl Strategy<Value = Term> {
        let leaf = prop_oneof![atom(), Just(Term::Unit)];
        leaf.prop_recursive(3, 16, 2, |inner| {
            (inner.clone(), inner).prop_map(|(car, cdr)| Term::pair(car, cdr))
        })
    }

    /// Terms over the variables `_.0` to `_.2`.
    fn pattern() -> impl Strategy<Value = Term> {
        let leaf = prop_oneof![
            atom(),
            Just(Term::Unit),
            (0usize..3).prop_map(|i| Term::var(Var::new(i))),
        ];
        leaf.prop_recursive(3, 16, 2, |inner| {
            (inner.clone(), inner).prop_map(|(car, cdr)| Term::pair(car, cdr))
        })
    }

    /// Terms with variables and `x + k` expressions. Every variable gets
    /// its own id, starting at `first`, so unification cannot build cycles.
    fn linear_term(first: usize) -> impl Strategy<Value = Term> {
        let leaf = prop_oneof![
            atom(),
            Just(Term::Unit),
            Just(Term::var(Var::new(0))),
            any::<i8>().prop_map(|k| Term::var(Var::new(0)) + i64::from(k)),
        ];
        leaf.prop_recursive(3, 16, 2, |inner| {
            (inner.clone(), inner).prop_map(|(car, cdr)| Term::pair(car, cdr))
        })
        .prop_map(move |term| {
            let mut next = first;
            renumber(&term, &mut next)
        })
    }

    fn renumber(term: &Term, next: &mut usize) -> Term {
        match term {
            Term::Var(_) => {
                let var = Term::var(Var::new(*next));
                *next += 1;
                var
            }
            Term::Pair(car, cdr) => {
                let car = renumber(car, next);
                Term::pair(car, renumber(cdr, next))
            }
            Term::Expr(lhs, op, rhs) => {
                let lhs = renumber(lhs, next);
                Term::expr(lhs, *op, renumber(rhs, next))
            }
            atom => atom.clone(),
        }
    }

    fn solutions(s: &State, u: &Term, v: &Term) -> Vec<Row> {
        tracked_solutions(s, u, v, 3)
    }

    fn tracked_solutions(s: &State, u: &Term, v: &Term, tracked: usize) -> Vec<Row> {
        let tracked: Vec<Term> = (0..tracked).map(|i| Term::var(Var::new(i))).collect();
        s.unify(u, v)
            .into_iter()
            .map(|s| s.reify_all(&tracked))
            .collect()
    }

    proptest! {
        #[test]
        fn unification_is_symmetric(u in pattern(), v in ground_term()) {
            let ([_, _, _], s) = vars();
            prop_assert_eq!(solutions(&s, &u, &v), solutions(&s, &v, &u));
        }

        #[test]
        fn unification_with_variables_and_expressions_is_symmetric(
            u in linear_term(0),
            v in linear_term(20),
        ) {
            let s = State::empty();
            prop_assert_eq!(
                tracked_solutions(&s, &u, &v, 40),
                tracked_solutions(&s, &v, &u, 40)
            );
        }

        #[test]
        fn expressions_unify_with_values_from_either_side(k in any::<i8>(), n in any::<i32>()) {
            let ([x], s) = vars();
            let sum = &x + i64::from(k);
            let n = Term::from(i64::from(n));
            let left = tracked_solutions(&s, &sum, &n, 1);
            prop_assert_eq!(left.len(), 1);
            prop_assert_eq!(left, tracked_solutions(&s, &n, &sum, 1));
        }

        #[test]
        fn unification_of_ground_terms_is_equality(u in ground_term(), v in ground_term()) {
            let s = State::empty();
            prop_assert_eq!(s.unify(&u, &v).len(), Some(usize::from(u == v)));
        }

        #[test]
        fn unified_terms_walk_to_the_same_value(u in pattern(), v in ground_term()) {
            let ([_, _, _], s) = vars();
            for s in s.unify(&u, &v).into_iter() {
                prop_assert_eq!(s.walk_star(&u), v.clone());
            }
        }

        #[test]
        fn deep_walk_is_idempotent(u in pattern(), v in ground_term()) {
            let ([_, _, _], s) = vars();
            for s in s.unify(&u, &v).into_iter() {
                let once = s.walk_star(&u);
                prop_assert_eq!(s.walk_star(&once), once);
            }
        }
    }
}
