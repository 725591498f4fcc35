use crate::core::goal::Goal;
use crate::core::state::State;
use crate::core::stream::Stream;
use crate::core::term::Term;

/// Creates a goal that succeeds if `u` and `v` unify.
pub fn eq(u: impl Into<Term>, v: impl Into<Term>) -> Goal {
    let u = u.into();
    let v = v.into();
    Goal::new(move |s: State| s.unify(&u, &v))
}

/// Creates a goal that succeeds if `u` and `v` do not unify.
///
/// This is checked once, against the bindings in place when the goal runs.
/// Bindings made later are not rechecked.
pub fn disunify(u: impl Into<Term>, v: impl Into<Term>) -> Goal {
    let u = u.into();
    let v = v.into();
    Goal::new(move |s: State| s.disunify(&u, &v))
}

pub fn succeed() -> Goal {
    Goal::new(Stream::singleton)
}

pub fn fail() -> Goal {
    Goal::new(|_| Stream::empty())
}

/// Creates a goal that succeeds if either of its subgoals succeeds.
pub fn disj2(g1: Goal, g2: Goal) -> Goal {
    Goal::new(move |s: State| Stream::append_inf(g1.apply(s.clone()), g2.apply(s)))
}

/// Creates a goal that succeeds if both of its subgoals succeed.
pub fn conj2(g1: Goal, g2: Goal) -> Goal {
    let g2 = g2.as_fn();
    Goal::new(move |s| g1.apply(s).append_map_inf(g2.clone()))
}

/// A goal that never produces a solution but never fails either.
pub fn nevero() -> Goal {
    Goal::new(|s| Stream::suspension(move || nevero().apply(s)))
}

/// A goal that succeeds infinitely often.
pub fn alwayso() -> Goal {
    Goal::new(|s| Stream::suspension(move || disj2(succeed(), alwayso()).apply(s)))
}
