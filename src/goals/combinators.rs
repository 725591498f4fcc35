//! Compose goals using combinators to build more complex goals
//!

use crate::core::goal::Goal;
use crate::core::state::State;
use crate::core::stream::Stream;
use crate::core::term::Term;
use crate::goals::primitive::succeed;

/// Delay a goal until its stream is forced.
///
/// Recursive relations must reach themselves through a delayed goal, or
/// building their stream recurses forever before a single answer exists.
pub fn snooze(g: Goal) -> Goal {
    Goal::new(move |s: State| {
        let g = g.clone();
        Stream::suspension(move || g.apply(s))
    })
}

/// Introduce `N` fresh variables and pass them to `f`.
///
/// The variables get consecutive ids starting at the state's variable count,
/// in the order they appear in the array.
pub fn fresh<const N: usize>(f: impl 'static + Fn([Term; N]) -> Goal) -> Goal {
    Goal::new(move |s: State| {
        let (vars, s) = s.fresh_vars::<N>();
        f(vars).apply(s)
    })
}

/// Creates a goal that succeeds if all of its subgoals succeed.
///
/// Each subgoal is delayed and runs once for every state the previous ones
/// produced.
pub fn conj(goals: impl IntoIterator<Item = Goal>) -> Goal {
    let mut goals: Vec<Goal> = goals.into_iter().collect();
    match goals.len() {
        0 => succeed(),
        1 => snooze(goals.remove(0)),
        _ => {
            let steps: Vec<_> = goals.into_iter().map(|g| snooze(g).as_fn()).collect();
            Goal::new(move |s| {
                steps
                    .iter()
                    .fold(Stream::singleton(s), |states, step| {
                        states.append_map_inf(step.clone())
                    })
            })
        }
    }
}

/// Creates a goal that succeeds if any of its subgoals succeeds.
///
/// The subgoals' streams are interleaved, so an infinite alternative does
/// not hide the others.
pub fn disj(goals: impl IntoIterator<Item = Goal>) -> Goal {
    let goals: Vec<Goal> = goals.into_iter().map(snooze).collect();
    Goal::new(move |s: State| {
        goals
            .iter()
            .fold(Stream::empty(), |states, g| states + g.apply(s.clone()))
    })
}

/// Creates a goal that succeeds if any of its clauses succeeds, where a
/// clause succeeds if all of its goals succeed.
pub fn conde<C: IntoIterator<Item = Goal>>(clauses: impl IntoIterator<Item = C>) -> Goal {
    disj(clauses.into_iter().map(conj))
}

/// Log every application of `goal` and every state it produces.
///
/// Applications are logged at debug level, solutions at trace level as the
/// stream is forced.
pub fn trace(name: &'static str, goal: Goal) -> Goal {
    Goal::new(move |s: State| {
        tracing::debug!(goal = name, state = %s, "apply");
        goal.apply(s).map(move |s| {
            tracing::trace!(goal = name, state = %s, "solution");
            s
        })
    })
}
