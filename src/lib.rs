//! A microKanren: relational programming embedded in Rust.
//!
//! Programs are built from [goals](core::goal::Goal), functions from a search
//! [state](core::state::State) to a lazy [stream](core::stream::Stream) of
//! states in which the goal holds. Disjunctions interleave their
//! alternatives, so a goal with infinitely many solutions does not hide the
//! solutions of its siblings.
//!
//! Unification understands arithmetic and boolean expressions. When all but
//! one operand is known, the missing operand is solved for:
//!
//! ```
//! use micro_kanren::prelude::*;
//! use micro_kanren::{row, run};
//!
//! assert_eq!(run!(*, x, eq(&x + 5, 9)), vec![row![4]]);
//! ```

#[macro_use]
pub mod macros;
pub mod core;
pub mod database;
pub mod goals;
pub mod prelude;
#[cfg(test)]
pub mod testing;

#[cfg(test)]
mod acceptance_tests;

use crate::core::goal::Goal;
use crate::core::logic_variable::Var;
use crate::core::reify::Row;
use crate::core::state::State;
use crate::core::term::Term;

/// How many solutions to realize.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Limit {
    /// Every solution. Does not return if there are infinitely many.
    #[default]
    All,
    Take(usize),
}

impl From<usize> for Limit {
    fn from(n: usize) -> Self {
        Limit::Take(n)
    }
}

impl From<Option<usize>> for Limit {
    fn from(n: Option<usize>) -> Self {
        n.map_or(Limit::All, Limit::Take)
    }
}

/// Run the goal built by `f` and reify its variables.
///
/// `f` receives `N` fresh variables. Each row holds their values in the
/// same order.
pub fn run<const N: usize>(limit: impl Into<Limit>, f: impl FnOnce([Term; N]) -> Goal) -> Vec<Row> {
    let (vars, state) = State::empty().fresh_vars::<N>();
    let goal = f(vars.clone());
    realize(limit.into(), goal, state, &vars)
}

/// Run a goal that introduces its own variables.
///
/// The goal is applied to the empty state, so the variables it creates with
/// [`fresh`](crate::goals::combinators::fresh) are numbered from zero. Each
/// row holds the values of the first `N` of them, in introduction order.
///
/// ```
/// use micro_kanren::prelude::*;
/// use micro_kanren::row;
///
/// let rows = run_goal::<1>(1, fresh(|[v]| eq(&v, 5)));
/// assert_eq!(rows, vec![row![5]]);
/// ```
pub fn run_goal<const N: usize>(limit: impl Into<Limit>, goal: Goal) -> Vec<Row> {
    let vars: [Term; N] = std::array::from_fn(|i| Term::var(Var::new(i)));
    realize(limit.into(), goal, State::empty(), &vars)
}

fn realize(limit: Limit, goal: Goal, state: State, vars: &[Term]) -> Vec<Row> {
    tracing::debug!(?limit, vars = vars.len(), "run");
    let states = match limit {
        Limit::All => goal.apply(state),
        Limit::Take(n) => goal.apply(state).take_inf(n),
    };
    let rows: Vec<Row> = states.into_iter().map(|s| s.reify_all(vars)).collect();
    tracing::debug!(rows = rows.len(), "run finished");
    rows
}

/// Like [`run`], but produce rows lazily.
pub fn run_iter<const N: usize>(f: impl FnOnce([Term; N]) -> Goal) -> impl Iterator<Item = Row> {
    let (vars, state) = State::empty().fresh_vars::<N>();
    let goal = f(vars.clone());
    goal.apply(state)
        .into_iter()
        .map(move |s| s.reify_all(&vars))
}
