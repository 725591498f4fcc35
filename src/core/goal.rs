use super::state::State;
use super::stream::{Stream, StreamIter};
use std::fmt;
use std::ops::{BitAnd, BitOr};
use std::rc::Rc;

/// A goal maps a state to the stream of states in which it holds.
///
/// Goals are cheap to clone; clones share the same function.
#[derive(Clone)]
pub struct Goal(Rc<dyn Fn(State) -> Stream<State>>);

impl Goal {
    pub fn new(f: impl 'static + Fn(State) -> Stream<State>) -> Self {
        Goal(Rc::new(f))
    }

    pub fn apply(&self, s: State) -> Stream<State> {
        (self.0)(s)
    }

    /// Apply to the empty state and realize at most `n` solutions.
    pub fn run(&self, n: usize) -> Stream<State> {
        self.apply(State::empty()).take_inf(n)
    }

    /// Apply to the empty state and realize all solutions.
    pub fn run_inf(&self) -> Stream<State> {
        self.apply(State::empty()).take_inf_all()
    }

    pub fn iter(&self) -> StreamIter<State> {
        self.apply(State::empty()).into_iter()
    }

    pub(crate) fn as_fn(&self) -> Rc<dyn Fn(State) -> Stream<State>> {
        self.0.clone()
    }
}

impl<F: 'static + Fn(State) -> Stream<State>> From<F> for Goal {
    fn from(f: F) -> Self {
        Goal::new(f)
    }
}

impl fmt::Debug for Goal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<goal>")
    }
}

/// `g1 & g2` is `conj2(g1, g2)`.
impl BitAnd for Goal {
    type Output = Goal;

    fn bitand(self, rhs: Goal) -> Goal {
        crate::goals::primitive::conj2(self, rhs)
    }
}

/// `g1 | g2` is `disj2(g1, g2)`.
impl BitOr for Goal {
    type Output = Goal;

    fn bitor(self, rhs: Goal) -> Goal {
        crate::goals::primitive::disj2(self, rhs)
    }
}
