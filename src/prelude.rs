pub use crate::{
    core::{
        goal::Goal,
        logic_variable::Var,
        operation::{BinaryOp, EvalError},
        reify::{Match, ReifyError, Row},
        state::State,
        stream::Stream,
        substitution::Substitution,
        term::Term,
    },
    goals::{combinators::*, list::*, numbers::*, primitive::*},
    run, run_goal, run_iter, Limit,
};
