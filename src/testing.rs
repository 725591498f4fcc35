use crate::core::goal::Goal;
use crate::core::reify::Row;

/// Assert that a goal fails
pub fn fails(goal: Goal) {
    assert!(goal.run(1).is_empty(), "expected goal to fail");
}

/// Assert that a goal succeeds at least once
pub fn succeeds(goal: Goal) {
    assert!(!goal.run(1).is_empty(), "expected goal to succeed");
}

/// Assert that `rows` contains `expected` and nothing else
pub fn has_unique_solution(mut rows: impl Iterator<Item = Row>, expected: Row) {
    assert_eq!(rows.next(), Some(expected));
    assert_eq!(rows.next(), None);
}
