use crate::prelude::*;
use crate::testing::has_unique_solution;
use crate::{defrel, disj, list, row, run};

#[test]
fn running_goal_that_fails_produces_no_rows() {
    let rows = run!(*, q, fail());
    assert!(rows.is_empty())
}

#[test]
fn running_equality_goal_associates_value_to_fresh_variable() {
    let rows = run!(*, q, eq(&q, 1));
    assert_eq!(rows, vec![row![1]]);
}

#[test]
fn fresh_variable_unified_with_five() {
    let rows = run_goal::<1>(1, fresh(|[v]| eq(&v, 5)));
    assert_eq!(rows, vec![row![5]]);

    let rows = run(1, |[v]| eq(&v, 5));
    assert_eq!(rows, vec![row![5]]);
}

#[test]
fn addition_is_solved_for_the_unknown_operand() {
    assert_eq!(run!(*, x, eq(&x + 5, 9)), vec![row![4]]);
}

#[test]
fn conjunction_with_false_enumerates_both_booleans() {
    assert_eq!(run!(*, x, eq(&x & false, false)), vec![row![false], row![true]]);
}

#[test]
fn disjunction_with_true_enumerates_both_booleans() {
    assert_eq!(run!(*, x, eq(&x | true, true)), vec![row![false], row![true]]);
}

#[test]
fn appendo_finds_the_missing_prefix() {
    has_unique_solution(
        run!(x, appendo(&x, list![4, 5], list![1, 2, 3, 4, 5])),
        row![vec![1, 2, 3]],
    );
}

#[test]
fn appendo_enumerates_all_six_splits() {
    let rows = run!(*, (x, y), appendo(&x, &y, list![1, 2, 3, 4, 5]));
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0], vec![Match::Nil, Match::from(vec![1, 2, 3, 4, 5])]);
    assert_eq!(rows[5], vec![Match::from(vec![1, 2, 3, 4, 5]), Match::Nil]);
}

#[test]
fn membero_leaves_unconstrained_positions_unknown() {
    let rows = run!(*, (x, y), membero(3, list![&x, &y, 3]));
    assert_eq!(rows, vec![row![3, ?], row![?, 3], row![?, ?]]);
}

defrel! {
    fives(x) {
        disj!(eq(&x, 5); fives(&x))
    }
}

defrel! {
    sixes(x) {
        disj!(eq(&x, 6); sixes(&x))
    }
}

#[test]
fn infinite_disjunct_does_not_starve_finite_one() {
    let rows = run!(5, q, disj!(fives(&q); eq(&q, 7)));
    assert_eq!(rows.len(), 5);
    assert!(rows.contains(&row![7]));
}

#[test]
fn infinite_disjuncts_take_turns() {
    let rows = run!(10, q, disj!(fives(&q); sixes(&q)));
    assert!(rows.contains(&row![5]));
    assert!(rows.contains(&row![6]));
}

#[test]
fn bounded_run_of_infinite_goal_terminates() {
    assert_eq!(run!(3, q, fives(&q)), vec![row![5], row![5], row![5]]);
}

#[test]
fn relations_compose_with_arithmetic() {
    let rows = run!(*, (l, n), eq(&l, list!["a", "b"]), lengtho(&n, &l));
    assert_eq!(rows, vec![row![vec!["a", "b"], 2]]);
}

#[test]
fn disunify_rules_out_values() {
    let rows = run!(*, q, membero(&q, list![1, 2, 3]), disunify(&q, 2));
    assert_eq!(rows, vec![row![1], row![3]]);
}

#[test]
fn output_is_deterministic() {
    let first = run!(*, (x, y), appendo(&x, &y, list![1, 2, 3]));
    let second = run!(*, (x, y), appendo(&x, &y, list![1, 2, 3]));
    assert_eq!(first, second);
}
