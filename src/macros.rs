//! Macros for embedding microKanren as DSL in Rust

/// Creates a goal that succeeds if any of its subgoals succeeds.
///
/// Subgoals may be separated by `;` or `,`.
#[macro_export]
macro_rules! disj {
    () => { $crate::prelude::fail() };
    ($($g:expr);+ $(;)?) => { $crate::prelude::disj(vec![$($g),+]) };
    ($($g:expr),+ $(,)?) => { $crate::prelude::disj(vec![$($g),+]) };
}

/// Creates a goal that succeeds if all of its subgoals succeed
#[macro_export]
macro_rules! conj {
    () => { $crate::prelude::succeed() };
    ($($g:expr),+ $(,)?) => { $crate::prelude::conj(vec![$($g),+]) };
}

/// Creates a goal that succeeds if any of its *lines* succeeds.
///
/// A *line* (separated by `;`) succeeds if all of its
/// goals (separated by `,`) succeed.
#[macro_export]
macro_rules! conde {
    ($($($g:expr),+);+ $(;)?) => {
        $crate::prelude::conde(vec![$(vec![$($g),+]),+])
    };
}

/// Bind fresh variables with scope inside the body of `fresh!`.
///
/// The body is a sequence of goals that must all succeed. Captured terms are
/// moved into the goal, so refer to outer variables by reference where they
/// are used again afterwards.
#[macro_export]
macro_rules! fresh {
    (($($x:ident),+), $($g:expr),* $(,)?) => {
        $crate::prelude::fresh(move |[$($x),+]| $crate::conj!($($g),*))
    };
}

/// Define a relation.
/// A relation is a function that creates a goal.
///
/// Arguments accept anything that converts into a `Term` and are available
/// as `Term`s in the body. The body is a list of goals that must all succeed,
/// and it is only built when the goal's stream is forced, so a relation may
/// refer to itself.
///
/// Prefixing the name with `trace` logs each application through
/// [`trace`](crate::goals::combinators::trace).
#[macro_export]
macro_rules! defrel {
    (@body: $($args:ident),* { $($g:expr),* }) => {{
        $(
            let $args: $crate::prelude::Term = $args.into();
        )*
        $crate::prelude::Goal::new(move |s: $crate::prelude::State| {
            $(
                let $args = $args.clone();
            )*
            $crate::prelude::Stream::suspension(move || $crate::conj!($($g),*).apply(s))
        })
    }};

    ($(#[$outer:meta])* $vis:vis trace $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        $vis fn $name($($args: impl Into<$crate::prelude::Term>),*) -> $crate::prelude::Goal {
            $crate::prelude::trace(
                stringify!($name),
                $crate::defrel!(@body: $($args),* { $($g),* }),
            )
        }
    };

    ($(#[$outer:meta])* $vis:vis $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        $vis fn $name($($args: impl Into<$crate::prelude::Term>),*) -> $crate::prelude::Goal {
            $crate::defrel!(@body: $($args),* { $($g),* })
        }
    };
}

/// Run one or more goals.
///
/// The syntax `run!(n, var(s), goal1, goal2, ...)` produces at most n
/// rows, in Scheme you would write `(run n var(s) goal1 goal2 ...)`.
/// The syntax `run!(*, var(s), goal1, goal2, ...)` produces all
/// rows, in Scheme you would write `(run* var(s) goal1 goal2 ...)`.
/// The latter does not return if there are infinitely many.
///
/// We support an additional syntax `run!(var(s), goal1, goal2, ...)`
/// that returns a (possibly infinite) iterator over all rows.
///
/// Each row holds one value per variable, in the order the variables
/// are listed.
#[macro_export]
macro_rules! run {
    (*, ($($x:ident),+), $($g:expr),* $(,)?) => {
        $crate::run($crate::prelude::Limit::All, |[$($x),+]| $crate::conj!($($g),*))
    };

    (*, $q:ident, $($g:expr),* $(,)?) => {
        $crate::run!(*, ($q), $($g),*)
    };

    (($($x:ident),+), $($g:expr),* $(,)?) => {
        $crate::run_iter(|[$($x),+]| $crate::conj!($($g),*))
    };

    ($q:ident, $($g:expr),* $(,)?) => {
        $crate::run!(($q), $($g),*)
    };

    ($n:expr, ($($x:ident),+), $($g:expr),* $(,)?) => {
        $crate::run($n, |[$($x),+]| $crate::conj!($($g),*))
    };

    ($n:expr, $q:ident, $($g:expr),* $(,)?) => {
        $crate::run!($n, ($q), $($g),*)
    };
}

/// Build a list term.
///
/// `list![a, b, c]` is a proper list, `list![a, b ; tail]` ends in `tail`.
#[macro_export]
macro_rules! list {
    () => { $crate::prelude::Term::Unit };

    ($single:expr) => {
        $crate::prelude::Term::pair($single, ())
    };

    ($car:expr ; $cdr:expr) => {
        $crate::prelude::Term::pair($car, $cdr)
    };

    ($first:expr, $($rest:tt)*) => {
        $crate::prelude::Term::pair($first, $crate::list![$($rest)*])
    };
}

/// Build an expected result row.
///
/// `?` stands for a value that remained unknown.
#[macro_export]
macro_rules! row {
    (@acc [$($done:expr),*]) => {
        vec![$($done),*]
    };

    (@acc [$($done:expr),*] ? $(, $($rest:tt)*)?) => {
        $crate::row!(@acc [$($done,)* $crate::prelude::Match::Unknown] $($($rest)*)?)
    };

    (@acc [$($done:expr),*] $item:expr $(, $($rest:tt)*)?) => {
        $crate::row!(@acc [$($done,)* $crate::prelude::Match::from($item)] $($($rest)*)?)
    };

    ($($items:tt)*) => {
        $crate::row!(@acc [] $($items)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn row_macro_builds_matches() {
        let row: Row = row![1, ?, "a", vec![true]];
        assert_eq!(
            row,
            vec![
                Match::Int(1),
                Match::Unknown,
                Match::from("a"),
                Match::List(vec![Match::Bool(true)]),
            ]
        );
        let empty: Row = row![];
        assert_eq!(empty, Row::new());
    }

    #[test]
    fn run_macro_supports_all_forms() {
        assert_eq!(run!(1, q, eq(&q, 42)), vec![row![42]]);
        assert_eq!(run!(*, q, disj!(eq(&q, 1); eq(&q, 2))), vec![row![1], row![2]]);
        assert_eq!(run!(1, (x, y), eq(&x, 42)), vec![row![42, ?]]);
        assert_eq!(run!(*, (x, y), eq(&x, &y), eq(&y, "z")), vec![row!["z", "z"]]);

        let mut rows = run!(q, eq(&q, "onion"), alwayso());
        assert_eq!(rows.next(), Some(row!["onion"]));
        assert_eq!(rows.next(), Some(row!["onion"]));
    }

    #[test]
    fn run_without_goals_leaves_variables_unknown() {
        assert_eq!(run!(1, q,), vec![row![?]]);
        assert_eq!(run!(1, (x, y),), vec![row![?, ?]]);
    }

    #[test]
    fn defrel_defines_recursive_relations() {
        defrel! {
            teacup(t) {
                disj!(eq(&t, "tea"); eq(&t, "cup"))
            }
        }

        assert_eq!(run!(*, x, teacup(&x)), vec![row!["tea"], row!["cup"]]);
    }

    #[test]
    fn fresh_macro_introduces_variables() {
        let rows = run!(*, q, fresh!((a, d), eq(&q, (&a, &d)), eq(&a, 1), eq(&d, 2)));
        assert_eq!(rows, vec![vec![Match::Improper(vec![Match::Int(1)], Box::new(Match::Int(2)))]]);
    }

    #[test]
    fn conde_macro_combines_lines() {
        let rows = run!(*, (x, y),
            conde!(
                eq(&x, "split"), eq(&y, "pea");
                eq(&x, "red"), eq(&y, "bean");
            )
        );
        assert_eq!(rows, vec![row!["split", "pea"], row!["red", "bean"]]);
    }

    #[test]
    fn goals_can_be_separated_by_commas_in_disj() {
        let rows = run!(*, q, disj!(eq(&q, 1), eq(&q, 2)));
        assert_eq!(rows, vec![row![1], row![2]]);
    }
}
