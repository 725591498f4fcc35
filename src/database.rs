//! Relations defined by tables of facts.

use crate::core::goal::Goal;
use crate::core::term::Term;
use crate::goals::combinators::{conj, disj};
use crate::goals::primitive::{eq, fail};
use std::collections::HashMap;

/// A relation given by the list of rows for which it holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Relation {
    facts: Vec<Vec<Term>>,
}

impl Relation {
    pub fn new(facts: impl IntoIterator<Item = Vec<Term>>) -> Self {
        Relation {
            facts: facts.into_iter().collect(),
        }
    }

    pub fn push(&mut self, row: Vec<Term>) {
        self.facts.push(row)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Creates a goal that succeeds once for every fact that unifies with `args`.
    ///
    /// Facts with a different number of columns than `args` are ignored.
    pub fn goal(&self, args: Vec<Term>) -> Goal {
        let clauses = self
            .facts
            .iter()
            .filter(|fact| fact.len() == args.len())
            .map(|fact| conj(fact.iter().zip(&args).map(|(value, arg)| eq(arg, value))));
        disj(clauses)
    }
}

/// Named relations.
#[derive(Debug, Clone, Default)]
pub struct Database {
    tables: HashMap<String, Relation>,
}

impl Database {
    pub fn new() -> Self {
        Database::default()
    }

    pub fn insert(&mut self, table_name: &str, row: Vec<Term>) {
        self.tables
            .entry(table_name.to_string())
            .or_default()
            .push(row)
    }

    pub fn table(&self, table_name: &str) -> Option<&Relation> {
        self.tables.get(table_name)
    }

    /// Creates a goal that succeeds for every row of `table_name` that unifies with `args`.
    ///
    /// Querying a table that does not exist fails.
    pub fn query(&self, table_name: &str, args: Vec<Term>) -> Goal {
        match self.tables.get(table_name) {
            Some(relation) => relation.goal(args),
            None => {
                tracing::debug!(table = table_name, "query of unknown table");
                fail()
            }
        }
    }
}

/// Declare query functions for tables of a [`Database`].
///
/// `db_rel! { food(f); likes(who, what) }` defines `food(&db, f)` and
/// `likes(&db, who, what)`.
#[macro_export]
macro_rules! db_rel {
    ($($rel:ident($($args:ident),*));* $(;)?) => {
        $(
            fn $rel(
                db: &$crate::database::Database,
                $($args: impl Into<$crate::prelude::Term>),*
            ) -> $crate::prelude::Goal {
                db.query(stringify!($rel), vec![$($args.into()),*])
            }
        )*
    };
}

/// Insert facts into a [`Database`].
#[macro_export]
macro_rules! db_facts {
    ($($db:ident { $($rel:ident($($args:expr),*));* $(;)? })*) => {
        $( $(
            $db.insert(stringify!($rel), vec![$($crate::prelude::Term::from($args)),*]);
        )* )*
    };
}
