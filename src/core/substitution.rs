//! Substitutions map variables to terms.
//!
//! Substitutions are persistent: extending one returns a new substitution
//! that shares structure with the old one, which stays valid. Sibling
//! search branches therefore never observe each other's bindings.

use crate::core::logic_variable::Var;
use crate::core::term::Term;
use im::HashMap;

/// Mapping of variables to terms.
#[derive(Clone, Default, PartialEq)]
pub struct Substitution {
    subs: HashMap<Var, Term>,
}

impl Substitution {
    /// Initialize an empty substitution
    pub fn empty() -> Self {
        Substitution {
            subs: HashMap::new(),
        }
    }

    /// Get number of substituted variables
    pub fn len(&self) -> usize {
        self.subs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    /// The term `var` is bound to directly, without walking.
    pub fn get(&self, var: Var) -> Option<&Term> {
        self.subs.get(&var)
    }

    /// Return a substitution that additionally binds `var` to `term`.
    ///
    /// There is no occurs check; binding a variable to a term containing
    /// itself makes `walk_star` diverge.
    pub fn extended(&self, var: Var, term: Term) -> Self {
        Substitution {
            subs: self.subs.update(var, term),
        }
    }

    /// Follow variable bindings until reaching a non-variable or an unbound variable.
    pub fn walk<'a>(&'a self, term: &'a Term) -> &'a Term {
        let mut term = term;
        while let Term::Var(var) = term {
            match self.subs.get(var) {
                Some(next) => term = next,
                None => break,
            }
        }
        term
    }

    /// Resolve every variable contained in `term`.
    ///
    /// Expressions whose operands resolve to values are evaluated. Expressions
    /// that still contain unbound variables, or that fail to evaluate, are
    /// returned with their operands resolved as far as possible.
    pub fn walk_star(&self, term: &Term) -> Term {
        match self.walk(term) {
            Term::Pair(car, cdr) => Term::pair(self.walk_star(car), self.walk_star(cdr)),
            Term::Expr(lhs, op, rhs) => {
                let lhs = self.walk_star(lhs);
                let rhs = self.walk_star(rhs);
                if lhs.is_atom() && rhs.is_atom() {
                    if let Ok(value) = op.evaluate(&lhs, &rhs) {
                        return value;
                    }
                }
                Term::expr(lhs, *op, rhs)
            }
            resolved => resolved.clone(),
        }
    }

    /// Bindings ordered by variable.
    pub fn bindings(&self) -> Vec<(Var, &Term)> {
        let mut bindings: Vec<_> = self.subs.iter().map(|(var, term)| (*var, term)).collect();
        bindings.sort_by_key(|(var, _)| *var);
        bindings
    }
}

impl std::fmt::Debug for Substitution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (var, term)) in self.bindings().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {:?}", var, term)?;
        }
        write!(f, "}}")
    }
}
