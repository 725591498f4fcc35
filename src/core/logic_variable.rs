/// Logic variable.
///
/// Variables are identified by the index at which the search state
/// allocated them. Two variables are the same variable exactly when their
/// indices are equal, so variables can be copied freely.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var(usize);

impl Var {
    /// Refer to the variable with the given allocation index.
    ///
    /// Normally variables are obtained from `State::fresh_var`; constructing
    /// them by hand is mostly useful in tests.
    pub const fn new(id: usize) -> Self {
        Var(id)
    }

    /// Return the variable's allocation index.
    pub fn id(&self) -> usize {
        self.0
    }
}

impl std::fmt::Debug for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "_.{}", self.0)
    }
}

impl std::fmt::Display for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, ".{}", self.0)
    }
}
