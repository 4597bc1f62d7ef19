use std::fmt;

use crate::matcher::{AliasBindings, MatchError};
use crate::plan::ColumnId;

/// Symbolic stand-in for a column the test author cannot name directly.
///
/// Either a bare alias or a small function-style expression over aliases
/// (e.g. `min(A, B)`). Immutable once authored; resolved any number of times
/// against different binding tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SymbolicReference {
    Alias(String),
    Call { function: String, args: Vec<SymbolicReference> },
}

impl SymbolicReference {
    pub fn alias(name: impl Into<String>) -> Self {
        SymbolicReference::Alias(name.into())
    }

    pub fn call(function: impl Into<String>, args: Vec<SymbolicReference>) -> Self {
        SymbolicReference::Call { function: function.into(), args }
    }

    /// Canonical text of the reference, also its lookup key in the bindings.
    pub fn canonical(&self) -> String {
        match self {
            SymbolicReference::Alias(name) => name.clone(),
            SymbolicReference::Call { function, args } => {
                let rendered: Vec<String> = args.iter().map(|a| a.canonical()).collect();
                format!("{}({})", function, rendered.join(", "))
            }
        }
    }

    /// Resolve against the bindings accumulated so far.
    ///
    /// Unbound references are fatal: they mean the expected pattern names an
    /// alias no earlier matcher ever bound, which is a broken test, not a
    /// plan mismatch.
    pub fn resolve(&self, bindings: &AliasBindings) -> Result<ColumnId, MatchError> {
        bindings.resolve(&self.canonical())
    }
}

impl fmt::Display for SymbolicReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}
