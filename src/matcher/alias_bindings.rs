use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use crate::matcher::{MatchError, MatchOutcome};
use crate::plan::ColumnId;

/// Accumulating alias table for a single top-level match attempt.
///
/// Created empty when the attempt starts, threaded down through recursive
/// matcher calls, extended (never shrunk) as matches succeed, and discarded
/// when the attempt concludes. Not shared across concurrent attempts; each
/// attempt owns its instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AliasBindings {
    bindings: IndexMap<String, ColumnId>,
}

impl AliasBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an alias to a concrete column.
    ///
    /// Rebinding to the identical column is a no-op; rebinding to a different
    /// one is fatal, so a pattern that disagrees with itself fails loudly
    /// instead of masking a test-authoring bug.
    pub fn bind(&mut self, alias: impl Into<String>, column: ColumnId) -> Result<(), MatchError> {
        let alias = alias.into();
        if let Some(existing) = self.bindings.get(&alias) {
            if *existing != column {
                return MatchError::ConflictingBinding {
                    alias,
                    existing: existing.clone(),
                    attempted: column,
                }
                .err();
            }
            return Ok(());
        }
        debug!(alias = %alias, column = %column, "bound alias");
        self.bindings.insert(alias, column);
        Ok(())
    }

    pub fn get(&self, alias: &str) -> Option<&ColumnId> {
        self.bindings.get(alias)
    }

    /// Resolve an alias to its concrete column, fatal if unbound.
    pub fn resolve(&self, alias: &str) -> Result<ColumnId, MatchError> {
        match self.bindings.get(alias) {
            Some(column) => Ok(column.clone()),
            None => MatchError::UnboundAlias {
                name: alias.to_string(),
                bound: self.names().map(str::to_string).collect(),
            }
            .err(),
        }
    }

    /// Merge the new bindings of a successful outcome upward, applying the
    /// same conflict rule as `bind`.
    pub fn absorb(&mut self, outcome: &MatchOutcome) -> Result<(), MatchError> {
        for (alias, column) in outcome.new_bindings() {
            self.bind(alias.clone(), column.clone())?;
        }
        Ok(())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ColumnId)> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Display for AliasBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .bindings
            .iter()
            .map(|(alias, column)| format!("{} -> {}", alias, column))
            .collect();
        write!(f, "{{{}}}", rendered.join(", "))
    }
}
