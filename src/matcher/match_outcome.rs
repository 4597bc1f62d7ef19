use indexmap::IndexMap;

use crate::plan::ColumnId;

/// Result of a detail match: no match, or a match that may carry alias
/// bindings this matcher discovered for the first time.
///
/// `NoMatch` is ordinary control flow; the fatal cases travel separately as
/// `MatchError`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MatchOutcome {
    #[default]
    NoMatch,
    Match { bindings: IndexMap<String, ColumnId> },
}

impl MatchOutcome {
    /// Successful match that introduces no new aliases.
    pub fn matched() -> Self {
        MatchOutcome::Match { bindings: IndexMap::new() }
    }

    /// Successful match binding a single alias.
    pub fn matched_with(alias: impl Into<String>, column: ColumnId) -> Self {
        let mut bindings = IndexMap::new();
        bindings.insert(alias.into(), column);
        MatchOutcome::Match { bindings }
    }

    /// Successful match binding several aliases at once.
    pub fn matched_with_all(bindings: IndexMap<String, ColumnId>) -> Self {
        MatchOutcome::Match { bindings }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Match { .. })
    }

    /// Newly discovered bindings, empty for `NoMatch`.
    pub fn new_bindings(&self) -> impl Iterator<Item = (&String, &ColumnId)> {
        match self {
            MatchOutcome::NoMatch => None,
            MatchOutcome::Match { bindings } => Some(bindings.iter()),
        }
        .into_iter()
        .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::MatchOutcome;
    use crate::plan::ColumnId;

    #[test]
    pub fn test_no_match_carries_nothing() {
        let outcome = MatchOutcome::NoMatch;
        assert!(!outcome.is_match());
        assert_eq!(outcome.new_bindings().count(), 0);
    }

    #[test]
    pub fn test_match_without_bindings() {
        let outcome = MatchOutcome::matched();
        assert!(outcome.is_match());
        assert_eq!(outcome.new_bindings().count(), 0);
    }

    #[test]
    pub fn test_match_with_bindings_preserves_order() {
        let mut bindings = indexmap::IndexMap::new();
        bindings.insert("A".to_string(), ColumnId::new("col_1"));
        bindings.insert("B".to_string(), ColumnId::new("col_2"));
        let outcome = MatchOutcome::matched_with_all(bindings);

        let seen: Vec<(&str, &str)> = outcome
            .new_bindings()
            .map(|(alias, column)| (alias.as_str(), column.as_str()))
            .collect();
        assert_eq!(seen, vec![("A", "col_1"), ("B", "col_2")]);
    }
}
