use std::fmt;

use crate::plan::{ColumnId, PlanNodeKind};

/// Fatal failures of the matching machinery itself.
///
/// A plain pattern/plan disagreement is never one of these; that travels as
/// `MatchOutcome::NoMatch`. These variants mean the driver or the expected
/// pattern is broken and the whole assertion must abort loudly.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchError {
    /// `detail_matches` was invoked on a node whose shape the matcher already
    /// rejects. Defect in the tree-walking driver, not in the plan under test.
    ContractViolation { matcher: String, node_kind: PlanNodeKind },
    /// A symbolic reference names an alias nothing ever bound. The expected
    /// pattern is malformed or evaluated out of order.
    UnboundAlias { name: String, bound: Vec<String> },
    /// An alias was rebound to a different concrete column. Two parts of the
    /// expected pattern disagree about what the alias stands for.
    ConflictingBinding { alias: String, existing: ColumnId, attempted: ColumnId },
}

impl MatchError {
    pub fn err<T>(self) -> Result<T, MatchError> {
        Err(self)
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::ContractViolation { matcher, node_kind } => write!(
                f,
                "plan testing framework error: detail_matches called on {} although {} rejects its shape",
                node_kind, matcher,
            ),
            MatchError::UnboundAlias { name, bound } => write!(
                f,
                "alias '{}' is not bound; bound aliases: [{}]",
                name,
                bound.join(", "),
            ),
            MatchError::ConflictingBinding { alias, existing, attempted } => write!(
                f,
                "alias '{}' is already bound to {} and cannot be rebound to {}",
                alias, existing, attempted,
            ),
        }
    }
}

impl std::error::Error for MatchError {}

#[cfg(test)]
mod tests {
    use super::MatchError;
    use crate::plan::{ColumnId, PlanNodeKind};

    #[test]
    pub fn test_display_names_the_offending_matcher() {
        let err = MatchError::ContractViolation {
            matcher: "TopNMatcher".into(),
            node_kind: PlanNodeKind::Scan,
        };
        assert_eq!(
            err.to_string(),
            "plan testing framework error: detail_matches called on Scan although TopNMatcher rejects its shape",
        );
    }

    #[test]
    pub fn test_display_lists_bound_aliases() {
        let err = MatchError::UnboundAlias {
            name: "B".into(),
            bound: vec!["A".into(), "C".into()],
        };
        assert_eq!(err.to_string(), "alias 'B' is not bound; bound aliases: [A, C]");
    }

    #[test]
    pub fn test_display_reports_both_columns_on_conflict() {
        let err = MatchError::ConflictingBinding {
            alias: "A".into(),
            existing: ColumnId::new("col_1"),
            attempted: ColumnId::new("col_2"),
        };
        assert_eq!(
            err.to_string(),
            "alias 'A' is already bound to col_1 and cannot be rebound to col_2",
        );
    }
}
