use tracing::trace;

use crate::context::{MetadataCatalog, SessionContext};
use crate::matcher::{AliasBindings, MatchError, MatchOutcome, Matcher};
use crate::plan::{PlanCost, PlanNode, PlanNodeKind};

/// Matches a plain row-count cap with no ordering guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitMatcher {
    row_cap: u64,
}

impl LimitMatcher {
    pub fn new(row_cap: u64) -> Self {
        Self { row_cap }
    }
}

impl Matcher for LimitMatcher {
    fn shape_matches(&self, node: &PlanNode) -> bool {
        node.kind() == PlanNodeKind::Limit
    }

    fn detail_matches(
        &self,
        node: &PlanNode,
        _cost: &PlanCost,
        _session: &SessionContext,
        _catalog: &MetadataCatalog,
        _bindings: &AliasBindings,
    ) -> Result<MatchOutcome, MatchError> {
        let actual_cap = match node {
            PlanNode::Limit { row_cap, .. } => *row_cap,
            _ => {
                return MatchError::ContractViolation {
                    matcher: "LimitMatcher".into(),
                    node_kind: node.kind(),
                }
                .err();
            }
        };

        if actual_cap != self.row_cap {
            trace!(expected = self.row_cap, actual = actual_cap, "row cap mismatch");
            return Ok(MatchOutcome::NoMatch);
        }
        Ok(MatchOutcome::matched())
    }

    fn describe(&self) -> String {
        format!("Limit(row_cap={})", self.row_cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::ColumnId;

    fn limit_node(row_cap: u64) -> PlanNode {
        PlanNode::Limit {
            input: Box::new(PlanNode::Scan {
                table: "t".into(),
                outputs: vec![ColumnId::new("col_1")],
            }),
            row_cap,
        }
    }

    fn detail(matcher: &LimitMatcher, node: &PlanNode) -> Result<MatchOutcome, MatchError> {
        matcher.detail_matches(
            node,
            &PlanCost::unknown(),
            &SessionContext::new(),
            &MetadataCatalog::new(),
            &AliasBindings::new(),
        )
    }

    #[test]
    pub fn test_shape_only_accepts_limit_nodes() {
        let matcher = LimitMatcher::new(5);
        assert!(matcher.shape_matches(&limit_node(99)));
        assert!(!matcher.shape_matches(&PlanNode::Scan { table: "t".into(), outputs: vec![] }));
    }

    #[test]
    pub fn test_matching_cap_succeeds() {
        let matcher = LimitMatcher::new(5);
        let outcome = detail(&matcher, &limit_node(5)).expect("no fatal error");
        assert!(outcome.is_match());
    }

    #[test]
    pub fn test_cap_mismatch_is_no_match() {
        let matcher = LimitMatcher::new(5);
        let outcome = detail(&matcher, &limit_node(6)).expect("no fatal error");
        assert_eq!(outcome, MatchOutcome::NoMatch);
    }

    #[test]
    pub fn test_detail_on_wrong_kind_is_a_contract_violation() {
        let matcher = LimitMatcher::new(5);
        let node = PlanNode::Scan { table: "t".into(), outputs: vec![] };
        let err = detail(&matcher, &node).expect_err("contract violation");
        assert_eq!(
            err,
            MatchError::ContractViolation {
                matcher: "LimitMatcher".into(),
                node_kind: PlanNodeKind::Scan,
            },
        );
    }

    #[test]
    pub fn test_describe() {
        assert_eq!(LimitMatcher::new(5).describe(), "Limit(row_cap=5)");
    }
}
