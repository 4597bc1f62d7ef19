use tracing::trace;

use crate::context::{MetadataCatalog, SessionContext};
use crate::matcher::{AliasBindings, MatchError, MatchOutcome, Matcher, SymbolicReference};
use crate::plan::{ColumnId, OrderingScheme, PlanCost, PlanNode, PlanNodeKind, SortOrder};

/// Matches a bounded ordered limit node: top `row_cap` rows under the given
/// key sequence, every key sorted ascending-nulls-first.
///
/// Order keys are symbolic; they resolve against the bindings accumulated by
/// matchers lower in the tree, so tests never hard-code planner-generated
/// column names. This matcher only consumes aliases, it never binds new ones.
#[derive(Debug, Clone, PartialEq)]
pub struct TopNMatcher {
    row_cap: u64,
    order_keys: Vec<SymbolicReference>,
}

impl TopNMatcher {
    pub fn new(row_cap: u64, order_keys: Vec<SymbolicReference>) -> Self {
        Self { row_cap, order_keys }
    }
}

impl Matcher for TopNMatcher {
    fn shape_matches(&self, node: &PlanNode) -> bool {
        node.kind() == PlanNodeKind::TopN
    }

    fn detail_matches(
        &self,
        node: &PlanNode,
        _cost: &PlanCost,
        _session: &SessionContext,
        _catalog: &MetadataCatalog,
        bindings: &AliasBindings,
    ) -> Result<MatchOutcome, MatchError> {
        let (actual_cap, actual_ordering) = match node {
            PlanNode::TopN { row_cap, ordering, .. } => (*row_cap, ordering),
            _ => {
                return MatchError::ContractViolation {
                    matcher: "TopNMatcher".into(),
                    node_kind: node.kind(),
                }
                .err();
            }
        };

        if actual_cap != self.row_cap {
            trace!(expected = self.row_cap, actual = actual_cap, "row cap mismatch");
            return Ok(MatchOutcome::NoMatch);
        }

        // Unbound aliases abort the whole assertion rather than degrading
        // into a NoMatch: the pattern itself is broken.
        let expected_keys: Vec<ColumnId> = self
            .order_keys
            .iter()
            .map(|key| key.resolve(bindings))
            .collect::<Result<_, _>>()?;

        if actual_ordering.columns() != expected_keys {
            trace!(
                expected = ?expected_keys,
                actual = ?actual_ordering.columns(),
                "order key sequence mismatch",
            );
            return Ok(MatchOutcome::NoMatch);
        }

        let expected_ordering = OrderingScheme::uniform(&expected_keys, SortOrder::AscNullsFirst);
        if *actual_ordering != expected_ordering {
            trace!(
                expected = %expected_ordering,
                actual = %actual_ordering,
                "sort direction mismatch",
            );
            return Ok(MatchOutcome::NoMatch);
        }

        Ok(MatchOutcome::matched())
    }

    fn describe(&self) -> String {
        let keys: Vec<String> = self.order_keys.iter().map(|key| key.canonical()).collect();
        format!("TopN(row_cap={}, order_keys=[{}])", self.row_cap, keys.join(", "))
    }
}
