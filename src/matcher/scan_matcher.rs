use indexmap::IndexMap;
use tracing::trace;

use crate::context::{MetadataCatalog, SessionContext};
use crate::matcher::{AliasBindings, MatchError, MatchOutcome, Matcher};
use crate::plan::{PlanCost, PlanNode, PlanNodeKind};

/// Matches a table scan and binds each output column to an alias by position.
///
/// This is where aliases enter a match attempt: a successful match carries
/// `output_aliases[i] -> outputs[i]` bindings upward, so sibling and ancestor
/// matchers can refer to the scan's columns without knowing the names the
/// planner generated for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanMatcher {
    table: String,
    output_aliases: Vec<String>,
}

impl ScanMatcher {
    pub fn new(table: impl Into<String>, output_aliases: Vec<String>) -> Self {
        Self { table: table.into(), output_aliases }
    }
}

impl Matcher for ScanMatcher {
    fn shape_matches(&self, node: &PlanNode) -> bool {
        node.kind() == PlanNodeKind::Scan
    }

    fn detail_matches(
        &self,
        node: &PlanNode,
        _cost: &PlanCost,
        _session: &SessionContext,
        _catalog: &MetadataCatalog,
        _bindings: &AliasBindings,
    ) -> Result<MatchOutcome, MatchError> {
        let (actual_table, outputs) = match node {
            PlanNode::Scan { table, outputs } => (table, outputs),
            _ => {
                return MatchError::ContractViolation {
                    matcher: "ScanMatcher".into(),
                    node_kind: node.kind(),
                }
                .err();
            }
        };

        if *actual_table != self.table {
            trace!(expected = %self.table, actual = %actual_table, "table name mismatch");
            return Ok(MatchOutcome::NoMatch);
        }

        if self.output_aliases.len() != outputs.len() {
            trace!(
                expected = self.output_aliases.len(),
                actual = outputs.len(),
                "output arity mismatch",
            );
            return Ok(MatchOutcome::NoMatch);
        }

        // A repeated alias over two different columns would be contradictory;
        // route the pairs through bind so the conflict rule applies.
        let mut discovered = AliasBindings::new();
        for (alias, column) in self.output_aliases.iter().zip(outputs) {
            discovered.bind(alias.clone(), column.clone())?;
        }

        let bindings: IndexMap<_, _> = discovered
            .iter()
            .map(|(alias, column)| (alias.clone(), column.clone()))
            .collect();
        Ok(MatchOutcome::matched_with_all(bindings))
    }

    fn describe(&self) -> String {
        format!("Scan(table={}, output_aliases=[{}])", self.table, self.output_aliases.join(", "))
    }
}
