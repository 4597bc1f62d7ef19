use std::fmt;

use serde::{Deserialize, Serialize};

use crate::plan::{ColumnId, OrderingScheme};

/// Structural kind tag used by the cheap shape-matching phase.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PlanNodeKind {
    Scan,
    Project,
    Sort,
    Limit,
    TopN,
}

impl fmt::Display for PlanNodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            PlanNodeKind::Scan => "Scan",
            PlanNodeKind::Project => "Project",
            PlanNodeKind::Sort => "Sort",
            PlanNodeKind::Limit => "Limit",
            PlanNodeKind::TopN => "TopN",
        };
        write!(f, "{}", text)
    }
}

/// A node of the actual plan tree under assertion.
///
/// This is the read-only input side of the matcher contract: the planner
/// under test builds these, the matchers only inspect them. Column names are
/// whatever the planner generated, which is why tests go through aliases.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanNode {
    /// Scan of a named table; introduces the table's output columns.
    Scan {
        table: String,
        outputs: Vec<ColumnId>,
    },

    /// Projection; replaces the visible output columns.
    Project {
        input: Box<PlanNode>,
        outputs: Vec<ColumnId>,
    },

    /// Full sort with an explicit per-key direction.
    Sort {
        input: Box<PlanNode>,
        ordering: OrderingScheme,
    },

    /// Plain row-count cap, no ordering guarantee.
    Limit {
        input: Box<PlanNode>,
        row_cap: u64,
    },

    /// Bounded ordered limit: the top `row_cap` rows under `ordering`.
    TopN {
        input: Box<PlanNode>,
        row_cap: u64,
        ordering: OrderingScheme,
    },
}

impl PlanNode {
    pub fn kind(&self) -> PlanNodeKind {
        match self {
            PlanNode::Scan { .. } => PlanNodeKind::Scan,
            PlanNode::Project { .. } => PlanNodeKind::Project,
            PlanNode::Sort { .. } => PlanNodeKind::Sort,
            PlanNode::Limit { .. } => PlanNodeKind::Limit,
            PlanNode::TopN { .. } => PlanNodeKind::TopN,
        }
    }

    pub fn input(&self) -> Option<&PlanNode> {
        match self {
            PlanNode::Scan { .. } => None,
            PlanNode::Project { input, .. }
            | PlanNode::Sort { input, .. }
            | PlanNode::Limit { input, .. }
            | PlanNode::TopN { input, .. } => Some(input),
        }
    }

    /// Row cap for the node kinds that carry one.
    pub fn row_cap(&self) -> Option<u64> {
        match self {
            PlanNode::Limit { row_cap, .. } | PlanNode::TopN { row_cap, .. } => Some(*row_cap),
            _ => None,
        }
    }

    /// Declared ordering for the node kinds that carry one.
    pub fn ordering(&self) -> Option<&OrderingScheme> {
        match self {
            PlanNode::Sort { ordering, .. } | PlanNode::TopN { ordering, .. } => Some(ordering),
            _ => None,
        }
    }

    /// Output columns visible above this node.
    ///
    /// Sort/Limit/TopN are pass-through: they expose whatever their nearest
    /// output-bearing descendant produces.
    pub fn outputs(&self) -> &[ColumnId] {
        match self {
            PlanNode::Scan { outputs, .. } | PlanNode::Project { outputs, .. } => outputs,
            PlanNode::Sort { input, .. }
            | PlanNode::Limit { input, .. }
            | PlanNode::TopN { input, .. } => input.outputs(),
        }
    }
}

impl fmt::Display for PlanNode {
    /// One-level summary with the fields assertion failures report; children
    /// are elided, the driver renders the tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanNode::Scan { table, outputs } => {
                let cols: Vec<&str> = outputs.iter().map(|c| c.as_str()).collect();
                write!(f, "Scan[table={}, outputs=[{}]]", table, cols.join(", "))
            }
            PlanNode::Project { outputs, .. } => {
                let cols: Vec<&str> = outputs.iter().map(|c| c.as_str()).collect();
                write!(f, "Project[outputs=[{}]]", cols.join(", "))
            }
            PlanNode::Sort { ordering, .. } => write!(f, "Sort[ordering={}]", ordering),
            PlanNode::Limit { row_cap, .. } => write!(f, "Limit[row_cap={}]", row_cap),
            PlanNode::TopN { row_cap, ordering, .. } => {
                write!(f, "TopN[row_cap={}, ordering={}]", row_cap, ordering)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::SortOrder;

    fn scan(table: &str, columns: &[&str]) -> PlanNode {
        PlanNode::Scan {
            table: table.into(),
            outputs: columns.iter().map(|c| ColumnId::new(*c)).collect(),
        }
    }

    #[test]
    pub fn test_kind_tags() {
        let base = scan("t", &["c"]);
        assert_eq!(base.kind(), PlanNodeKind::Scan);

        let limit = PlanNode::Limit { input: Box::new(base.clone()), row_cap: 3 };
        assert_eq!(limit.kind(), PlanNodeKind::Limit);
        assert_eq!(limit.row_cap(), Some(3));
        assert_eq!(base.row_cap(), None);
    }

    #[test]
    pub fn test_outputs_delegate_through_pass_through_nodes() {
        let base = scan("t", &["a", "b"]);
        let sorted = PlanNode::Sort {
            input: Box::new(base),
            ordering: OrderingScheme::new().with_key(ColumnId::new("a"), SortOrder::AscNullsFirst),
        };
        let capped = PlanNode::TopN {
            input: Box::new(sorted),
            row_cap: 10,
            ordering: OrderingScheme::new().with_key(ColumnId::new("a"), SortOrder::AscNullsFirst),
        };

        let outputs: Vec<&str> = capped.outputs().iter().map(|c| c.as_str()).collect();
        assert_eq!(outputs, vec!["a", "b"]);
    }

    #[test]
    pub fn test_project_replaces_outputs() {
        let base = scan("t", &["a", "b"]);
        let projected = PlanNode::Project {
            input: Box::new(base),
            outputs: vec![ColumnId::new("expr_1")],
        };
        let outputs: Vec<&str> = projected.outputs().iter().map(|c| c.as_str()).collect();
        assert_eq!(outputs, vec!["expr_1"]);
    }

    #[test]
    pub fn test_display_reports_matching_fields() {
        let node = PlanNode::TopN {
            input: Box::new(scan("t", &["a"])),
            row_cap: 10,
            ordering: OrderingScheme::new().with_key(ColumnId::new("a"), SortOrder::AscNullsFirst),
        };
        assert_eq!(node.to_string(), "TopN[row_cap=10, ordering=[a ASC NULLS FIRST]]");
    }
}
