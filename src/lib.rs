pub mod plan;
pub use plan::{ColumnId, OrderingScheme, PlanCost, PlanNode, PlanNodeKind, SortOrder};

pub mod context;
pub use context::{MetadataCatalog, SessionContext};

pub mod matcher;
pub use matcher::{
    AliasBindings, LimitMatcher, MatchError, MatchOutcome, Matcher, ScanMatcher,
    SymbolicReference, TopNMatcher,
};
