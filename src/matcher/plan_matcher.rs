use crate::context::{MetadataCatalog, SessionContext};
use crate::matcher::{AliasBindings, MatchError, MatchOutcome};
use crate::plan::{PlanCost, PlanNode};

/// Contract every expected-pattern matcher variant satisfies.
///
/// Matching is two-phase: the driver first asks `shape_matches`, and only on
/// a positive answer pays for `detail_matches` with the bindings accumulated
/// so far. The split lets the driver prune on tree shape cheaply and lets
/// failure reports distinguish "wrong kind of node" from "right kind, wrong
/// parameters".
///
/// Matchers are immutable after construction and hold no per-attempt state,
/// so one instance can serve any number of independent match attempts.
pub trait Matcher {
    /// Cheap structural check on the node kind alone. Must not consult the
    /// bindings, cost, session, or catalog.
    fn shape_matches(&self, node: &PlanNode) -> bool;

    /// Full semantic check of the node's parameters and alias-resolved
    /// references.
    ///
    /// The driver must only call this after `shape_matches` returned true for
    /// the same node; implementations re-verify defensively and return
    /// `MatchError::ContractViolation` instead of proceeding when the
    /// precondition is broken. `NoMatch` is an ordinary result inside `Ok`;
    /// `Err` is reserved for fatal framework or test-authoring defects.
    fn detail_matches(
        &self,
        node: &PlanNode,
        cost: &PlanCost,
        session: &SessionContext,
        catalog: &MetadataCatalog,
        bindings: &AliasBindings,
    ) -> Result<MatchOutcome, MatchError>;

    /// Render every configuration field that participates in matching, for
    /// assertion-failure diagnostics.
    fn describe(&self) -> String;
}
