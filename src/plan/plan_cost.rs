use std::fmt;

use ordered_float::OrderedFloat;

/// Cost estimate attached to a plan node by the planner under test.
///
/// Matchers receive it read-only through the detail-match contract; the
/// matchers in this crate pass it through untouched. `OrderedFloat` keeps
/// estimates equality-comparable for matchers that do inspect them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlanCost {
    pub output_rows: Option<OrderedFloat<f64>>,
    pub output_bytes: Option<OrderedFloat<f64>>,
}

impl PlanCost {
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: f64) -> Self {
        Self { output_rows: Some(OrderedFloat(rows)), output_bytes: None }
    }

    pub fn is_unknown(&self) -> bool {
        self.output_rows.is_none() && self.output_bytes.is_none()
    }
}

impl fmt::Display for PlanCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.output_rows, self.output_bytes) {
            (None, None) => write!(f, "cost: unknown"),
            (rows, bytes) => write!(
                f,
                "cost: rows={}, bytes={}",
                rows.map_or("?".to_string(), |v| v.to_string()),
                bytes.map_or("?".to_string(), |v| v.to_string()),
            ),
        }
    }
}
