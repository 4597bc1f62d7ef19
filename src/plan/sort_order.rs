use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::plan::ColumnId;

/// Closed set of null-aware sort directions a plan node can declare per key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum SortOrder {
    AscNullsFirst,
    AscNullsLast,
    DescNullsFirst,
    DescNullsLast,
}

impl SortOrder {
    pub fn is_ascending(&self) -> bool {
        matches!(self, SortOrder::AscNullsFirst | SortOrder::AscNullsLast)
    }

    pub fn nulls_first(&self) -> bool {
        matches!(self, SortOrder::AscNullsFirst | SortOrder::DescNullsFirst)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SortOrder::AscNullsFirst => "ASC NULLS FIRST",
            SortOrder::AscNullsLast => "ASC NULLS LAST",
            SortOrder::DescNullsFirst => "DESC NULLS FIRST",
            SortOrder::DescNullsLast => "DESC NULLS LAST",
        };
        write!(f, "{}", text)
    }
}

/// Declared sort key sequence of a plan node, with one direction per key.
///
/// Key order is significant: two schemes are equal only when they list the
/// same columns in the same order with the same direction for each.
#[derive(Clone, Debug, Default, Eq)]
pub struct OrderingScheme {
    entries: IndexMap<ColumnId, SortOrder>,
}

impl OrderingScheme {
    pub fn new() -> Self {
        Self { entries: IndexMap::new() }
    }

    /// Builder-style append; a repeated column keeps its position and takes
    /// the new direction (planners do not emit duplicate sort keys).
    pub fn with_key(mut self, column: impl Into<ColumnId>, order: SortOrder) -> Self {
        self.entries.insert(column.into(), order);
        self
    }

    /// Pair every column of `columns` with the same direction, preserving order.
    pub fn uniform(columns: &[ColumnId], order: SortOrder) -> Self {
        let mut scheme = Self::new();
        for column in columns {
            scheme.entries.insert(column.clone(), order);
        }
        scheme
    }

    /// Sort key columns in declaration order.
    pub fn columns(&self) -> Vec<ColumnId> {
        self.entries.keys().cloned().collect()
    }

    pub fn order_of(&self, column: &ColumnId) -> Option<SortOrder> {
        self.entries.get(column).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ColumnId, &SortOrder)> {
        self.entries.iter()
    }
}

// IndexMap equality ignores insertion order; key order matters here.
impl PartialEq for OrderingScheme {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl fmt::Display for OrderingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .entries
            .iter()
            .map(|(column, order)| format!("{} {}", column, order))
            .collect();
        write!(f, "[{}]", rendered.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(name: &str) -> ColumnId {
        ColumnId::new(name)
    }

    #[test]
    pub fn test_equality_requires_same_key_order() {
        let a = OrderingScheme::new()
            .with_key(col("x"), SortOrder::AscNullsFirst)
            .with_key(col("y"), SortOrder::AscNullsFirst);
        let b = OrderingScheme::new()
            .with_key(col("y"), SortOrder::AscNullsFirst)
            .with_key(col("x"), SortOrder::AscNullsFirst);
        assert_ne!(a, b, "same keys in a different order must not compare equal");

        let c = OrderingScheme::new()
            .with_key(col("x"), SortOrder::AscNullsFirst)
            .with_key(col("y"), SortOrder::AscNullsFirst);
        assert_eq!(a, c);
    }

    #[test]
    pub fn test_equality_requires_same_directions() {
        let a = OrderingScheme::new().with_key(col("x"), SortOrder::AscNullsFirst);
        let b = OrderingScheme::new().with_key(col("x"), SortOrder::DescNullsLast);
        assert_ne!(a, b);
    }

    #[test]
    pub fn test_uniform_pairs_every_column() {
        let columns = vec![col("a"), col("b")];
        let scheme = OrderingScheme::uniform(&columns, SortOrder::AscNullsFirst);
        assert_eq!(scheme.len(), 2);
        assert_eq!(scheme.columns(), columns);
        assert_eq!(scheme.order_of(&col("b")), Some(SortOrder::AscNullsFirst));
        assert_eq!(scheme.order_of(&col("z")), None);
    }

    #[test]
    pub fn test_display_renders_keys_in_order() {
        let scheme = OrderingScheme::new()
            .with_key(col("a"), SortOrder::AscNullsFirst)
            .with_key(col("b"), SortOrder::DescNullsLast);
        assert_eq!(scheme.to_string(), "[a ASC NULLS FIRST, b DESC NULLS LAST]");
    }
}
