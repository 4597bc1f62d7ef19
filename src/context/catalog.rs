use indexmap::IndexMap;

/// Read-only table dictionary handed to every detail match.
///
/// Mirrors the planner's catalog view: table name to declared column names.
/// Passed through the matcher contract untouched for variants that need to
/// consult schema information.
#[derive(Debug, Clone, Default)]
pub struct MetadataCatalog {
    tables: IndexMap<String, Vec<String>>,
}

impl MetadataCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_table(&mut self, name: impl Into<String>, columns: Vec<String>) {
        self.tables.insert(name.into(), columns);
    }

    pub fn table_columns(&self, name: &str) -> Option<&[String]> {
        self.tables.get(name).map(|columns| columns.as_slice())
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }
}
