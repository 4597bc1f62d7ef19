use indexmap::IndexMap;
use serde_json::Value;

/// Session/execution context handed to every detail match.
///
/// Carried uniformly through the matcher contract so variants that depend on
/// session properties (e.g. feature toggles the planner honors) can read them;
/// the matchers in this crate ignore it.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    user: Option<String>,
    properties: IndexMap<String, Value>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: Value) {
        self.properties.insert(name.into(), value);
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::SessionContext;
    use serde_json::json;

    #[test]
    pub fn test_property_bag() {
        let mut session = SessionContext::new().with_user("tester");
        session.set_property("optimize_top_n", json!(true));

        assert_eq!(session.user(), Some("tester"));
        assert_eq!(session.property("optimize_top_n"), Some(&json!(true)));
        assert_eq!(session.property("missing"), None);
    }
}
