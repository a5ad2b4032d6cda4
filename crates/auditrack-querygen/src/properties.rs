//! Ordered property mappings for the track event payload.

use serde::ser::{Serialize, Serializer};

/// Mapping from an output property name to the audit field it is read from.
///
/// Entries keep the order in which they were first inserted; that order is the
/// key order of the rendered `json_object(...)` expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertiesMap {
    entries: Vec<(String, String)>,
}

impl PropertiesMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `name` to `field`.
    ///
    /// An existing `name` keeps its position and takes the new field.
    pub fn insert(&mut self, name: impl Into<String>, field: impl Into<String>) {
        let name = name.into();
        let field = field.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = field,
            None => self.entries.push((name, field)),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, field: impl Into<String>) -> Self {
        self.insert(name, field);
        self
    }

    /// Look up the field mapped to `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| f.as_str())
    }

    /// Iterate `(name, field)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, f)| (n.as_str(), f.as_str()))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the expression that builds this mapping as a JSON object at
    /// evaluation time.
    ///
    /// Names become double-quoted string literals and fields single-quoted field
    /// references: `json_object("kind",'objectRef.resource')`.
    pub fn json_object_expr(&self) -> String {
        let pairs: Vec<String> = self
            .iter()
            .map(|(name, field)| format!("\"{name}\",'{field}'"))
            .collect();
        format!("json_object({})", pairs.join(","))
    }
}

impl<N, F> FromIterator<(N, F)> for PropertiesMap
where
    N: Into<String>,
    F: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, F)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, field) in iter {
            map.insert(name, field);
        }
        map
    }
}

impl Serialize for PropertiesMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn application_properties() -> PropertiesMap {
        PropertiesMap::new()
            .with("apiGroup", "objectRef.apiGroup")
            .with("apiVersion", "objectRef.apiVersion")
            .with("kind", "objectRef.resource")
            .with("name", "objectRef.name")
    }

    /// Split a rendered expression back into its literal pairs.
    fn parse_json_object_expr(expr: &str) -> Vec<(String, String)> {
        let inner = expr
            .strip_prefix("json_object(")
            .and_then(|s| s.strip_suffix(')'))
            .expect("not a json_object expression");
        if inner.is_empty() {
            return Vec::new();
        }
        let parts: Vec<&str> = inner.split(',').collect();
        parts
            .chunks(2)
            .map(|pair| {
                let name = pair[0].strip_prefix('"').unwrap().strip_suffix('"').unwrap();
                let field = pair[1].strip_prefix('\'').unwrap().strip_suffix('\'').unwrap();
                (name.to_string(), field.to_string())
            })
            .collect()
    }

    #[test]
    fn test_application_properties_expr() {
        assert_eq!(
            application_properties().json_object_expr(),
            concat!(
                "json_object(",
                r#""apiGroup",'objectRef.apiGroup',"#,
                r#""apiVersion",'objectRef.apiVersion',"#,
                r#""kind",'objectRef.resource',"#,
                r#""name",'objectRef.name'"#,
                ")"
            )
        );
    }

    #[test]
    fn test_empty_mapping() {
        assert_eq!(PropertiesMap::new().json_object_expr(), "json_object()");
    }

    #[test]
    fn test_insertion_order_not_sorted() {
        let map = PropertiesMap::new().with("zeta", "z").with("alpha", "a");
        assert_eq!(map.json_object_expr(), r#"json_object("zeta",'z',"alpha",'a')"#);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut map = application_properties();
        map.insert("apiGroup", "objectRef.group");

        assert_eq!(map.len(), 4);
        assert_eq!(map.get("apiGroup"), Some("objectRef.group"));
        assert_eq!(map.iter().next(), Some(("apiGroup", "objectRef.group")));
    }

    #[test]
    fn test_from_iterator() {
        let map: PropertiesMap = [("kind", "objectRef.resource"), ("name", "objectRef.name")]
            .into_iter()
            .collect();
        assert_eq!(map.get("name"), Some("objectRef.name"));
        assert!(!map.is_empty());
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let map = PropertiesMap::new().with("b", "x").with("a", "y");
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"b":"x","a":"y"}"#);
    }

    proptest! {
        #[test]
        fn test_expr_recovers_pairs_in_order(
            pairs in prop::collection::vec(
                ("[a-zA-Z][a-zA-Z0-9_]{0,12}", "[a-zA-Z][a-zA-Z0-9_./]{0,30}"),
                0..10,
            )
        ) {
            let map: PropertiesMap = pairs.iter().cloned().collect();
            let expected: Vec<(String, String)> = map
                .iter()
                .map(|(n, f)| (n.to_string(), f.to_string()))
                .collect();

            prop_assert_eq!(parse_json_object_expr(&map.json_object_expr()), expected);
        }
    }
}
