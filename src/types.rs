//! Core types shared by schema inference and stub synthesis.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `$schema` URI stamped on every inferred document.
pub const SCHEMA_DRAFT_07: &str = "http://json-schema.org/draft-07/schema#";

/// Root path segment for override keys.
pub const ROOT_PATH: &str = "data";

/// Path segment inserted when descending into a list field.
pub const ITEMS_SEGMENT: &str = "items";

/// Returns the JSON type name for log messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Scalar JSON Schema type a leaf field can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    String,
    Integer,
    Number,
    Boolean,
}

impl PrimitiveType {
    /// Returns the JSON Schema `type` keyword value.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Integer => "integer",
            PrimitiveType::Number => "number",
            PrimitiveType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leaf type corrections keyed by absolute dot path (e.g. `data.pokemons.items.name`).
///
/// Lookups are exact string matches; there is no wildcard or prefix matching.
pub type Overrides = HashMap<String, PrimitiveType>;

/// One field selection of a query, stripped of everything inference ignores.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionNode {
    /// Field name as written in the query (never the alias).
    pub name: String,
    /// Nested field selections, in query order. `None` for scalar leaves.
    ///
    /// A composite whose selection set held only fragments is `Some(vec![])`.
    pub children: Option<Vec<SelectionNode>>,
}

impl SelectionNode {
    /// Create a scalar leaf selection.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: None,
        }
    }

    /// Create a composite selection with nested fields.
    pub fn composite(name: impl Into<String>, children: Vec<SelectionNode>) -> Self {
        Self {
            name: name.into(),
            children: Some(children),
        }
    }

    /// Returns true if the selection has no selection set of its own.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_type_names() {
        assert_eq!(PrimitiveType::String.as_str(), "string");
        assert_eq!(PrimitiveType::Integer.as_str(), "integer");
        assert_eq!(PrimitiveType::Number.as_str(), "number");
        assert_eq!(PrimitiveType::Boolean.to_string(), "boolean");
    }

    #[test]
    fn overrides_deserialize_from_json() {
        let overrides: Overrides =
            serde_json::from_str(r#"{"data.thing.is_hidden": "string"}"#).unwrap();
        assert_eq!(
            overrides.get("data.thing.is_hidden"),
            Some(&PrimitiveType::String)
        );
    }

    #[test]
    fn overrides_reject_unknown_type() {
        let result: Result<Overrides, _> = serde_json::from_str(r#"{"data.x": "object"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn selection_node_leaf() {
        assert!(SelectionNode::leaf("name").is_leaf());
        assert!(!SelectionNode::composite("thing", vec![SelectionNode::leaf("id")]).is_leaf());
        assert!(!SelectionNode::composite("thing", Vec::new()).is_leaf());
    }

    #[test]
    fn json_type_names() {
        assert_eq!(json_type_name(&Value::Null), "null");
        assert_eq!(json_type_name(&Value::Bool(true)), "boolean");
        assert_eq!(json_type_name(&Value::from(3)), "number");
        assert_eq!(json_type_name(&Value::from("x")), "string");
        assert_eq!(json_type_name(&Value::Array(Vec::new())), "array");
        assert_eq!(json_type_name(&Value::Object(Default::default())), "object");
    }
}
