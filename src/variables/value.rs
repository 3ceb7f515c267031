// SPDX-License-Identifier: MIT

//! Variable bindings and their values

use serde::{Deserialize, Serialize};

/// The value bound to a variable: nothing, a string, or a list of strings
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(untagged)]
pub enum VariableValue {
    #[default]
    Null,
    Scalar(String),
    Sequence(Vec<String>),
}

impl VariableValue {
    pub fn is_null(&self) -> bool {
        matches!(self, VariableValue::Null)
    }

    /// String length (in chars) or sequence length; `None` for null
    pub fn len(&self) -> Option<usize> {
        match self {
            VariableValue::Null => None,
            VariableValue::Scalar(s) => Some(s.chars().count()),
            VariableValue::Sequence(items) => Some(items.len()),
        }
    }

    /// Null, the empty string, and the empty sequence are all empty
    pub fn is_empty(&self) -> bool {
        self.len().map_or(true, |len| len == 0)
    }

    /// Scalar view of the value; sequences have none
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            VariableValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Render the value the way it appears when interpolated into text
    pub fn to_text(&self) -> String {
        match self {
            VariableValue::Null => String::new(),
            VariableValue::Scalar(s) => s.clone(),
            VariableValue::Sequence(items) => items.join(", "),
        }
    }
}

impl From<&str> for VariableValue {
    fn from(s: &str) -> Self {
        VariableValue::Scalar(s.to_string())
    }
}

impl From<String> for VariableValue {
    fn from(s: String) -> Self {
        VariableValue::Scalar(s)
    }
}

impl From<Vec<String>> for VariableValue {
    fn from(items: Vec<String>) -> Self {
        VariableValue::Sequence(items)
    }
}

impl From<Vec<&str>> for VariableValue {
    fn from(items: Vec<&str>) -> Self {
        VariableValue::Sequence(items.into_iter().map(str::to_string).collect())
    }
}

impl<T: Into<VariableValue>> From<Option<T>> for VariableValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(VariableValue::Null, Into::into)
    }
}

/// A named runtime value owned by the caller's binding store
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Variable {
    pub id: String,
    /// Reference name used by `{{name}}` placeholders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub value: VariableValue,
}

impl Variable {
    /// Create a variable whose id doubles as its reference name
    pub fn new(id: impl Into<String>, value: impl Into<VariableValue>) -> Self {
        Self {
            id: id.into(),
            name: None,
            value: value.into(),
        }
    }

    /// Create a variable with a distinct reference name
    pub fn named(
        id: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<VariableValue>,
    ) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            value: value.into(),
        }
    }

    /// The name placeholders refer to
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_value_shapes() {
        let scalar: VariableValue = serde_json::from_value(json!("hi")).unwrap();
        assert_eq!(scalar, VariableValue::Scalar("hi".to_string()));

        let seq: VariableValue = serde_json::from_value(json!(["a", "b"])).unwrap();
        assert_eq!(seq, VariableValue::from(vec!["a", "b"]));

        let null: VariableValue = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(null, VariableValue::Null);
    }

    #[test]
    fn test_missing_value_is_null() {
        let var: Variable = serde_json::from_value(json!({"id": "v1"})).unwrap();
        assert!(var.value.is_null());
        assert_eq!(var.name(), "v1");
    }

    #[test]
    fn test_named_variable() {
        let var: Variable =
            serde_json::from_value(json!({"id": "v1", "name": "City", "value": "Paris"})).unwrap();
        assert_eq!(var.name(), "City");
        assert_eq!(var.value.as_scalar(), Some("Paris"));
    }

    #[test]
    fn test_len_and_emptiness() {
        assert_eq!(VariableValue::Null.len(), None);
        assert!(VariableValue::Null.is_empty());
        assert!(VariableValue::from("").is_empty());
        assert_eq!(VariableValue::from("héllo").len(), Some(5));
        assert!(VariableValue::Sequence(vec![]).is_empty());
        assert!(!VariableValue::from(vec!["x"]).is_empty());
    }

    #[test]
    fn test_to_text() {
        assert_eq!(VariableValue::Null.to_text(), "");
        assert_eq!(VariableValue::from("a").to_text(), "a");
        assert_eq!(VariableValue::from(vec!["a", "b"]).to_text(), "a, b");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(VariableValue::from(None::<&str>), VariableValue::Null);
        assert_eq!(VariableValue::from(Some("x")), VariableValue::from("x"));
    }
}
