use serde::{Deserialize, Serialize};

/// Scope categories the remote analysis may describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeType {
    Global,
    Function,
    Class,
    Block,
}

/// Descriptive scope metadata returned by the remote analysis.
///
/// Never reconciled against the lexical scanner's own notion of scope; the
/// two models are independent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeDescriptor {
    #[serde(rename = "type")]
    pub scope_type: ScopeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub variables: Vec<ScopeVariable>,
}

/// A variable entry inside a [`ScopeDescriptor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeVariable {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_descriptor_deserialization() {
        let json = serde_json::json!({
            "type": "function",
            "name": "updateProgress",
            "variables": [
                { "name": "step", "value": 10, "description": "increment per call" }
            ]
        });

        let scope: ScopeDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(scope.scope_type, ScopeType::Function);
        assert_eq!(scope.name.as_deref(), Some("updateProgress"));
        assert_eq!(scope.variables.len(), 1);
        assert_eq!(scope.variables[0].name, "step");
    }

    #[test]
    fn test_scope_descriptor_minimal() {
        let json = serde_json::json!({ "type": "global" });
        let scope: ScopeDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(scope.scope_type, ScopeType::Global);
        assert!(scope.name.is_none());
        assert!(scope.variables.is_empty());
    }
}
