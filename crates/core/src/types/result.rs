use serde::{Deserialize, Serialize};

use super::binding::{ConsoleEntry, VariableBinding};
use super::scope::ScopeDescriptor;
use super::value::CapturedValue;

/// The merged output of one evaluation pass - the single unit handed back to
/// the caller.
///
/// `ai_enhanced` records provenance: whether the result came from the remote
/// analysis path or the local sandbox. `execution_path` and `scopes` are only
/// populated on the remote path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub variables: Vec<VariableBinding>,
    pub console_output: Vec<ConsoleEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub ai_enhanced: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub execution_path: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<ScopeDescriptor>,
}

impl EvaluationResult {
    pub fn new() -> Self {
        Self {
            variables: Vec::new(),
            console_output: Vec::new(),
            error: None,
            ai_enhanced: false,
            execution_path: Vec::new(),
            scopes: Vec::new(),
        }
    }

    /// Look up a captured binding by name.
    pub fn get(&self, name: &str) -> Option<&CapturedValue> {
        self.variables
            .iter()
            .find(|binding| binding.name == name)
            .map(|binding| &binding.value)
    }

    /// Append a binding, keeping names unique; the first capture wins.
    pub fn push_binding(&mut self, name: impl Into<String>, value: CapturedValue) {
        let name = name.into();
        if self.get(&name).is_none() {
            self.variables.push(VariableBinding::new(name, value));
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

impl Default for EvaluationResult {
    fn default() -> Self {
        Self::new()
    }
}
