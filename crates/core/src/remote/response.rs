use serde::{Deserialize, Serialize};

use crate::remote::RemoteError;
use crate::types::ScopeDescriptor;

/// The structured analysis document the remote service embeds in its
/// completion text. Every field is lenient: anything missing deserializes to
/// empty rather than failing the whole response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteAnalysis {
    pub scopes: Vec<ScopeDescriptor>,
    pub runtime_values: serde_json::Map<String, serde_json::Value>,
    pub execution_flow: Vec<String>,
    pub errors: Vec<String>,
}

/// Locate the JSON document inside free-form completion text: a
/// triple-backtick `json` fence if present, the outermost brace span
/// otherwise.
pub fn extract_embedded_json(content: &str) -> Option<&str> {
    if let Some(fence_start) = content.find("```json") {
        let rest = &content[fence_start + "```json".len()..];
        if let Some(fence_end) = rest.find("```") {
            return Some(rest[..fence_end].trim());
        }
    }

    let start = content.find('{')?;
    let end = content.rfind('}')?;
    if end < start {
        return None;
    }
    Some(content[start..=end].trim())
}

/// Parse the analysis out of completion text.
pub fn parse_analysis(content: &str) -> Result<RemoteAnalysis, RemoteError> {
    let json = extract_embedded_json(content)
        .ok_or_else(|| RemoteError::Parse("no JSON object in completion text".to_string()))?;
    serde_json::from_str(json).map_err(|e| RemoteError::Parse(e.to_string()))
}
