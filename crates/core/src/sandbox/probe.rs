use serde::Deserialize;

use crate::types::CapturedValue;
use std::collections::BTreeMap;

/// Deserialized form of the descriptor a probe script returns.
#[derive(Debug, Deserialize)]
pub struct ProbeReport {
    pub found: bool,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default, rename = "type")]
    pub type_of: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub ctor: Option<String>,
    #[serde(default)]
    pub special: Option<String>,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl ProbeReport {
    /// Convert the report into a captured value.
    ///
    /// A reported constructor name is only kept when it names one of the
    /// user's own classes; engine-builtin constructors (Date, Map, ...) are
    /// not class instances from the lesson's point of view.
    pub fn into_captured(self, user_classes: &[String]) -> Option<CapturedValue> {
        if !self.found {
            return None;
        }

        let kind = self.kind.as_deref().unwrap_or("primitive");
        let captured = match kind {
            "undefined" => CapturedValue::Undefined,
            "null" => CapturedValue::Null,
            "function" => CapturedValue::Function {
                name: self.name.unwrap_or_default(),
            },
            "array" => match self.value {
                Some(value @ serde_json::Value::Array(_)) => CapturedValue::from_json(&value),
                _ => CapturedValue::Array(Vec::new()),
            },
            "object" => {
                let class_name = self
                    .ctor
                    .filter(|ctor| user_classes.iter().any(|c| c == ctor));
                match self.value {
                    Some(serde_json::Value::Object(map)) => CapturedValue::Object {
                        class_name,
                        properties: map
                            .iter()
                            .map(|(k, v)| (k.clone(), CapturedValue::from_json(v)))
                            .collect(),
                    },
                    // Objects with a custom toJSON (Date and friends)
                    // round-trip into a primitive; report that instead
                    Some(other) => CapturedValue::from_json(&other),
                    None => CapturedValue::Object {
                        class_name,
                        properties: BTreeMap::new(),
                    },
                }
            }
            _ => {
                if let Some(special) = self.special {
                    CapturedValue::Number(match special.as_str() {
                        "Infinity" => f64::INFINITY,
                        "-Infinity" => f64::NEG_INFINITY,
                        _ => f64::NAN,
                    })
                } else if let Some(value) = self.value {
                    CapturedValue::from_json(&value)
                } else {
                    CapturedValue::Undefined
                }
            }
        };

        Some(captured)
    }
}
