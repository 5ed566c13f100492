use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A runtime value captured from the learner's executed code.
///
/// The class-instance annotation lives directly on `Object` as an optional
/// constructor name instead of being patched onto values after the fact, so
/// a value always carries its own type evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CapturedValue {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<CapturedValue>),
    Object {
        class_name: Option<String>,
        properties: BTreeMap<String, CapturedValue>,
    },
    Function {
        name: String,
    },
}

impl CapturedValue {
    /// Convert a JSON value into a captured value.
    ///
    /// JSON cannot express `Undefined`, `Function` or a constructor name, so
    /// those variants never come out of this conversion.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CapturedValue::Null,
            serde_json::Value::Bool(b) => CapturedValue::Bool(*b),
            serde_json::Value::Number(n) => CapturedValue::Number(n.as_f64().unwrap_or(0.0)),
            serde_json::Value::String(s) => CapturedValue::String(s.clone()),
            serde_json::Value::Array(items) => {
                CapturedValue::Array(items.iter().map(CapturedValue::from_json).collect())
            }
            serde_json::Value::Object(map) => CapturedValue::Object {
                class_name: None,
                properties: map
                    .iter()
                    .map(|(k, v)| (k.clone(), CapturedValue::from_json(v)))
                    .collect(),
            },
        }
    }

    pub fn is_class_instance(&self) -> bool {
        matches!(
            self,
            CapturedValue::Object {
                class_name: Some(_),
                ..
            }
        )
    }

    pub fn class_name(&self) -> Option<&str> {
        match self {
            CapturedValue::Object { class_name, .. } => class_name.as_deref(),
            _ => None,
        }
    }

    /// Attach a constructor name to a plain object capture.
    ///
    /// Only applies to `Object` values that are not already marked; a marker
    /// is never overwritten or removed once set.
    pub fn mark_class_instance(&mut self, name: &str) {
        if let CapturedValue::Object { class_name, .. } = self {
            if class_name.is_none() {
                *class_name = Some(name.to_string());
            }
        }
    }

    /// Short type label for display purposes, e.g. "number" or "Point instance".
    pub fn type_label(&self) -> String {
        match self {
            CapturedValue::Undefined => "undefined".to_string(),
            CapturedValue::Null => "null".to_string(),
            CapturedValue::Bool(_) => "boolean".to_string(),
            CapturedValue::Number(_) => "number".to_string(),
            CapturedValue::String(_) => "string".to_string(),
            CapturedValue::Array(_) => "array".to_string(),
            CapturedValue::Object {
                class_name: Some(name),
                ..
            } => format!("{name} instance"),
            CapturedValue::Object { .. } => "object".to_string(),
            CapturedValue::Function { .. } => "function".to_string(),
        }
    }
}

impl fmt::Display for CapturedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapturedValue::Undefined => write!(f, "undefined"),
            CapturedValue::Null => write!(f, "null"),
            CapturedValue::Bool(b) => write!(f, "{b}"),
            CapturedValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            CapturedValue::String(s) => write!(f, "\"{s}\""),
            CapturedValue::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            CapturedValue::Object {
                class_name,
                properties,
            } => {
                if let Some(name) = class_name {
                    write!(f, "{name} ")?;
                }
                write!(f, "{{")?;
                for (i, (key, value)) in properties.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, " {key}: {value}")?;
                }
                if properties.is_empty() {
                    write!(f, "}}")
                } else {
                    write!(f, " }}")
                }
            }
            CapturedValue::Function { name } => {
                if name.is_empty() {
                    write!(f, "[Function]")
                } else {
                    write!(f, "[Function: {name}]")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_primitives() {
        assert_eq!(
            CapturedValue::from_json(&serde_json::json!(null)),
            CapturedValue::Null
        );
        assert_eq!(
            CapturedValue::from_json(&serde_json::json!(true)),
            CapturedValue::Bool(true)
        );
        assert_eq!(
            CapturedValue::from_json(&serde_json::json!(50)),
            CapturedValue::Number(50.0)
        );
        assert_eq!(
            CapturedValue::from_json(&serde_json::json!("Ship it")),
            CapturedValue::String("Ship it".to_string())
        );
    }

    #[test]
    fn test_from_json_nested() {
        let value = CapturedValue::from_json(&serde_json::json!({
            "name": "Alice",
            "scores": [85, 92]
        }));

        match &value {
            CapturedValue::Object {
                class_name,
                properties,
            } => {
                assert!(class_name.is_none());
                assert_eq!(
                    properties.get("name"),
                    Some(&CapturedValue::String("Alice".to_string()))
                );
                assert_eq!(
                    properties.get("scores"),
                    Some(&CapturedValue::Array(vec![
                        CapturedValue::Number(85.0),
                        CapturedValue::Number(92.0),
                    ]))
                );
            }
            other => panic!("Expected object, got {other:?}"),
        }
    }

    #[test]
    fn test_mark_class_instance_only_once() {
        let mut value = CapturedValue::Object {
            class_name: None,
            properties: BTreeMap::new(),
        };

        value.mark_class_instance("Task");
        assert_eq!(value.class_name(), Some("Task"));

        // A second marker never replaces the first
        value.mark_class_instance("Other");
        assert_eq!(value.class_name(), Some("Task"));
    }

    #[test]
    fn test_mark_class_instance_ignores_non_objects() {
        let mut value = CapturedValue::Array(vec![]);
        value.mark_class_instance("Task");
        assert!(!value.is_class_instance());

        let mut value = CapturedValue::Null;
        value.mark_class_instance("Task");
        assert!(!value.is_class_instance());
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(CapturedValue::Number(50.0).to_string(), "50");
        assert_eq!(CapturedValue::Number(0.5).to_string(), "0.5");
        assert_eq!(
            CapturedValue::String("hi".to_string()).to_string(),
            "\"hi\""
        );
        assert_eq!(
            CapturedValue::Array(vec![
                CapturedValue::Number(1.0),
                CapturedValue::Number(2.0)
            ])
            .to_string(),
            "[1, 2]"
        );

        let mut props = BTreeMap::new();
        props.insert("x".to_string(), CapturedValue::Number(1.0));
        let obj = CapturedValue::Object {
            class_name: Some("Point".to_string()),
            properties: props,
        };
        assert_eq!(obj.to_string(), "Point { x: 1 }");
        assert_eq!(obj.type_label(), "Point instance");
    }
}
