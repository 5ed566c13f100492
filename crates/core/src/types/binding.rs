use serde::{Deserialize, Serialize};

use super::value::CapturedValue;

/// A single name-to-value binding captured from an evaluation pass.
///
/// Bindings are rebuilt wholesale on every pass; order follows the order the
/// names were discovered in the source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableBinding {
    pub name: String,
    pub value: CapturedValue,
}

impl VariableBinding {
    pub fn new(name: impl Into<String>, value: CapturedValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One captured console invocation: the ordered argument list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleEntry {
    pub args: Vec<CapturedValue>,
}

impl ConsoleEntry {
    pub fn new(args: Vec<CapturedValue>) -> Self {
        Self { args }
    }

    /// Arguments rendered the way a console line would show them.
    pub fn text(&self) -> String {
        self.args
            .iter()
            .map(|arg| match arg {
                // console.log prints string arguments without quotes
                CapturedValue::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_entry_text() {
        let entry = ConsoleEntry::new(vec![
            CapturedValue::String("progress:".to_string()),
            CapturedValue::Number(50.0),
        ]);
        assert_eq!(entry.text(), "progress: 50");
    }

    #[test]
    fn test_console_entry_empty() {
        let entry = ConsoleEntry::new(vec![]);
        assert_eq!(entry.text(), "");
    }
}
