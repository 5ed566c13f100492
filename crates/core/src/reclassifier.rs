//! Second class-instance signal: lexical `new ClassName(...)` evidence.
//!
//! The executor's probe only sees a constructor name when the identity
//! survived into the probed scope. This pass re-reads the source text for
//! captures that came back as plain objects. False negatives are accepted
//! (an unmarked instance displays as a generic object); false positives are
//! not, and a marker is never removed once set.

use regex::Regex;
use tracing::debug;

use crate::{
    error::{Error, Result},
    patterns::DeclarationScanner,
    types::{CapturedValue, EvaluationResult},
};

pub struct Reclassifier {
    new_expr: Regex,
}

impl Reclassifier {
    pub fn new() -> Result<Self> {
        let new_expr = Regex::new(r"^new\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*\(")
            .map_err(|e| Error::PatternError(format!("new-expression regex: {e}")))?;
        Ok(Self { new_expr })
    }

    /// Annotate plain-object captures whose source-level declaration reads
    /// `let|const|var name = new ClassName(...)` for a user-defined class.
    pub fn reclassify(
        &self,
        source: &str,
        scanner: &DeclarationScanner,
        result: &mut EvaluationResult,
    ) {
        let class_names = scanner.class_names(source);
        if class_names.is_empty() {
            return;
        }
        let initializers = scanner.variable_initializers(source);

        for binding in &mut result.variables {
            if !matches!(
                binding.value,
                CapturedValue::Object {
                    class_name: None,
                    ..
                }
            ) {
                continue;
            }

            let constructor = initializers
                .get(&binding.name)
                .and_then(|init| self.constructor_of(init))
                .or_else(|| declared_new(source, &binding.name));

            if let Some(constructor) = constructor {
                if class_names.contains(&constructor) {
                    debug!("marking '{}' as instance of {constructor}", binding.name);
                    binding.value.mark_class_instance(&constructor);
                }
            }
        }
    }

    fn constructor_of(&self, initializer: &str) -> Option<String> {
        self.new_expr
            .captures(initializer)
            .map(|caps| caps[1].to_string())
    }
}

/// Fallback for names the initializer map missed: match the declaration
/// directly against the source for any of the three keywords.
fn declared_new(source: &str, name: &str) -> Option<String> {
    let pattern = format!(
        r"\b(?:let|const|var)\s+{}\s*=\s*new\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*\(",
        regex::escape(name)
    );
    let regex = Regex::new(&pattern).ok()?;
    regex
        .captures(source)
        .map(|caps| caps[1].to_string())
}
