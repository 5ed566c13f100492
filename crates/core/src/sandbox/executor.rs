use boa_engine::{Context, JsError, Source};
use tracing::{debug, warn};

use crate::{
    error::Result,
    patterns::DeclarationScanner,
    sandbox::{harness, probe::ProbeReport},
    types::{CapturedValue, ConsoleEntry, EvaluationResult},
};

/// Executes learner JavaScript in an embedded engine and reads back the
/// final value of every statically discovered name.
///
/// Not a security sandbox: no timeout, no interruption. The engine realm has
/// no host I/O, which is the only containment the trusted single-user
/// context needs.
pub struct SandboxExecutor {
    scanner: DeclarationScanner,
}

impl SandboxExecutor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            scanner: DeclarationScanner::new()?,
        })
    }

    pub fn scanner(&self) -> &DeclarationScanner {
        &self.scanner
    }

    /// Run one evaluation pass. Never fails: a source that cannot parse or
    /// that throws produces a result with `error` set and whatever bindings
    /// and console output existed by then.
    pub fn evaluate(&self, source: &str) -> EvaluationResult {
        let variable_names = self.scanner.variable_names(source);
        let class_names = self.scanner.class_names(source);
        debug!(
            "evaluating {} bytes, {} probe targets",
            source.len(),
            variable_names.len()
        );

        let mut context = Context::default();
        let mut result = EvaluationResult::new();

        if let Err(err) = context.eval(Source::from_bytes(harness::CONSOLE_PRELUDE)) {
            warn!("console prelude failed to install: {err}");
        }

        if let Err(err) = context.eval(Source::from_bytes(source)) {
            result.error = Some(error_message(&err));
        }

        // Probing runs even after a failed execution: bindings created
        // before the throw point are still live in the realm.
        for name in &variable_names {
            if !is_identifier(name) {
                continue;
            }
            if let Some(value) = self.probe(&mut context, name, &class_names) {
                result.push_binding(name.clone(), value);
            }
        }

        result.console_output = drain_console(&mut context);
        result
    }

    /// Probe one name in the executed realm. Each probe is individually
    /// guarded; any failure (out of scope, unserializable descriptor) skips
    /// this name without affecting the rest of the pass.
    fn probe(
        &self,
        context: &mut Context,
        name: &str,
        class_names: &[String],
    ) -> Option<CapturedValue> {
        let script = harness::probe_script(name);
        let value = context.eval(Source::from_bytes(&script)).ok()?;
        let json = value.to_json(context).ok()?;
        let report: ProbeReport = serde_json::from_value(json).ok()?;
        report.into_captured(class_names)
    }
}

fn drain_console(context: &mut Context) -> Vec<ConsoleEntry> {
    let value = match context.eval(Source::from_bytes(harness::console_probe())) {
        Ok(value) => value,
        Err(_) => return Vec::new(),
    };
    let json = match value.to_json(context) {
        Ok(json) => json,
        Err(_) => return Vec::new(),
    };

    match json {
        serde_json::Value::Array(entries) => entries
            .into_iter()
            .map(|entry| match entry {
                serde_json::Value::Array(args) => {
                    ConsoleEntry::new(args.iter().map(CapturedValue::from_json).collect())
                }
                other => ConsoleEntry::new(vec![CapturedValue::from_json(&other)]),
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Extract the thrown message from an engine error, the way the learner
/// wrote it: "Error: boom" reports as "boom".
fn error_message(err: &JsError) -> String {
    let raw = err.to_string();
    let message = raw.strip_prefix("Uncaught ").unwrap_or(&raw);
    match message.split_once(": ") {
        Some((kind, rest)) if kind.ends_with("Error") && !kind.contains(' ') => rest.to_string(),
        _ => message.to_string(),
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
