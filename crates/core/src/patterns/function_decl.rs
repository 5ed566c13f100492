use crate::{
    error::{Error, Result},
    patterns::DeclarationPattern,
    types::{Declaration, DeclarationKind},
};
use regex::Regex;

/// Matches named `function` declarations; the function name becomes a
/// pseudo-variable so it shows up as a probe target.
pub struct FunctionDeclPattern {
    regex: Regex,
}

impl FunctionDeclPattern {
    pub fn new() -> Result<Self> {
        let regex = Regex::new(r"\bfunction\s+([A-Za-z_$][A-Za-z0-9_$]*)")
            .map_err(|e| Error::PatternError(format!("function declaration regex: {e}")))?;
        Ok(Self { regex })
    }
}

impl DeclarationPattern for FunctionDeclPattern {
    fn collect(&self, source: &str) -> Vec<Declaration> {
        self.regex
            .captures_iter(source)
            .filter_map(|caps| {
                let name = caps.get(1)?;
                Some(Declaration::new(
                    name.as_str(),
                    DeclarationKind::Function,
                    name.start(),
                ))
            })
            .collect()
    }
}
