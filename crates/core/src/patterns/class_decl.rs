use crate::{
    error::{Error, Result},
    patterns::DeclarationPattern,
    types::{Declaration, DeclarationKind},
};
use regex::Regex;

/// Matches `class Name` declarations.
pub struct ClassDeclPattern {
    regex: Regex,
}

impl ClassDeclPattern {
    pub fn new() -> Result<Self> {
        let regex = Regex::new(r"\bclass\s+([A-Za-z_$][A-Za-z0-9_$]*)")
            .map_err(|e| Error::PatternError(format!("class declaration regex: {e}")))?;
        Ok(Self { regex })
    }
}

impl DeclarationPattern for ClassDeclPattern {
    fn collect(&self, source: &str) -> Vec<Declaration> {
        self.regex
            .captures_iter(source)
            .filter_map(|caps| {
                let name = caps.get(1)?;
                Some(Declaration::new(
                    name.as_str(),
                    DeclarationKind::Class,
                    name.start(),
                ))
            })
            .collect()
    }
}
