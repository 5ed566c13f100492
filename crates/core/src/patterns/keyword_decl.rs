use crate::{
    error::{Error, Result},
    patterns::DeclarationPattern,
    types::{Declaration, DeclarationKind},
};
use regex::Regex;

/// Matches `let`/`const`/`var` declarations, capturing the bound name and the
/// initializer text up to the end of the statement line when present.
pub struct KeywordDeclPattern {
    regex: Regex,
}

impl KeywordDeclPattern {
    pub fn new() -> Result<Self> {
        let regex = Regex::new(
            r"\b(?:let|const|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)(?:\s*=\s*([^;\n]+))?",
        )
        .map_err(|e| Error::PatternError(format!("keyword declaration regex: {e}")))?;
        Ok(Self { regex })
    }
}

impl DeclarationPattern for KeywordDeclPattern {
    fn collect(&self, source: &str) -> Vec<Declaration> {
        self.regex
            .captures_iter(source)
            .filter_map(|caps| {
                let name = caps.get(1)?;
                let mut decl =
                    Declaration::new(name.as_str(), DeclarationKind::Variable, name.start());
                if let Some(init) = caps.get(2) {
                    decl = decl.with_initializer(init.as_str().trim());
                }
                Some(decl)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_all_three_keywords() {
        let pattern = KeywordDeclPattern::new().unwrap();
        let decls = pattern.collect("let a = 1; const b = 2; var c;");

        let names: Vec<_> = decls.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_captures_initializer_text() {
        let pattern = KeywordDeclPattern::new().unwrap();
        let decls = pattern.collect("let task = new Task(\"Ship it\");");

        assert_eq!(decls.len(), 1);
        assert_eq!(
            decls[0].initializer.as_deref(),
            Some("new Task(\"Ship it\")")
        );
    }

    #[test]
    fn test_declaration_without_initializer() {
        let pattern = KeywordDeclPattern::new().unwrap();
        let decls = pattern.collect("let pending;");

        assert_eq!(decls.len(), 1);
        assert!(decls[0].initializer.is_none());
    }
}
