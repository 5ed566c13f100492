use crate::{
    error::{Error, Result},
    patterns::DeclarationPattern,
    types::{Declaration, DeclarationKind},
};
use regex::Regex;

/// Keywords that start a line and would otherwise look like the left-hand
/// side of an assignment.
const EXCLUDED_KEYWORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "default", "delete", "do", "else",
    "false", "finally", "for", "function", "if", "in", "instanceof", "let", "new", "null",
    "return", "switch", "this", "throw", "true", "try", "typeof", "undefined", "var", "void",
    "while",
];

/// Matches bare assignment statements (`name = ...`) at the start of a line,
/// excluding keywords that would false-positive.
pub struct AssignmentPattern {
    regex: Regex,
}

impl AssignmentPattern {
    pub fn new() -> Result<Self> {
        let regex = Regex::new(r"(?m)^\s*([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*[^=]")
            .map_err(|e| Error::PatternError(format!("assignment regex: {e}")))?;
        Ok(Self { regex })
    }
}

impl DeclarationPattern for AssignmentPattern {
    fn collect(&self, source: &str) -> Vec<Declaration> {
        self.regex
            .captures_iter(source)
            .filter_map(|caps| {
                let name = caps.get(1)?;
                if EXCLUDED_KEYWORDS.contains(&name.as_str()) {
                    return None;
                }
                Some(Declaration::new(
                    name.as_str(),
                    DeclarationKind::Assignment,
                    name.start(),
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_bare_assignment() {
        let pattern = AssignmentPattern::new().unwrap();
        let decls = pattern.collect("total = 0;\ntotal = total + 1;");

        assert_eq!(decls.len(), 2);
        assert!(decls.iter().all(|d| d.name == "total"));
    }

    #[test]
    fn test_excludes_keywords() {
        let pattern = AssignmentPattern::new().unwrap();
        // Nonsense as JavaScript, but the stop-list is what keeps lines
        // like these from registering as variables
        let decls = pattern.collect("if = 1\nreturn = 2\nwhile = 3");
        assert!(decls.is_empty());
    }

    #[test]
    fn test_ignores_comparisons_and_compound_assignment() {
        let pattern = AssignmentPattern::new().unwrap();
        let decls = pattern.collect("a == b;\nc += 1;\nd === e;");
        assert!(decls.is_empty());
    }

    #[test]
    fn test_ignores_property_assignment() {
        let pattern = AssignmentPattern::new().unwrap();
        let decls = pattern.collect("obj.count = 1;");
        assert!(decls.is_empty());
    }
}
