use crate::{
    error::Result,
    patterns::{
        AssignmentPattern, ClassDeclPattern, ConstructorFnPattern, DeclarationPattern,
        FunctionDeclPattern, KeywordDeclPattern,
    },
    types::{Declaration, DeclarationKind},
};
use std::collections::HashMap;

/// Runs the lexical declaration patterns over raw source text.
///
/// Probe order follows discovery order: patterns run in a fixed sequence and
/// matches are appended in source position, so the first time a name shows up
/// decides where its display card lands.
pub struct DeclarationScanner {
    variable_patterns: Vec<Box<dyn DeclarationPattern>>,
    class_patterns: Vec<Box<dyn DeclarationPattern>>,
}

impl DeclarationScanner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            variable_patterns: vec![
                Box::new(KeywordDeclPattern::new()?),
                Box::new(FunctionDeclPattern::new()?),
                Box::new(AssignmentPattern::new()?),
            ],
            class_patterns: vec![
                Box::new(ClassDeclPattern::new()?),
                Box::new(ConstructorFnPattern::new()?),
            ],
        })
    }

    /// Every declaration found in the source, variables first, classes after.
    pub fn scan(&self, source: &str) -> Vec<Declaration> {
        let mut declarations = Vec::new();
        for pattern in self.variable_patterns.iter().chain(&self.class_patterns) {
            declarations.extend(pattern.collect(source));
        }
        declarations
    }

    /// Unique variable (and pseudo-variable) names in discovery order.
    pub fn variable_names(&self, source: &str) -> Vec<String> {
        let mut names = Vec::new();
        for pattern in &self.variable_patterns {
            for decl in pattern.collect(source) {
                if !names.contains(&decl.name) {
                    names.push(decl.name);
                }
            }
        }
        names
    }

    /// Unique user-defined class names in discovery order.
    pub fn class_names(&self, source: &str) -> Vec<String> {
        let mut names = Vec::new();
        for pattern in &self.class_patterns {
            for decl in pattern.collect(source) {
                if !names.contains(&decl.name) {
                    names.push(decl.name);
                }
            }
        }
        names
    }

    /// Mapping from variable name to the text of its initializer, for
    /// keyword declarations that carried one. First declaration wins.
    pub fn variable_initializers(&self, source: &str) -> HashMap<String, String> {
        let mut initializers = HashMap::new();
        for decl in self.scan(source) {
            if decl.kind != DeclarationKind::Variable {
                continue;
            }
            if let Some(init) = decl.initializer {
                initializers.entry(decl.name).or_insert(init);
            }
        }
        initializers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_names_discovery_order() {
        let scanner = DeclarationScanner::new().unwrap();
        let source = r#"
let taskName = "Ship it";
let progress = 50;
function report() {}
total = progress;
"#;
        let names = scanner.variable_names(source);
        assert_eq!(names, vec!["taskName", "progress", "report", "total"]);
    }

    #[test]
    fn test_variable_names_deduplicated() {
        let scanner = DeclarationScanner::new().unwrap();
        let source = "let x = 1;\nx = 2;\nx = 3;";
        assert_eq!(scanner.variable_names(source), vec!["x"]);
    }

    #[test]
    fn test_class_names_from_both_styles() {
        let scanner = DeclarationScanner::new().unwrap();
        let source = r#"
class Task {}
function Project(name) {
    this.name = name;
}
"#;
        assert_eq!(scanner.class_names(source), vec!["Task", "Project"]);
    }

    #[test]
    fn test_over_collection_is_tolerated() {
        let scanner = DeclarationScanner::new().unwrap();
        // "let" inside a string still matches; the probe for `fake` will
        // simply come back not-found at execution time
        let source = r#"console.log("let fake = 1");"#;
        let names = scanner.variable_names(source);
        assert!(names.contains(&"fake".to_string()));
    }

    #[test]
    fn test_variable_initializers() {
        let scanner = DeclarationScanner::new().unwrap();
        let source = "let a = new Task(\"x\");\nlet b;\nlet c = 5;";
        let inits = scanner.variable_initializers(source);

        assert_eq!(inits.get("a").map(String::as_str), Some("new Task(\"x\")"));
        assert_eq!(inits.get("c").map(String::as_str), Some("5"));
        assert!(!inits.contains_key("b"));
    }

    #[test]
    fn test_empty_source() {
        let scanner = DeclarationScanner::new().unwrap();
        assert!(scanner.variable_names("").is_empty());
        assert!(scanner.class_names("").is_empty());
        assert!(scanner.scan("").is_empty());
    }
}
