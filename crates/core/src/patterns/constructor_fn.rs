use crate::{
    error::{Error, Result},
    patterns::DeclarationPattern,
    types::{Declaration, DeclarationKind},
};
use regex::Regex;

/// How far past the `function` keyword to look for a `this.x = ...`
/// assignment before giving up on a candidate.
const BODY_WINDOW: usize = 600;

/// Matches pre-class constructor functions: a capitalized `function Name(...)`
/// whose nearby body assigns to `this`. The capitalization requirement is the
/// naming-convention heuristic that keeps ordinary helpers out of the class
/// set.
pub struct ConstructorFnPattern {
    header: Regex,
    this_assignment: Regex,
}

impl ConstructorFnPattern {
    pub fn new() -> Result<Self> {
        let header = Regex::new(r"\bfunction\s+([A-Z][A-Za-z0-9_$]*)\s*\(")
            .map_err(|e| Error::PatternError(format!("constructor header regex: {e}")))?;
        let this_assignment = Regex::new(r"this\.[A-Za-z_$][A-Za-z0-9_$]*\s*=")
            .map_err(|e| Error::PatternError(format!("this-assignment regex: {e}")))?;
        Ok(Self {
            header,
            this_assignment,
        })
    }
}

impl DeclarationPattern for ConstructorFnPattern {
    fn collect(&self, source: &str) -> Vec<Declaration> {
        self.header
            .captures_iter(source)
            .filter_map(|caps| {
                let name = caps.get(1)?;
                let window_start = name.end();
                let window_end = source.len().min(window_start + BODY_WINDOW);
                // Byte-slice boundaries can land mid-character on non-ASCII
                // source; back off to the nearest boundary.
                let mut end = window_end;
                while !source.is_char_boundary(end) {
                    end -= 1;
                }
                if !self.this_assignment.is_match(&source[window_start..end]) {
                    return None;
                }
                Some(Declaration::new(
                    name.as_str(),
                    DeclarationKind::ConstructorFunction,
                    name.start(),
                ))
            })
            .collect()
    }
}
