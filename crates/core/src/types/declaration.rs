use serde::{Deserialize, Serialize};

/// How a name was introduced in the learner's source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    /// `let`/`const`/`var` declaration
    Variable,
    /// Named `function` declaration
    Function,
    /// Bare assignment to an identifier
    Assignment,
    /// `class` declaration
    Class,
    /// Capitalized constructor-style function assigning to `this`
    ConstructorFunction,
}

/// A declared name found by the lexical scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclarationKind,
    /// Right-hand-side text when the declaration carried an initializer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initializer: Option<String>,
    /// Byte offset of the match in the source text
    pub offset: usize,
}

impl Declaration {
    pub fn new(name: impl Into<String>, kind: DeclarationKind, offset: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            initializer: None,
            offset,
        }
    }

    pub fn with_initializer(mut self, initializer: impl Into<String>) -> Self {
        self.initializer = Some(initializer.into());
        self
    }
}
