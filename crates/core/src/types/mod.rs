pub mod binding;
pub mod declaration;
pub mod result;
pub mod scope;
pub mod value;

// Re-export commonly used types
pub use binding::{ConsoleEntry, VariableBinding};
pub use declaration::{Declaration, DeclarationKind};
pub use result::EvaluationResult;
pub use scope::{ScopeDescriptor, ScopeType, ScopeVariable};
pub use value::CapturedValue;
