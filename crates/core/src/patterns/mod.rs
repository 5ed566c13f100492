pub mod assignment;
pub mod class_decl;
pub mod constructor_fn;
pub mod detector;
pub mod function_decl;
pub mod keyword_decl;
pub mod pattern;

pub use assignment::AssignmentPattern;
pub use class_decl::ClassDeclPattern;
pub use constructor_fn::ConstructorFnPattern;
pub use detector::DeclarationScanner;
pub use function_decl::FunctionDeclPattern;
pub use keyword_decl::KeywordDeclPattern;
pub use pattern::DeclarationPattern;
