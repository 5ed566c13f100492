//! evalscope - the code-evaluation pipeline behind an interactive JavaScript
//! learning environment
//!
//! This crate provides functionality to:
//! - Lexically scan learner JavaScript for declared variables, functions and classes
//! - Execute learner source in an embedded engine, capturing console output and
//!   the final value of every discovered binding
//! - Optionally enhance results with a remote structured analysis, falling back
//!   to the local sandbox on any failure
pub mod cache;
pub mod config;
pub mod error;
pub mod patterns;
pub mod reclassifier;
pub mod remote;
pub mod runner;
pub mod sandbox;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::{Config, RemoteConfig};
pub use remote::{AnalysisClient, RemoteAnalysis, RemoteError};
pub use runner::Evaluator;
pub use sandbox::SandboxExecutor;
