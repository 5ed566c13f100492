//! Remote structured analysis of learner source via a chat-completion
//! endpoint. Best-effort decoration: every failure mode here is absorbed by
//! the orchestrator's fallback to the local sandbox.
pub mod client;
pub mod prompt;
pub mod response;

pub use client::HttpAnalysisClient;
pub use response::RemoteAnalysis;

/// Errors the remote path can produce. All of them are soft: the caller
/// folds every variant into the same local-fallback branch.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("remote analysis is not configured")]
    NotConfigured,

    #[error("network error: {0}")]
    Network(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("analysis contained no runtime values")]
    EmptyAnalysis,
}

/// Trait for remote analysis client implementations
pub trait AnalysisClient: Send + Sync {
    /// Submit the source text and get back the parsed analysis
    fn analyze(&self, source: &str) -> Result<RemoteAnalysis, RemoteError>;

    /// Check if the client is configured well enough to try
    fn is_available(&self) -> bool;
}
