//! Main entry point coordinating remote analysis, the local sandbox, and the
//! result cache.

use tracing::debug;

use crate::{
    cache::ResultCache,
    config::Config,
    error::Result,
    reclassifier::Reclassifier,
    remote::{AnalysisClient, HttpAnalysisClient, RemoteAnalysis, RemoteError},
    sandbox::SandboxExecutor,
    types::{CapturedValue, EvaluationResult},
};

/// The one object callers hold: source text in, [`EvaluationResult`] out,
/// never an error.
///
/// The remote path is best-effort decoration. Any remote failure - not
/// configured, network, bad status, malformed or empty analysis - degrades
/// to the local sandbox plus reclassifier, with `ai_enhanced` recording
/// which path produced the result.
pub struct Evaluator {
    executor: SandboxExecutor,
    reclassifier: Reclassifier,
    remote: Option<Box<dyn AnalysisClient>>,
    cache: ResultCache,
    config: Config,
}

impl Evaluator {
    pub fn new() -> Result<Self> {
        Self::with_config(Config::load()?)
    }

    pub fn with_config(config: Config) -> Result<Self> {
        let remote = config
            .remote
            .as_ref()
            .and_then(|remote_config| match HttpAnalysisClient::new(remote_config) {
                Ok(client) => Some(Box::new(client) as Box<dyn AnalysisClient>),
                Err(err) => {
                    debug!("remote client unavailable: {err}");
                    None
                }
            });

        Ok(Self {
            executor: SandboxExecutor::new()?,
            reclassifier: Reclassifier::new()?,
            remote,
            cache: ResultCache::new(config.cache_capacity),
            config,
        })
    }

    /// Replace the remote client; used to inject scripted clients in tests
    /// and alternative transports in hosts.
    pub fn with_client(mut self, client: Box<dyn AnalysisClient>) -> Self {
        self.remote = Some(client);
        self
    }

    /// Drop the remote client, forcing local-only evaluation.
    pub fn without_remote(mut self) -> Self {
        self.remote = None;
        self
    }

    /// Evaluate one source text. Infallible: every failure mode ends up as
    /// data on the returned result.
    pub fn evaluate(&mut self, source: &str) -> EvaluationResult {
        if self.config.cache_enabled {
            if let Some(hit) = self.cache.get(source) {
                debug!("serving evaluation from cache");
                return hit;
            }
        }

        let result = self.try_remote(source).unwrap_or_else(|err| {
            debug!("remote analysis unavailable ({err}); using local sandbox");
            self.evaluate_local(source)
        });

        if self.config.cache_enabled {
            self.cache.insert(source, result.clone());
        }
        result
    }

    /// Evaluate without touching the remote path or the cache.
    pub fn evaluate_offline(&self, source: &str) -> EvaluationResult {
        self.evaluate_local(source)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn evaluate_local(&self, source: &str) -> EvaluationResult {
        let mut result = self.executor.evaluate(source);
        self.reclassifier
            .reclassify(source, self.executor.scanner(), &mut result);
        result
    }

    fn try_remote(&self, source: &str) -> std::result::Result<EvaluationResult, RemoteError> {
        let client = self.remote.as_ref().ok_or(RemoteError::NotConfigured)?;
        if !client.is_available() {
            return Err(RemoteError::NotConfigured);
        }

        let analysis = client.analyze(source)?;
        if analysis.runtime_values.is_empty() {
            return Err(RemoteError::EmptyAnalysis);
        }

        Ok(remote_result(analysis))
    }
}

fn remote_result(analysis: RemoteAnalysis) -> EvaluationResult {
    let mut result = EvaluationResult::new();
    result.ai_enhanced = true;

    for (name, value) in &analysis.runtime_values {
        result.push_binding(name.clone(), CapturedValue::from_json(value));
    }
    result.execution_path = analysis.execution_flow;
    result.scopes = analysis.scopes;
    if !analysis.errors.is_empty() {
        result.error = Some(analysis.errors.join("; "));
    }

    result
}
