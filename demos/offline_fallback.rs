//! Demonstrates the fallback guarantee: a dead remote endpoint never costs
//! the learner a result.
//!
//! Run with: cargo run --example offline_fallback

use evalscope_core::{AnalysisClient, Config, Evaluator, RemoteAnalysis, RemoteError};

/// A remote client standing in for a service that is down.
struct OutageClient;

impl AnalysisClient for OutageClient {
    fn analyze(&self, _source: &str) -> Result<RemoteAnalysis, RemoteError> {
        Err(RemoteError::Network("connection timed out".to_string()))
    }

    fn is_available(&self) -> bool {
        true
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut evaluator =
        Evaluator::with_config(Config::default())?.with_client(Box::new(OutageClient));

    let result = evaluator.evaluate(r#"let answer = 6 * 7; console.log("answer:", answer);"#);

    println!(
        "ai_enhanced: {} (remote was down, sandbox answered)",
        result.ai_enhanced
    );
    for binding in &result.variables {
        println!("{} = {}", binding.name, binding.value);
    }
    for entry in &result.console_output {
        println!("> {}", entry.text());
    }

    Ok(())
}
