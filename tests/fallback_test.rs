//! Integration tests for the remote-analysis path and its fallback guarantee.

use evalscope_core::{
    AnalysisClient, CapturedValue, Config, Evaluator, RemoteAnalysis, RemoteError,
};

struct DownClient;

impl AnalysisClient for DownClient {
    fn analyze(&self, _source: &str) -> Result<RemoteAnalysis, RemoteError> {
        Err(RemoteError::Network("simulated outage".to_string()))
    }

    fn is_available(&self) -> bool {
        true
    }
}

struct CannedClient {
    content: serde_json::Value,
}

impl AnalysisClient for CannedClient {
    fn analyze(&self, _source: &str) -> Result<RemoteAnalysis, RemoteError> {
        serde_json::from_value(self.content.clone())
            .map_err(|e| RemoteError::Parse(e.to_string()))
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[test]
fn test_fallback_guarantee() {
    let source = r#"let msg = "still works"; console.log(msg);"#;

    let mut degraded = Evaluator::with_config(Config::default())
        .unwrap()
        .with_client(Box::new(DownClient));
    let fallback = degraded.evaluate(source);

    let local = Evaluator::with_config(Config::default())
        .unwrap()
        .without_remote()
        .evaluate_offline(source);

    assert!(!fallback.ai_enhanced);
    assert_eq!(fallback.variables, local.variables);
    assert_eq!(fallback.console_output, local.console_output);
    assert_eq!(fallback.error, local.error);
}

#[test]
fn test_remote_analysis_carried_through() {
    let mut evaluator = Evaluator::with_config(Config::default())
        .unwrap()
        .with_client(Box::new(CannedClient {
            content: serde_json::json!({
                "scopes": [
                    {
                        "type": "global",
                        "variables": [
                            { "name": "x", "value": 3, "description": "sum of 1 and 2" }
                        ]
                    }
                ],
                "runtimeValues": { "x": 3 },
                "executionFlow": [ "declare x", "assign 1 + 2" ],
                "errors": []
            }),
        }));

    let result = evaluator.evaluate("let x = 1 + 2;");

    assert!(result.ai_enhanced);
    assert_eq!(result.get("x"), Some(&CapturedValue::Number(3.0)));
    assert_eq!(result.execution_path, vec!["declare x", "assign 1 + 2"]);
    assert_eq!(result.scopes.len(), 1);
    // The remote path has no console capture
    assert!(result.console_output.is_empty());
}

#[test]
fn test_empty_remote_analysis_uses_sandbox() {
    let mut evaluator = Evaluator::with_config(Config::default())
        .unwrap()
        .with_client(Box::new(CannedClient {
            content: serde_json::json!({ "runtimeValues": {} }),
        }));

    let result = evaluator.evaluate("let y = 5;");

    // An empty-but-valid analysis counts as a failure mode
    assert!(!result.ai_enhanced);
    assert_eq!(result.get("y"), Some(&CapturedValue::Number(5.0)));
}

#[test]
fn test_unavailable_client_is_never_called() {
    struct NeverReady;

    impl AnalysisClient for NeverReady {
        fn analyze(&self, _source: &str) -> Result<RemoteAnalysis, RemoteError> {
            panic!("analyze must not be called when unavailable");
        }

        fn is_available(&self) -> bool {
            false
        }
    }

    let mut evaluator = Evaluator::with_config(Config::default())
        .unwrap()
        .with_client(Box::new(NeverReady));

    let result = evaluator.evaluate("let z = 9;");
    assert!(!result.ai_enhanced);
    assert_eq!(result.get("z"), Some(&CapturedValue::Number(9.0)));
}
