//! The parameterized analysis pipeline.
//!
//! All four analysis kinds share one build-prompt, send, extract path; they
//! differ only in the prompt template and the expected reply shape. Remote
//! and decode failures are caught here and converted to an absence signal,
//! so one kind failing never prevents the others from running.

use log::warn;
use serde::de::DeserializeOwned;

use crate::client::{GeminiClient, ModelTransport};
use crate::config::Config;
use crate::error::Result;
use crate::extract;
use crate::models::{ComplexityReport, PatternReport};
use crate::prompts::{build_prompt, AnalysisKind};

/// Runs analysis requests against a [`ModelTransport`]
pub struct Analyzer {
    transport: Box<dyn ModelTransport>,
}

impl Analyzer {
    /// Wraps an arbitrary transport; used by tests to substitute a stub
    pub fn new(transport: Box<dyn ModelTransport>) -> Self {
        Self { transport }
    }

    /// Builds an analyzer backed by the Gemini API
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(Box::new(GeminiClient::new(config)?)))
    }

    /// Whether the underlying transport has a credential configured
    pub fn is_available(&self) -> bool {
        self.transport.is_available()
    }

    /// Analyzes per-function time and space complexity
    pub async fn analyze_complexity(&self, code: &str) -> Option<ComplexityReport> {
        self.structured(code, AnalysisKind::Complexity).await
    }

    /// Detects DSA patterns, data structures, and techniques
    pub async fn detect_patterns(&self, code: &str) -> Option<PatternReport> {
        self.structured(code, AnalysisKind::Pattern).await
    }

    /// Asks for concrete optimization suggestions
    pub async fn suggest_optimizations(&self, code: &str) -> Option<Vec<String>> {
        self.structured(code, AnalysisKind::Optimization).await
    }

    /// Asks for a free-form explanation of the algorithm
    pub async fn explain_algorithm(&self, code: &str) -> Option<String> {
        self.request(code, AnalysisKind::Explanation)
            .await
            .map(|text| text.trim().to_string())
    }

    async fn request(&self, code: &str, kind: AnalysisKind) -> Option<String> {
        if !self.transport.is_available() {
            return None;
        }
        let prompt = build_prompt(code, kind);
        match self.transport.send(&prompt).await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("{kind} analysis failed: {e}");
                None
            }
        }
    }

    async fn structured<T: DeserializeOwned>(&self, code: &str, kind: AnalysisKind) -> Option<T> {
        let raw = self.request(code, kind).await?;
        match extract::extract_json(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("could not decode {kind} reply: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SenseiError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    type Responder = Box<dyn Fn(&str) -> Result<String> + Send + Sync>;

    struct StubTransport {
        available: bool,
        calls: Arc<AtomicUsize>,
        respond: Responder,
    }

    impl StubTransport {
        fn new(available: bool, respond: Responder) -> Self {
            Self {
                available,
                calls: Arc::new(AtomicUsize::new(0)),
                respond,
            }
        }
    }

    #[async_trait]
    impl ModelTransport for StubTransport {
        fn is_available(&self) -> bool {
            self.available
        }

        async fn send(&self, prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.respond)(prompt)
        }
    }

    #[tokio::test]
    async fn test_structured_reply_is_decoded() {
        let transport = StubTransport::new(
            true,
            Box::new(|_| {
                Ok("```json\n{\"functions\": [{\"name\": \"f\", \"time_complexity\": \"O(n)\", \
                    \"space_complexity\": \"O(1)\", \"confidence\": \"high\"}]}\n```"
                    .to_string())
            }),
        );
        let analyzer = Analyzer::new(Box::new(transport));

        let report = analyzer.analyze_complexity("def f(): pass").await.unwrap();
        assert_eq!(report.functions[0].name, "f");
    }

    #[tokio::test]
    async fn test_transport_failure_yields_none() {
        let transport = StubTransport::new(
            true,
            Box::new(|_| Err(SenseiError::Network("connection refused".into()))),
        );
        let analyzer = Analyzer::new(Box::new(transport));

        assert!(analyzer.detect_patterns("code").await.is_none());
    }

    #[tokio::test]
    async fn test_undecodable_reply_yields_none() {
        let transport =
            StubTransport::new(true, Box::new(|_| Ok("I cannot answer that.".to_string())));
        let analyzer = Analyzer::new(Box::new(transport));

        assert!(analyzer.suggest_optimizations("code").await.is_none());
    }

    #[tokio::test]
    async fn test_explanation_returns_raw_text() {
        let transport = StubTransport::new(
            true,
            Box::new(|_| Ok("  This is binary search.  ".to_string())),
        );
        let analyzer = Analyzer::new(Box::new(transport));

        let explanation = analyzer.explain_algorithm("code").await.unwrap();
        assert_eq!(explanation, "This is binary search.");
    }

    #[tokio::test]
    async fn test_unavailable_transport_is_never_called() {
        let transport = StubTransport::new(false, Box::new(|_| Ok("{}".to_string())));
        let calls = Arc::clone(&transport.calls);
        let analyzer = Analyzer::new(Box::new(transport));

        assert!(analyzer.analyze_complexity("code").await.is_none());
        assert!(analyzer.detect_patterns("code").await.is_none());
        assert!(analyzer.suggest_optimizations("code").await.is_none());
        assert!(analyzer.explain_algorithm("code").await.is_none());
        assert!(!analyzer.is_available());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_one_kind_failing_does_not_affect_others() {
        let transport = StubTransport::new(
            true,
            Box::new(|prompt| {
                if prompt.contains("\"pattern_name\"") {
                    Err(SenseiError::Llm("Gemini API returned 500".into()))
                } else {
                    Ok(r#"["cache intermediate results"]"#.to_string())
                }
            }),
        );
        let analyzer = Analyzer::new(Box::new(transport));

        assert!(analyzer.detect_patterns("code").await.is_none());
        let suggestions = analyzer.suggest_optimizations("code").await.unwrap();
        assert_eq!(suggestions, vec!["cache intermediate results".to_string()]);
    }
}
