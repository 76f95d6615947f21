//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the pipeline without
//! making real search or LLM calls. Both mocks share their state through
//! `Arc`, so cloning one before handing it to a `Pipeline` keeps a handle
//! for assertions afterwards.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::error::{PipelineError, Result};
use crate::traits::completion::Completion;
use crate::traits::searcher::{SearchHit, WebSearcher};

/// A scripted response for [`MockCompletion`].
#[derive(Debug, Clone)]
struct Script {
    /// Substring the prompt must contain for this script to match.
    needle: String,
    /// Response text returned on match.
    response: String,
    /// Artificial delay before responding.
    delay: Option<Duration>,
    /// Fail instead of responding.
    error: Option<String>,
}

/// A mock completion provider for testing.
///
/// Responses are scripted by prompt substring; the first matching script
/// wins. Unmatched prompts get the default response. Every prompt is
/// recorded for assertions.
#[derive(Clone, Default)]
pub struct MockCompletion {
    scripts: Arc<RwLock<Vec<Script>>>,
    default_response: Arc<RwLock<String>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockCompletion {
    /// Create a new mock with an echo-style default response.
    pub fn new() -> Self {
        let mock = Self::default();
        *mock.default_response.write().unwrap() = "Mock completion".to_string();
        mock
    }

    /// Script a response for prompts containing `needle`.
    pub fn with_response(self, needle: impl Into<String>, response: impl Into<String>) -> Self {
        self.scripts.write().unwrap().push(Script {
            needle: needle.into(),
            response: response.into(),
            delay: None,
            error: None,
        });
        self
    }

    /// Script a response that arrives only after an artificial delay.
    pub fn with_delayed_response(
        self,
        needle: impl Into<String>,
        response: impl Into<String>,
        delay: Duration,
    ) -> Self {
        self.scripts.write().unwrap().push(Script {
            needle: needle.into(),
            response: response.into(),
            delay: Some(delay),
            error: None,
        });
        self
    }

    /// Script a failure for prompts containing `needle`.
    pub fn with_error(self, needle: impl Into<String>, message: impl Into<String>) -> Self {
        self.scripts.write().unwrap().push(Script {
            needle: needle.into(),
            response: String::new(),
            delay: None,
            error: Some(message.into()),
        });
        self
    }

    /// Set the response for unmatched prompts.
    pub fn with_default_response(self, response: impl Into<String>) -> Self {
        *self.default_response.write().unwrap() = response.into();
        self
    }

    /// Get all prompts sent to this mock.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Count recorded prompts containing `needle`.
    pub fn calls_containing(&self, needle: &str) -> usize {
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter(|p| p.contains(needle))
            .count()
    }
}

#[async_trait]
impl Completion for MockCompletion {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.calls.write().unwrap().push(prompt.to_string());

        let script = self
            .scripts
            .read()
            .unwrap()
            .iter()
            .find(|s| prompt.contains(&s.needle))
            .cloned();

        match script {
            Some(script) => {
                if let Some(delay) = script.delay {
                    tokio::time::sleep(delay).await;
                }
                if let Some(message) = script.error {
                    return Err(PipelineError::Completion(Box::new(std::io::Error::new(
                        std::io::ErrorKind::Other,
                        message,
                    ))));
                }
                Ok(script.response)
            }
            None => Ok(self.default_response.read().unwrap().clone()),
        }
    }
}

/// A mock web searcher for testing.
///
/// Returns predefined hits per query without making network requests, and
/// records every query for assertions.
#[derive(Clone, Default)]
pub struct MockWebSearcher {
    hits: Arc<RwLock<HashMap<String, Vec<SearchHit>>>>,
    error: Arc<RwLock<Option<String>>>,
    queries: Arc<RwLock<Vec<String>>>,
}

impl MockWebSearcher {
    /// Create a new mock searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add hits for a query.
    pub fn with_hits(self, query: impl Into<String>, hits: Vec<SearchHit>) -> Self {
        self.hits.write().unwrap().insert(query.into(), hits);
        self
    }

    /// Add plain content strings as hits for a query.
    pub fn with_contents(self, query: &str, contents: &[&str]) -> Self {
        let hits = contents.iter().map(|c| SearchHit::new(*c)).collect();
        self.with_hits(query, hits)
    }

    /// Make every search fail with the given message.
    pub fn with_error(self, message: impl Into<String>) -> Self {
        *self.error.write().unwrap() = Some(message.into());
        self
    }

    /// Get all queries sent to this mock.
    pub fn queries(&self) -> Vec<String> {
        self.queries.read().unwrap().clone()
    }
}

#[async_trait]
impl WebSearcher for MockWebSearcher {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        self.queries.write().unwrap().push(query.to_string());

        if let Some(message) = self.error.read().unwrap().clone() {
            return Err(PipelineError::Search(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                message,
            ))));
        }

        Ok(self
            .hits
            .read()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_completion_scripts() {
        let mock = MockCompletion::new()
            .with_response("summarize", "a summary")
            .with_default_response("fallthrough");

        assert_eq!(mock.complete("please summarize this").await.unwrap(), "a summary");
        assert_eq!(mock.complete("something else").await.unwrap(), "fallthrough");
        assert_eq!(mock.calls().len(), 2);
        assert_eq!(mock.calls_containing("summarize"), 1);
    }

    #[tokio::test]
    async fn test_mock_completion_error() {
        let mock = MockCompletion::new().with_error("boom", "provider down");

        let err = mock.complete("boom goes the prompt").await.unwrap_err();
        assert!(matches!(err, PipelineError::Completion(_)));
    }

    #[tokio::test]
    async fn test_mock_searcher_records_queries() {
        let searcher = MockWebSearcher::new().with_contents("rust", &["a", "b"]);

        let hits = searcher.search("rust").await.unwrap();
        assert_eq!(hits.len(), 2);

        let none = searcher.search("unknown").await.unwrap();
        assert!(none.is_empty());

        assert_eq!(searcher.queries(), vec!["rust", "unknown"]);
    }

    #[tokio::test]
    async fn test_mock_searcher_error() {
        let searcher = MockWebSearcher::new().with_error("no network");

        let err = searcher.search("rust").await.unwrap_err();
        assert!(matches!(err, PipelineError::Search(_)));
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let mock = MockCompletion::new();
        let clone = mock.clone();

        clone.complete("hello").await.unwrap();
        assert_eq!(mock.calls().len(), 1);
    }
}
