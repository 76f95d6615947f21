//! OpenAI implementation of the `Completion` trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use postbot::ai::OpenAI;
//!
//! let completion = OpenAI::from_env()?.with_model("gpt-4o");
//! let pipeline = Pipeline::new(searcher, completion);
//! ```

use async_trait::async_trait;

use openai_client::{OpenAIClient, DEFAULT_MODEL};

use crate::error::{PipelineError, Result};
use crate::traits::completion::Completion;

/// OpenAI-backed completion provider.
#[derive(Clone)]
pub struct OpenAI {
    client: OpenAIClient,
    model: String,
}

impl OpenAI {
    /// Create a new OpenAI completion provider with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: OpenAIClient::new(api_key),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create from environment variable `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let client = OpenAIClient::from_env()
            .map_err(|e| PipelineError::Config(e.to_string()))?;
        Ok(Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Set the chat model (default: gpt-4).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Completion for OpenAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.client
            .complete(prompt, &self.model)
            .await
            .map_err(|e| PipelineError::Completion(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model() {
        let ai = OpenAI::new("sk-test");
        assert_eq!(ai.model(), "gpt-4");
    }

    #[test]
    fn test_with_model() {
        let ai = OpenAI::new("sk-test").with_model("gpt-4o-mini");
        assert_eq!(ai.model(), "gpt-4o-mini");
    }
}
