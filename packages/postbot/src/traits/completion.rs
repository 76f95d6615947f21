//! Completion trait for LLM text generation.

use async_trait::async_trait;

use crate::error::Result;

/// A hosted language-model completion provider.
///
/// Implementations wrap a specific provider (OpenAI, etc.) and hold their
/// own model choice; the pipeline only ever sends one prompt and reads back
/// the raw generated text.
#[async_trait]
pub trait Completion: Send + Sync {
    /// Run one single-turn prompt through the model.
    ///
    /// Returns the generated text verbatim: no trimming, no parsing, and no
    /// validation of whatever format the prompt asked for.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
