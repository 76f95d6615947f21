//! The research → summarize → fan-out pipeline.
//!
//! One `run` per topic: a sequential search stage feeds a sequential
//! summarize stage, then the summary fans out to all platform generators
//! concurrently. Results are collected by platform identity, never by
//! completion order.

use futures::future::join_all;
use tracing::info;

use crate::error::{PipelineError, Result};
use crate::platform::{Platform, PlatformPost};
use crate::prompts;
use crate::traits::{completion::Completion, searcher::WebSearcher};

/// Fallback research text when the provider returns nothing usable.
pub const RESEARCH_FALLBACK: &str = "No research content found.";

/// Pipeline tuning knobs.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// How many search results to request per topic.
    pub max_results: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { max_results: 5 }
    }
}

/// Everything one pipeline invocation produced.
///
/// `posts` is always exactly one post per platform, in `Platform::ALL`
/// order. Nothing here outlives the invocation; there is no caching across
/// runs.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub topic: String,
    pub research: String,
    pub summary: String,
    pub posts: Vec<PlatformPost>,
}

/// The pipeline orchestrator.
///
/// Clients are injected at construction time and owned for the pipeline's
/// lifetime; there is no ambient global state.
pub struct Pipeline<S, C> {
    searcher: S,
    completion: C,
    config: PipelineConfig,
}

impl<S: WebSearcher, C: Completion> Pipeline<S, C> {
    /// Create a pipeline over the given search and completion providers.
    pub fn new(searcher: S, completion: C) -> Self {
        Self {
            searcher,
            completion,
            config: PipelineConfig::default(),
        }
    }

    /// Override the default configuration.
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the full pipeline for a topic.
    ///
    /// Stages are strictly ordered: search, then summarize, then the
    /// concurrent fan-out. Any provider failure aborts the whole run; no
    /// partial results are ever returned.
    pub async fn run(&self, topic: &str) -> Result<PipelineRun> {
        if topic.trim().is_empty() {
            return Err(PipelineError::InvalidTopic {
                reason: "topic is empty".into(),
            });
        }

        let research = self.research(topic).await?;
        info!(chars = research.len(), "Research stage complete");

        let summary = self.summarize(&research).await?;
        info!(chars = summary.len(), "Summarize stage complete");

        // join_all keeps input order, so the collected posts follow
        // Platform::ALL regardless of which future settles first.
        let futures = Platform::ALL
            .iter()
            .map(|platform| self.generate_post(*platform, &summary));
        let results = join_all(futures).await;

        let mut posts = Vec::with_capacity(results.len());
        for result in results {
            posts.push(result?);
        }
        info!(posts = posts.len(), "Fan-out stage complete");

        Ok(PipelineRun {
            topic: topic.to_string(),
            research,
            summary,
            posts,
        })
    }

    /// Search stage: one provider call, hit contents concatenated.
    ///
    /// Each non-empty content is followed by a blank line, in provider
    /// order. Falls back to [`RESEARCH_FALLBACK`] when no hit carries
    /// content.
    async fn research(&self, topic: &str) -> Result<String> {
        let hits = self
            .searcher
            .search_with_limit(topic, self.config.max_results)
            .await?;

        let mut combined = String::new();
        for hit in &hits {
            if hit.content.is_empty() {
                continue;
            }
            combined.push_str(&hit.content);
            combined.push_str("\n\n");
        }

        if combined.is_empty() {
            return Ok(RESEARCH_FALLBACK.to_string());
        }
        Ok(combined)
    }

    /// Summarize stage: exactly one completion call, output unmodified.
    async fn summarize(&self, research: &str) -> Result<String> {
        let prompt = prompts::format_summarize_prompt(research);
        self.completion.complete(&prompt).await
    }

    /// One generator: fill the platform template, complete, prefix the label.
    async fn generate_post(&self, platform: Platform, summary: &str) -> Result<PlatformPost> {
        let prompt = prompts::format_platform_prompt(platform, summary);
        let output = self.completion.complete(&prompt).await?;

        Ok(PlatformPost {
            platform,
            text: format!("{}{}", platform.label(), output),
        })
    }
}
