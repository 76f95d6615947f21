//! Web searcher trait for topic research.
//!
//! Abstracts over search providers (Tavily, SerpAPI, etc.) so the pipeline
//! can be driven by a mock in tests. Only the textual `content` of each hit
//! is consumed downstream; titles and scores are carried for callers that
//! want them.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{PipelineError, Result};
use crate::security::SecretString;

/// A single result from a web search.
#[derive(Debug, Clone, Default)]
pub struct SearchHit {
    /// Textual content of the result (snippet or extracted page text).
    pub content: String,

    /// URL of the result, if the provider returned one.
    pub url: Option<String>,

    /// Title of the result.
    pub title: Option<String>,

    /// Relevance score (0.0-1.0, if provided by the search API).
    pub score: Option<f32>,
}

impl SearchHit {
    /// Create a hit from its content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Add a URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Add a title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a relevance score.
    pub fn with_score(mut self, score: f32) -> Self {
        self.score = Some(score);
        self
    }
}

/// Web search trait for topic research.
///
/// # Implementations
///
/// - `TavilyWebSearcher` - Tavily API
/// - `MockWebSearcher` - For testing
#[async_trait]
pub trait WebSearcher: Send + Sync {
    /// Search the web for hits relevant to the query.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>>;

    /// Search with a specific result limit.
    async fn search_with_limit(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        let mut hits = self.search(query).await?;
        hits.truncate(limit);
        Ok(hits)
    }
}

/// Tavily-backed web searcher.
pub struct TavilyWebSearcher {
    api_key: SecretString,
    client: reqwest::Client,
    search_depth: String,
    /// Default number of results to request.
    pub default_limit: usize,
}

impl TavilyWebSearcher {
    /// Create a new Tavily web searcher.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key),
            client: reqwest::Client::new(),
            search_depth: "basic".to_string(),
            default_limit: 5,
        }
    }

    /// Create from environment variable `TAVILY_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("TAVILY_API_KEY")
            .map_err(|_| PipelineError::Config("TAVILY_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set search depth ("basic" or "advanced").
    pub fn with_search_depth(mut self, depth: impl Into<String>) -> Self {
        self.search_depth = depth.into();
        self
    }

    /// Set the default result limit.
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }
}

#[async_trait]
impl WebSearcher for TavilyWebSearcher {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        self.search_with_limit(query, self.default_limit).await
    }

    async fn search_with_limit(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        #[derive(serde::Serialize)]
        struct Request {
            query: String,
            search_depth: String,
            max_results: usize,
        }

        #[derive(Deserialize)]
        struct Response {
            results: Vec<TavilyResult>,
        }

        #[derive(Deserialize)]
        struct TavilyResult {
            url: Option<String>,
            title: Option<String>,
            #[serde(default)]
            content: String,
            score: Option<f32>,
        }

        let request = Request {
            query: query.to_string(),
            search_depth: self.search_depth.clone(),
            max_results: limit,
        };

        let response = self
            .client
            .post("https://api.tavily.com/search")
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key.expose()))
            .json(&request)
            .send()
            .await
            .map_err(|e| PipelineError::Search(Box::new(e)))?;

        if !response.status().is_success() {
            return Err(PipelineError::Search(Box::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Tavily API error: {}", response.status()),
            ))));
        }

        let tavily_response: Response = response
            .json()
            .await
            .map_err(|e| PipelineError::Search(Box::new(e)))?;

        Ok(tavily_response
            .results
            .into_iter()
            .map(|r| SearchHit {
                content: r.content,
                url: r.url,
                title: r.title,
                score: r.score,
            })
            .collect())
    }
}
