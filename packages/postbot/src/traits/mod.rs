//! Core trait abstractions.
//!
//! The pipeline depends on these seams rather than concrete providers, so
//! clients are injected at construction time and tests run on mocks.

pub mod completion;
pub mod searcher;

pub use completion::Completion;
pub use searcher::{SearchHit, TavilyWebSearcher, WebSearcher};
