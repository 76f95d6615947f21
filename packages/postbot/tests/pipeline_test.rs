//! End-to-end pipeline scenarios over mock providers.

use std::time::Duration;

use postbot::testing::{MockCompletion, MockWebSearcher};
use postbot::{Pipeline, PipelineError, Platform, RESEARCH_FALLBACK};

const SUMMARIZE_NEEDLE: &str = "Summarize the following research";
const FACEBOOK_NEEDLE: &str = "facebook caption writer";
const LINKEDIN_NEEDLE: &str = "personal branding expert";
const TWITTER_NEEDLE: &str = "social media content expert";

#[tokio::test]
async fn end_to_end_run() {
    let searcher = MockWebSearcher::new().with_contents("Ind vs Pak war 2025", &["A", "B"]);
    let completion = MockCompletion::new()
        .with_response(SUMMARIZE_NEEDLE, "Summary text")
        .with_default_response("X");

    let pipeline = Pipeline::new(searcher, completion);
    let run = pipeline.run("Ind vs Pak war 2025").await.unwrap();

    assert_eq!(run.research, "A\n\nB\n\n");
    assert_eq!(run.summary, "Summary text");
    assert_eq!(run.posts.len(), 3);
    assert_eq!(run.posts[0].text, "📘 Facebook Post:\nX");
    assert_eq!(run.posts[1].text, "💼 LinkedIn Post:\nX");
    assert_eq!(run.posts[2].text, "🐦 Twitter Post:\nX");
}

#[tokio::test]
async fn post_order_is_identity_based_not_arrival_based() {
    let searcher = MockWebSearcher::new().with_contents("topic", &["research"]);
    // Facebook (first in display order) finishes last, Twitter first.
    let completion = MockCompletion::new()
        .with_response(SUMMARIZE_NEEDLE, "the summary")
        .with_delayed_response(FACEBOOK_NEEDLE, "fb", Duration::from_millis(120))
        .with_delayed_response(LINKEDIN_NEEDLE, "li", Duration::from_millis(60))
        .with_response(TWITTER_NEEDLE, "tw");

    let pipeline = Pipeline::new(searcher, completion);
    let run = pipeline.run("topic").await.unwrap();

    let order: Vec<Platform> = run.posts.iter().map(|p| p.platform).collect();
    assert_eq!(order, Platform::ALL);
    assert_eq!(run.posts[0].text, "📘 Facebook Post:\nfb");
    assert_eq!(run.posts[2].text, "🐦 Twitter Post:\ntw");
}

#[tokio::test]
async fn summarizer_called_exactly_once_with_output_unmodified() {
    let searcher = MockWebSearcher::new().with_contents("topic", &["research body"]);
    let completion = MockCompletion::new()
        .with_response(SUMMARIZE_NEEDLE, "  verbatim summary \n")
        .with_default_response("post");

    let pipeline = Pipeline::new(searcher, completion.clone());
    let run = pipeline.run("topic").await.unwrap();

    assert_eq!(completion.calls_containing(SUMMARIZE_NEEDLE), 1);
    // No trimming or post-processing of the model output.
    assert_eq!(run.summary, "  verbatim summary \n");
    // The summarizer prompt embeds the research text in full.
    let calls = completion.calls();
    let summarize_prompt = calls
        .iter()
        .find(|p| p.contains(SUMMARIZE_NEEDLE))
        .unwrap();
    assert!(summarize_prompt.contains("research body"));
}

#[tokio::test]
async fn each_generator_sees_the_summary_and_labels_its_output() {
    let searcher = MockWebSearcher::new().with_contents("topic", &["research"]);
    let completion = MockCompletion::new()
        .with_response(SUMMARIZE_NEEDLE, "shared summary")
        .with_response(FACEBOOK_NEEDLE, "fb out")
        .with_response(LINKEDIN_NEEDLE, "li out")
        .with_response(TWITTER_NEEDLE, "tw out");

    let pipeline = Pipeline::new(searcher, completion.clone());
    let run = pipeline.run("topic").await.unwrap();

    for post in &run.posts {
        assert!(post.text.starts_with(post.platform.label()));
    }
    // 1 summarize + 3 generators, each prompt embedding the shared summary.
    let calls = completion.calls();
    assert_eq!(calls.len(), 4);
    for needle in [FACEBOOK_NEEDLE, LINKEDIN_NEEDLE, TWITTER_NEEDLE] {
        let prompt = calls.iter().find(|p| p.contains(needle)).unwrap();
        assert!(prompt.contains("shared summary"));
    }
}

#[tokio::test]
async fn empty_topic_never_reaches_a_provider() {
    let searcher = MockWebSearcher::new();
    let completion = MockCompletion::new();
    let pipeline = Pipeline::new(searcher.clone(), completion.clone());

    for topic in ["", "   ", "\t\n"] {
        let err = pipeline.run(topic).await.unwrap_err();
        assert!(matches!(err, PipelineError::InvalidTopic { .. }));
    }

    assert!(searcher.queries().is_empty());
    assert!(completion.calls().is_empty());
}

#[tokio::test]
async fn search_fallback_flows_into_the_summary_prompt() {
    // Provider knows nothing about this topic: zero hits.
    let searcher = MockWebSearcher::new();
    let completion = MockCompletion::new().with_response(SUMMARIZE_NEEDLE, "summary");

    let pipeline = Pipeline::new(searcher, completion.clone());
    let run = pipeline.run("obscure topic").await.unwrap();

    assert_eq!(run.research, RESEARCH_FALLBACK);
    let calls = completion.calls();
    let summarize_prompt = calls
        .iter()
        .find(|p| p.contains(SUMMARIZE_NEEDLE))
        .unwrap();
    assert!(summarize_prompt.contains(RESEARCH_FALLBACK));
}

#[tokio::test]
async fn one_failing_generator_fails_the_whole_run() {
    let searcher = MockWebSearcher::new().with_contents("topic", &["research"]);
    let completion = MockCompletion::new()
        .with_response(SUMMARIZE_NEEDLE, "summary")
        .with_error(LINKEDIN_NEEDLE, "rate limited")
        .with_default_response("post");

    let pipeline = Pipeline::new(searcher, completion.clone());
    let err = pipeline.run("topic").await.unwrap_err();

    assert!(matches!(err, PipelineError::Completion(_)));
    // The other generators were still invoked (the fan-out is a barrier),
    // but no partial triple escaped.
    assert_eq!(completion.calls_containing(FACEBOOK_NEEDLE), 1);
    assert_eq!(completion.calls_containing(TWITTER_NEEDLE), 1);
}

#[tokio::test]
async fn search_failure_aborts_before_any_completion_call() {
    let searcher = MockWebSearcher::new().with_error("DNS failure");
    let completion = MockCompletion::new();

    let pipeline = Pipeline::new(searcher, completion.clone());
    let err = pipeline.run("topic").await.unwrap_err();

    assert!(matches!(err, PipelineError::Search(_)));
    assert!(completion.calls().is_empty());
}
