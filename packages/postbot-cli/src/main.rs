use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use postbot::{ai::OpenAI, Pipeline, TavilyWebSearcher};

/// Generate platform-specific social media posts for a topic.
#[derive(Parser)]
#[command(name = "postbot", version, about)]
struct Args {
    /// Topic to research and turn into posts
    #[arg(default_value = "Ind vs Pak war 2025")]
    topic: String,

    /// Chat model used for summarization and generation
    #[arg(long, default_value = openai_client::DEFAULT_MODEL)]
    model: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if args.topic.trim().is_empty() {
        eprintln!("{}", "Please enter a topic.".yellow());
        std::process::exit(1);
    }

    // Clients are built once here and injected into the pipeline.
    let openai_key = std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
    let tavily_key = std::env::var("TAVILY_API_KEY").context("TAVILY_API_KEY not set")?;

    let searcher = TavilyWebSearcher::new(tavily_key);
    let completion = OpenAI::new(openai_key).with_model(&args.model);
    let pipeline = Pipeline::new(searcher, completion);

    println!(
        "{}",
        "🤖 PostBot AI - Multi-Platform Post Generator"
            .bright_blue()
            .bold()
    );
    println!("Topic: {}", args.topic);
    println!("Thinking... 🧠");

    let run = pipeline.run(&args.topic).await?;

    println!();
    println!("{}", "🔍 Step 1: Web Research Output".bold());
    println!("{}", run.research);

    println!("{}", "🧠 Step 2: Summarized Research".bold());
    println!("{}", run.summary);
    println!();

    println!("{}", "📱 Step 3: Generated Social Media Posts".bold());
    for post in &run.posts {
        println!();
        println!(
            "{}",
            format!("### {} {}", post.platform.emoji(), post.platform).bold()
        );
        println!("{}", post.text);
    }

    Ok(())
}
