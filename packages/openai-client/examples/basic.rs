//! Basic OpenAI client usage example

use openai_client::{ChatRequest, Message, OpenAIClient, DEFAULT_MODEL};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize from environment
    let client = OpenAIClient::from_env()?;

    // Full chat completion
    println!("=== Chat Completion ===");
    let response = client
        .chat_completion(
            ChatRequest::new(DEFAULT_MODEL)
                .message(Message::system("You are a helpful assistant."))
                .message(Message::user("What is Rust in one sentence?"))
                .temperature(0.7)
                .max_tokens(100),
        )
        .await?;

    println!("Response: {}", response.content);
    if let Some(usage) = response.usage {
        println!("Tokens: {}", usage.total_tokens);
    }

    // Single-turn shortcut
    println!("\n=== Single Turn ===");
    let text = client.complete("Name one Rust web framework.", DEFAULT_MODEL).await?;
    println!("Response: {}", text);

    Ok(())
}
