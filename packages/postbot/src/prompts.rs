//! LLM prompts for the post generation pipeline.
//!
//! Each prompt is a template string with a single substitution point, so the
//! generator components stay structurally identical and new platforms only
//! need a new template.

use crate::platform::Platform;

/// Prompt for condensing research text into a short paragraph.
pub const SUMMARIZE_PROMPT: &str =
    "Summarize the following research into a short paragraph:\n{research}";

/// Prompt for the Facebook caption generator.
pub const FACEBOOK_PROMPT: &str = r#"You are a witty and creative facebook caption writer.

Based on the summary below, craft a short, catchy, and fun caption. Use emojis and 2–3 relevant hashtags where appropriate. Avoid sounding too formal.

Summary:
{summary}

Guidelines:
- Keep it under 150 characters if possible.
- Feel free to use humor or trending slang.
"#;

/// Prompt for the LinkedIn post generator.
pub const LINKEDIN_PROMPT: &str = r#"You are a personal branding expert for LinkedIn.

Write a professional, insightful, and engaging LinkedIn post based on the summary below. The tone should be thoughtful and value-driven. Avoid hashtags unless contextually necessary.

User request:
{summary}

Guidelines:
- Write in the first person.
- Keep it within 2–4 short paragraphs.
- Aim to educate, inspire, or provoke thought.
"#;

/// Prompt for the Twitter/X post generator.
pub const TWITTER_PROMPT: &str = r#"You are a social media content expert.

Write a highly engaging and concise **Twitter/X post** based on the following summary:

"""{summary}"""

**Guidelines:**
- Use a catchy hook to grab attention in the first few words.
- Add 1–2 relevant emojis to enhance visual appeal.
- Include 2–3 relevant and trending hashtags at the end (e.g., #AI, #MarketingTips).
- Stay within Twitter's character limit (280 characters).
- Avoid technical jargon. Keep it easy to read and impactful.
- Ensure it aligns with Twitter's fast-scrolling, attention-seeking style.

Respond only with the final tweet, no additional text.
"#;

/// Format the summarize prompt with the research text.
///
/// The research text is embedded in full; no length capping happens here.
pub fn format_summarize_prompt(research: &str) -> String {
    SUMMARIZE_PROMPT.replace("{research}", research)
}

/// Format a platform's template with the summary.
pub fn format_platform_prompt(platform: Platform, summary: &str) -> String {
    platform.template().replace("{summary}", summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_summarize_prompt() {
        let formatted = format_summarize_prompt("Hello world");
        assert!(formatted.starts_with("Summarize the following research"));
        assert!(formatted.ends_with("Hello world"));
        assert!(!formatted.contains("{research}"));
    }

    #[test]
    fn test_format_platform_prompt() {
        for platform in Platform::ALL {
            let formatted = format_platform_prompt(platform, "the summary text");
            assert!(formatted.contains("the summary text"));
            assert!(!formatted.contains("{summary}"));
        }
    }

    #[test]
    fn test_templates_have_one_substitution_point() {
        for platform in Platform::ALL {
            assert_eq!(platform.template().matches("{summary}").count(), 1);
        }
        assert_eq!(SUMMARIZE_PROMPT.matches("{research}").count(), 1);
    }
}
