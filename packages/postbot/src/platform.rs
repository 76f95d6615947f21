//! Target platforms and their generated posts.

use std::fmt;

use crate::prompts;

/// A platform a post can be generated for.
///
/// The variant order here is the display order contract: results are always
/// collected and returned as Facebook, LinkedIn, Twitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Facebook,
    LinkedIn,
    Twitter,
}

impl Platform {
    /// All platforms in fixed display order.
    pub const ALL: [Platform; 3] = [Platform::Facebook, Platform::LinkedIn, Platform::Twitter];

    /// Fixed header prepended to every generated post.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Facebook => "📘 Facebook Post:\n",
            Platform::LinkedIn => "💼 LinkedIn Post:\n",
            Platform::Twitter => "🐦 Twitter Post:\n",
        }
    }

    /// Platform emoji, for section headings.
    pub fn emoji(&self) -> &'static str {
        match self {
            Platform::Facebook => "📘",
            Platform::LinkedIn => "💼",
            Platform::Twitter => "🐦",
        }
    }

    /// Human-readable platform name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::LinkedIn => "LinkedIn",
            Platform::Twitter => "Twitter",
        }
    }

    /// Prompt template with one `{summary}` substitution point.
    pub fn template(&self) -> &'static str {
        match self {
            Platform::Facebook => prompts::FACEBOOK_PROMPT,
            Platform::LinkedIn => prompts::LINKEDIN_PROMPT,
            Platform::Twitter => prompts::TWITTER_PROMPT,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A generated post for one platform.
///
/// `text` is the platform's label header concatenated with the raw model
/// output; no other transformation happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformPost {
    pub platform: Platform,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_order() {
        assert_eq!(
            Platform::ALL,
            [Platform::Facebook, Platform::LinkedIn, Platform::Twitter]
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(Platform::Facebook.label(), "📘 Facebook Post:\n");
        assert_eq!(Platform::LinkedIn.label(), "💼 LinkedIn Post:\n");
        assert_eq!(Platform::Twitter.label(), "🐦 Twitter Post:\n");
    }

    #[test]
    fn test_display() {
        assert_eq!(Platform::LinkedIn.to_string(), "LinkedIn");
    }
}
