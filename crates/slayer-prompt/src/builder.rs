//! Fluent prompt builder
//!
//! [`PromptBuilder`] assembles prompts piece by piece; useful for data-driven
//! construction where parts are conditional (summary cards on/off) or
//! repeated (one line per match record).

use crate::Language;

/// A fluent builder for constructing prompts
///
/// # Examples
///
/// ```
/// use slayer_prompt::PromptBuilder;
///
/// let prompt = PromptBuilder::new()
///     .text("You are a coach.")
///     .blank_line()
///     .section("Session data")
///     .bullet("10 kills, 5 deaths")
///     .when(true, "\nSummary cards are enabled.")
///     .build();
///
/// assert!(prompt.contains("## Session data"));
/// assert!(prompt.contains("- 10 kills, 5 deaths"));
/// ```
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    parts: Vec<String>,
    language: Language,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new() -> Self {
        Self {
            parts: Vec::new(),
            language: Language::English,
        }
    }

    /// Set the language context
    pub fn language(mut self, lang: Language) -> Self {
        self.language = lang;
        self
    }

    /// Add static text
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.parts.push(content.into());
        self
    }

    /// Add a newline
    pub fn newline(self) -> Self {
        self.text("\n")
    }

    /// Add a blank line (two newlines)
    pub fn blank_line(self) -> Self {
        self.text("\n\n")
    }

    /// Add a section header (markdown h2)
    pub fn section(self, title: impl Into<String>) -> Self {
        self.text(format!("\n## {}\n", title.into()))
    }

    /// Add content conditionally
    pub fn when(self, condition: bool, content: impl Into<String>) -> Self {
        if condition { self.text(content) } else { self }
    }

    /// Add a bullet point
    pub fn bullet(self, content: impl Into<String>) -> Self {
        self.text(format!("- {}\n", content.into()))
    }

    /// Add multiple bullet points
    pub fn bullets<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for item in items {
            self = self.bullet(item);
        }
        self
    }

    /// Add a numbered item
    pub fn numbered(self, num: usize, content: impl Into<String>) -> Self {
        self.text(format!("{}. {}\n", num, content.into()))
    }

    /// Add multiple numbered items starting from 1
    pub fn numbered_list<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (i, item) in items.into_iter().enumerate() {
            self = self.numbered(i + 1, item);
        }
        self
    }

    /// Add a key-value pair
    pub fn field(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.text(format!("**{}**: {}\n", key.into(), value.into()))
    }

    /// Get the current language
    pub fn get_language(&self) -> &Language {
        &self.language
    }

    /// Check if the builder is empty
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Build the final prompt string
    pub fn build(self) -> String {
        self.parts.join("")
    }

    /// Build with trimmed whitespace
    pub fn build_trimmed(self) -> String {
        self.build().trim().to_string()
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<PromptBuilder> for String {
    fn from(builder: PromptBuilder) -> Self {
        builder.build()
    }
}
