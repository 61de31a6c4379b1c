//! Core prompt template trait

use crate::{Language, PromptError, Result};

/// Core trait for prompt templates
///
/// Implementations provide multi-language prompt templating. Templates are
/// rendered with variables and fall back to English when the requested
/// language has no variant.
///
/// This trait is dyn-compatible, using `serde_json::Value` for variables
/// instead of generics.
pub trait PromptTemplate: Send + Sync {
    /// Get the template name/identifier
    fn name(&self) -> &str;

    /// Get available languages
    fn languages(&self) -> Vec<Language>;

    /// Check if a language is supported
    fn supports_language(&self, lang: &Language) -> bool {
        self.languages().contains(lang)
    }

    /// Render the template with variables for a specific language
    ///
    /// Returns an error if the language is not supported or rendering fails.
    fn render(&self, lang: &Language, vars: &serde_json::Value) -> Result<String>;

    /// Render with fallback to default language
    ///
    /// If the requested language is not available:
    /// 1. Try English as fallback
    /// 2. If English not available, use the first available language
    /// 3. If no languages available, return error
    fn render_with_fallback(&self, lang: &Language, vars: &serde_json::Value) -> Result<String> {
        if self.supports_language(lang) {
            return self.render(lang, vars);
        }

        if self.supports_language(&Language::English) {
            return self.render(&Language::English, vars);
        }

        let fallback = self
            .languages()
            .into_iter()
            .next()
            .ok_or_else(|| PromptError::NoLanguageAvailable(self.name().to_string()))?;

        self.render(&fallback, vars)
    }

    /// Get raw template string for a language (for debugging/inspection)
    fn raw_template(&self, lang: &Language) -> Option<&str>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    struct SimpleTemplate {
        name: String,
        templates: HashMap<Language, String>,
    }

    impl SimpleTemplate {
        fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                templates: HashMap::new(),
            }
        }

        fn with_template(mut self, lang: Language, content: &str) -> Self {
            self.templates.insert(lang, content.to_string());
            self
        }
    }

    impl PromptTemplate for SimpleTemplate {
        fn name(&self) -> &str {
            &self.name
        }

        fn languages(&self) -> Vec<Language> {
            self.templates.keys().cloned().collect()
        }

        fn render(&self, lang: &Language, _vars: &serde_json::Value) -> Result<String> {
            self.templates
                .get(lang)
                .cloned()
                .ok_or_else(|| PromptError::TemplateNotFound {
                    name: self.name.clone(),
                    language: lang.code().to_string(),
                    detail: "Language not available".to_string(),
                })
        }

        fn raw_template(&self, lang: &Language) -> Option<&str> {
            self.templates.get(lang).map(|s| s.as_str())
        }
    }

    #[test]
    fn test_supports_language() {
        let template = SimpleTemplate::new("test")
            .with_template(Language::English, "Hello")
            .with_template(Language::Spanish, "Hola");

        assert!(template.supports_language(&Language::English));
        assert!(template.supports_language(&Language::Spanish));
        assert!(!template.supports_language(&Language::Other("ja".to_string())));
    }

    #[test]
    fn test_render_with_fallback_to_english() {
        let template = SimpleTemplate::new("test")
            .with_template(Language::English, "Hello")
            .with_template(Language::Spanish, "Hola");

        let result = template
            .render_with_fallback(&Language::Other("ja".to_string()), &json!({}))
            .unwrap();
        assert_eq!(result, "Hello");
    }

    #[test]
    fn test_render_with_fallback_to_first() {
        let template = SimpleTemplate::new("test").with_template(Language::Spanish, "Hola");

        let result = template
            .render_with_fallback(&Language::Other("ja".to_string()), &json!({}))
            .unwrap();
        assert_eq!(result, "Hola");
    }

    #[test]
    fn test_render_with_fallback_no_languages() {
        let template = SimpleTemplate::new("test");

        let result = template.render_with_fallback(&Language::English, &json!({}));
        assert!(result.is_err());
    }
}
