//! MiniJinja-based template implementation

use crate::{Language, PromptError, PromptTemplate, Result};
use minijinja::Environment;
use std::collections::HashMap;

/// A prompt template backed by MiniJinja
///
/// `JinjaTemplate` provides a thread-safe, multi-language template
/// implementation using the Jinja2-compatible MiniJinja engine.
///
/// # Template Syntax
///
/// Standard Jinja2 syntax:
/// - Variables: `{{ variable }}`
/// - Conditionals: `{% if condition %}...{% endif %}`
/// - Loops: `{% for item in items %}...{% endfor %}`
pub struct JinjaTemplate {
    name: String,
    templates: HashMap<Language, String>,
}

impl JinjaTemplate {
    /// Create a new template builder
    pub fn builder(name: impl Into<String>) -> JinjaTemplateBuilder {
        JinjaTemplateBuilder::new(name)
    }

    /// Create from a single template (language-agnostic, defaults to English)
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Result<Self> {
        Self::builder(name).english(template).build()
    }

    /// Create with English and Spanish templates
    ///
    /// This is a convenience method for the common bilingual case.
    pub fn bilingual(
        name: impl Into<String>,
        english: impl Into<String>,
        spanish: impl Into<String>,
    ) -> Result<Self> {
        Self::builder(name).english(english).spanish(spanish).build()
    }
}

impl PromptTemplate for JinjaTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn languages(&self) -> Vec<Language> {
        self.templates.keys().cloned().collect()
    }

    fn render(&self, lang: &Language, vars: &serde_json::Value) -> Result<String> {
        let template_str =
            self.templates
                .get(lang)
                .ok_or_else(|| PromptError::TemplateNotFound {
                    name: self.name.clone(),
                    language: lang.code().to_string(),
                    detail: "Language not available".to_string(),
                })?;

        // Create a new environment for each render to avoid lifetime issues
        let env = Environment::new();
        let value = minijinja::value::Value::from_serialize(vars);

        env.render_str(template_str, value)
            .map_err(|e| PromptError::RenderError {
                name: self.name.clone(),
                detail: e.to_string(),
            })
    }

    fn raw_template(&self, lang: &Language) -> Option<&str> {
        self.templates.get(lang).map(|s| s.as_str())
    }
}

impl std::fmt::Debug for JinjaTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JinjaTemplate")
            .field("name", &self.name)
            .field("languages", &self.templates.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`JinjaTemplate`]
pub struct JinjaTemplateBuilder {
    name: String,
    templates: HashMap<Language, String>,
}

impl JinjaTemplateBuilder {
    /// Create a new builder with the given template name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            templates: HashMap::new(),
        }
    }

    /// Add a template for a specific language
    pub fn template(mut self, lang: Language, content: impl Into<String>) -> Self {
        self.templates.insert(lang, content.into());
        self
    }

    /// Add English template
    pub fn english(self, content: impl Into<String>) -> Self {
        self.template(Language::English, content)
    }

    /// Add Spanish template
    pub fn spanish(self, content: impl Into<String>) -> Self {
        self.template(Language::Spanish, content)
    }

    /// Build the template
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No templates were provided
    /// - A template fails to parse
    pub fn build(self) -> Result<JinjaTemplate> {
        if self.templates.is_empty() {
            return Err(PromptError::NoTemplatesProvided(self.name));
        }

        // Validate all templates parse correctly
        let env = Environment::new();
        for (lang, content) in &self.templates {
            env.render_str(content, ())
                .map_err(|e| PromptError::TemplateParseFailed {
                    name: self.name.clone(),
                    language: lang.code().to_string(),
                    detail: e.to_string(),
                })?;
        }

        Ok(JinjaTemplate {
            name: self.name,
            templates: self.templates,
        })
    }
}
