//! Prompt template management for slayer-lab
//!
//! This crate provides the templating layer behind the dashboard's bilingual
//! text: prompt templates with English/Spanish variants, variable
//! interpolation, and a fluent builder for data-driven prompt assembly.
//!
//! # Features
//!
//! - **Multi-language support**: every template carries per-language variants
//! - **Variable interpolation**: Jinja2 syntax (`{{ variable }}`)
//! - **Builder pattern**: fluent API for constructing prompts programmatically
//!
//! # Quick Start
//!
//! ```
//! use slayer_prompt::{JinjaTemplate, Language, PromptTemplate};
//! use serde_json::json;
//!
//! // Create a bilingual template
//! let template = JinjaTemplate::bilingual(
//!     "greeting",
//!     "Hello, {{ name }}!",
//!     "¡Hola, {{ name }}!",
//! ).unwrap();
//!
//! // Render for different languages
//! let en = template.render(&Language::English, &json!({ "name": "Spartan" })).unwrap();
//! assert_eq!(en, "Hello, Spartan!");
//!
//! let es = template.render(&Language::Spanish, &json!({ "name": "Spartan" })).unwrap();
//! assert_eq!(es, "¡Hola, Spartan!");
//! ```

mod builder;
mod error;
mod jinja;
mod language;
mod template;

// Re-export core types
pub use builder::PromptBuilder;
pub use error::{PromptError, Result};
pub use jinja::{JinjaTemplate, JinjaTemplateBuilder};
pub use language::Language;
pub use template::PromptTemplate;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basic_usage() {
        let template =
            JinjaTemplate::bilingual("test", "Hello, {{ name }}!", "¡Hola, {{ name }}!").unwrap();

        let en = template
            .render(&Language::English, &json!({ "name": "World" }))
            .unwrap();
        assert_eq!(en, "Hello, World!");

        let es = template
            .render(&Language::Spanish, &json!({ "name": "Mundo" }))
            .unwrap();
        assert_eq!(es, "¡Hola, Mundo!");
    }

    #[test]
    fn test_fallback() {
        let template = JinjaTemplate::new("test", "English only").unwrap();

        // Request Spanish but fall back to English
        let result = template
            .render_with_fallback(&Language::Spanish, &json!({}))
            .unwrap();
        assert_eq!(result, "English only");
    }
}
