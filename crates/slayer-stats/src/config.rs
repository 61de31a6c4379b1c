//! Configuration for the dashboard pipeline
//!
//! Credentials and policy knobs are resolved once at process start (the
//! binary reads the environment) and injected here; nothing in the pipeline
//! reads process-wide state ad hoc.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use slayer_prompt::Language;
use std::time::Duration;

/// How commentary is requested from the completion service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CommentaryMode {
    /// One image-conditioned request per chart, each returning isolated commentary
    PerChart,
    /// A single request carrying the full data table and all chart descriptions
    #[default]
    Holistic,
    /// Skip the completion service entirely
    Off,
}

/// Configuration for one dashboard process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Spreadsheet locator: full Google Sheets URL or bare spreadsheet id
    pub spreadsheet_url: String,

    /// Worksheet (tab) holding the match rows
    pub worksheet: String,

    /// API key for the spreadsheet service
    pub sheets_api_key: String,

    /// API key for the completion service
    pub gemini_api_key: String,

    /// Completion model identifier
    pub model: String,

    /// Commentary request mode
    pub commentary_mode: CommentaryMode,

    /// Display language for page text, chart labels, and commentary
    pub language: Language,

    /// Whether the page carries per-stat summary cards
    pub include_summary_cards: bool,

    /// Fixed wait inserted before each per-chart commentary call
    pub commentary_delay: Duration,

    /// Request timeout for the record source
    pub request_timeout: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            spreadsheet_url: String::new(),
            worksheet: "Sheet1".to_string(),
            sheets_api_key: String::new(),
            gemini_api_key: String::new(),
            model: "gemini-1.5-flash".to_string(),
            commentary_mode: CommentaryMode::Holistic,
            language: Language::English,
            include_summary_cards: true,
            commentary_delay: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl DashboardConfig {
    /// Create a new configuration builder
    pub fn builder() -> DashboardConfigBuilder {
        DashboardConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.spreadsheet_url.is_empty() {
            return Err(StatsError::Config(
                "spreadsheet locator must be set".to_string(),
            ));
        }

        if self.sheets_api_key.is_empty() {
            return Err(StatsError::Config(
                "sheets API key must be set".to_string(),
            ));
        }

        if self.commentary_mode != CommentaryMode::Off && self.gemini_api_key.is_empty() {
            return Err(StatsError::Config(
                "completion API key required unless commentary is off".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for [`DashboardConfig`]
#[derive(Debug, Default)]
pub struct DashboardConfigBuilder {
    spreadsheet_url: Option<String>,
    worksheet: Option<String>,
    sheets_api_key: Option<String>,
    gemini_api_key: Option<String>,
    model: Option<String>,
    commentary_mode: Option<CommentaryMode>,
    language: Option<Language>,
    include_summary_cards: Option<bool>,
    commentary_delay: Option<Duration>,
    request_timeout: Option<Duration>,
}

impl DashboardConfigBuilder {
    /// Set the spreadsheet locator (URL or id)
    pub fn spreadsheet_url(mut self, url: impl Into<String>) -> Self {
        self.spreadsheet_url = Some(url.into());
        self
    }

    /// Set the worksheet (tab) name
    pub fn worksheet(mut self, name: impl Into<String>) -> Self {
        self.worksheet = Some(name.into());
        self
    }

    /// Set the sheets API key
    pub fn sheets_api_key(mut self, key: impl Into<String>) -> Self {
        self.sheets_api_key = Some(key.into());
        self
    }

    /// Set the completion service API key
    pub fn gemini_api_key(mut self, key: impl Into<String>) -> Self {
        self.gemini_api_key = Some(key.into());
        self
    }

    /// Set the completion model
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the commentary mode
    pub fn commentary_mode(mut self, mode: CommentaryMode) -> Self {
        self.commentary_mode = Some(mode);
        self
    }

    /// Set the display language
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Toggle summary cards
    pub fn include_summary_cards(mut self, include: bool) -> Self {
        self.include_summary_cards = Some(include);
        self
    }

    /// Set the fixed pre-call delay for per-chart commentary
    pub fn commentary_delay(mut self, delay: Duration) -> Self {
        self.commentary_delay = Some(delay);
        self
    }

    /// Set the record-source request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<DashboardConfig> {
        let defaults = DashboardConfig::default();

        let config = DashboardConfig {
            spreadsheet_url: self.spreadsheet_url.unwrap_or(defaults.spreadsheet_url),
            worksheet: self.worksheet.unwrap_or(defaults.worksheet),
            sheets_api_key: self.sheets_api_key.unwrap_or(defaults.sheets_api_key),
            gemini_api_key: self.gemini_api_key.unwrap_or(defaults.gemini_api_key),
            model: self.model.unwrap_or(defaults.model),
            commentary_mode: self.commentary_mode.unwrap_or(defaults.commentary_mode),
            language: self.language.unwrap_or(defaults.language),
            include_summary_cards: self
                .include_summary_cards
                .unwrap_or(defaults.include_summary_cards),
            commentary_delay: self.commentary_delay.unwrap_or(defaults.commentary_delay),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
        };

        config.validate()?;
        Ok(config)
    }
}
