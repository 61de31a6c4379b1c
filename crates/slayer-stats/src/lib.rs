//! Bot-training analytics pipeline for slayer-lab
//!
//! This crate implements the dashboard behind a personal Halo Infinite
//! training log:
//!
//! - Record fetching from a Google Sheet ([`api::SheetsClient`])
//! - The derived K/D metric ([`records`])
//! - A fixed set of time-series chart specifications ([`charts`])
//! - Per-column averages for the summary cards ([`summary`])
//! - Best-effort bilingual coaching commentary from a completion service
//!   ([`commentary`])
//!
//! # Architecture
//!
//! [`Dashboard`] runs one render as a strict sequence: fetch, derive, chart
//! assembly, aggregation, then zero or more sequential commentary calls. The
//! result is a [`DashboardPage`] the presentation surface consumes as data.
//!
//! # Example
//!
//! ```rust,ignore
//! use slayer_stats::{Dashboard, DashboardConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = DashboardConfig::builder()
//!         .spreadsheet_url(std::env::var("GOOGLE_SHEET")?)
//!         .sheets_api_key(std::env::var("GOOGLE_SHEETS_API_KEY")?)
//!         .gemini_api_key(std::env::var("GEMINI_API_KEY")?)
//!         .build()?;
//!
//!     let dashboard = Dashboard::from_config(config)?;
//!     let page = dashboard.render().await?;
//!     println!("{} sessions", page.records.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod charts;
pub mod commentary;
pub mod config;
pub mod engine;
pub mod error;
pub mod prompts;
pub mod records;
pub mod summary;

// Re-export main types for convenience
pub use api::{RecordSource, SheetsClient};
pub use charts::{ChartKind, ChartSpec, assemble_charts};
pub use commentary::{ChartCommentary, ChartImage, Commentary, CommentaryRequester, fallback_line};
pub use config::{CommentaryMode, DashboardConfig};
pub use engine::{CommentarySection, Dashboard, DashboardPage};
pub use error::{Result, StatsError};
pub use records::{MatchRecord, derive_kd_ratios, kd_ratio};
pub use summary::SummaryStats;

// Re-export Language from slayer-prompt
pub use slayer_prompt::Language;
