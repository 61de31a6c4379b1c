//! Coaching commentary via the completion service
//!
//! Requests are one-shot and best-effort. Any failure on this path is caught
//! at the call site and surfaces as [`Commentary::Unavailable`]; charts and
//! the raw table are never affected by a failed commentary call.

use crate::charts::{ChartKind, ChartSpec};
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::prompts;
use crate::records::{
    COL_ACCURACY, COL_DAMAGE_DEALT, COL_DAMAGE_TAKEN, COL_DEATHS, COL_KILLS, COL_SHOTS_FIRED,
    COL_SHOTS_HIT, COL_TIMESTAMP, MatchRecord,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use slayer_llm::{CompletionProvider, CompletionRequest};
use slayer_prompt::{Language, PromptBuilder, PromptTemplate};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

const PER_CHART_MAX_TOKENS: usize = 1024;
const HOLISTIC_MAX_TOKENS: usize = 4096;

/// Outcome of one commentary request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Commentary {
    /// Narrative text from the completion service
    Generated(String),
    /// The call failed; the view renders the localized fallback line
    Unavailable,
}

impl Commentary {
    /// Whether text was generated
    pub fn is_available(&self) -> bool {
        matches!(self, Commentary::Generated(_))
    }

    /// Generated text, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            Commentary::Generated(text) => Some(text),
            Commentary::Unavailable => None,
        }
    }
}

/// One-line fallback shown in place of failed commentary
pub fn fallback_line(lang: &Language) -> &'static str {
    match lang {
        Language::Spanish => "Lo sentimos, el análisis no está disponible.",
        _ => "Sorry, the analysis is unavailable.",
    }
}

/// A rendered chart image supplied by the view layer
#[derive(Debug, Clone)]
pub struct ChartImage {
    /// Media type (e.g., "image/png")
    pub media_type: String,
    /// Raw image bytes
    pub bytes: Vec<u8>,
}

/// Commentary for one chart in per-chart mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartCommentary {
    pub kind: ChartKind,
    pub commentary: Commentary,
}

/// Builds prompts and invokes the completion service
pub struct CommentaryRequester {
    provider: Arc<dyn CompletionProvider>,
    config: Arc<DashboardConfig>,
}

impl CommentaryRequester {
    /// Create a new requester
    pub fn new(provider: Arc<dyn CompletionProvider>, config: Arc<DashboardConfig>) -> Self {
        Self { provider, config }
    }

    /// One image-conditioned request per chart, issued sequentially
    ///
    /// The configured fixed delay runs before each call (a static debounce
    /// against the service's rate limit). A chart whose image the view did
    /// not supply is described in text instead.
    pub async fn per_chart(
        &self,
        charts: &[ChartSpec],
        images: &HashMap<ChartKind, ChartImage>,
        lang: &Language,
    ) -> Vec<ChartCommentary> {
        let mut results = Vec::with_capacity(charts.len());

        for chart in charts {
            if !self.config.commentary_delay.is_zero() {
                tokio::time::sleep(self.config.commentary_delay).await;
            }

            let commentary = match self.request_for_chart(chart, images.get(&chart.kind), lang) {
                Ok(request) => self.dispatch(request).await,
                Err(e) => {
                    warn!("Failed to build commentary prompt for {:?}: {e}", chart.kind);
                    Commentary::Unavailable
                }
            };

            results.push(ChartCommentary {
                kind: chart.kind,
                commentary,
            });
        }

        results
    }

    /// A single request carrying the full data table and all chart descriptions
    pub async fn holistic(
        &self,
        records: &[MatchRecord],
        charts: &[ChartSpec],
        lang: &Language,
    ) -> Commentary {
        match self.holistic_request(records, charts, lang) {
            Ok(request) => self.dispatch(request).await,
            Err(e) => {
                warn!("Failed to build holistic commentary prompt: {e}");
                Commentary::Unavailable
            }
        }
    }

    fn request_for_chart(
        &self,
        chart: &ChartSpec,
        image: Option<&ChartImage>,
        lang: &Language,
    ) -> Result<CompletionRequest> {
        let system = prompts::system::coach()?.render_with_fallback(lang, &json!({}))?;
        let user = prompts::user::chart_commentary()?.render_with_fallback(
            lang,
            &json!({
                "title": chart.title,
                "description": chart.describe(),
                "has_image": image.is_some(),
            }),
        )?;

        let mut builder = CompletionRequest::builder(&self.config.model)
            .system(system)
            .text(user)
            .max_tokens(PER_CHART_MAX_TOKENS);

        if let Some(image) = image {
            builder = builder.image(&image.media_type, &image.bytes);
        }

        Ok(builder.build())
    }

    fn holistic_request(
        &self,
        records: &[MatchRecord],
        charts: &[ChartSpec],
        lang: &Language,
    ) -> Result<CompletionRequest> {
        let system = prompts::system::coach()?.render_with_fallback(lang, &json!({}))?;

        let chart_list = PromptBuilder::new()
            .bullets(charts.iter().map(ChartSpec::describe))
            .build_trimmed();

        let user = prompts::user::holistic_analysis()?.render_with_fallback(
            lang,
            &json!({
                "data_table": markdown_table(records),
                "charts": chart_list,
            }),
        )?;

        Ok(CompletionRequest::builder(&self.config.model)
            .system(system)
            .text(user)
            .max_tokens(HOLISTIC_MAX_TOKENS)
            .build())
    }

    /// Issue one call; every failure collapses to `Unavailable`
    async fn dispatch(&self, request: CompletionRequest) -> Commentary {
        match self.provider.complete(request).await {
            Ok(response) => {
                debug!("Commentary generated ({} chars)", response.text.len());
                Commentary::Generated(response.text)
            }
            Err(e) => {
                warn!("Commentary request failed: {e}");
                Commentary::Unavailable
            }
        }
    }
}

/// Render the record collection as a markdown table for prompt material
fn markdown_table(records: &[MatchRecord]) -> String {
    let mut table = format!(
        "| {COL_TIMESTAMP} | {COL_KILLS} | {COL_DEATHS} | {COL_SHOTS_FIRED} | {COL_SHOTS_HIT} \
         | {COL_ACCURACY} | {COL_DAMAGE_DEALT} | {COL_DAMAGE_TAKEN} | K/D Ratio |\n\
         |---|---|---|---|---|---|---|---|---|\n"
    );

    for r in records {
        table.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} | {} | {} |\n",
            r.timestamp,
            r.kills,
            r.deaths,
            r.shots_fired,
            r.shots_hit,
            r.accuracy,
            r.damage_dealt,
            r.damage_taken,
            r.kill_death_ratio,
        ));
    }

    table
}
