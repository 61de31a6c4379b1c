//! The render pipeline
//!
//! One render performs, in strict sequence: one fetch, one derivation pass,
//! one chart-assembly pass, one aggregation pass, and zero or more sequential
//! commentary calls. Nothing is shared between renders; every render
//! reconstructs its working data from scratch.

use crate::api::RecordSource;
use crate::charts::{ChartKind, ChartSpec, assemble_charts};
use crate::commentary::{ChartCommentary, ChartImage, Commentary, CommentaryRequester};
use crate::config::{CommentaryMode, DashboardConfig};
use crate::error::{Result, StatsError};
use crate::records::{MatchRecord, derive_kd_ratios};
use crate::summary::SummaryStats;
use serde::{Deserialize, Serialize};
use slayer_llm::{CompletionProvider, GeminiProvider};
use slayer_prompt::Language;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};

/// Commentary carried by a rendered page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentarySection {
    /// Commentary was skipped (mode off, or nothing to analyze)
    None,
    /// One block per chart
    PerChart(Vec<ChartCommentary>),
    /// One combined narrative
    Holistic(Commentary),
}

/// Everything the presentation surface needs for one render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardPage {
    pub language: Language,
    pub title: String,
    pub description: String,
    /// Raw records, in source order
    pub records: Vec<MatchRecord>,
    pub charts: Vec<ChartSpec>,
    /// Absent when summary cards are off or the dataset is empty
    pub summary: Option<SummaryStats>,
    pub commentary: CommentarySection,
}

/// Localized page title
pub fn page_title(lang: &Language) -> &'static str {
    match lang {
        Language::Spanish => "Datos de entrenamiento contra bots en Halo",
        _ => "Halo Bot Training Data",
    }
}

/// Localized page description
pub fn page_description(lang: &Language) -> &'static str {
    match lang {
        Language::Spanish => {
            "Sesiones repetidas de Slayer Free For All de 15 minutos contra ocho bots en \
             dificultad ODST, registradas a mano en una hoja de cálculo. El panel sigue bajas, \
             muertes, disparos y daño entre sesiones para ver si el entrenamiento da resultado."
        }
        _ => {
            "Repeated 15-minute Free For All Slayer sessions against eight ODST bots, logged by \
             hand in a spreadsheet. The dashboard tracks kills, deaths, shooting and damage \
             across sessions to show whether the training is paying off."
        }
    }
}

/// The dashboard pipeline
pub struct Dashboard {
    source: Arc<dyn RecordSource>,
    requester: CommentaryRequester,
    config: Arc<DashboardConfig>,
}

impl Dashboard {
    /// Create a dashboard over explicit collaborators
    pub fn new(
        source: Arc<dyn RecordSource>,
        provider: Arc<dyn CompletionProvider>,
        config: Arc<DashboardConfig>,
    ) -> Self {
        Self {
            source,
            requester: CommentaryRequester::new(provider, Arc::clone(&config)),
            config,
        }
    }

    /// Create a dashboard from configuration, wiring the real collaborators
    pub fn from_config(config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        let config = Arc::new(config);

        let source = crate::api::SheetsClient::new(
            &config.sheets_api_key,
            &config.spreadsheet_url,
            &config.worksheet,
            config.request_timeout,
        )?;
        let provider = GeminiProvider::new(config.gemini_api_key.clone())
            .map_err(|e| StatsError::Config(e.to_string()))?;

        Ok(Self::new(Arc::new(source), Arc::new(provider), config))
    }

    /// Fetch a fresh record collection and derive the K/D column
    ///
    /// Always a full fetch; the returned collection replaces whatever the
    /// caller held before, it never merges with it.
    pub async fn refresh(&self) -> Result<Vec<MatchRecord>> {
        let mut records = self.source.fetch_records().await?;
        derive_kd_ratios(&mut records);
        info!("Refreshed {} match records", records.len());
        Ok(records)
    }

    /// Render a page in the configured language
    pub async fn render(&self) -> Result<DashboardPage> {
        let lang = self.config.language.clone();
        self.render_in(&lang, &HashMap::new()).await
    }

    /// Render a page in the given language
    ///
    /// `images` maps charts to renderings supplied by the view; only
    /// per-chart commentary uses them.
    #[instrument(skip(self, images), fields(lang = %lang.code()))]
    pub async fn render_in(
        &self,
        lang: &Language,
        images: &HashMap<ChartKind, ChartImage>,
    ) -> Result<DashboardPage> {
        let records = self.refresh().await?;
        let charts = assemble_charts(&records, lang);

        let summary = if self.config.include_summary_cards {
            match SummaryStats::compute(&records) {
                Ok(stats) => Some(stats),
                Err(StatsError::EmptyDataset) => None,
                Err(e) => return Err(e),
            }
        } else {
            None
        };

        let commentary = if records.is_empty() {
            CommentarySection::None
        } else {
            match self.config.commentary_mode {
                CommentaryMode::Off => CommentarySection::None,
                CommentaryMode::PerChart => CommentarySection::PerChart(
                    self.requester.per_chart(&charts, images, lang).await,
                ),
                CommentaryMode::Holistic => CommentarySection::Holistic(
                    self.requester.holistic(&records, &charts, lang).await,
                ),
            }
        };

        Ok(DashboardPage {
            language: lang.clone(),
            title: page_title(lang).to_string(),
            description: page_description(lang).to_string(),
            records,
            charts,
            summary,
            commentary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use slayer_llm::{CompletionError, CompletionRequest, CompletionResponse, FinishReason};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    struct StubSource {
        batches: Mutex<VecDeque<Vec<MatchRecord>>>,
    }

    impl StubSource {
        fn new(batches: Vec<Vec<MatchRecord>>) -> Self {
            Self {
                batches: Mutex::new(batches.into()),
            }
        }
    }

    #[async_trait]
    impl RecordSource for StubSource {
        async fn fetch_records(&self) -> Result<Vec<MatchRecord>> {
            let mut batches = self.batches.lock().unwrap();
            Ok(batches.pop_front().unwrap_or_default())
        }

        fn name(&self) -> &'static str {
            "stub"
        }
    }

    struct EchoProvider;

    #[async_trait]
    impl CompletionProvider for EchoProvider {
        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> slayer_llm::Result<CompletionResponse> {
            Ok(CompletionResponse {
                text: "Looking sharp".to_string(),
                finish_reason: FinishReason::Stop,
                usage: None,
            })
        }

        fn name(&self) -> &'static str {
            "echo"
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl CompletionProvider for FailingProvider {
        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> slayer_llm::Result<CompletionResponse> {
            Err(CompletionError::RequestFailed("timed out".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn record(timestamp: &str, kills: u32, deaths: u32) -> MatchRecord {
        MatchRecord {
            timestamp: timestamp.to_string(),
            kills,
            deaths,
            shots_fired: 300,
            shots_hit: 150,
            accuracy: 50.0,
            damage_dealt: 4000.0,
            damage_taken: 2500.0,
            kill_death_ratio: 0.0,
        }
    }

    fn config(mode: CommentaryMode) -> Arc<DashboardConfig> {
        Arc::new(
            DashboardConfig::builder()
                .spreadsheet_url("sheet-id")
                .sheets_api_key("sheets-key")
                .gemini_api_key("gemini-key")
                .commentary_mode(mode)
                .commentary_delay(Duration::ZERO)
                .build()
                .unwrap(),
        )
    }

    fn dashboard(
        batches: Vec<Vec<MatchRecord>>,
        provider: Arc<dyn CompletionProvider>,
        mode: CommentaryMode,
    ) -> Dashboard {
        Dashboard::new(Arc::new(StubSource::new(batches)), provider, config(mode))
    }

    #[tokio::test]
    async fn test_render_full_page() {
        let batch = vec![
            record("2024-01-01 19:00", 10, 5),
            record("2024-01-02 19:00", 14, 7),
            record("2024-01-03 19:00", 8, 4),
        ];
        let dash = dashboard(vec![batch], Arc::new(EchoProvider), CommentaryMode::Holistic);

        let page = dash.render().await.unwrap();

        assert_eq!(page.title, "Halo Bot Training Data");
        assert_eq!(page.records.len(), 3);
        assert_eq!(page.charts.len(), 5);
        // Derivation ran before chart assembly
        assert!(page.records.iter().all(|r| r.kill_death_ratio == 2.0));

        let summary = page.summary.unwrap();
        assert_eq!(summary.kills_display(), 11);
        assert_eq!(summary.deaths_display(), 5);

        match page.commentary {
            CommentarySection::Holistic(Commentary::Generated(text)) => {
                assert_eq!(text, "Looking sharp");
            }
            other => panic!("expected holistic commentary, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_refresh_replaces_collection() {
        let first = vec![record("2024-01-01 19:00", 10, 5)];
        let second = vec![
            record("2024-02-01 19:00", 12, 6),
            record("2024-02-02 19:00", 16, 8),
        ];
        let dash = dashboard(
            vec![first, second],
            Arc::new(EchoProvider),
            CommentaryMode::Off,
        );

        let page_one = dash.render().await.unwrap();
        assert_eq!(page_one.records.len(), 1);

        let page_two = dash.render().await.unwrap();
        assert_eq!(page_two.records.len(), 2);
        assert!(page_two.records.iter().all(|r| r.timestamp.starts_with("2024-02")));
    }

    #[tokio::test]
    async fn test_empty_dataset_renders_without_crash() {
        let dash = dashboard(vec![], Arc::new(EchoProvider), CommentaryMode::Holistic);

        let page = dash.render().await.unwrap();

        assert!(page.records.is_empty());
        assert_eq!(page.charts.len(), 5);
        assert!(page.charts.iter().all(|c| c.series.iter().all(|s| s.points.is_empty())));
        assert!(page.summary.is_none());
        assert_eq!(page.commentary, CommentarySection::None);
    }

    #[tokio::test]
    async fn test_commentary_failure_keeps_charts_and_table() {
        let batch = vec![
            record("2024-01-01 19:00", 10, 5),
            record("2024-01-02 19:00", 14, 7),
        ];
        let dash = dashboard(vec![batch], Arc::new(FailingProvider), CommentaryMode::PerChart);

        let page = dash.render().await.unwrap();

        // Charts and raw table fully populated from the same render
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.charts.len(), 5);
        assert!(page.charts.iter().all(|c| !c.series[0].points.is_empty()));
        assert!(page.summary.is_some());

        match page.commentary {
            CommentarySection::PerChart(blocks) => {
                assert_eq!(blocks.len(), 5);
                assert!(blocks.iter().all(|b| b.commentary == Commentary::Unavailable));
            }
            other => panic!("expected per-chart commentary, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_language_switch_translates_text_not_data() {
        let batch = vec![
            record("2024-01-01 19:00", 10, 5),
            record("2024-01-02 19:00", 14, 7),
        ];
        let dash = dashboard(
            vec![batch.clone(), batch],
            Arc::new(EchoProvider),
            CommentaryMode::Off,
        );

        let en = dash.render_in(&Language::English, &HashMap::new()).await.unwrap();
        let es = dash.render_in(&Language::Spanish, &HashMap::new()).await.unwrap();

        assert_eq!(en.title, "Halo Bot Training Data");
        assert_eq!(es.title, "Datos de entrenamiento contra bots en Halo");
        assert_eq!(en.charts[0].title, "Last Games");
        assert_eq!(es.charts[0].title, "Últimas partidas");

        // Underlying records and chart points are identical
        assert_eq!(en.records, es.records);
        for (chart_en, chart_es) in en.charts.iter().zip(&es.charts) {
            for (series_en, series_es) in chart_en.series.iter().zip(&chart_es.series) {
                assert_eq!(series_en.points, series_es.points);
            }
        }
    }

    #[tokio::test]
    async fn test_summary_cards_can_be_disabled() {
        let batch = vec![record("2024-01-01 19:00", 10, 5)];
        let config = Arc::new(
            DashboardConfig::builder()
                .spreadsheet_url("sheet-id")
                .sheets_api_key("sheets-key")
                .gemini_api_key("gemini-key")
                .commentary_mode(CommentaryMode::Off)
                .include_summary_cards(false)
                .commentary_delay(Duration::ZERO)
                .build()
                .unwrap(),
        );
        let dash = Dashboard::new(
            Arc::new(StubSource::new(vec![batch])),
            Arc::new(EchoProvider),
            config,
        );

        let page = dash.render().await.unwrap();
        assert!(page.summary.is_none());
        assert_eq!(page.records.len(), 1);
    }
}
