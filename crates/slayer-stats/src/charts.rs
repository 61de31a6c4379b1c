//! Chart specification assembly
//!
//! Pure functions from the current record collection to the dashboard's fixed
//! set of time-series charts. The specs are serde-serializable; the view
//! layer consumes them as JSON and does the actual drawing.

use crate::records::MatchRecord;
use serde::{Deserialize, Serialize};
use slayer_prompt::Language;

/// Primary series color
pub const SERIES_PRIMARY: &str = "#FF2A6D";
/// Secondary series color
pub const SERIES_SECONDARY: &str = "#05D9E8";
/// Plot background color
pub const PLOT_BACKGROUND: &str = "#01012B";
/// Plot width in pixels
pub const PLOT_WIDTH: u32 = 1200;
/// Plot height in pixels
pub const PLOT_HEIGHT: u32 = 660;

/// The dashboard's fixed chart set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Kills vs deaths over time
    LastGames,
    /// Shots fired vs shots hit over time
    Shooting,
    /// Accuracy percentage over time
    Accuracy,
    /// Damage dealt vs damage taken over time
    Damage,
    /// Derived K/D ratio over time
    KdRatio,
}

impl ChartKind {
    /// All charts, in page order
    pub const ALL: [ChartKind; 5] = [
        ChartKind::LastGames,
        ChartKind::Shooting,
        ChartKind::Accuracy,
        ChartKind::Damage,
        ChartKind::KdRatio,
    ];

    /// Stable identifier, used for file names and image lookup
    pub fn slug(self) -> &'static str {
        match self {
            ChartKind::LastGames => "last-games",
            ChartKind::Shooting => "shooting",
            ChartKind::Accuracy => "accuracy",
            ChartKind::Damage => "damage",
            ChartKind::KdRatio => "kd-ratio",
        }
    }

    /// Localized chart title
    pub fn title(self, lang: &Language) -> &'static str {
        match (self, lang) {
            (ChartKind::LastGames, Language::Spanish) => "Últimas partidas",
            (ChartKind::LastGames, _) => "Last Games",
            (ChartKind::Shooting, Language::Spanish) => "Disparos",
            (ChartKind::Shooting, _) => "Shooting",
            (ChartKind::Accuracy, Language::Spanish) => "Precisión (%)",
            (ChartKind::Accuracy, _) => "Accuracy (%)",
            (ChartKind::Damage, Language::Spanish) => "Daño",
            (ChartKind::Damage, _) => "Damage",
            (ChartKind::KdRatio, Language::Spanish) => "Ratio K/D",
            (ChartKind::KdRatio, _) => "K/D Ratio",
        }
    }
}

/// One point of a time series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Record timestamp, as entered
    pub x: String,
    pub y: f64,
}

/// One named series of a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub color: String,
    pub points: Vec<DataPoint>,
}

/// Fixed presentation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub background: String,
    pub width: u32,
    pub height: u32,
    pub hover_mode: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            background: PLOT_BACKGROUND.to_string(),
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
            hover_mode: "x".to_string(),
        }
    }
}

/// A named, typed visualization descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub series: Vec<Series>,
    pub layout: Layout,
}

impl ChartSpec {
    /// One-line description used as prompt material
    pub fn describe(&self) -> String {
        let labels = self
            .series
            .iter()
            .map(|s| s.label.as_str())
            .collect::<Vec<_>>()
            .join(" / ");
        let points = self.series.first().map_or(0, |s| s.points.len());
        format!("{} ({labels}, {points} sessions)", self.title)
    }
}

/// Build the dashboard's fixed chart set from the current records
///
/// Deterministic and idempotent; point order follows record order. An empty
/// collection yields charts with zero points, not a failure.
pub fn assemble_charts(records: &[MatchRecord], lang: &Language) -> Vec<ChartSpec> {
    vec![
        last_games_chart(records, lang),
        shooting_chart(records, lang),
        accuracy_chart(records, lang),
        damage_chart(records, lang),
        kd_ratio_chart(records, lang),
    ]
}

fn series(
    label: &str,
    color: &str,
    records: &[MatchRecord],
    value: impl Fn(&MatchRecord) -> f64,
) -> Series {
    Series {
        label: label.to_string(),
        color: color.to_string(),
        points: records
            .iter()
            .map(|r| DataPoint {
                x: r.timestamp.clone(),
                y: value(r),
            })
            .collect(),
    }
}

fn label(lang: &Language, english: &'static str, spanish: &'static str) -> &'static str {
    match lang {
        Language::Spanish => spanish,
        _ => english,
    }
}

fn last_games_chart(records: &[MatchRecord], lang: &Language) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::LastGames,
        title: ChartKind::LastGames.title(lang).to_string(),
        series: vec![
            series(label(lang, "Kills", "Bajas"), SERIES_PRIMARY, records, |r| {
                f64::from(r.kills)
            }),
            series(
                label(lang, "Deaths", "Muertes"),
                SERIES_SECONDARY,
                records,
                |r| f64::from(r.deaths),
            ),
        ],
        layout: Layout::default(),
    }
}

fn shooting_chart(records: &[MatchRecord], lang: &Language) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Shooting,
        title: ChartKind::Shooting.title(lang).to_string(),
        series: vec![
            series(
                label(lang, "Shots Fired", "Disparos realizados"),
                SERIES_PRIMARY,
                records,
                |r| f64::from(r.shots_fired),
            ),
            series(
                label(lang, "Shots Hit", "Disparos acertados"),
                SERIES_SECONDARY,
                records,
                |r| f64::from(r.shots_hit),
            ),
        ],
        layout: Layout::default(),
    }
}

fn accuracy_chart(records: &[MatchRecord], lang: &Language) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Accuracy,
        title: ChartKind::Accuracy.title(lang).to_string(),
        series: vec![series(
            label(lang, "Accuracy", "Precisión"),
            SERIES_PRIMARY,
            records,
            |r| r.accuracy,
        )],
        layout: Layout::default(),
    }
}

fn damage_chart(records: &[MatchRecord], lang: &Language) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Damage,
        title: ChartKind::Damage.title(lang).to_string(),
        series: vec![
            series(
                label(lang, "Damage Dealt", "Daño infligido"),
                SERIES_PRIMARY,
                records,
                |r| r.damage_dealt,
            ),
            series(
                label(lang, "Damage Taken", "Daño recibido"),
                SERIES_SECONDARY,
                records,
                |r| r.damage_taken,
            ),
        ],
        layout: Layout::default(),
    }
}

fn kd_ratio_chart(records: &[MatchRecord], lang: &Language) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::KdRatio,
        title: ChartKind::KdRatio.title(lang).to_string(),
        series: vec![series(
            label(lang, "K/D Ratio", "Ratio K/D"),
            SERIES_PRIMARY,
            records,
            |r| r.kill_death_ratio,
        )],
        layout: Layout::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::derive_kd_ratios;

    fn records() -> Vec<MatchRecord> {
        let mut records = vec![
            MatchRecord {
                timestamp: "2024-01-01 19:00".to_string(),
                kills: 20,
                deaths: 10,
                shots_fired: 400,
                shots_hit: 180,
                accuracy: 45.0,
                damage_dealt: 5000.0,
                damage_taken: 3200.0,
                kill_death_ratio: 0.0,
            },
            MatchRecord {
                timestamp: "2024-01-02 19:00".to_string(),
                kills: 26,
                deaths: 8,
                shots_fired: 380,
                shots_hit: 200,
                accuracy: 52.6,
                damage_dealt: 5600.0,
                damage_taken: 2900.0,
                kill_death_ratio: 0.0,
            },
        ];
        derive_kd_ratios(&mut records);
        records
    }

    #[test]
    fn test_fixed_chart_set() {
        let charts = assemble_charts(&records(), &Language::English);
        let kinds: Vec<ChartKind> = charts.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, ChartKind::ALL.to_vec());
    }

    #[test]
    fn test_point_order_follows_record_order() {
        let charts = assemble_charts(&records(), &Language::English);
        let kills = &charts[0].series[0];
        assert_eq!(kills.label, "Kills");
        assert_eq!(kills.color, SERIES_PRIMARY);
        assert_eq!(kills.points[0].x, "2024-01-01 19:00");
        assert_eq!(kills.points[0].y, 20.0);
        assert_eq!(kills.points[1].x, "2024-01-02 19:00");
        assert_eq!(kills.points[1].y, 26.0);
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let records = records();
        let first = assemble_charts(&records, &Language::English);
        let second = assemble_charts(&records, &Language::English);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_records_yield_empty_charts() {
        let charts = assemble_charts(&[], &Language::English);
        assert_eq!(charts.len(), 5);
        for chart in &charts {
            for series in &chart.series {
                assert!(series.points.is_empty());
            }
        }
    }

    #[test]
    fn test_language_switch_keeps_data() {
        let records = records();
        let en = assemble_charts(&records, &Language::English);
        let es = assemble_charts(&records, &Language::Spanish);

        assert_eq!(en[0].title, "Last Games");
        assert_eq!(es[0].title, "Últimas partidas");
        assert_eq!(es[0].series[0].label, "Bajas");

        for (chart_en, chart_es) in en.iter().zip(&es) {
            for (series_en, series_es) in chart_en.series.iter().zip(&chart_es.series) {
                assert_eq!(series_en.points, series_es.points);
            }
        }
    }

    #[test]
    fn test_kd_chart_uses_derived_column() {
        let charts = assemble_charts(&records(), &Language::English);
        let kd = &charts[4].series[0];
        assert_eq!(kd.points[0].y, 2.0);
        assert_eq!(kd.points[1].y, 3.3);
    }

    #[test]
    fn test_describe() {
        let charts = assemble_charts(&records(), &Language::English);
        let description = charts[0].describe();
        assert!(description.contains("Last Games"));
        assert!(description.contains("Kills / Deaths"));
        assert!(description.contains("2 sessions"));
    }

    #[test]
    fn test_chart_spec_serializes() {
        let charts = assemble_charts(&records(), &Language::English);
        let json = serde_json::to_value(&charts[0]).unwrap();
        assert_eq!(json["kind"], "last_games");
        assert_eq!(json["layout"]["background"], PLOT_BACKGROUND);
        assert_eq!(json["layout"]["width"], 1200);
    }
}
