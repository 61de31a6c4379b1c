//! Command-line dashboard for slayer-lab
//!
//! Resolves configuration from the environment once, runs one render, and
//! presents the page: summary cards and the raw table on stdout, chart specs
//! as JSON files for whatever draws them, commentary blocks at the end.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use comfy_table::Table;
use slayer_stats::{
    ChartImage, ChartKind, Commentary, CommentaryMode, CommentarySection, Dashboard,
    DashboardConfig, DashboardPage, Language, fallback_line,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// One image-conditioned request per chart
    PerChart,
    /// A single request over the whole dataset
    Holistic,
    /// No commentary
    Off,
}

impl From<ModeArg> for CommentaryMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::PerChart => CommentaryMode::PerChart,
            ModeArg::Holistic => CommentaryMode::Holistic,
            ModeArg::Off => CommentaryMode::Off,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "slayer")]
#[command(about = "Personal Halo bot-training dashboard", long_about = None)]
struct Args {
    /// Display language (en or es)
    #[arg(short, long, default_value = "en")]
    language: String,

    /// Commentary request mode
    #[arg(short, long, value_enum, default_value = "holistic")]
    mode: ModeArg,

    /// Skip the per-stat summary cards
    #[arg(long)]
    no_summary_cards: bool,

    /// Worksheet (tab) holding the match rows
    #[arg(long, default_value = "Sheet1")]
    worksheet: String,

    /// Directory chart specs are written to as JSON
    #[arg(long, default_value = "charts")]
    out_dir: PathBuf,

    /// Directory with rendered chart images ({slug}.png), attached in per-chart mode
    #[arg(long)]
    chart_images: Option<PathBuf>,

    /// Fixed wait in seconds before each per-chart commentary call
    #[arg(long, default_value_t = 5)]
    delay_secs: u64,

    /// Stay open and re-fetch everything when Enter is pressed
    #[arg(short, long)]
    interactive: bool,
}

/// Initialize tracing subscriber with default configuration
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let language = Language::from_code(&args.language);

    // Credentials and locators are resolved here, once, and injected
    let config = DashboardConfig::builder()
        .spreadsheet_url(std::env::var("GOOGLE_SHEET").context("GOOGLE_SHEET not set")?)
        .sheets_api_key(
            std::env::var("GOOGLE_SHEETS_API_KEY").context("GOOGLE_SHEETS_API_KEY not set")?,
        )
        .gemini_api_key(std::env::var("GEMINI_API_KEY").unwrap_or_default())
        .model(std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string()))
        .worksheet(args.worksheet)
        .commentary_mode(args.mode.into())
        .language(language.clone())
        .include_summary_cards(!args.no_summary_cards)
        .commentary_delay(Duration::from_secs(args.delay_secs))
        .build()?;

    let dashboard = Dashboard::from_config(config)?;
    let images = load_chart_images(args.chart_images.as_deref());

    info!("Rendering dashboard");
    let page = dashboard.render_in(&language, &images).await?;
    present(&page, &args.out_dir)?;

    if args.interactive {
        let stdin = std::io::stdin();
        loop {
            println!(
                "{}",
                heading(
                    &language,
                    "Press Enter to update data, q to quit",
                    "Pulsa Enter para actualizar los datos, q para salir",
                )
            );
            let mut line = String::new();
            if stdin.read_line(&mut line)? == 0 || line.trim() == "q" {
                break;
            }

            // A refresh replaces the whole in-memory collection
            let page = dashboard.render_in(&language, &images).await?;
            present(&page, &args.out_dir)?;
        }
    }

    Ok(())
}

fn heading(lang: &Language, english: &'static str, spanish: &'static str) -> &'static str {
    match lang {
        Language::Spanish => spanish,
        _ => english,
    }
}

fn present(page: &DashboardPage, out_dir: &Path) -> anyhow::Result<()> {
    let lang = &page.language;

    println!("# {}\n", page.title);
    println!("{}\n", page.description);

    if let Some(summary) = &page.summary {
        println!("## {}\n", heading(lang, "Averages", "Promedios"));
        println!(
            "{}: {}",
            heading(lang, "Avg Kills", "Bajas medias"),
            summary.kills_display()
        );
        println!(
            "{}: {}",
            heading(lang, "Avg Deaths", "Muertes medias"),
            summary.deaths_display()
        );
        println!(
            "{}: {}",
            heading(lang, "Avg Accuracy", "Precisión media"),
            summary.accuracy
        );
        println!(
            "{}: {}",
            heading(lang, "Avg Damage Dealt", "Daño infligido medio"),
            summary.damage_dealt
        );
        println!(
            "{}: {}\n",
            heading(lang, "Avg Damage Taken", "Daño recibido medio"),
            summary.damage_taken
        );
    }

    write_chart_specs(page, out_dir)?;
    println!(
        "## {}\n",
        heading(lang, "Data Plots", "Gráficas de datos")
    );
    for chart in &page.charts {
        println!("- {} -> {}/{}.json", chart.title, out_dir.display(), chart.kind.slug());
    }
    println!();

    println!("## {}\n", heading(lang, "Raw data", "Datos"));
    println!("{}\n", records_table(page));

    present_commentary(page);

    Ok(())
}

fn write_chart_specs(page: &DashboardPage, out_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    for chart in &page.charts {
        let path = out_dir.join(format!("{}.json", chart.kind.slug()));
        let json = serde_json::to_string_pretty(chart)?;
        std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}

fn records_table(page: &DashboardPage) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Date time",
        "Kills",
        "Deaths",
        "Shots Fired",
        "Shots Hit",
        "Accuracy",
        "Damage Dealt",
        "Damage Taken",
        "K/D Ratio",
    ]);

    for r in &page.records {
        table.add_row(vec![
            r.timestamp.clone(),
            r.kills.to_string(),
            r.deaths.to_string(),
            r.shots_fired.to_string(),
            r.shots_hit.to_string(),
            r.accuracy.to_string(),
            r.damage_dealt.to_string(),
            r.damage_taken.to_string(),
            r.kill_death_ratio.to_string(),
        ]);
    }

    table
}

fn present_commentary(page: &DashboardPage) {
    let lang = &page.language;

    match &page.commentary {
        CommentarySection::None => {}
        CommentarySection::PerChart(blocks) => {
            println!(
                "## {}\n",
                heading(lang, "Coach's notes", "Notas del entrenador")
            );
            for block in blocks {
                println!("### {}\n", block.kind.title(lang));
                match &block.commentary {
                    Commentary::Generated(text) => println!("{text}\n"),
                    Commentary::Unavailable => println!("{}\n", fallback_line(lang)),
                }
            }
        }
        CommentarySection::Holistic(commentary) => {
            println!(
                "## {}\n",
                heading(lang, "Coach's notes", "Notas del entrenador")
            );
            match commentary {
                Commentary::Generated(text) => println!("{text}\n"),
                Commentary::Unavailable => println!("{}\n", fallback_line(lang)),
            }
        }
    }
}

fn load_chart_images(dir: Option<&Path>) -> HashMap<ChartKind, ChartImage> {
    let mut images = HashMap::new();
    let Some(dir) = dir else {
        return images;
    };

    for kind in ChartKind::ALL {
        let path = dir.join(format!("{}.png", kind.slug()));
        if let Ok(bytes) = std::fs::read(&path) {
            images.insert(
                kind,
                ChartImage {
                    media_type: "image/png".to_string(),
                    bytes,
                },
            );
        }
    }

    images
}
