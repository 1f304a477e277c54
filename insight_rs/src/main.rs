//! insight - render a generated insight payload into a static HTML page.
//!
//! Reads the payload JSON produced upstream (an object keyed by insight id),
//! renders the page with `page-leptos`, and writes the HTML file. Run
//! without a payload to render the empty page.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use page_leptos::types::InsightSource;
use page_leptos::{render_page, ChartAssets};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "insight", version, about)]
struct Args {
    /// Insights payload JSON (object keyed by insight id). Omit to render
    /// the page without any insights.
    payload: Option<PathBuf>,

    /// Output HTML file.
    #[arg(short, long, default_value = "insights.html")]
    output: PathBuf,

    /// Path or URL of the Highcharts script referenced from the page.
    /// Empty disables chart rendering.
    #[arg(long, default_value = "")]
    highcharts: String,

    /// Log level when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let source = match &args.payload {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read payload {}", path.display()))?;
            let source = InsightSource::from_json_str(&raw)
                .with_context(|| format!("failed to parse payload {}", path.display()))?;
            debug!(
                insights = source.len(),
                chart_eligible = source.iter().filter(|(_, i)| i.require_chart).count(),
                "payload loaded"
            );
            Some(source)
        }
        None => {
            debug!("no payload given, rendering the empty page");
            None
        }
    };

    let assets = ChartAssets {
        highcharts_path: args.highcharts.clone(),
    };
    let html = render_page(source.as_ref(), &assets);

    fs::write(&args.output, &html)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    info!(
        bytes = html.len(),
        output = %args.output.display(),
        "insight page written"
    );
    Ok(())
}
