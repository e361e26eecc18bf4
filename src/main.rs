use std::path::PathBuf;

use anyhow::{Context, Result};
use bw_insights::config::{resolve_config_path, SiteConfig};
use bw_insights::filter::Facet;
use bw_insights::orchestrator::{run, RunParams};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use tracing::{debug, info};

/// BW Insights - builds the site's page view models from content snapshots
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding articles.json, press_releases.json, magazines.json,
    /// leadership.json and home_sections.json
    #[arg(short, long, default_value = "data")]
    input_dir: PathBuf,

    /// Output directory for generated files (default: "out")
    #[arg(short, long, default_value = "out")]
    output_dir: PathBuf,

    /// Path to site config (overrides BW_INSIGHTS_CONFIG environment variable)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Search text applied to press releases and leadership profiles
    #[arg(short, long, default_value = "")]
    query: String,

    /// Press release category, or "all"
    #[arg(long, default_value = "all")]
    category: String,

    /// Leadership industry, or "all"
    #[arg(long, default_value = "all")]
    industry: String,

    /// Run date (YYYY-MM-DD); defaults to today in the configured timezone
    #[arg(long)]
    date: Option<NaiveDate>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();

    info!("Starting bw_insights");

    let args = Args::parse();

    let cfg_path = resolve_config_path(args.config.as_deref());
    debug!("Using site config path: {}", cfg_path.display());
    let cfg = SiteConfig::load_or_default(&cfg_path)
        .with_context(|| format!("loading site config {}", cfg_path.display()))?;

    let now = Utc::now();
    let date = args
        .date
        .unwrap_or_else(|| now.with_timezone(&cfg.timezone).date_naive());
    debug!("Run date={} timezone={}", date, cfg.timezone);

    let params = RunParams {
        input_dir: args.input_dir,
        output_dir: args.output_dir,
        query: args.query,
        press_category: Facet::parse(&args.category),
        leader_industry: Facet::parse(&args.industry),
        date,
        now,
    };

    let out = run(&cfg, &params)?;
    info!("Done - output={}", out.display());
    Ok(())
}
