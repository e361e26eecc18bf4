use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::aggregate::{aggregate_by_category, category_page};
use crate::config::SiteConfig;
use crate::export::{write_all, RunOutputs};
use crate::filter::Facet;
use crate::out_models::{HomeSections, RunCounts};
use crate::pages::{leadership_page, magazine_shelf, press_release_listing};
use crate::partition::front_page;
use crate::rank::{rank_by_date, RankOptions};
use crate::render::{render_category_markdown, render_front_page_markdown};
use crate::snapshot::load_snapshot;

/// Inputs of one run besides the site config.
#[derive(Debug, Clone)]
pub struct RunParams {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub query: String,
    pub press_category: Facet,
    pub leader_industry: Facet,
    pub date: NaiveDate, // names the output directory
    pub now: DateTime<Utc>, // anchor for relative ages
}

/// Load the snapshot, build every view model and persist it under
/// `<output_dir>/<date>/`. Returns that directory.
pub fn run(cfg: &SiteConfig, params: &RunParams) -> Result<PathBuf> {
    let pipeline_start = std::time::Instant::now();
    let ymd = params.date.format("%Y-%m-%d").to_string();
    info!("Pipeline started - input={}, date={}", params.input_dir.display(), ymd);

    // 1) load + normalize
    let snap = load_snapshot(&params.input_dir, cfg)?;
    if snap.articles.is_empty() {
        warn!("No articles in snapshot - front page and categories will be empty");
    }

    // 2) front page: featured-first slices, recency-only most read
    let stage = std::time::Instant::now();
    let front = front_page(&snap.articles, &cfg.offsets, cfg.most_read_count);
    debug!(
        "Front page built - duration={:.2}s, main={}, secondary={}, headlines={}, rest={}, most_read={}",
        stage.elapsed().as_secs_f32(),
        front.main.is_some() as u8,
        front.secondary.len(),
        front.headlines.len(),
        front.rest.len(),
        front.most_read.len()
    );

    // 3) categories; backfill only when configured
    let stage = std::time::Instant::now();
    let buckets = aggregate_by_category(&snap.articles, &cfg.known_categories, &cfg.category_fallback);
    let recent = rank_by_date(&snap.articles, RankOptions::newest_first());
    let categories = category_page(&buckets, &recent, cfg.backfill_empty_buckets);
    let backfilled = categories.sections.iter().filter(|s| s.backfilled).count();
    debug!(
        "Categories built - duration={:.2}s, buckets={}, backfilled={}",
        stage.elapsed().as_secs_f32(),
        buckets.len(),
        backfilled
    );

    // 4) listings
    let press = press_release_listing(
        &snap.press_releases,
        &cfg.press_release_categories,
        &params.query,
        &params.press_category,
        cfg.timezone,
        params.now,
    );
    let leadership = leadership_page(&snap.leaders, &params.query, &params.leader_industry);
    let magazines = magazine_shelf(&snap.magazines);
    info!(
        "Listings built - press_releases={}/{}, leaders={}/{}, query={:?}",
        press.items.len(),
        press.total,
        leadership.listing.items.len(),
        leadership.listing.total,
        params.query
    );

    // 5) render + persist
    let front_md = render_front_page_markdown(&front, cfg.timezone);
    let categories_md = render_category_markdown(&categories);
    let counts = RunCounts {
        articles: snap.articles.len(),
        press_releases: snap.press_releases.len(),
        magazines: snap.magazines.len(),
        leaders: snap.leaders.len(),
        home_sections: snap.home_sections.len(),
    };
    let home_sections = HomeSections {
        sections: snap.home_sections,
    };

    let date_dir = Path::new(&params.output_dir).join(&ymd);
    let persist_start = std::time::Instant::now();
    write_all(
        &date_dir,
        &ymd,
        &RunOutputs {
            front_page: &front,
            front_page_md: &front_md,
            categories: &categories,
            categories_md: &categories_md,
            press_releases: &press,
            leadership: &leadership,
            magazines: &magazines,
            home_sections: &home_sections,
            counts,
        },
    )?;
    info!(
        "Output persisted - duration={:.2}s, directory={}",
        persist_start.elapsed().as_secs_f32(),
        date_dir.display()
    );

    info!(
        "Pipeline completed successfully - total_duration={:.2}s",
        pipeline_start.elapsed().as_secs_f32()
    );
    Ok(date_dir)
}
