// src/export.rs
use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs, path::Path};
use tracing::debug;

use crate::out_models::{
    CategoryPage, FilteredListing, FrontPage, HomeSections, LeadershipPage, MagazineShelf, PressReleaseCard,
    RunCounts, RunIndex,
};

pub const FRONT_PAGE_JSON: &str = "front_page.json";
pub const FRONT_PAGE_MD: &str = "front_page.md";
pub const CATEGORIES_JSON: &str = "categories.json";
pub const CATEGORIES_MD: &str = "categories.md";
pub const PRESS_RELEASES_JSON: &str = "press_releases.json";
pub const LEADERSHIP_JSON: &str = "leadership.json";
pub const MAGAZINES_JSON: &str = "magazines.json";
pub const HOME_SECTIONS_JSON: &str = "home_sections.json";
pub const INDEX_JSON: &str = "index.json";

/// Everything one run produces.
pub struct RunOutputs<'a> {
    pub front_page: &'a FrontPage,
    pub front_page_md: &'a str,
    pub categories: &'a CategoryPage,
    pub categories_md: &'a str,
    pub press_releases: &'a FilteredListing<PressReleaseCard>,
    pub leadership: &'a LeadershipPage,
    pub magazines: &'a MagazineShelf,
    pub home_sections: &'a HomeSections,
    pub counts: RunCounts,
}

/// Write every view model into `out_dir_for_date` plus an `index.json`
/// manifest listing the files.
pub fn write_all(out_dir_for_date: &Path, date: &str, outputs: &RunOutputs<'_>) -> Result<()> {
    fs::create_dir_all(out_dir_for_date).with_context(|| format!("create {:?}", out_dir_for_date))?;

    write_json(out_dir_for_date.join(FRONT_PAGE_JSON), outputs.front_page)?;
    write_text(out_dir_for_date.join(FRONT_PAGE_MD), outputs.front_page_md)?;
    write_json(out_dir_for_date.join(CATEGORIES_JSON), outputs.categories)?;
    write_text(out_dir_for_date.join(CATEGORIES_MD), outputs.categories_md)?;
    write_json(out_dir_for_date.join(PRESS_RELEASES_JSON), outputs.press_releases)?;
    write_json(out_dir_for_date.join(LEADERSHIP_JSON), outputs.leadership)?;
    write_json(out_dir_for_date.join(MAGAZINES_JSON), outputs.magazines)?;
    write_json(out_dir_for_date.join(HOME_SECTIONS_JSON), outputs.home_sections)?;

    let idx = RunIndex {
        date: date.to_string(),
        version: 1,
        counts: outputs.counts.clone(),
        files: [
            FRONT_PAGE_JSON,
            FRONT_PAGE_MD,
            CATEGORIES_JSON,
            CATEGORIES_MD,
            PRESS_RELEASES_JSON,
            LEADERSHIP_JSON,
            MAGAZINES_JSON,
            HOME_SECTIONS_JSON,
        ]
        .map(String::from)
        .to_vec(),
    };
    write_json(out_dir_for_date.join(INDEX_JSON), &idx)?;
    debug!("Wrote {} files into {}", idx.files.len() + 1, out_dir_for_date.display());

    Ok(())
}

fn write_json<P: AsRef<Path>, T: ?Sized + Serialize>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, serde_json::to_vec_pretty(value)?).with_context(|| format!("write {}", path.display()))
}

fn write_text<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, text.as_bytes()).with_context(|| format!("write {}", path.display()))
}
