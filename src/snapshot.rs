use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::api_types::HomeSection;
use crate::config::SiteConfig;
use crate::home::{decode_sections, order_sections};
use crate::leadership::normalize_leaders;
use crate::models::{ContentKind, ContentRecord, LeaderProfile};
use crate::normalize::normalize_all;

pub const LEADERSHIP_FILE: &str = "leadership.json";
pub const HOME_SECTIONS_FILE: &str = "home_sections.json";

/// Everything one pipeline run reads, already normalized.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub articles: Vec<ContentRecord>,
    pub press_releases: Vec<ContentRecord>,
    pub magazines: Vec<ContentRecord>,
    pub leaders: Vec<LeaderProfile>,
    pub home_sections: Vec<HomeSection>,
}

/// Read one exported collection. A missing file reads as `null` so callers
/// treat it like a collection that has not loaded; malformed JSON is an error.
pub fn read_collection(path: &Path) -> Result<Value> {
    if !path.exists() {
        warn!("Snapshot file missing, treating as empty - {}", path.display());
        return Ok(Value::Null);
    }
    let bytes = std::fs::read(path).with_context(|| format!("Reading snapshot {}", path.display()))?;
    let value: Value =
        serde_json::from_slice(&bytes).with_context(|| format!("Decoding JSON for {}", path.display()))?;
    if !value.is_array() {
        warn!("Snapshot is not an array, treating as empty - {}", path.display());
    }
    Ok(value)
}

fn load_content(dir: &Path, kind: ContentKind, cfg: &SiteConfig) -> Result<Vec<ContentRecord>> {
    let path = dir.join(format!("{}.json", kind.collection()));
    let value = read_collection(&path)?;
    let records = normalize_all(kind, &value, &cfg.normalize_defaults());
    debug!("Normalized collection - kind={}, records={}", kind.collection(), records.len());
    Ok(records)
}

pub fn load_snapshot(dir: &Path, cfg: &SiteConfig) -> Result<Snapshot> {
    let start = std::time::Instant::now();

    let articles = load_content(dir, ContentKind::Article, cfg)?;
    let press_releases = load_content(dir, ContentKind::PressRelease, cfg)?;
    let magazines = load_content(dir, ContentKind::Magazine, cfg)?;
    let leaders = normalize_leaders(&read_collection(&dir.join(LEADERSHIP_FILE))?);
    let home_sections = order_sections(decode_sections(&read_collection(&dir.join(HOME_SECTIONS_FILE))?));

    info!(
        "Snapshot loaded - dir={}, duration={:.2}s, articles={}, press_releases={}, magazines={}, leaders={}, home_sections={}",
        dir.display(),
        start.elapsed().as_secs_f32(),
        articles.len(),
        press_releases.len(),
        magazines.len(),
        leaders.len(),
        home_sections.len()
    );

    Ok(Snapshot {
        articles,
        press_releases,
        magazines,
        leaders,
        home_sections,
    })
}
