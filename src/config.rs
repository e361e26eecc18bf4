use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::aggregate::AGGREGATE_FALLBACK;
use crate::chat::WidgetSettings;
use crate::error::ConfigError;
use crate::normalize::{NormalizeDefaults, HOME_CATEGORY_FALLBACK, PLACEHOLDER_IMAGE, UNTITLED};
use crate::partition::SectionOffsets;

pub const CONFIG_ENV: &str = "BW_INSIGHTS_CONFIG";
pub const CONFIG_DIR_ENV: &str = "BW_INSIGHTS_CONFIG_DIR";

/// Site-wide knobs for the pipeline. Every field has a default, so an empty
/// or partial YAML file is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub known_categories: Vec<String>,
    pub press_release_categories: Vec<String>,
    pub category_fallback: String, // aggregation bucket for unmapped records
    pub home_category_fallback: String, // label shown on cards without a category
    pub placeholder_image: String,
    pub derive_missing_slugs: bool,
    pub offsets: SectionOffsets,
    pub most_read_count: usize,
    /// Fill empty category buckets with this many recent records. Off when unset.
    pub backfill_empty_buckets: Option<usize>,
    pub timezone: Tz,
    pub chat: WidgetSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            known_categories: ["Technology", "Finance", "Leadership", "Startups", "Economy", "Marketing"]
                .map(String::from)
                .to_vec(),
            press_release_categories: ["Partnership", "Financial", "Sustainability", "Product", "Leadership"]
                .map(String::from)
                .to_vec(),
            category_fallback: AGGREGATE_FALLBACK.to_string(),
            home_category_fallback: HOME_CATEGORY_FALLBACK.to_string(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            derive_missing_slugs: false,
            offsets: SectionOffsets::default(),
            most_read_count: 6,
            backfill_empty_buckets: None,
            timezone: chrono_tz::UTC,
            chat: WidgetSettings::default(),
        }
    }
}

impl SiteConfig {
    pub fn normalize_defaults(&self) -> NormalizeDefaults {
        NormalizeDefaults {
            title: UNTITLED.to_string(),
            image_url: self.placeholder_image.clone(),
            category: self.home_category_fallback.clone(),
            derive_slug: self.derive_missing_slugs,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.category_fallback.trim().is_empty() {
            return Err(ConfigError::Invalid("category_fallback must not be empty".into()));
        }
        let o = &self.offsets;
        // the front page has a single hero slot
        if o.main_end > 1 {
            return Err(ConfigError::Invalid(format!("offsets.main_end must be 0 or 1 (got {})", o.main_end)));
        }
        if !(o.main_end <= o.secondary_end && o.secondary_end <= o.headlines_end) {
            return Err(ConfigError::Invalid(format!(
                "offsets must be non-decreasing (main_end={}, secondary_end={}, headlines_end={})",
                o.main_end, o.secondary_end, o.headlines_end
            )));
        }
        Ok(())
    }

    pub fn from_yaml_str(yaml: &str, origin: &Path) -> Result<Self, ConfigError> {
        // an empty document deserializes as unit, not as a map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: SiteConfig = serde_yaml::from_str(yaml).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load `path`, or fall back to defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("Site config not found, using defaults - path={}", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded site config - path={}, bytes={}", path.display(), text.len());
        Self::from_yaml_str(&text, path)
    }
}

/// Config path: explicit flag, then `BW_INSIGHTS_CONFIG`, then
/// `<BW_INSIGHTS_CONFIG_DIR or ./config>/site.yaml`.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    if let Ok(p) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(p);
    }
    let base = std::env::var(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));
    base.join("site.yaml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg = SiteConfig::from_yaml_str(
            "known_categories: [Technology, Finance]\ntimezone: Asia/Kolkata\noffsets:\n  headlines_end: 9\n",
            Path::new("site.yaml"),
        )
        .unwrap();
        assert_eq!(cfg.known_categories, ["Technology", "Finance"]);
        assert_eq!(cfg.timezone, chrono_tz::Asia::Kolkata);
        assert_eq!(cfg.offsets, SectionOffsets { main_end: 1, secondary_end: 3, headlines_end: 9 });
        assert_eq!(cfg.most_read_count, 6);
        assert_eq!(cfg.category_fallback, "Others");
        assert!(cfg.backfill_empty_buckets.is_none());
    }

    #[test]
    fn empty_document_is_default() {
        let cfg = SiteConfig::from_yaml_str("  \n", Path::new("site.yaml")).unwrap();
        assert_eq!(cfg.home_category_fallback, "Business");
    }

    #[test]
    fn rejects_decreasing_offsets_and_bad_timezone() {
        let err = SiteConfig::from_yaml_str(
            "offsets: {main_end: 3, secondary_end: 2, headlines_end: 9}",
            Path::new("site.yaml"),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(matches!(
            SiteConfig::from_yaml_str("timezone: Mars/Olympus", Path::new("site.yaml")),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn rejects_more_than_one_hero_slot() {
        let err = SiteConfig::from_yaml_str(
            "offsets: {main_end: 2, secondary_end: 3, headlines_end: 5}",
            Path::new("site.yaml"),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("main_end")));
        assert!(SiteConfig::from_yaml_str(
            "offsets: {main_end: 1, secondary_end: 3, headlines_end: 5}",
            Path::new("site.yaml")
        )
        .is_ok());
    }

    #[test]
    fn explicit_path_wins() {
        assert_eq!(
            resolve_config_path(Some(Path::new("/tmp/custom.yaml"))),
            PathBuf::from("/tmp/custom.yaml")
        );
    }
}
