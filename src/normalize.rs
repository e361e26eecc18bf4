use serde_json::Value;
use xxhash_rust::xxh3::xxh3_64;

use crate::models::{ContentKind, ContentRecord};
use crate::slug::slugify;

pub const UNTITLED: &str = "Untitled";
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
pub const HOME_CATEGORY_FALLBACK: &str = "Business";

/// Per-call-site defaults applied while normalizing.
#[derive(Debug, Clone)]
pub struct NormalizeDefaults {
    pub title: String,
    pub image_url: String,
    pub category: String,
    /// Derive a slug from the title when the record has none.
    pub derive_slug: bool,
}

impl Default for NormalizeDefaults {
    fn default() -> Self {
        Self {
            title: UNTITLED.to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            category: HOME_CATEGORY_FALLBACK.to_string(),
            derive_slug: false,
        }
    }
}

/// Stable id for rows exported without one.
pub fn make_record_id(slug: &str, title: &str) -> String {
    format!("{:016x}", xxh3_64(format!("{}|{}", slug, title).as_bytes()))
}

/// First alias holding a non-blank string (or a number), trimmed.
pub fn text_field(value: &Value, aliases: &[&str]) -> Option<String> {
    let obj = value.as_object()?;
    aliases.iter().find_map(|key| match obj.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Truthiness of the first alias present: booleans, non-zero numbers, "true"/"1".
pub fn flag_field(value: &Value, aliases: &[&str]) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    aliases
        .iter()
        .filter_map(|key| obj.get(*key))
        .find(|v| !v.is_null())
        .is_some_and(|v| match v {
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1"),
            _ => false,
        })
}

/// Project any JSON value onto a [`ContentRecord`]. Never fails: missing,
/// null, blank or mistyped fields fall back to `defaults`.
pub fn normalize(kind: ContentKind, value: &Value, defaults: &NormalizeDefaults) -> ContentRecord {
    let f = kind.fields();

    let title = text_field(value, f.title).unwrap_or_else(|| defaults.title.clone());
    let slug = match text_field(value, f.slug) {
        Some(s) => s,
        None if defaults.derive_slug => slugify(&title),
        None => String::new(),
    };
    let id = text_field(value, f.id).unwrap_or_else(|| make_record_id(&slug, &title));

    ContentRecord {
        id,
        kind,
        slug,
        image_url: text_field(value, f.image).unwrap_or_else(|| defaults.image_url.clone()),
        date: text_field(value, f.date).unwrap_or_default(),
        category: text_field(value, f.category).unwrap_or_else(|| defaults.category.clone()),
        excerpt: text_field(value, f.excerpt).unwrap_or_default(),
        featured: flag_field(value, f.featured),
        title,
    }
}

/// Normalize a whole collection; anything that is not a JSON array yields nothing.
pub fn normalize_all(kind: ContentKind, value: &Value, defaults: &NormalizeDefaults) -> Vec<ContentRecord> {
    match value {
        Value::Array(rows) => rows.iter().map(|row| normalize(kind, row, defaults)).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_gets_every_default() {
        let r = normalize(ContentKind::Article, &json!({}), &NormalizeDefaults::default());
        assert_eq!(r.title, "Untitled");
        assert_eq!(r.slug, "");
        assert_eq!(r.image_url, "/placeholder.svg");
        assert_eq!(r.date, "");
        assert_eq!(r.category, "Business");
        assert_eq!(r.excerpt, "");
        assert!(!r.featured);
        assert_eq!(r.id, make_record_id("", "Untitled"));
    }

    #[test]
    fn nulls_blanks_and_wrong_types_degrade() {
        let raw = json!({
            "id": 42,
            "title": "   ",
            "slug": null,
            "image_url": ["x"],
            "category": "",
            "excerpt": {"nested": true},
            "featured": null
        });
        let r = normalize(ContentKind::Article, &raw, &NormalizeDefaults::default());
        assert_eq!(r.id, "42");
        assert_eq!(r.title, "Untitled");
        assert_eq!(r.image_url, "/placeholder.svg");
        assert_eq!(r.category, "Business");
        assert_eq!(r.excerpt, "");
    }

    #[test]
    fn non_objects_normalize_to_defaults() {
        for raw in [json!(null), json!("text"), json!(7), json!([1, 2])] {
            let r = normalize(ContentKind::PressRelease, &raw, &NormalizeDefaults::default());
            assert_eq!(r.title, "Untitled");
            assert_eq!(r.kind, ContentKind::PressRelease);
        }
    }

    #[test]
    fn magazine_aliases_are_used() {
        let raw = json!({
            "id": "m1",
            "title": "Innovation 2025",
            "slug": "innovation-2025",
            "cover_image_url": "https://cdn.example/cover.jpg",
            "publish_date": "2025-11-01",
            "description": "Exclusive interviews",
            "issue_number": 82,
            "featured": true
        });
        let r = normalize(ContentKind::Magazine, &raw, &NormalizeDefaults::default());
        assert_eq!(r.image_url, "https://cdn.example/cover.jpg");
        assert_eq!(r.date, "2025-11-01");
        assert_eq!(r.excerpt, "Exclusive interviews");
        assert!(r.featured);
    }

    #[test]
    fn urgent_press_release_counts_as_featured() {
        let raw = json!({"title": "Q4 Results", "urgent": true});
        assert!(normalize(ContentKind::PressRelease, &raw, &NormalizeDefaults::default()).featured);
        assert!(!normalize(ContentKind::Article, &raw, &NormalizeDefaults::default()).featured);
    }

    #[test]
    fn slug_is_derived_only_when_asked() {
        let raw = json!({"title": "Tech Trends 2025"});
        let mut defaults = NormalizeDefaults::default();
        assert_eq!(normalize(ContentKind::Article, &raw, &defaults).slug, "");
        defaults.derive_slug = true;
        assert_eq!(normalize(ContentKind::Article, &raw, &defaults).slug, "tech-trends-2025");
    }

    #[test]
    fn normalize_all_ignores_non_arrays() {
        let d = NormalizeDefaults::default();
        assert!(normalize_all(ContentKind::Article, &json!(null), &d).is_empty());
        assert!(normalize_all(ContentKind::Article, &json!({"title": "x"}), &d).is_empty());
        assert_eq!(normalize_all(ContentKind::Article, &json!([{}, null]), &d).len(), 2);
    }
}
