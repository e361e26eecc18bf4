use serde_json::Value;

use crate::models::LeaderProfile;
use crate::normalize::{flag_field, make_record_id, text_field, PLACEHOLDER_IMAGE};

pub const UNNAMED: &str = "Unnamed";

pub fn normalize_leader(value: &Value) -> LeaderProfile {
    let name = text_field(value, &["name"]).unwrap_or_else(|| UNNAMED.to_string());
    let slug = text_field(value, &["slug"]).unwrap_or_default();
    LeaderProfile {
        id: text_field(value, &["id"]).unwrap_or_else(|| make_record_id(&slug, &name)),
        title: text_field(value, &["title", "designation"]).unwrap_or_default(),
        company: text_field(value, &["company"]).unwrap_or_default(),
        industry: text_field(value, &["industry", "category"]).unwrap_or_default(),
        bio: text_field(value, &["bio"]).unwrap_or_default(),
        image_url: text_field(value, &["image_url"]).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        linkedin_url: text_field(value, &["linkedin_url"]),
        twitter_url: text_field(value, &["twitter_url"]),
        featured: flag_field(value, &["featured"]),
        name,
        slug,
    }
}

/// Non-array input yields no profiles.
pub fn normalize_leaders(value: &Value) -> Vec<LeaderProfile> {
    value
        .as_array()
        .map(|rows| rows.iter().map(normalize_leader).collect())
        .unwrap_or_default()
}

/// `(featured, regular)`, each in input order.
pub fn split_featured(leaders: &[LeaderProfile]) -> (Vec<LeaderProfile>, Vec<LeaderProfile>) {
    leaders.iter().cloned().partition(|l| l.featured)
}

/// Distinct non-empty industries in first-seen order, for the filter bar.
pub fn industries(leaders: &[LeaderProfile]) -> Vec<String> {
    use itertools::Itertools;
    leaders
        .iter()
        .map(|l| l.industry.as_str())
        .filter(|i| !i.is_empty())
        .unique()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fills_defaults_and_keeps_social_links_optional() {
        let l = normalize_leader(&json!({"name": "Asha Rao", "linkedin_url": "https://linkedin.com/in/asha"}));
        assert_eq!(l.name, "Asha Rao");
        assert_eq!(l.image_url, PLACEHOLDER_IMAGE);
        assert_eq!(l.linkedin_url.as_deref(), Some("https://linkedin.com/in/asha"));
        assert_eq!(l.twitter_url, None);
        assert!(!l.featured);

        let blank = normalize_leader(&json!(null));
        assert_eq!(blank.name, UNNAMED);
    }

    #[test]
    fn split_preserves_order() {
        let rows = json!([
            {"name": "A", "featured": true},
            {"name": "B"},
            {"name": "C", "featured": true},
            {"name": "D", "featured": false}
        ]);
        let (featured, regular) = split_featured(&normalize_leaders(&rows));
        let names = |ls: &[LeaderProfile]| ls.iter().map(|l| l.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&featured), ["A", "C"]);
        assert_eq!(names(&regular), ["B", "D"]);
    }

    #[test]
    fn industries_are_distinct_in_first_seen_order() {
        let rows = json!([
            {"name": "A", "industry": "Finance"},
            {"name": "B", "industry": "Technology"},
            {"name": "C", "industry": "Finance"},
            {"name": "D"}
        ]);
        assert_eq!(industries(&normalize_leaders(&rows)), ["Finance", "Technology"]);
        assert!(normalize_leaders(&json!({"name": "x"})).is_empty());
    }
}
