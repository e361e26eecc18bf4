use serde::{Deserialize, Serialize};

// Rows of the curated `home_sections` table, each with its nested
// `home_section_items`, as the backend exports them.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeSection {
    pub id: String,
    #[serde(default)]
    pub internal_name: String,
    #[serde(default)]
    pub kicker: Option<String>,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default = "default_layout")]
    pub layout_type: String, // "grid" | "carousel" | "list" ...
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub accent_color: Option<String>,
    #[serde(default)]
    pub background_image_url: Option<String>,
    #[serde(default)]
    pub action_label: Option<String>,
    #[serde(default)]
    pub action_url: Option<String>,
    #[serde(default)]
    pub order_index: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub home_section_items: Vec<HomeSectionItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeSectionItem {
    pub id: String,
    #[serde(default)]
    pub section_id: String,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub article_slug: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub action_label: Option<String>,
    #[serde(default)]
    pub action_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order_index: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_layout() -> String {
    "grid".to_string()
}

fn null_as_empty<'de, D>(de: D) -> Result<Vec<HomeSectionItem>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<HomeSectionItem>>::deserialize(de)?.unwrap_or_default())
}
