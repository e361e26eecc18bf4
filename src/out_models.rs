use serde::{Deserialize, Serialize};

use crate::api_types::HomeSection;
use crate::models::{ContentRecord, LeaderProfile};

/* Front page */
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontPage {
    pub main: Option<ContentRecord>,
    pub secondary: Vec<ContentRecord>,
    pub headlines: Vec<ContentRecord>,
    pub rest: Vec<ContentRecord>,
    pub most_read: Vec<ContentRecord>, // independent recency ranking
}

/* Category listing */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySection {
    pub category: String,
    pub records: Vec<ContentRecord>,
    pub backfilled: bool, // records are display filler, not members of the category
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPage {
    pub fallback: String,
    pub sections: Vec<CategorySection>,
}

/* Filtered listings */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilteredListing<T> {
    pub query: String,
    pub facet: String, // "all" or the exact category / industry
    pub facets: Vec<String>,
    pub total: usize,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PressReleaseCard {
    #[serde(flatten)]
    pub record: ContentRecord,
    pub display_date: String,
    pub age: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadershipPage {
    pub featured: Vec<LeaderProfile>,
    pub regular: Vec<LeaderProfile>,
    pub listing: FilteredListing<LeaderProfile>,
}

/* Magazine shelf */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MagazineShelf {
    pub issues: Vec<ContentRecord>,
}

/* Home sections */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeSections {
    pub sections: Vec<HomeSection>,
}

/* Run manifest */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunIndex {
    pub date: String,
    pub version: u32,
    pub counts: RunCounts,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunCounts {
    pub articles: usize,
    pub press_releases: usize,
    pub magazines: usize,
    pub leaders: usize,
    pub home_sections: usize,
}
