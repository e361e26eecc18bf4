use serde::{Deserialize, Serialize};

use crate::dates::timestamp_or_epoch;

/// Source collection a content record was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Article,
    PressRelease,
    Magazine,
}

/// Backend column names consulted, in order, for each display field.
#[derive(Debug, Clone, Copy)]
pub struct FieldAliases {
    pub id: &'static [&'static str],
    pub title: &'static [&'static str],
    pub slug: &'static [&'static str],
    pub image: &'static [&'static str],
    pub date: &'static [&'static str],
    pub category: &'static [&'static str],
    pub excerpt: &'static [&'static str],
    pub featured: &'static [&'static str],
}

const ARTICLE_FIELDS: FieldAliases = FieldAliases {
    id: &["id"],
    title: &["title"],
    slug: &["slug"],
    image: &["image_url"],
    date: &["date", "published_at", "created_at"],
    category: &["category", "industry"],
    excerpt: &["excerpt", "summary"],
    featured: &["featured"],
};

const PRESS_RELEASE_FIELDS: FieldAliases = FieldAliases {
    featured: &["featured", "urgent"],
    ..ARTICLE_FIELDS
};

const MAGAZINE_FIELDS: FieldAliases = FieldAliases {
    id: &["id"],
    title: &["title"],
    slug: &["slug"],
    image: &["cover_image_url", "image_url"],
    date: &["publish_date", "date"],
    category: &["category"],
    excerpt: &["description", "excerpt"],
    featured: &["featured"],
};

impl ContentKind {
    pub fn fields(self) -> &'static FieldAliases {
        match self {
            ContentKind::Article => &ARTICLE_FIELDS,
            ContentKind::PressRelease => &PRESS_RELEASE_FIELDS,
            ContentKind::Magazine => &MAGAZINE_FIELDS,
        }
    }

    /// Snapshot file stem, e.g. `press_releases`.
    pub fn collection(self) -> &'static str {
        match self {
            ContentKind::Article => "articles",
            ContentKind::PressRelease => "press_releases",
            ContentKind::Magazine => "magazines",
        }
    }
}

/// Display-safe projection shared by articles, press releases and magazines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: String,
    pub kind: ContentKind,
    pub title: String,
    pub slug: String, // "" renders a non-navigable link
    pub image_url: String,
    pub date: String, // raw ISO-8601 as stored; "" when absent
    pub category: String,
    pub excerpt: String,
    pub featured: bool,
}

impl ContentRecord {
    /// Epoch millis of `date`; 0 when missing or unparseable.
    pub fn timestamp(&self) -> i64 {
        timestamp_or_epoch(&self.date)
    }
}

/// Leadership page profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderProfile {
    pub id: String,
    pub name: String,
    pub title: String, // role, e.g. "Chief Executive Officer"
    pub company: String,
    pub industry: String,
    pub bio: String,
    pub slug: String,
    pub image_url: String,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub featured: bool,
}
