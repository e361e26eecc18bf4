//! Content aggregation pipeline for the InsightsBW site.
//!
//! Raw backend exports flow one way: [`normalize`] → [`rank`] →
//! [`partition`] / [`aggregate`] / [`filter`] → [`render`] / [`export`].
//! Every stage is pure over an in-memory snapshot; only [`snapshot`],
//! [`export`] and [`orchestrator`] touch the filesystem.

pub mod aggregate;
pub mod api_types;
pub mod chat;
pub mod config;
pub mod dates;
pub mod error;
pub mod export;
pub mod filter;
pub mod home;
pub mod leadership;
pub mod models;
pub mod normalize;
pub mod orchestrator;
pub mod out_models;
pub mod pages;
pub mod partition;
pub mod rank;
pub mod render;
pub mod slug;
pub mod snapshot;
pub mod storage;

pub use aggregate::{aggregate_by_category, backfill_empty, CategoryBuckets};
pub use config::SiteConfig;
pub use error::{ConfigError, StorageError};
pub use filter::{filter, Facet, Searchable};
pub use models::{ContentKind, ContentRecord, LeaderProfile};
pub use normalize::{normalize, normalize_all, NormalizeDefaults};
pub use partition::{front_page, most_read, partition, NamedSlices, SectionOffsets};
pub use rank::{rank_by_date, Direction, RankOptions};
