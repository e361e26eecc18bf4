use indexmap::IndexMap;
use tracing::debug;

use crate::models::ContentRecord;
use crate::out_models::{CategoryPage, CategorySection};

pub const AGGREGATE_FALLBACK: &str = "Others";

/// Records grouped per category label, in known-category order with the
/// fallback bucket last.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBuckets {
    fallback: String,
    buckets: IndexMap<String, Vec<ContentRecord>>,
}

impl CategoryBuckets {
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn get(&self, category: &str) -> Option<&[ContentRecord]> {
        self.buckets.get(category).map(Vec::as_slice)
    }

    pub fn fallback_bucket(&self) -> &[ContentRecord] {
        self.get(&self.fallback).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ContentRecord])> {
        self.buckets.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total records across all buckets.
    pub fn record_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// Group records by exact category label.
///
/// Every known category gets a bucket even if nothing lands in it. Records
/// whose category is empty or not known go to the `fallback` bucket. When the
/// fallback label is itself known, the two share one bucket.
pub fn aggregate_by_category<S: AsRef<str>>(
    records: &[ContentRecord],
    known: &[S],
    fallback: &str,
) -> CategoryBuckets {
    let mut buckets: IndexMap<String, Vec<ContentRecord>> = IndexMap::new();
    for category in known {
        buckets.entry(category.as_ref().to_string()).or_default();
    }
    buckets.entry(fallback.to_string()).or_default();

    for record in records {
        let key = match buckets.get_index_of(record.category.as_str()) {
            Some(idx) if !record.category.is_empty() => idx,
            _ => buckets.get_index_of(fallback).unwrap_or(buckets.len() - 1),
        };
        if let Some((_, bucket)) = buckets.get_index_mut(key) {
            bucket.push(record.clone());
        }
    }

    // keep the fallback at the end even if it was listed among known categories
    if let Some(idx) = buckets.get_index_of(fallback) {
        let last = buckets.len() - 1;
        buckets.move_index(idx, last);
    }

    debug!(
        "Category aggregation - records={}, buckets={}, fallback_size={}",
        records.len(),
        buckets.len(),
        buckets.get(fallback).map_or(0, Vec::len)
    );

    CategoryBuckets {
        fallback: fallback.to_string(),
        buckets,
    }
}

/// Display step kept apart from aggregation: empty buckets borrow the first
/// `take` records of `source` and are flagged `backfilled`. Non-empty buckets
/// pass through untouched.
pub fn backfill_empty(buckets: &CategoryBuckets, source: &[ContentRecord], take: usize) -> Vec<CategorySection> {
    buckets
        .iter()
        .map(|(category, records)| {
            if records.is_empty() && take > 0 && !source.is_empty() {
                debug!("Backfilling empty bucket - category={}, take={}", category, take);
                CategorySection {
                    category: category.to_string(),
                    records: source.iter().take(take).cloned().collect(),
                    backfilled: true,
                }
            } else {
                CategorySection {
                    category: category.to_string(),
                    records: records.to_vec(),
                    backfilled: false,
                }
            }
        })
        .collect()
}

/// Category listing view; `backfill` of `None` keeps empty buckets empty.
pub fn category_page(buckets: &CategoryBuckets, source: &[ContentRecord], backfill: Option<usize>) -> CategoryPage {
    CategoryPage {
        fallback: buckets.fallback().to_string(),
        sections: backfill_empty(buckets, source, backfill.unwrap_or(0)),
    }
}
