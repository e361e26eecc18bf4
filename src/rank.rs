use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::models::ContentRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Desc,
    Asc,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RankOptions {
    pub direction: Direction,
    /// Featured records precede the rest; date order applies within each group.
    pub featured_first: bool,
}

impl RankOptions {
    pub fn newest_first() -> Self {
        Self::default()
    }

    pub fn featured_then_newest() -> Self {
        Self {
            featured_first: true,
            ..Self::default()
        }
    }
}

/// Order records by publication date without touching the input.
///
/// Missing or unparseable dates count as the epoch, so they trail under
/// `Desc` and lead under `Asc`. The sort is stable: ties keep input order.
pub fn rank_by_date(records: &[ContentRecord], opts: RankOptions) -> Vec<ContentRecord> {
    let mut keyed: Vec<(bool, i64, &ContentRecord)> = records
        .iter()
        .map(|r| (opts.featured_first && r.featured, r.timestamp(), r))
        .collect();

    match opts.direction {
        Direction::Desc => keyed.sort_by_key(|&(featured, ts, _)| (Reverse(featured), Reverse(ts))),
        Direction::Asc => keyed.sort_by_key(|&(featured, ts, _)| (Reverse(featured), ts)),
    }

    keyed.into_iter().map(|(_, _, r)| r.clone()).collect()
}
