use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::models::ContentRecord;
use crate::out_models::FrontPage;
use crate::rank::{rank_by_date, RankOptions};

/// Boundaries of the front-page regions over a ranked sequence.
///
/// Regions are `[0, main_end)`, `[main_end, secondary_end)`,
/// `[secondary_end, headlines_end)` and `[headlines_end, ..)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionOffsets {
    pub main_end: usize,
    pub secondary_end: usize,
    pub headlines_end: usize,
}

impl Default for SectionOffsets {
    fn default() -> Self {
        Self {
            main_end: 1,
            secondary_end: 3,
            headlines_end: 11,
        }
    }
}

impl SectionOffsets {
    /// Element count covered by the bounded regions.
    pub fn total(&self) -> usize {
        self.headlines_end
    }

    /// Monotone ranges; a bound smaller than its predecessor collapses that region.
    fn ranges(&self) -> [Range<usize>; 3] {
        let main = 0..self.main_end;
        let secondary = main.end..self.secondary_end.max(main.end);
        let headlines = secondary.end..self.headlines_end.max(secondary.end);
        [main, secondary, headlines]
    }
}

/// Borrowed, contiguous views into a ranked sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedSlices<'a, T> {
    pub main: &'a [T],
    pub secondary: &'a [T],
    pub headlines: &'a [T],
    pub rest: &'a [T],
}

fn clamp_slice<T>(items: &[T], range: Range<usize>) -> &[T] {
    let end = range.end.min(items.len());
    let start = range.start.min(end);
    &items[start..end]
}

/// Slice `ranked` into front-page regions. Short inputs produce shorter or
/// empty regions; nothing is padded or reordered.
pub fn partition<'a, T>(ranked: &'a [T], offsets: &SectionOffsets) -> NamedSlices<'a, T> {
    let [main, secondary, headlines] = offsets.ranges();
    let rest_start = headlines.end;
    NamedSlices {
        main: clamp_slice(ranked, main),
        secondary: clamp_slice(ranked, secondary),
        headlines: clamp_slice(ranked, headlines),
        rest: clamp_slice(ranked, rest_start..ranked.len()),
    }
}

/// Pure recency ranking, featured flag ignored, truncated to `count`.
pub fn most_read(records: &[ContentRecord], count: usize) -> Vec<ContentRecord> {
    let mut ranked = rank_by_date(records, RankOptions::newest_first());
    ranked.truncate(count);
    ranked
}

/// Hero regions come from the featured-first ranking; "most read" is ranked
/// separately by recency alone.
pub fn front_page(records: &[ContentRecord], offsets: &SectionOffsets, most_read_count: usize) -> FrontPage {
    let ranked = rank_by_date(records, RankOptions::featured_then_newest());
    let slices = partition(&ranked, offsets);
    FrontPage {
        main: slices.main.first().cloned(),
        secondary: slices.secondary.to_vec(),
        headlines: slices.headlines.to_vec(),
        rest: slices.rest.to_vec(),
        most_read: most_read(records, most_read_count),
    }
}
