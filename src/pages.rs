use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::dates::{display_date, relative_age};
use crate::filter::{filter, Facet};
use crate::leadership::{industries, split_featured};
use crate::models::{ContentRecord, LeaderProfile};
use crate::out_models::{FilteredListing, LeadershipPage, MagazineShelf, PressReleaseCard};
use crate::rank::{rank_by_date, RankOptions};

/// Press releases, newest first, narrowed by query and category.
pub fn press_release_listing(
    releases: &[ContentRecord],
    categories: &[String],
    query: &str,
    facet: &Facet,
    tz: Tz,
    now: DateTime<Utc>,
) -> FilteredListing<PressReleaseCard> {
    let ranked = rank_by_date(releases, RankOptions::newest_first());
    let items: Vec<PressReleaseCard> = filter(&ranked, query, facet)
        .into_iter()
        .map(|record| PressReleaseCard {
            display_date: display_date(&record.date, tz),
            age: relative_age(&record.date, now),
            record,
        })
        .collect();

    FilteredListing {
        query: query.to_string(),
        facet: facet.label().to_string(),
        facets: categories.to_vec(),
        total: releases.len(),
        items,
    }
}

/// Featured/regular split of the full roster plus a filtered listing.
pub fn leadership_page(leaders: &[LeaderProfile], query: &str, facet: &Facet) -> LeadershipPage {
    let (featured, regular) = split_featured(leaders);
    LeadershipPage {
        featured,
        regular,
        listing: FilteredListing {
            query: query.to_string(),
            facet: facet.label().to_string(),
            facets: industries(leaders),
            total: leaders.len(),
            items: filter(leaders, query, facet),
        },
    }
}

/// Issues for the cover carousel: featured first, then newest.
pub fn magazine_shelf(magazines: &[ContentRecord]) -> MagazineShelf {
    MagazineShelf {
        issues: rank_by_date(magazines, RankOptions::featured_then_newest()),
    }
}
