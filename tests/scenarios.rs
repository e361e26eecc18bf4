use serde_json::json;

use bw_insights::aggregate::AGGREGATE_FALLBACK;
use bw_insights::{
    aggregate_by_category, filter, front_page, normalize_all, partition, rank_by_date, ContentKind, ContentRecord,
    Facet, NormalizeDefaults, RankOptions, SectionOffsets,
};

fn articles(raw: serde_json::Value) -> Vec<ContentRecord> {
    normalize_all(ContentKind::Article, &raw, &NormalizeDefaults::default())
}

fn titles(rs: &[ContentRecord]) -> Vec<&str> {
    rs.iter().map(|r| r.title.as_str()).collect()
}

#[test]
fn missing_date_sorts_after_dated_records() {
    let rs = articles(json!([
        {"title": "A", "date": "2024-01-01"},
        {"title": "B", "date": "2024-03-01"},
        {"title": "C"}
    ]));
    assert_eq!(titles(&rank_by_date(&rs, RankOptions::newest_first())), ["B", "A", "C"]);
}

#[test]
fn five_ranked_records_partition() {
    let rs = articles(json!([
        {"title": "r0", "date": "2024-05-01"},
        {"title": "r1", "date": "2024-04-01"},
        {"title": "r2", "date": "2024-03-01"},
        {"title": "r3", "date": "2024-02-01"},
        {"title": "r4", "date": "2024-01-01"}
    ]));
    let ranked = rank_by_date(&rs, RankOptions::newest_first());
    let s = partition(&ranked, &SectionOffsets::default());
    assert_eq!(titles(s.main), ["r0"]);
    assert_eq!(titles(s.secondary), ["r1", "r2"]);
    assert_eq!(titles(s.headlines), ["r3", "r4"]);
    assert!(s.rest.is_empty());
}

#[test]
fn known_categories_bucket_in_input_order() {
    let rs = articles(json!([
        {"id": "rec0", "category": "Technology"},
        {"id": "rec1", "category": "Finance"},
        {"id": "rec2", "category": "Technology"}
    ]));
    let b = aggregate_by_category(&rs, &["Technology", "Finance"], AGGREGATE_FALLBACK);
    let ids = |rs: &[ContentRecord]| rs.iter().map(|r| r.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(b.get("Technology").unwrap()), ["rec0", "rec2"]);
    assert_eq!(ids(b.get("Finance").unwrap()), ["rec1"]);
    assert!(b.fallback_bucket().is_empty());
}

#[test]
fn text_query_matches_press_release_title() {
    let rs = normalize_all(
        ContentKind::PressRelease,
        &json!([{"title": "Strategic Tech Partnership", "category": "Partnership"}]),
        &NormalizeDefaults::default(),
    );
    assert_eq!(filter(&rs, "tech", &Facet::All).len(), 1);
    assert!(filter(&rs, "xyz", &Facet::All).is_empty());
}

#[test]
fn all_facet_equals_unfiltered_empty_query() {
    let rs = normalize_all(
        ContentKind::PressRelease,
        &json!([
            {"title": "One", "category": "Partnership"},
            {"title": "Two", "category": "Financial"},
            {"title": "Three"}
        ]),
        &NormalizeDefaults::default(),
    );
    assert_eq!(filter(&rs, "", &Facet::parse("all")), rs);
    assert_eq!(filter(&rs, "", &Facet::All).len(), 3);
}

#[test]
fn most_read_ignores_featured_while_hero_prefers_it() {
    let rs = articles(json!([
        {"title": "newest", "date": "2024-06-01"},
        {"title": "featured-old", "date": "2023-01-01", "featured": true},
        {"title": "middle", "date": "2024-03-01"}
    ]));
    let page = front_page(&rs, &SectionOffsets::default(), 2);
    assert_eq!(page.main.as_ref().map(|r| r.title.as_str()), Some("featured-old"));
    assert_eq!(titles(&page.most_read), ["newest", "middle"]);
}

#[test]
fn loading_state_input_yields_empty_views() {
    let rs = articles(serde_json::Value::Null);
    assert!(rs.is_empty());
    let page = front_page(&rs, &SectionOffsets::default(), 6);
    assert!(page.main.is_none() && page.most_read.is_empty());
    let b = aggregate_by_category(&rs, &["Technology"], AGGREGATE_FALLBACK);
    assert_eq!(b.record_count(), 0);
}
