use serde_json::Value;
use tracing::warn;

use crate::api_types::HomeSection;

/// Decode section rows one by one; rows that do not fit the shape are
/// skipped so one bad row cannot blank the home page.
pub fn decode_sections(value: &Value) -> Vec<HomeSection> {
    let Some(rows) = value.as_array() else {
        return Vec::new();
    };
    rows.iter()
        .enumerate()
        .filter_map(|(idx, row)| match serde_json::from_value::<HomeSection>(row.clone()) {
            Ok(section) => Some(section),
            Err(e) => {
                warn!("Skipping home section row - index={}, error={}", idx, e);
                None
            }
        })
        .collect()
}

/// Sections by `order_index`, and the items of each section likewise.
/// Stable, so equal indices keep export order.
pub fn order_sections(mut sections: Vec<HomeSection>) -> Vec<HomeSection> {
    sections.sort_by_key(|s| s.order_index);
    for section in sections.iter_mut() {
        section.home_section_items.sort_by_key(|item| item.order_index);
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn orders_sections_and_items_and_skips_bad_rows() {
        let raw = json!([
            {"id": "s2", "title": "Markets", "order_index": 2, "home_section_items": [
                {"id": "i2", "title": "Second", "order_index": 5},
                {"id": "i1", "title": "First", "order_index": 1}
            ]},
            {"id": "bad"},
            {"id": "s1", "title": "Top Stories", "order_index": 1, "home_section_items": null}
        ]);
        let sections = order_sections(decode_sections(&raw));
        let ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["s1", "s2"]);
        assert!(sections[0].home_section_items.is_empty());
        assert_eq!(sections[0].layout_type, "grid");
        let items: Vec<&str> = sections[1].home_section_items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(items, ["i1", "i2"]);
    }

    #[test]
    fn non_array_is_empty() {
        assert!(decode_sections(&json!({"id": "s1"})).is_empty());
        assert!(decode_sections(&Value::Null).is_empty());
    }
}
