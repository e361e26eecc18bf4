use unicode_normalization::UnicodeNormalization;

use crate::models::{ContentRecord, LeaderProfile};

/// Category / industry selector. `All` bypasses the facet check.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Facet {
    #[default]
    All,
    Exact(String),
}

impl Facet {
    /// `"all"` in any letter case selects everything; any other value is
    /// compared verbatim.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("all") {
            Facet::All
        } else {
            Facet::Exact(raw.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Facet::All => "all",
            Facet::Exact(s) => s,
        }
    }

    fn admits(&self, value: &str) -> bool {
        match self {
            Facet::All => true,
            Facet::Exact(want) => want == value,
        }
    }
}

/// Records the listing pages can search.
pub trait Searchable {
    /// Fields tested by the text query, in order.
    fn search_fields(&self) -> Vec<&str>;
    /// Value the facet is compared against.
    fn facet_value(&self) -> &str;
}

impl Searchable for ContentRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.excerpt.as_str()]
    }

    fn facet_value(&self) -> &str {
        &self.category
    }
}

impl Searchable for LeaderProfile {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.title.as_str(), self.company.as_str()]
    }

    fn facet_value(&self) -> &str {
        &self.industry
    }
}

fn fold(s: &str) -> String {
    s.nfc().collect::<String>().to_lowercase()
}

/// Case-insensitive substring test against any of the record's search fields.
/// An empty query matches everything.
pub fn matches_query<T: Searchable>(record: &T, folded_query: &str) -> bool {
    folded_query.is_empty()
        || record
            .search_fields()
            .into_iter()
            .any(|field| fold(field).contains(folded_query))
}

/// Records passing both the facet and the text query, in input order.
pub fn filter<T: Searchable + Clone>(records: &[T], query: &str, facet: &Facet) -> Vec<T> {
    let q = fold(query);
    records
        .iter()
        .filter(|r| facet.admits(r.facet_value()) && matches_query(*r, &q))
        .cloned()
        .collect()
}
