use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

static SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("static slug regex"));

/// URL-safe slug: accents stripped, lowercase ASCII alphanumerics joined by `-`.
pub fn slugify(title: &str) -> String {
    let folded: String = title
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();
    SEPARATOR_RE
        .replace_all(&folded, "-")
        .trim_matches('-')
        .to_string()
}
