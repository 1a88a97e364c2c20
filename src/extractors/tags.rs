//! Hashtag extractor.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static HASHTAG: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"#([0-9A-Za-z_]+)").ok());

/// Collect `#word` tags from the whole input, in order of first occurrence,
/// without duplicates. Empty when there are none.
pub fn extract_tags(text: &str) -> Vec<String> {
    let Some(re) = HASHTAG.as_ref() else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|tag| seen.insert(*tag))
        .map(str::to_owned)
        .collect()
}
