//! Time extractor: `H[:MM] am|pm` tokens.

use std::sync::LazyLock;

use regex::Regex;

static TIME_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]{1,2})(?::([0-9]{2}))?\s*(am|pm)").ok());

/// Extract the first clock time in canonical `{hour}:{minute}{am|pm}` form.
///
/// The hour is kept as written (no zero padding, no range check); a missing
/// minute becomes `00`. Word times such as "noon" are not recognised.
pub fn extract_time(text: &str) -> Option<String> {
    let caps = TIME_PATTERN.as_ref()?.captures(text)?;
    let hour = caps.get(1)?.as_str();
    let minute = caps.get(2).map_or("00", |m| m.as_str());
    let meridiem = caps.get(3)?.as_str().to_lowercase();
    Some(format!("{hour}:{minute}{meridiem}"))
}

/// Whether `span` contains anything the time extractor would accept.
pub fn matches_time(span: &str) -> bool {
    TIME_PATTERN
        .as_ref()
        .is_some_and(|re| re.is_match(span))
}
