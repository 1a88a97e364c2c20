//! Keyword-bucket classifiers for priority, recurrence and category.
//!
//! Buckets are tested in table order against the lowercased input and the
//! first bucket with any substring hit wins, so table order is the
//! tie-break when several buckets match.

use super::{Category, Priority, Recurrence};

const PRIORITY_KEYWORDS: &[(Priority, &[&str])] = &[
    (
        Priority::High,
        &["urgent", "important", "critical", "asap", "priority", "high"],
    ),
    (Priority::Medium, &["normal", "regular", "medium"]),
    (Priority::Low, &["low", "optional", "whenever", "flexible"]),
];

const RECURRENCE_KEYWORDS: &[(Recurrence, &[&str])] = &[
    (Recurrence::Daily, &["every day", "daily", "each day"]),
    (Recurrence::Weekly, &["every week", "weekly", "each week"]),
    (Recurrence::Monthly, &["every month", "monthly", "each month"]),
    (
        Recurrence::Yearly,
        &["every year", "yearly", "annually", "each year"],
    ),
];

const CATEGORIES: [Category; 10] = [
    Category::Work,
    Category::Personal,
    Category::Health,
    Category::Social,
    Category::Family,
    Category::Shopping,
    Category::Travel,
    Category::Education,
    Category::Finance,
    Category::Other,
];

/// Classify priority; `None` when no keyword appears.
pub fn extract_priority(text: &str) -> Option<Priority> {
    first_bucket(&text.to_lowercase(), PRIORITY_KEYWORDS)
}

/// Classify recurrence; `None` means a one-off event.
pub fn extract_recurrence(text: &str) -> Option<Recurrence> {
    first_bucket(&text.to_lowercase(), RECURRENCE_KEYWORDS)
}

/// Classify into the fixed category vocabulary by substring match.
pub fn extract_category(text: &str) -> Option<Category> {
    let lower = text.to_lowercase();
    CATEGORIES
        .into_iter()
        .find(|category| lower.contains(category.as_str()))
}

fn first_bucket<T: Copy>(lower: &str, table: &[(T, &[&str])]) -> Option<T> {
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(label, _)| *label)
}
