//! Keyword-table category matching, the last classification resort.

use qanun_core::models::Category;

/// First category whose keyword set hits the text wins, in the fixed
/// precedence order of `Category::ALL`. Matching is case-insensitive
/// substring over the digit-normalized query.
pub fn match_category(text: &str) -> Option<Category> {
    let lower = text.to_lowercase();
    Category::ALL
        .into_iter()
        .find(|cat| cat.keywords().iter().any(|kw| lower.contains(kw)))
}
