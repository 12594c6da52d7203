//! Query variant generation.
//!
//! Each variant contributes an additional OR clause: variants widen
//! recall, never narrow it. The article keyword itself has two
//! conventional Arabic spellings ("مادة" with taa marbuta, "ماده" with
//! plain haa), so a query written in one must still hit documents
//! written in the other.

use qanun_core::models::{Category, DocumentFilter, FilterClause};

use crate::classifier::digits::normalize_digits;

/// Spelling swaps applied to the normalized query, both directions.
const SPELLING_SWAPS: [(&str, &str); 2] = [("مادة", "ماده"), ("ماده", "مادة")];

/// Build the ordered filter for one retrieval call.
///
/// Clause order, front to back: exact article-number clause (when the
/// classifier resolved one), the raw query, the digit-normalized copy,
/// then article-word spelling variants. Duplicate clauses are dropped.
pub fn build_filter(
    query: &str,
    category: Option<Category>,
    article_number: Option<&str>,
) -> DocumentFilter {
    let mut filter = DocumentFilter::new(category);
    let trimmed = query.trim();

    push_unique(&mut filter, FilterClause::TextContains(trimmed.to_string()));

    let normalized = normalize_digits(trimmed);
    push_unique(&mut filter, FilterClause::TextContains(normalized.clone()));

    for (from, to) in SPELLING_SWAPS {
        if normalized.contains(from) {
            push_unique(
                &mut filter,
                FilterClause::TextContains(normalized.replace(from, to)),
            );
        }
    }

    if let Some(number) = article_number {
        filter.push_front(FilterClause::ArticleNumberEquals(number.to_string()));
    }

    filter
}

fn push_unique(filter: &mut DocumentFilter, clause: FilterClause) {
    if !filter.clauses.contains(&clause) {
        filter.push(clause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_clause_comes_first() {
        let filter = build_filter("المادة ٢٧", None, Some("27"));
        assert_eq!(
            filter.clauses[0],
            FilterClause::ArticleNumberEquals("27".to_string())
        );
    }

    #[test]
    fn normalized_copy_is_added_once() {
        let filter = build_filter("مادة ٥", None, None);
        assert!(filter
            .clauses
            .contains(&FilterClause::TextContains("مادة 5".to_string())));
        // ASCII-only query: normalized copy equals the raw query, no dup.
        let ascii = build_filter("article 5", None, None);
        assert_eq!(
            ascii
                .clauses
                .iter()
                .filter(|c| **c == FilterClause::TextContains("article 5".to_string()))
                .count(),
            1
        );
    }

    #[test]
    fn spelling_variants_widen_both_directions() {
        let taa = build_filter("مادة 5 عقوبات", None, None);
        assert!(taa
            .clauses
            .contains(&FilterClause::TextContains("ماده 5 عقوبات".to_string())));

        let haa = build_filter("ماده 5 عقوبات", None, None);
        assert!(haa
            .clauses
            .contains(&FilterClause::TextContains("مادة 5 عقوبات".to_string())));
    }

    #[test]
    fn category_restriction_is_carried() {
        let filter = build_filter("عقد الإيجار", Some(Category::RealEstate), None);
        assert_eq!(filter.category, Some(Category::RealEstate));
    }
}
