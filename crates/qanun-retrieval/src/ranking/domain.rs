//! Domain-marker re-ranking.
//!
//! When the query carries markers for a specific legal domain, documents
//! belonging to that domain move ahead of the rest. The sort is stable:
//! relative order inside each bucket is preserved, so the store's
//! clause-priority ordering survives the re-rank.

use qanun_core::models::{Category, Document};

/// Query domains with dedicated marker tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainMarker {
    /// Penal / criminal matters.
    Penal,
    /// Energy / electricity regulation.
    Energy,
}

const PENAL_MARKERS: [&str; 8] = [
    "عقوبة",
    "عقوبات",
    "جريمة",
    "جزاء",
    "حبس",
    "penal",
    "criminal",
    "punishment",
];

const ENERGY_MARKERS: [&str; 6] = [
    "كهرباء",
    "كهربائية",
    "طاقة",
    "electricity",
    "electrical",
    "energy",
];

/// Detect a domain marker in the normalized query, if any. Penal markers
/// take precedence when both domains appear.
pub fn detect_domain(normalized_query: &str) -> Option<DomainMarker> {
    let lower = normalized_query.to_lowercase();
    if PENAL_MARKERS.iter().any(|m| lower.contains(m)) {
        Some(DomainMarker::Penal)
    } else if ENERGY_MARKERS.iter().any(|m| lower.contains(m)) {
        Some(DomainMarker::Energy)
    } else {
        None
    }
}

/// Whether a document belongs to the marked domain.
fn document_matches(marker: DomainMarker, doc: &Document) -> bool {
    let title_lower = format!(
        "{} {}",
        doc.title.ar.to_lowercase(),
        doc.title.en.to_lowercase()
    );
    match marker {
        DomainMarker::Penal => {
            doc.category == Category::Criminal
                || PENAL_MARKERS.iter().any(|m| title_lower.contains(m))
        }
        DomainMarker::Energy => ENERGY_MARKERS.iter().any(|m| title_lower.contains(m)),
    }
}

/// Stable re-rank: documents matching the query's domain first, relative
/// order preserved within each bucket. Documents carrying the requested
/// article are pinned in front and never demoted, so an exact
/// article-number hit keeps index 0 whatever domain the query leans
/// toward. Without a detected domain the input order is returned
/// untouched.
pub fn rerank(
    docs: Vec<Document>,
    normalized_query: &str,
    article_number: Option<&str>,
) -> Vec<Document> {
    let Some(marker) = detect_domain(normalized_query) else {
        return docs;
    };
    let (mut ranked, mut rest): (Vec<Document>, Vec<Document>) = match article_number {
        Some(n) => docs.into_iter().partition(|d| d.find_article(n).is_some()),
        None => (Vec::new(), docs),
    };
    // sort_by_key is stable; non-matching documents sink.
    rest.sort_by_key(|d| !document_matches(marker, d));
    ranked.append(&mut rest);
    ranked
}
