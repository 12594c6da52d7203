//! Post-store re-ranking.

mod domain;

pub use domain::{detect_domain, rerank, DomainMarker};
