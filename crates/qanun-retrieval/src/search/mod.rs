//! Filter construction: base substring clause, recall-widening variants,
//! and exact article-number priority clauses.

mod variants;

pub use variants::build_filter;
