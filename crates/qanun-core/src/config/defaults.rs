//! Default values shared by the config structs.

use crate::constants;

pub const DEFAULT_RESULT_LIMIT: usize = constants::SEARCH_RESULT_LIMIT;
pub const DEFAULT_EXCERPT_BUDGET: usize = constants::DOCUMENT_EXCERPT_BUDGET;
pub const DEFAULT_DOMAIN_RERANK: bool = true;

pub const DEFAULT_GENERATION_ENDPOINT: &str = "http://localhost:8080/v1/generate";
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = constants::GENERATION_TIMEOUT_SECS;
pub const DEFAULT_HISTORY_WINDOW: usize = constants::HISTORY_WINDOW;

pub const DEFAULT_MAX_QUERY_CHARS: usize = constants::MAX_QUERY_CHARS;
