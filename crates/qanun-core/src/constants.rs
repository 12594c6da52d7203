/// Qanun system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of documents returned by a single retrieval call.
pub const SEARCH_RESULT_LIMIT: usize = 5;

/// Per-document character budget when building generation context.
pub const DOCUMENT_EXCERPT_BUDGET: usize = 1000;

/// Number of trailing messages carried into the generation request.
pub const HISTORY_WINDOW: usize = 10;

/// Deadline for one generation call, in seconds.
pub const GENERATION_TIMEOUT_SECS: u64 = 15;

/// Maximum accepted query length, in characters.
pub const MAX_QUERY_CHARS: usize = 2000;

/// Upper bound of the confidence scale.
pub const MAX_CONFIDENCE: u8 = 95;

/// Largest article ordinal word recognized by the classifier.
pub const MAX_ARTICLE_ORDINAL: u32 = 27;
