//! Context assembly: ranked documents into bounded prompt text.

use qanun_core::models::Document;

/// Separator between per-document context blocks.
const DOCUMENT_SEPARATOR: &str = "\n\n---\n\n";

/// Builds deterministic, length-bounded generation context.
///
/// Same inputs always yield the same string; the confidence scorer and
/// the idempotence of a retried turn both rely on that.
pub struct ContextBuilder {
    /// Character budget per document block.
    excerpt_budget: usize,
}

impl ContextBuilder {
    pub fn new(excerpt_budget: usize) -> Self {
        Self { excerpt_budget }
    }

    /// Assemble context from ranked documents.
    ///
    /// When the user asked for a specific article and a document carries
    /// it, that document contributes the article itself instead of a
    /// generic excerpt: precision over breadth.
    pub fn build(&self, documents: &[Document], article_number: Option<&str>) -> String {
        let blocks: Vec<String> = documents
            .iter()
            .map(|doc| self.document_block(doc, article_number))
            .collect();
        blocks.join(DOCUMENT_SEPARATOR)
    }

    fn document_block(&self, doc: &Document, article_number: Option<&str>) -> String {
        if let Some(article) = article_number.and_then(|n| doc.find_article(n)) {
            let body = truncate_chars(&article.content, self.excerpt_budget);
            return format!(
                "{} ({})\nالمادة {}: {}\n{}",
                doc.title.ar, doc.official_number, article.number, article.title, body
            );
        }

        let excerpt = doc
            .summary
            .as_deref()
            .or_else(|| doc.articles.first().map(|a| a.content.as_str()))
            .unwrap_or("");
        format!(
            "{} ({})\n{}",
            doc.title.ar,
            doc.official_number,
            truncate_chars(excerpt, self.excerpt_budget)
        )
    }
}

/// Truncate on a character boundary, never mid-codepoint.
fn truncate_chars(text: &str, budget: usize) -> String {
    text.chars().take(budget).collect()
}
