//! FallbackSynthesizer: deterministic, store-only answer construction.
//!
//! Used whenever the generation service is unavailable. Works entirely
//! from the retrieval results already computed for the turn, always
//! returns a non-empty string, and never errors.

use qanun_core::models::Document;

/// Builds degraded answers directly from retrieved articles.
pub struct FallbackSynthesizer;

impl FallbackSynthesizer {
    /// Synthesize an answer.
    ///
    /// Preference order: the exact article when the query named one and
    /// the top document carries it; otherwise a summary of which
    /// documents were found; otherwise a plain statement that no
    /// relevant material was located.
    pub fn synthesize(documents: &[Document], article_number: Option<&str>) -> String {
        if let Some(number) = article_number {
            if let Some(doc) = documents.first() {
                if let Some(article) = doc.find_article(number) {
                    return format!(
                        "وفقاً لـ{} ({}), تنص المادة {} ({}) على ما يلي:\n\n{}\n\n\
                         ملاحظة: هذه الإجابة منقولة حرفياً من النص القانوني ولا تغني عن استشارة محامٍ.",
                        doc.title.ar, doc.official_number, article.number, article.title,
                        article.content
                    );
                }
            }
        }

        if !documents.is_empty() {
            let listing: Vec<String> = documents
                .iter()
                .map(|d| format!("- {} ({})", d.title.ar, d.official_number))
                .collect();
            return format!(
                "تعذّر إنشاء إجابة مفصّلة حالياً، لكن وُجدت النصوص القانونية التالية \
                 المتصلة باستفسارك:\n{}\n\nيرجى مراجعتها أو إعادة المحاولة لاحقاً.",
                listing.join("\n")
            );
        }

        "لم يُعثر على نصوص قانونية متصلة باستفسارك في قاعدة البيانات، \
         ولا يمكن تقديم إجابة موثوقة دون سند قانوني. يرجى إعادة صياغة السؤال \
         أو تحديد القانون والمادة المقصودة."
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qanun_core::models::{Article, BilingualText, Category, DocumentType};

    fn doc(id: &str, articles: Vec<Article>) -> Document {
        Document {
            id: id.to_string(),
            title: BilingualText::new("قانون العقوبات", "Penal Code"),
            summary: None,
            category: Category::Criminal,
            doc_type: DocumentType::Law,
            official_number: "16/1960".to_string(),
            articles,
            usage_count: 0,
        }
    }

    fn article_27() -> Article {
        Article {
            number: "27".to_string(),
            title: "العقوبات الأصلية".to_string(),
            content: "نص المادة السابعة والعشرين".to_string(),
            keywords: vec![],
        }
    }

    #[test]
    fn exact_article_is_quoted_verbatim() {
        let docs = vec![doc("d1", vec![article_27()])];
        let answer = FallbackSynthesizer::synthesize(&docs, Some("27"));
        assert!(answer.contains("المادة 27"));
        assert!(answer.contains("نص المادة السابعة والعشرين"));
    }

    #[test]
    fn missing_article_falls_back_to_document_listing() {
        let docs = vec![doc("d1", vec![article_27()])];
        let answer = FallbackSynthesizer::synthesize(&docs, Some("99"));
        assert!(answer.contains("قانون العقوبات (16/1960)"));
        assert!(!answer.contains("المادة 99"));
    }

    #[test]
    fn found_documents_are_listed() {
        let docs = vec![doc("d1", vec![]), doc("d2", vec![])];
        let answer = FallbackSynthesizer::synthesize(&docs, None);
        assert_eq!(answer.matches("- قانون العقوبات").count(), 2);
    }

    #[test]
    fn no_material_is_stated_plainly_and_non_empty() {
        let answer = FallbackSynthesizer::synthesize(&[], None);
        assert!(answer.contains("لم يُعثر"));
        assert!(!answer.trim().is_empty());
    }

    #[test]
    fn synthesis_is_deterministic() {
        let docs = vec![doc("d1", vec![article_27()])];
        assert_eq!(
            FallbackSynthesizer::synthesize(&docs, Some("27")),
            FallbackSynthesizer::synthesize(&docs, Some("27"))
        );
    }
}
