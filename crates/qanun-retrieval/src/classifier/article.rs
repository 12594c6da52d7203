//! Article-number extraction.
//!
//! Pure: a function of the query text alone, independent of any store.
//! Recognizes "(article-word) (number)" where the article word may be
//! either conventional Arabic spelling ("مادة" / "ماده", with or without
//! the definite article) or English "article", and the number may be
//! Western digits, either Arabic digit script, or an ordinal word.

use regex::Regex;
use std::sync::LazyLock;

use super::digits::normalize_digits;
use super::ordinals::{
    arabic_ordinal_value, english_ordinal_value, ARABIC_ORDINALS, ENGLISH_ORDINALS,
};

// The Arabic forms may be prefixed (e.g. "والمادة"), so only the English
// word gets a leading boundary; without it "particle 27" would match.
const ARTICLE_WORDS: &str = r"المادة|الماده|مادة|ماده|\barticle";

static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)(?:{ARTICLE_WORDS})\s*(?:رقم\s*)?([0-9]+)"))
        .expect("digit article pattern")
});

static ARABIC_ORDINAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation: Vec<String> = ARABIC_ORDINALS
        .iter()
        .map(|(w, _)| regex::escape(w))
        .collect();
    Regex::new(&format!(
        r"(?:المادة|الماده|مادة|ماده)\s+({})",
        alternation.join("|")
    ))
    .expect("arabic ordinal pattern")
});

static ENGLISH_ORDINAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation: Vec<String> = ENGLISH_ORDINALS
        .iter()
        .map(|(w, _)| regex::escape(w))
        .collect();
    Regex::new(&format!(
        r"(?i)\b(?:the\s+)?({})\s+article\b",
        alternation.join("|")
    ))
    .expect("english ordinal pattern")
});

/// Extract the referenced article number from free text, canonicalized
/// to an ASCII digit string. Returns `None` when no pattern matches;
/// absence is not an error.
pub fn extract_article_number(text: &str) -> Option<String> {
    let normalized = normalize_digits(text);

    if let Some(caps) = DIGIT_RE.captures(&normalized) {
        return Some(canonical(&caps[1]));
    }
    if let Some(caps) = ARABIC_ORDINAL_RE.captures(&normalized) {
        return arabic_ordinal_value(&caps[1]).map(|v| v.to_string());
    }
    if let Some(caps) = ENGLISH_ORDINAL_RE.captures(&normalized) {
        return english_ordinal_value(&caps[1].to_lowercase()).map(|v| v.to_string());
    }
    None
}

/// Strip leading zeros, keeping at least one digit.
fn canonical(digits: &str) -> String {
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn western_digits() {
        assert_eq!(
            extract_article_number("what does article 27 say"),
            Some("27".to_string())
        );
        assert_eq!(extract_article_number("Article 5"), Some("5".to_string()));
    }

    #[test]
    fn arabic_word_with_arabic_indic_digits() {
        assert_eq!(
            extract_article_number("ما نص المادة ٢٧ من قانون العقوبات"),
            Some("27".to_string())
        );
        assert_eq!(
            extract_article_number("مادة ۱۲"),
            Some("12".to_string())
        );
    }

    #[test]
    fn both_arabic_spellings_of_the_article_word() {
        assert_eq!(extract_article_number("ماده 9"), Some("9".to_string()));
        assert_eq!(extract_article_number("الماده ٣"), Some("3".to_string()));
    }

    #[test]
    fn raqm_infix_is_tolerated() {
        assert_eq!(
            extract_article_number("المادة رقم 14"),
            Some("14".to_string())
        );
    }

    #[test]
    fn arabic_ordinal_words() {
        assert_eq!(
            extract_article_number("المادة السابعة والعشرون"),
            Some("27".to_string())
        );
        assert_eq!(
            extract_article_number("المادة الأولى"),
            Some("1".to_string())
        );
        // Compound must not resolve to its embedded unit ordinal.
        assert_eq!(
            extract_article_number("المادة الثانية والعشرون"),
            Some("22".to_string())
        );
    }

    #[test]
    fn english_ordinal_words() {
        assert_eq!(
            extract_article_number("the twenty-seventh article"),
            Some("27".to_string())
        );
        assert_eq!(
            extract_article_number("The First Article"),
            Some("1".to_string())
        );
    }

    #[test]
    fn leading_zeros_are_canonicalized() {
        assert_eq!(extract_article_number("article 027"), Some("27".to_string()));
    }

    #[test]
    fn english_word_requires_a_boundary_but_arabic_prefixes_match() {
        assert_eq!(extract_article_number("particle 27"), None);
        assert_eq!(
            extract_article_number("والمادة 5 من القانون"),
            Some("5".to_string())
        );
    }

    #[test]
    fn no_pattern_means_absent() {
        assert_eq!(extract_article_number("ما هي مدة الإجازة السنوية"), None);
        assert_eq!(extract_article_number("27"), None);
        assert_eq!(extract_article_number(""), None);
    }
}
