//! Legal domain categories and their static keyword tables.
//!
//! The category set is closed: classification, retrieval filtering, and
//! response framing all dispatch on this enum, so a new legal domain is a
//! compile-time change, not a runtime string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed legal-domain classification.
///
/// An unclassified query ("general inquiry") is modeled as
/// `Option<Category>::None`, never as an extra variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Civil,
    Criminal,
    Commercial,
    Family,
    Administrative,
    Constitutional,
    Labor,
    Tax,
    RealEstate,
    IntellectualProperty,
}

impl Category {
    /// All categories, in classifier precedence order: the first category
    /// whose keyword set hits the query wins. IntellectualProperty comes
    /// before Commercial because "علامة تجارية" and "trademark" contain
    /// the commercial keywords "تجاري" and "trade" as substrings.
    pub const ALL: [Category; 10] = [
        Category::Criminal,
        Category::Labor,
        Category::Family,
        Category::IntellectualProperty,
        Category::Commercial,
        Category::Tax,
        Category::RealEstate,
        Category::Constitutional,
        Category::Administrative,
        Category::Civil,
    ];

    /// Static keyword set for keyword-table classification.
    ///
    /// Keywords are matched as case-insensitive substrings of the
    /// digit-normalized query. Arabic terms first (the corpus language),
    /// then common English equivalents.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Civil => &[
                "مدني",
                "عقد",
                "التزام",
                "تعويض",
                "مسؤولية",
                "civil",
                "contract",
                "obligation",
            ],
            Category::Criminal => &[
                "جنائي",
                "جريمة",
                "جرائم",
                "عقوبة",
                "عقوبات",
                "جزاء",
                "جناية",
                "جنحة",
                "criminal",
                "penal",
                "crime",
                "penalty",
            ],
            Category::Commercial => &[
                "تجاري",
                "تجارة",
                "شركة",
                "شركات",
                "إفلاس",
                "سجل تجاري",
                "commercial",
                "company",
                "trade",
            ],
            Category::Family => &[
                "أحوال شخصية",
                "زواج",
                "طلاق",
                "حضانة",
                "نفقة",
                "ميراث",
                "family",
                "marriage",
                "divorce",
                "custody",
            ],
            Category::Administrative => &[
                "إداري",
                "قرار إداري",
                "موظف عام",
                "مناقصة",
                "administrative",
            ],
            Category::Constitutional => &["دستور", "دستوري", "constitution", "constitutional"],
            Category::Labor => &[
                "عمل",
                "عامل",
                "عمال",
                "أجر",
                "إجازة",
                "فصل تعسفي",
                "مكافأة نهاية الخدمة",
                "labor",
                "labour",
                "employment",
                "wage",
            ],
            Category::Tax => &["ضريبة", "ضرائب", "رسوم", "جمارك", "tax", "vat", "customs"],
            Category::RealEstate => &[
                "عقار",
                "عقاري",
                "إيجار",
                "ملكية عقارية",
                "أرض",
                "real estate",
                "lease",
                "tenancy",
            ],
            Category::IntellectualProperty => &[
                "ملكية فكرية",
                "براءة اختراع",
                "علامة تجارية",
                "حقوق المؤلف",
                "patent",
                "trademark",
                "copyright",
            ],
        }
    }

    /// Arabic display name, used in prompts and fallback answers.
    pub fn name_ar(self) -> &'static str {
        match self {
            Category::Civil => "القانون المدني",
            Category::Criminal => "القانون الجنائي",
            Category::Commercial => "القانون التجاري",
            Category::Family => "قانون الأحوال الشخصية",
            Category::Administrative => "القانون الإداري",
            Category::Constitutional => "القانون الدستوري",
            Category::Labor => "قانون العمل",
            Category::Tax => "القانون الضريبي",
            Category::RealEstate => "القانون العقاري",
            Category::IntellectualProperty => "قانون الملكية الفكرية",
        }
    }

    /// English display name.
    pub fn name_en(self) -> &'static str {
        match self {
            Category::Civil => "Civil Law",
            Category::Criminal => "Criminal Law",
            Category::Commercial => "Commercial Law",
            Category::Family => "Family Law",
            Category::Administrative => "Administrative Law",
            Category::Constitutional => "Constitutional Law",
            Category::Labor => "Labor Law",
            Category::Tax => "Tax Law",
            Category::RealEstate => "Real Estate Law",
            Category::IntellectualProperty => "Intellectual Property Law",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name_en())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_keywords() {
        for cat in Category::ALL {
            assert!(!cat.keywords().is_empty(), "{cat} has no keywords");
        }
    }

    #[test]
    fn all_lists_every_variant_once() {
        let mut seen = std::collections::HashSet::new();
        for cat in Category::ALL {
            assert!(seen.insert(cat), "{cat} listed twice");
        }
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Category::RealEstate).unwrap();
        assert_eq!(json, "\"real_estate\"");
    }
}
