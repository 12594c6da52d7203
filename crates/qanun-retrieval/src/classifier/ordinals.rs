//! Ordinal-word tables for article references.
//!
//! Statute text and users alike say "المادة السابعة والعشرون" or
//! "the twenty-seventh article" instead of a digit. The observed corpus
//! range is 1–27; larger ordinals simply fail to match and degrade to
//! "no article number".

/// Arabic feminine ordinals, the forms used with "المادة".
/// Compound forms (21–27) come first so the alternation matches the
/// longest form before its embedded unit ordinal.
pub const ARABIC_ORDINALS: [(&str, u32); 27] = [
    ("الحادية والعشرون", 21),
    ("الثانية والعشرون", 22),
    ("الثالثة والعشرون", 23),
    ("الرابعة والعشرون", 24),
    ("الخامسة والعشرون", 25),
    ("السادسة والعشرون", 26),
    ("السابعة والعشرون", 27),
    ("الحادية عشرة", 11),
    ("الثانية عشرة", 12),
    ("الثالثة عشرة", 13),
    ("الرابعة عشرة", 14),
    ("الخامسة عشرة", 15),
    ("السادسة عشرة", 16),
    ("السابعة عشرة", 17),
    ("الثامنة عشرة", 18),
    ("التاسعة عشرة", 19),
    ("العشرون", 20),
    ("الأولى", 1),
    ("الثانية", 2),
    ("الثالثة", 3),
    ("الرابعة", 4),
    ("الخامسة", 5),
    ("السادسة", 6),
    ("السابعة", 7),
    ("الثامنة", 8),
    ("التاسعة", 9),
    ("العاشرة", 10),
];

/// English ordinals, compound forms first for the same reason.
pub const ENGLISH_ORDINALS: [(&str, u32); 27] = [
    ("twenty-first", 21),
    ("twenty-second", 22),
    ("twenty-third", 23),
    ("twenty-fourth", 24),
    ("twenty-fifth", 25),
    ("twenty-sixth", 26),
    ("twenty-seventh", 27),
    ("eleventh", 11),
    ("twelfth", 12),
    ("thirteenth", 13),
    ("fourteenth", 14),
    ("fifteenth", 15),
    ("sixteenth", 16),
    ("seventeenth", 17),
    ("eighteenth", 18),
    ("nineteenth", 19),
    ("twentieth", 20),
    ("first", 1),
    ("second", 2),
    ("third", 3),
    ("fourth", 4),
    ("fifth", 5),
    ("sixth", 6),
    ("seventh", 7),
    ("eighth", 8),
    ("ninth", 9),
    ("tenth", 10),
];

/// Value of an Arabic ordinal word, if known.
pub fn arabic_ordinal_value(word: &str) -> Option<u32> {
    ARABIC_ORDINALS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, v)| *v)
}

/// Value of an English ordinal word, if known.
pub fn english_ordinal_value(word: &str) -> Option<u32> {
    ENGLISH_ORDINALS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, v)| *v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_cover_one_through_twenty_seven() {
        for table in [&ARABIC_ORDINALS[..], &ENGLISH_ORDINALS[..]] {
            let mut values: Vec<u32> = table.iter().map(|(_, v)| *v).collect();
            values.sort_unstable();
            assert_eq!(values, (1..=27).collect::<Vec<_>>());
        }
    }

    #[test]
    fn compound_forms_precede_their_unit_ordinals() {
        // "السابعة والعشرون" must be listed before "السابعة", otherwise an
        // alternation would resolve 27 as 7.
        let pos = |w: &str| {
            ARABIC_ORDINALS
                .iter()
                .position(|(word, _)| *word == w)
                .unwrap()
        };
        assert!(pos("السابعة والعشرون") < pos("السابعة"));
        let pos_en = |w: &str| {
            ENGLISH_ORDINALS
                .iter()
                .position(|(word, _)| *word == w)
                .unwrap()
        };
        assert!(pos_en("twenty-seventh") < pos_en("seventh"));
    }

    #[test]
    fn lookup_round_trips() {
        assert_eq!(arabic_ordinal_value("السابعة والعشرون"), Some(27));
        assert_eq!(english_ordinal_value("twenty-seventh"), Some(27));
        assert_eq!(arabic_ordinal_value("الثلاثون"), None);
        assert_eq!(english_ordinal_value("thirtieth"), None);
    }
}
