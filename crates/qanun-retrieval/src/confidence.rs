//! Confidence scoring: a pure function of retrieval quality.
//!
//! Not a probability. Zero grounding means zero confidence, never a
//! default-high value; any grounding lands in [70, 95].

/// Score how much retrieved grounding supports an answer.
///
/// `base = 70` when any document was retrieved, else the score is 0.
/// `score = min(base + min(count * 10, 30), 95)`, plus 10 (still capped
/// at 95) when more than 500 characters of context were assembled.
pub fn score(document_count: usize, context_len: usize) -> u8 {
    if document_count == 0 {
        return 0;
    }
    let mut score = 70 + (document_count * 10).min(30);
    if context_len > 500 {
        score += 10;
    }
    score.min(95) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_grounding_is_zero() {
        assert_eq!(score(0, 0), 0);
        assert_eq!(score(0, 10_000), 0);
    }

    #[test]
    fn exact_values_across_the_document_axis() {
        assert_eq!(score(1, 0), 80);
        assert_eq!(score(2, 0), 90);
        assert_eq!(score(3, 0), 95);
        assert_eq!(score(5, 0), 95);
    }

    #[test]
    fn long_context_bonus_respects_the_cap() {
        assert_eq!(score(1, 500), 80); // boundary: not strictly greater
        assert_eq!(score(1, 501), 90);
        assert_eq!(score(3, 501), 95);
    }

    #[test]
    fn grounded_scores_stay_in_band() {
        for count in 1..=20 {
            for len in [0, 100, 501, 100_000] {
                let s = score(count, len);
                assert!((70..=95).contains(&s), "score({count}, {len}) = {s}");
            }
        }
    }
}
