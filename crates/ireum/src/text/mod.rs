//! Text primitives shared by the index and the match cascade.
//!
//! Every comparison in the crate runs on [`normalize`]d text; the phonetic
//! stage additionally [`decompose`]s it into jamo before scoring with
//! [`similarity`].

mod hangul;
mod normalize;
mod similarity;

pub use hangul::{
    Jamo, SYLLABLE_BOUNDARY, contains_hangul, decompose, decompose_syllable, is_hangul_syllable,
};
pub use normalize::normalize;
pub(crate) use similarity::similarity_chars;
pub use similarity::{is_match, similarity};

/// Canonical then phonetic form of `text`, the representation the fuzzy stage compares.
pub fn phonetic_key(text: &str) -> String {
    decompose(&normalize(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phonetic_key_normalizes_first() {
        assert_eq!(phonetic_key(" 한 글! "), "ㅎㅏㄴᴥㄱㅡㄹᴥ");
        assert_eq!(phonetic_key("BBQ 치킨"), phonetic_key("bbq치킨"));
    }

    #[test]
    fn test_spacing_variants_score_perfectly() {
        let indexed = phonetic_key("교촌 치킨");
        let typed = phonetic_key("교촌치킨");
        assert_eq!(similarity(&indexed, &typed), 1.0);
    }
}
