use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that is not a precomposed Hangul syllable, a Latin-script letter or an ASCII digit.
static NON_NAME_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\x{AC00}-\x{D7A3}\p{Latin}0-9]+").expect("name character class is a valid regex")
});

/// Reduce a name or query to the canonical form every comparison runs on.
///
/// Punctuation, whitespace, combining marks, standalone jamo and any other
/// script are dropped. Latin letters, accented ones included, are lower-cased
/// before stripping, so a lowercase mapping that emits a combining mark (`İ`)
/// still leaves a stable form. Both the query and every indexed name must go
/// through this function before they are compared.
///
/// ```rust
/// use ireum::normalize;
///
/// assert_eq!(normalize("  Golden-Dragon BBQ! "), "goldendragonbbq");
/// assert_eq!(normalize("교촌 치킨 (강남점)"), "교촌치킨강남점");
/// assert_eq!(normalize("Café Über"), "caféüber");
/// assert_eq!(normalize("?!"), "");
/// ```
pub fn normalize(text: &str) -> String {
    NON_NAME_CHARS
        .replace_all(&text.trim().to_lowercase(), "")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation_and_whitespace() {
        assert_eq!(normalize("Golden Dragon, BBQ."), "goldendragonbbq");
        assert_eq!(normalize("\tA & W\n"), "aw");
    }

    #[test]
    fn test_keeps_hangul_and_digits() {
        assert_eq!(normalize("스타벅스 2호점"), "스타벅스2호점");
        assert_eq!(normalize("7-Eleven 역삼점"), "7eleven역삼점");
    }

    #[test]
    fn test_drops_standalone_jamo_and_other_scripts() {
        // Compatibility jamo are not syllable blocks
        assert_eq!(normalize("ㅋㅋ맛집"), "맛집");
        assert_eq!(normalize("寿司 Sushi"), "sushi");
    }

    #[test]
    fn test_keeps_accented_latin_letters() {
        assert_eq!(normalize("Café Über"), "caféüber");
        assert_eq!(normalize("ÉCOLE Crêperie"), "écolecrêperie");
        // Lowercase İ is i followed by a combining dot, which is stripped
        assert_eq!(normalize("İstanbul Kebab"), "istanbulkebab");
        // Combining marks on their own are not letters
        assert_eq!(normalize("Cafe\u{301}"), "cafe");
    }

    #[test]
    fn test_empty_and_symbol_only_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("!@#$%^&*()"), "");
    }

    #[test]
    fn test_is_idempotent() {
        for text in ["  The Golden  Dragon's Den ", "İSTANBUL Ünlü Döner", "Straße 7"] {
            let once = normalize(text);
            assert_eq!(normalize(&once), once);
        }
    }
}
