//! Algorithmic Hangul syllable decomposition.
//!
//! A precomposed syllable block encodes its components arithmetically:
//!
//! ```text
//! code point = 0xAC00 + ((lead * 21) + vowel) * 28 + trail
//! ```
//!
//! where `trail == 0` means the syllable has no final consonant. Inverting the
//! formula recovers the three jamo without a lookup table per syllable.
//! Comparing strings at the jamo level lets a dropped final consonant cost one
//! unit of edit distance instead of an entire mismatched syllable.

/// First precomposed Hangul syllable (`가`).
const SYLLABLE_BASE: u32 = 0xAC00;
/// Last precomposed Hangul syllable (`힣`).
const SYLLABLE_LAST: u32 = 0xD7A3;

const VOWEL_COUNT: u32 = 21;
const TRAIL_COUNT: u32 = 28;
const SYLLABLES_PER_LEAD: u32 = VOWEL_COUNT * TRAIL_COUNT;

/// Emitted after the jamo of every syllable so syllable boundaries stay visible
/// to the edit-distance alignment.
pub const SYLLABLE_BOUNDARY: char = 'ᴥ';

// Compatibility jamo, in composition-index order.
const LEADS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];
const VOWELS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];
// Index 0 ("no final consonant") has no glyph, so this table starts at trail index 1.
const TRAILS: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ',
    'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// The components of one Hangul syllable block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jamo {
    /// Initial consonant (초성)
    pub lead: char,
    /// Medial vowel (중성)
    pub vowel: char,
    /// Optional final consonant (종성)
    pub trail: Option<char>,
}

impl Jamo {
    /// Iterate the components in writing order.
    pub fn units(self) -> impl Iterator<Item = char> {
        [Some(self.lead), Some(self.vowel), self.trail]
            .into_iter()
            .flatten()
    }
}

/// Whether `c` is a precomposed Hangul syllable block (U+AC00..=U+D7A3).
pub const fn is_hangul_syllable(c: char) -> bool {
    let code = c as u32;
    code >= SYLLABLE_BASE && code <= SYLLABLE_LAST
}

/// Whether `text` contains at least one Hangul syllable block.
pub fn contains_hangul(text: &str) -> bool {
    text.chars().any(is_hangul_syllable)
}

/// Split a syllable block into its jamo, or `None` for any other character.
pub fn decompose_syllable(c: char) -> Option<Jamo> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = c as u32 - SYLLABLE_BASE;
    let lead = offset / SYLLABLES_PER_LEAD;
    let vowel = (offset % SYLLABLES_PER_LEAD) / TRAIL_COUNT;
    let trail = offset % TRAIL_COUNT;

    Some(Jamo {
        lead: LEADS[lead as usize],
        vowel: VOWELS[vowel as usize],
        trail: trail
            .checked_sub(1)
            .map(|index| TRAILS[index as usize]),
    })
}

/// Expand every Hangul syllable in `text` into its jamo followed by
/// [`SYLLABLE_BOUNDARY`]. Every other character is copied through unchanged.
///
/// ```rust
/// use ireum::decompose;
///
/// assert_eq!(decompose("한글"), "ㅎㅏㄴᴥㄱㅡㄹᴥ");
/// assert_eq!(decompose("bbq"), "bbq");
/// ```
pub fn decompose(text: &str) -> String {
    // Worst case is four units per syllable.
    let mut out = String::with_capacity(text.len() * 4);
    for c in text.chars() {
        match decompose_syllable(c) {
            Some(jamo) => {
                out.extend(jamo.units());
                out.push(SYLLABLE_BOUNDARY);
            }
            None => out.push(c),
        }
    }
    out
}
