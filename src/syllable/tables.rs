//! Jamo tables in Unicode composition order.

/// Leading consonants (choseong).
pub const ONSETS: [&str; 19] = [
    "ㄱ", "ㄲ", "ㄴ", "ㄷ", "ㄸ", "ㄹ", "ㅁ", "ㅂ", "ㅃ", "ㅅ", "ㅆ", "ㅇ", "ㅈ", "ㅉ", "ㅊ", "ㅋ",
    "ㅌ", "ㅍ", "ㅎ",
];

/// Vowels (jungseong).
pub const NUCLEI: [&str; 21] = [
    "ㅏ", "ㅐ", "ㅑ", "ㅒ", "ㅓ", "ㅔ", "ㅕ", "ㅖ", "ㅗ", "ㅘ", "ㅙ", "ㅚ", "ㅛ", "ㅜ", "ㅝ", "ㅞ",
    "ㅟ", "ㅠ", "ㅡ", "ㅢ", "ㅣ",
];

/// Trailing consonants (jongseong). Index 0 is the empty coda.
pub const CODAS: [&str; 28] = [
    "", "ㄱ", "ㄲ", "ㄳ", "ㄴ", "ㄵ", "ㄶ", "ㄷ", "ㄹ", "ㄺ", "ㄻ", "ㄼ", "ㄽ", "ㄾ", "ㄿ", "ㅀ",
    "ㅁ", "ㅂ", "ㅄ", "ㅅ", "ㅆ", "ㅇ", "ㅈ", "ㅊ", "ㅋ", "ㅌ", "ㅍ", "ㅎ",
];

/// Number of onsets.
pub const ONSET_COUNT: usize = ONSETS.len();

/// Number of nuclei.
pub const NUCLEUS_COUNT: usize = NUCLEI.len();

/// Number of codas, including the empty one.
pub const CODA_COUNT: usize = CODAS.len();

/// Coda index meaning "no trailing consonant".
pub const NO_CODA: usize = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(ONSET_COUNT, 19);
        assert_eq!(NUCLEUS_COUNT, 21);
        assert_eq!(CODA_COUNT, 28);
        assert_eq!(CODAS[NO_CODA], "");
    }

    #[test]
    fn test_table_entries_are_single_jamo() {
        for symbol in ONSETS.iter().chain(NUCLEI.iter()).chain(CODAS[1..].iter()) {
            assert_eq!(symbol.chars().count(), 1, "unexpected entry {symbol:?}");
        }
    }
}
