//! Arithmetic codec between precomposed syllables and jamo index triples.
//!
//! A syllable's codepoint is
//! `0xAC00 + onset * 21 * 28 + nucleus * 28 + coda`, so decomposition is a
//! pair of divisions and recomposition is the inverse sum.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::syllable::tables::{CODA_COUNT, CODAS, NO_CODA, NUCLEI, NUCLEUS_COUNT, ONSET_COUNT, ONSETS};

/// First precomposed syllable, `가`.
pub const SYLLABLE_BASE: u32 = 0xAC00;

/// Last precomposed syllable, `힣`.
pub const SYLLABLE_LAST: u32 = SYLLABLE_BASE + (ONSET_COUNT * NUCLEUS_COUNT * CODA_COUNT) as u32 - 1;

/// A syllable split into its jamo table indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Syllable {
    /// Index into [`ONSETS`], 0..=18.
    pub onset: usize,
    /// Index into [`NUCLEI`], 0..=20.
    pub nucleus: usize,
    /// Index into [`CODAS`], 0..=27, where 0 is no coda.
    pub coda: usize,
}

impl Syllable {
    /// Create a new triple. Indices must lie within the table sizes.
    pub fn new(onset: usize, nucleus: usize, coda: usize) -> Self {
        Syllable {
            onset,
            nucleus,
            coda,
        }
    }

    /// Whether the syllable carries a trailing consonant.
    pub fn has_coda(&self) -> bool {
        self.coda != NO_CODA
    }

    pub fn with_onset(self, onset: usize) -> Self {
        Syllable { onset, ..self }
    }

    pub fn with_nucleus(self, nucleus: usize) -> Self {
        Syllable { nucleus, ..self }
    }

    pub fn with_coda(self, coda: usize) -> Self {
        Syllable { coda, ..self }
    }

    /// Recompose into a precomposed syllable character.
    pub fn to_char(self) -> char {
        compose(self.onset, self.nucleus, self.coda)
    }

    /// The jamo symbols named by this triple; the coda is empty when absent.
    pub fn jamo(&self) -> [&'static str; 3] {
        [ONSETS[self.onset], NUCLEI[self.nucleus], CODAS[self.coda]]
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [onset, nucleus, coda] = self.jamo();
        write!(
            f,
            "({}, {}, {}) {}{}{}",
            self.onset, self.nucleus, self.coda, onset, nucleus, coda
        )
    }
}

/// Check whether a character is a precomposed Hangul syllable.
pub fn is_in_alphabet(ch: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(ch as u32))
}

/// Split a syllable into its jamo indices.
///
/// Returns `None` for anything outside U+AC00..=U+D7A3. Callers treat that as
/// "not eligible for mutation", never as an error.
///
/// # Examples
///
/// ```
/// use hangul_augment::syllable::{decompose, Syllable};
///
/// assert_eq!(decompose('한'), Some(Syllable::new(18, 0, 4)));
/// assert_eq!(decompose('!'), None);
/// ```
pub fn decompose(ch: char) -> Option<Syllable> {
    if !is_in_alphabet(ch) {
        return None;
    }

    let offset = (ch as u32 - SYLLABLE_BASE) as usize;
    Some(Syllable {
        onset: offset / (NUCLEUS_COUNT * CODA_COUNT),
        nucleus: (offset / CODA_COUNT) % NUCLEUS_COUNT,
        coda: offset % CODA_COUNT,
    })
}

/// Build the syllable character for a jamo index triple.
///
/// Out-of-range indices are a caller bug; they are only checked in debug
/// builds and otherwise produce an arbitrary character.
pub fn compose(onset: usize, nucleus: usize, coda: usize) -> char {
    debug_assert!(onset < ONSET_COUNT, "onset index {onset} out of range");
    debug_assert!(nucleus < NUCLEUS_COUNT, "nucleus index {nucleus} out of range");
    debug_assert!(coda < CODA_COUNT, "coda index {coda} out of range");

    let offset = onset * NUCLEUS_COUNT * CODA_COUNT + nucleus * CODA_COUNT + coda;
    char::from_u32(SYLLABLE_BASE + offset as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
}
