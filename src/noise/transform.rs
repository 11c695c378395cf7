//! The error transforms and their per-syllable rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AugmentError;
use crate::noise::random::RandomSource;
use crate::syllable::{CODA_COUNT, NO_CODA, NUCLEUS_COUNT, ONSET_COUNT, Syllable, decompose};

/// A transform that edits exactly one syllable of its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SiteTransform {
    /// Remove the trailing consonant of a syllable that has one.
    DropCoda,
    /// Swap the leading consonant for a different one.
    ReplaceOnset,
    /// Swap the trailing consonant for a different one, possibly adding or removing it.
    ReplaceCoda,
    /// Swap the vowel for a different one.
    ReplaceNucleus,
}

impl SiteTransform {
    /// Site transforms in their canonical order.
    pub const ALL: [SiteTransform; 4] = [
        SiteTransform::DropCoda,
        SiteTransform::ReplaceOnset,
        SiteTransform::ReplaceCoda,
        SiteTransform::ReplaceNucleus,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SiteTransform::DropCoda => "drop-coda",
            SiteTransform::ReplaceOnset => "replace-onset",
            SiteTransform::ReplaceCoda => "replace-coda",
            SiteTransform::ReplaceNucleus => "replace-nucleus",
        }
    }

    /// Whether a syllable is an eligible mutation site for this transform.
    pub fn is_candidate(&self, syllable: Syllable) -> bool {
        match self {
            SiteTransform::DropCoda => syllable.has_coda(),
            _ => true,
        }
    }

    /// Char indices of every eligible site in `chars`, in order.
    pub fn candidates(&self, chars: &[char]) -> Vec<usize> {
        chars
            .iter()
            .enumerate()
            .filter(|(_, ch)| decompose(**ch).is_some_and(|syllable| self.is_candidate(syllable)))
            .map(|(position, _)| position)
            .collect()
    }

    /// Apply this transform's rule to one syllable.
    ///
    /// Replacement indices are drawn uniformly from the table range with the
    /// current value filtered out, so the result always differs from the input.
    pub fn mutate<R: RandomSource>(&self, syllable: Syllable, source: &mut R) -> Syllable {
        match self {
            SiteTransform::DropCoda => syllable.with_coda(NO_CODA),
            SiteTransform::ReplaceOnset => {
                syllable.with_onset(pick_other(ONSET_COUNT, syllable.onset, source))
            }
            SiteTransform::ReplaceCoda => {
                syllable.with_coda(pick_other(CODA_COUNT, syllable.coda, source))
            }
            SiteTransform::ReplaceNucleus => {
                syllable.with_nucleus(pick_other(NUCLEUS_COUNT, syllable.nucleus, source))
            }
        }
    }
}

impl fmt::Display for SiteTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Uniform pick from `0..count` excluding `current`.
fn pick_other<R: RandomSource>(count: usize, current: usize, source: &mut R) -> usize {
    let choices: Vec<usize> = (0..count).filter(|&index| index != current).collect();
    choices[source.choose_index(choices.len())]
}

/// One of the five augmentation transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transform {
    DropCoda,
    ReplaceOnset,
    ReplaceCoda,
    ReplaceNucleus,
    /// Two site transforms applied in sequence to one word.
    Compound,
}

impl Transform {
    /// All transforms in dataset output order.
    pub const ALL: [Transform; 5] = [
        Transform::DropCoda,
        Transform::ReplaceOnset,
        Transform::ReplaceCoda,
        Transform::ReplaceNucleus,
        Transform::Compound,
    ];

    pub fn name(&self) -> &'static str {
        match self.site() {
            Some(site) => site.name(),
            None => "compound",
        }
    }

    /// The site transform this maps to, or `None` for [`Transform::Compound`].
    pub fn site(&self) -> Option<SiteTransform> {
        match self {
            Transform::DropCoda => Some(SiteTransform::DropCoda),
            Transform::ReplaceOnset => Some(SiteTransform::ReplaceOnset),
            Transform::ReplaceCoda => Some(SiteTransform::ReplaceCoda),
            Transform::ReplaceNucleus => Some(SiteTransform::ReplaceNucleus),
            Transform::Compound => None,
        }
    }

    /// Check that `transforms` is a non-empty subsequence of [`Transform::ALL`].
    ///
    /// Output rows always follow `ALL` order, so a selection may leave
    /// transforms out but may not reorder or repeat them.
    pub fn check_selection(transforms: &[Transform]) -> Result<(), AugmentError> {
        if transforms.is_empty() {
            return Err(AugmentError::config("at least one transform is required"));
        }

        let mut remaining = Transform::ALL.iter();
        for transform in transforms {
            if !remaining.any(|t| t == transform) {
                return Err(AugmentError::config(format!(
                    "transform '{transform}' is repeated or out of order; expected order is {}",
                    Transform::ALL.map(|t| t.name()).join(", ")
                )));
            }
        }
        Ok(())
    }
}

impl From<SiteTransform> for Transform {
    fn from(site: SiteTransform) -> Self {
        match site {
            SiteTransform::DropCoda => Transform::DropCoda,
            SiteTransform::ReplaceOnset => Transform::ReplaceOnset,
            SiteTransform::ReplaceCoda => Transform::ReplaceCoda,
            SiteTransform::ReplaceNucleus => Transform::ReplaceNucleus,
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transform {
    type Err = AugmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Transform::ALL
            .into_iter()
            .find(|transform| transform.name() == s.trim())
            .ok_or_else(|| AugmentError::invalid_argument(format!("unknown transform '{s}'")))
    }
}
