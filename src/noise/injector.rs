//! The error injector: site selection, splicing and the compound transform.

use log::{debug, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::noise::random::RandomSource;
use crate::noise::transform::{SiteTransform, Transform};
use crate::noise::word::word_spans;
use crate::syllable::decompose;

/// Record of one single-syllable edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mutation {
    /// Char index of the edited syllable.
    pub position: usize,
    /// The syllable before the edit.
    pub before: char,
    /// The syllable after the edit.
    pub after: char,
}

/// Applies spelling-error transforms to sentences.
///
/// Every transform is total: when a sentence has no eligible site the input
/// is returned unchanged. Inputs are never modified in place.
#[derive(Debug, Clone)]
pub struct ErrorInjector<R: RandomSource> {
    source: R,
}

impl ErrorInjector<StdRng> {
    /// Create an injector with a reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        ErrorInjector::new(StdRng::seed_from_u64(seed))
    }

    /// Create an injector seeded from operating-system entropy.
    pub fn from_os_rng() -> Self {
        ErrorInjector::new(StdRng::from_os_rng())
    }
}

impl<R: RandomSource> ErrorInjector<R> {
    /// Create an injector that draws from `source`.
    pub fn new(source: R) -> Self {
        ErrorInjector { source }
    }

    pub fn source(&self) -> &R {
        &self.source
    }

    pub fn into_source(self) -> R {
        self.source
    }

    /// Apply `transform` to `sentence`.
    pub fn apply(&mut self, transform: Transform, sentence: &str) -> String {
        match transform.site() {
            Some(site) => self.apply_site(site, sentence),
            None => self.compound(sentence),
        }
    }

    /// Remove the coda of one randomly chosen syllable that has one.
    pub fn drop_coda(&mut self, sentence: &str) -> String {
        self.apply_site(SiteTransform::DropCoda, sentence)
    }

    /// Replace the onset of one randomly chosen syllable.
    pub fn replace_onset(&mut self, sentence: &str) -> String {
        self.apply_site(SiteTransform::ReplaceOnset, sentence)
    }

    /// Replace the coda of one randomly chosen syllable.
    pub fn replace_coda(&mut self, sentence: &str) -> String {
        self.apply_site(SiteTransform::ReplaceCoda, sentence)
    }

    /// Replace the nucleus of one randomly chosen syllable.
    pub fn replace_nucleus(&mut self, sentence: &str) -> String {
        self.apply_site(SiteTransform::ReplaceNucleus, sentence)
    }

    /// Apply a site transform, returning the sentence unchanged when it has
    /// no eligible syllable.
    pub fn apply_site(&mut self, transform: SiteTransform, sentence: &str) -> String {
        match self.mutate_site(transform, sentence) {
            Some((mutated, _)) => mutated,
            None => sentence.to_string(),
        }
    }

    /// Apply a site transform and report which syllable changed.
    ///
    /// Returns `None` when the sentence has no eligible syllable.
    pub fn mutate_site(
        &mut self,
        transform: SiteTransform,
        sentence: &str,
    ) -> Option<(String, Mutation)> {
        let mut chars: Vec<char> = sentence.chars().collect();
        let mutation = self.mutate_chars(transform, &mut chars)?;
        Some((chars.into_iter().collect(), mutation))
    }

    /// Edit one eligible syllable of `chars` in place.
    pub fn mutate_chars(&mut self, transform: SiteTransform, chars: &mut [char]) -> Option<Mutation> {
        let candidates = transform.candidates(chars);
        if candidates.is_empty() {
            trace!("{transform}: no candidate site");
            return None;
        }

        let position = candidates[self.source.choose_index(candidates.len())];
        let before = chars[position];
        let syllable = decompose(before)?;
        let mutated = transform.mutate(syllable, &mut self.source);
        let after = mutated.to_char();
        chars[position] = after;

        debug!("{transform}: position {position} {before} {syllable} -> {after} {mutated}");

        Some(Mutation {
            position,
            before,
            after,
        })
    }

    /// Pick one word and apply two independently drawn site transforms to it.
    ///
    /// The two draws may pick the same transform, in which case the second
    /// application works on the already-mutated word. Text outside the chosen
    /// word, whitespace included, is preserved byte for byte.
    pub fn compound(&mut self, sentence: &str) -> String {
        let spans = word_spans(sentence);
        if spans.is_empty() {
            trace!("compound: no word");
            return sentence.to_string();
        }

        let span = spans[self.source.choose_index(spans.len())].clone();
        let first = SiteTransform::ALL[self.source.choose_index(SiteTransform::ALL.len())];
        let second = SiteTransform::ALL[self.source.choose_index(SiteTransform::ALL.len())];

        let word = &sentence[span.clone()];
        let once = self.apply_site(first, word);
        let twice = self.apply_site(second, &once);

        debug!("compound: {first} then {second} on '{word}' -> '{twice}'");

        let mut result = String::with_capacity(sentence.len() - word.len() + twice.len());
        result.push_str(&sentence[..span.start]);
        result.push_str(&twice);
        result.push_str(&sentence[span.end..]);
        result
    }
}
