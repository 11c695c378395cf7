//! Randomness providers for the error injector.

use std::collections::VecDeque;

use rand::Rng;

/// Source of uniform index draws.
///
/// Every random decision the injector makes (which site, which replacement
/// jamo, which word, which transforms) is a single `choose_index` call.
pub trait RandomSource {
    /// Pick an index uniformly from `0..len`. `len` is never zero.
    fn choose_index(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn choose_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// A source that replays a fixed script of draws.
///
/// Each scripted value is reduced modulo the requested `len`, and once the
/// script runs out every draw returns 0. Useful for pinning exact mutation
/// sites and replacement values.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: VecDeque<usize>,
    draws: usize,
}

impl ScriptedSource {
    /// Create a source that yields `script` in order.
    pub fn new<I: IntoIterator<Item = usize>>(script: I) -> Self {
        ScriptedSource {
            script: script.into_iter().collect(),
            draws: 0,
        }
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedSource {
    fn choose_index(&mut self, len: usize) -> usize {
        self.draws += 1;
        self.script.pop_front().map_or(0, |value| value % len)
    }
}
