//! # hangul-augment
//!
//! Synthetic spelling-error generation for Hangul text.
//!
//! Well-formed sentences are corrupted at the jamo level (a dropped coda, a
//! swapped onset, coda or nucleus, or two such errors inside one word) and
//! each corrupted variant is paired with its original, producing training
//! data for spelling-correction models.
//!
//! - [`syllable`]: precomposed syllable <-> (onset, nucleus, coda) codec
//! - [`noise`]: the error transforms and the injector that applies them
//! - [`dataset`] and [`augment`]: CSV fan-out from source rows to training pairs

pub mod augment;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod noise;
pub mod syllable;

pub mod prelude {
    pub use crate::augment::{AugmentStats, Augmenter};
    pub use crate::error::{AugmentError, Result};
    pub use crate::noise::{ErrorInjector, RandomSource, ScriptedSource, SiteTransform, Transform};
    pub use crate::syllable::{Syllable, compose, decompose, is_in_alphabet};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
