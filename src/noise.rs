//! Spelling-error injection over Hangul sentences.
//!
//! Four site transforms edit exactly one syllable of a sentence at the jamo
//! level (drop the coda, or swap the onset, coda or nucleus for a different
//! one). The compound transform picks one whitespace-delimited word and runs
//! two site transforms over it back to back.
//!
//! All randomness flows through a [`RandomSource`] owned by the
//! [`ErrorInjector`], so a seeded generator or a [`ScriptedSource`] makes the
//! chosen sites and replacement jamo reproducible.
//!
//! # Examples
//!
//! ```
//! use hangul_augment::noise::{ErrorInjector, Transform};
//!
//! let mut injector = ErrorInjector::seeded(42);
//! let noisy = injector.apply(Transform::ReplaceNucleus, "안녕하세요");
//! assert_ne!(noisy, "안녕하세요");
//! assert_eq!(noisy.chars().count(), 5);
//! ```

pub mod injector;
pub mod random;
pub mod transform;
pub mod word;

pub use injector::*;
pub use random::*;
pub use transform::*;
pub use word::*;
