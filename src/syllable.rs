//! Hangul syllable decomposition and recomposition.
//!
//! Every precomposed syllable in U+AC00..=U+D7A3 is an arithmetic encoding of
//! an onset, a nucleus and an optional coda. This module exposes that encoding
//! as a [`Syllable`] triple and the three jamo tables that name its indices.

pub mod codec;
pub mod tables;

pub use codec::*;
pub use tables::*;
