//! Text analysis pipeline.
//!
//! Three stages feed the retrieval engine:
//!
//! - [`Lexicon`]: immutable stopword and lemmatization tables, parsed
//!   once at startup from bundled assets
//! - [`split_sentences`]: document to sentence slices
//! - [`Normalizer`]: sentence or query text to canonical tokens
//!
//! Queries and corpus sentences go through the identical normalization
//! path; that symmetry is what makes set overlap meaningful.

pub mod lexicon;
pub mod normalizer;
pub mod segmenter;

pub use lexicon::{Lexicon, LexiconError};
pub use normalizer::Normalizer;
pub use segmenter::split_sentences;
