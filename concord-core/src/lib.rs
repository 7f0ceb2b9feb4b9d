//! Concord: lexical question answering over a fixed reference document.
//!
//! Concord answers a natural-language query with the sentence from a
//! reference document that is most lexically similar to it, verbatim.
//! There is no ranking model and no embedding store; similarity is the
//! Jaccard index over normalized token sets, which makes every answer
//! explainable by inspection.
//!
//! Pipeline:
//!
//! 1. [`analyzer::split_sentences`] segments the document
//! 2. [`analyzer::Normalizer`] reduces sentences and queries to
//!    canonical tokens (lowercase, stopword-filtered, lemmatized)
//! 3. [`Concord`] caches a token set per sentence and scans them per
//!    query, answering with the first sentence at the maximum score
//!
//! When nothing overlaps, the engine answers with a configurable
//! fallback message instead of failing.
//!
//! # Quick start
//!
//! ```
//! use concord_core::Concord;
//! use concord_core::analyzer::{Lexicon, Normalizer};
//!
//! # fn main() -> Result<(), concord_core::analyzer::LexiconError> {
//! let normalizer = Normalizer::new(Lexicon::load()?);
//! let mut engine = Concord::from_document("Cats are great. Dogs are loyal.", normalizer);
//!
//! assert_eq!(engine.retrieve("Are cats great?"), "Cats are great.");
//! assert_eq!(engine.retrieve("purple elephants"), "I couldn't find a relevant answer.");
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod engine;
pub mod source;

pub use engine::{Concord, CorpusStats, EngineMetrics};
