//! Sentence retrieval engine.
//!
//! [`Concord`] ingests a reference document once, caches a normalized
//! token set per sentence and answers queries by linear Jaccard scan.
//! The answer is always the verbatim sentence text or the configured
//! fallback message, never an error.
//!
//! Retrieval takes `&mut self` because the engine reuses a query token
//! buffer across calls. One engine per thread; there is no interior
//! locking.

mod builder;
mod retrieve;
mod scoring;
mod stats;
mod types;

pub use stats::CorpusStats;
pub use types::{Concord, EngineMetrics};
