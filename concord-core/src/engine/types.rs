//! Core engine type and its runtime metrics.

use concord_types::{RetrieveConfig, Token};
use rustc_hash::FxHashSet;

use crate::analyzer::Normalizer;

/// Sentence-retrieval engine over a fixed reference document.
///
/// Holds three index-aligned sequences: the original sentence text, the
/// normalized token sequence per sentence and the cached token set per
/// sentence. Position `i` in each refers to the same sentence, so a
/// winning score maps straight back to verbatim text.
///
/// The engine keeps a reusable query buffer and retrieval takes
/// `&mut self`, so it is intentionally not `Send`/`Sync`. Wrap it in a
/// mutex or give each thread its own instance.
pub struct Concord {
    /// Verbatim sentence text, in document order.
    pub(crate) originals: Vec<String>,
    /// Normalized token sequence per sentence.
    pub(crate) token_lists: Vec<Vec<Token>>,
    /// Cached token set per sentence, built once at ingest.
    pub(crate) token_sets: Vec<FxHashSet<Token>>,
    pub(crate) normalizer: Normalizer,
    pub(crate) config: RetrieveConfig,
    /// Reusable query token buffer, cleared per retrieval.
    pub(crate) query_set: FxHashSet<Token>,
    pub(crate) query_count: u64,
    pub(crate) sentences_ingested: u64,
}

impl Concord {
    /// Creates an empty engine with the default retrieval config.
    pub fn new(normalizer: Normalizer) -> Self {
        Self::with_config(normalizer, RetrieveConfig::default())
    }

    /// Creates an empty engine with a custom retrieval config.
    pub fn with_config(normalizer: Normalizer, config: RetrieveConfig) -> Self {
        Self {
            originals: Vec::new(),
            token_lists: Vec::new(),
            token_sets: Vec::new(),
            normalizer,
            config,
            query_set: FxHashSet::default(),
            query_count: 0,
            sentences_ingested: 0,
        }
    }

    /// Number of sentences in the corpus.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.originals.len()
    }

    /// Returns `true` when the corpus holds no sentences.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.originals.is_empty()
    }

    /// Verbatim text of sentence `id`, if it exists.
    #[inline(always)]
    pub fn original(&self, id: concord_types::SentenceId) -> Option<&str> {
        self.originals.get(id as usize).map(String::as_str)
    }

    /// Normalized tokens of sentence `id`, if it exists.
    #[inline(always)]
    pub fn tokens(&self, id: concord_types::SentenceId) -> Option<&[Token]> {
        self.token_lists.get(id as usize).map(Vec::as_slice)
    }

    /// The retrieval configuration this engine was built with.
    #[inline(always)]
    pub fn config(&self) -> &RetrieveConfig {
        &self.config
    }

    /// Drops the corpus but keeps the normalizer, config and lifetime
    /// counters.
    pub fn clear(&mut self) {
        self.originals.clear();
        self.token_lists.clear();
        self.token_sets.clear();
    }

    /// Snapshot of lifetime operation counters.
    pub fn metrics(&self) -> EngineMetrics {
        EngineMetrics {
            sentences_ingested: self.sentences_ingested,
            queries_executed: self.query_count,
            current_sentence_count: self.originals.len(),
        }
    }
}

/// Lifetime operation counters for a [`Concord`] engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineMetrics {
    /// Sentences ingested over the engine's lifetime, across clears.
    pub sentences_ingested: u64,
    /// Retrievals executed, counting ones that fell back.
    pub queries_executed: u64,
    /// Sentences currently held.
    pub current_sentence_count: usize,
}
