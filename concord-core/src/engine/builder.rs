//! Corpus construction.

use rustc_hash::FxHashSet;

use crate::analyzer::{split_sentences, Normalizer};
use crate::engine::types::Concord;
use concord_types::{RetrieveConfig, Token};

impl Concord {
    /// Builds an engine directly from a document.
    pub fn from_document(document: &str, normalizer: Normalizer) -> Self {
        Self::from_document_with_config(document, normalizer, RetrieveConfig::default())
    }

    /// Builds an engine from a document with a custom retrieval config.
    pub fn from_document_with_config(
        document: &str,
        normalizer: Normalizer,
        config: RetrieveConfig,
    ) -> Self {
        let mut engine = Self::with_config(normalizer, config);
        engine.ingest(document);
        engine
    }

    /// Segments `document` into sentences and appends them to the
    /// corpus.
    ///
    /// Every sentence is kept, including ones that normalize to no
    /// tokens; they simply never score above zero. An empty document
    /// adds nothing and the engine answers every query with the
    /// fallback.
    pub fn ingest(&mut self, document: &str) {
        for sentence in split_sentences(document) {
            let tokens = self.normalizer.normalize(sentence);
            let set: FxHashSet<Token> = tokens.iter().cloned().collect();

            self.originals.push(sentence.to_string());
            self.token_lists.push(tokens);
            self.token_sets.push(set);
            self.sentences_ingested += 1;
        }

        debug_assert_eq!(self.originals.len(), self.token_lists.len());
        debug_assert_eq!(self.originals.len(), self.token_sets.len());

        tracing::debug!(
            sentences = self.originals.len(),
            document_bytes = document.len(),
            "corpus built"
        );
    }
}
