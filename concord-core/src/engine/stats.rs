//! Corpus statistics.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::engine::types::Concord;

/// Summary of what the engine currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusStats {
    /// Sentences in the corpus.
    pub sentences: usize,
    /// Normalized tokens across all sentences, duplicates counted.
    pub total_tokens: usize,
    /// Distinct normalized tokens across the corpus.
    pub vocabulary_size: usize,
    /// Bytes of verbatim sentence text.
    pub text_bytes: usize,
}

impl Concord {
    /// Computes statistics over the current corpus.
    ///
    /// Walks every token list, so this is a diagnostic call rather
    /// than something to run per query.
    pub fn stats(&self) -> CorpusStats {
        let total_tokens = self.token_lists.iter().map(Vec::len).sum();

        let mut vocabulary: FxHashSet<&str> = FxHashSet::default();
        for tokens in &self.token_lists {
            for token in tokens {
                vocabulary.insert(token.as_str());
            }
        }

        CorpusStats {
            sentences: self.originals.len(),
            total_tokens,
            vocabulary_size: vocabulary.len(),
            text_bytes: self.originals.iter().map(String::len).sum(),
        }
    }
}

impl fmt::Display for CorpusStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} sentences, {} tokens ({} distinct), {} bytes of text",
            self.sentences, self.total_tokens, self.vocabulary_size, self.text_bytes
        )
    }
}
