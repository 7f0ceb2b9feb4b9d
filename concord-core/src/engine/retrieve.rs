//! Query execution.

use concord_types::{Match, SentenceId};

use crate::engine::scoring;
use crate::engine::types::Concord;

impl Concord {
    /// Answers `query` with the verbatim text of the best-matching
    /// sentence, or the configured fallback message.
    ///
    /// Always returns a usable string; the fallback covers an empty
    /// corpus, the no-overlap case and, when a query-length cap is
    /// configured, an over-long query alike.
    pub fn retrieve(&mut self, query: &str) -> String {
        match self.best_match(query) {
            Some(m) => self.originals[m.sentence_id as usize].clone(),
            None => self.config.fallback_message.clone(),
        }
    }

    /// Scores `query` against every sentence and returns the winner.
    ///
    /// Winner selection follows the [`Match`] ordering: highest score
    /// first, and on equal scores the sentence earliest in the
    /// document, so identical inputs always answer with the same
    /// sentence. `None` means no sentence scored above zero and the
    /// caller should fall back.
    pub fn best_match(&mut self, query: &str) -> Option<Match> {
        self.query_count += 1;

        if self.is_empty() {
            tracing::debug!("retrieval against empty corpus");
            return None;
        }

        if query.len() > self.config.max_query_length {
            tracing::debug!(
                query_bytes = query.len(),
                cap = self.config.max_query_length,
                "query over length cap rejected"
            );
            return None;
        }

        self.query_set.clear();
        for token in self.normalizer.normalize(query) {
            self.query_set.insert(token);
        }

        let best = self
            .token_sets
            .iter()
            .enumerate()
            .map(|(i, set)| Match::new(i as SentenceId, scoring::jaccard(&self.query_set, set)))
            .filter(|m| m.score > 0.0)
            .max();

        match &best {
            Some(m) => tracing::debug!(
                sentence = m.sentence_id,
                score = m.score,
                "best match found"
            ),
            None => tracing::debug!("no sentence scored above zero"),
        }

        best
    }
}
