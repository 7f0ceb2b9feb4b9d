//! Text normalization: raw text to a canonical token sequence.
//!
//! This is the first stage of the matching pipeline. Both corpus
//! sentences and incoming queries pass through the same normalizer, so
//! "Are cats great?" and "Cats are great." reduce to the same tokens.
//!
//! Steps, in order:
//!
//! 1. Lowercase the input (Unicode-aware)
//! 2. Split into words on locale-aware word boundaries; this also
//!    discards segments consisting solely of punctuation
//! 3. Drop stopwords (members of the lexicon's closed set)
//! 4. Reduce each surviving word to its dictionary base form
//!
//! Output order follows original word order. Downstream scoring treats
//! the result as a set, but the sequence is preserved for fidelity.

use concord_types::Token;
use unicode_segmentation::UnicodeSegmentation;

use crate::analyzer::lexicon::Lexicon;

/// Text normalizer over an immutable [`Lexicon`].
///
/// The lexicon is injected once at construction and never mutated;
/// `normalize` is a pure function of its input.
///
/// # Examples
///
/// ```
/// use concord_core::analyzer::{Lexicon, Normalizer};
///
/// let normalizer = Normalizer::new(Lexicon::load().unwrap());
/// assert_eq!(normalizer.normalize("Are cats great?"), vec!["cat", "great"]);
/// assert!(normalizer.normalize("").is_empty());
/// ```
pub struct Normalizer {
    lexicon: Lexicon,
}

impl Normalizer {
    /// Creates a normalizer over the given lexicon.
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Normalizes `text` into a token sequence.
    ///
    /// Empty input (or input that is all stopwords and punctuation)
    /// yields an empty sequence, never an error.
    pub fn normalize(&self, text: &str) -> Vec<Token> {
        let lowered = text.to_lowercase();

        lowered
            .unicode_words()
            .filter(|word| !self.lexicon.is_stopword(word))
            .map(|word| self.lexicon.lemmatize(word))
            .collect()
    }

    /// The lexicon backing this normalizer.
    #[inline(always)]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new(Lexicon::load().expect("bundled assets must parse"))
    }

    #[test]
    fn lowercases_and_lemmatizes() {
        let n = normalizer();
        assert_eq!(n.normalize("Cats are great."), vec!["cat", "great"]);
        assert_eq!(n.normalize("CATS ARE GREAT"), vec!["cat", "great"]);
    }

    #[test]
    fn query_and_sentence_forms_agree() {
        let n = normalizer();
        assert_eq!(
            n.normalize("Are cats great?"),
            n.normalize("Cats are great.")
        );
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        let n = normalizer();
        assert!(n.normalize("").is_empty());
        assert!(n.normalize("   \t\n").is_empty());
    }

    #[test]
    fn punctuation_only_discarded() {
        let n = normalizer();
        assert!(n.normalize("... !? ,,, --").is_empty());
    }

    #[test]
    fn stopword_only_input_yields_empty_sequence() {
        let n = normalizer();
        assert!(n.normalize("the and, is.").is_empty());
        assert!(n.normalize("The AND Is").is_empty());
    }

    #[test]
    fn order_follows_original_word_order() {
        let n = normalizer();
        assert_eq!(
            n.normalize("Dogs chase cats across gardens."),
            vec!["dog", "chase", "cat", "across", "garden"]
        );
    }

    #[test]
    fn duplicates_preserved_in_sequence() {
        // Deduplication is the scorer's concern, not the normalizer's.
        let n = normalizer();
        assert_eq!(n.normalize("cats and cats"), vec!["cat", "cat"]);
    }

    #[test]
    fn contractions_filtered_as_stopwords() {
        let n = normalizer();
        assert_eq!(n.normalize("Don't chase the cats!"), vec!["chase", "cat"]);
    }

    #[test]
    fn unicode_words_survive() {
        let n = normalizer();
        assert_eq!(n.normalize("Café visits"), vec!["café", "visit"]);
    }

    #[test]
    fn hyphenated_words_split_at_boundaries() {
        let n = normalizer();
        assert_eq!(
            n.normalize("well-known landmarks"),
            vec!["well", "known", "landmark"]
        );
    }

    #[test]
    fn normalize_is_pure() {
        let n = normalizer();
        let first = n.normalize("Mrs. Bennet's daughters visited Netherfield.");
        let second = n.normalize("Mrs. Bennet's daughters visited Netherfield.");
        assert_eq!(first, second);
    }
}
