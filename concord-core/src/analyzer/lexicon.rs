//! Linguistic lookup tables: stopwords and lemmatization data.
//!
//! The tables are parsed once at startup from assets bundled into the
//! binary and are immutable afterwards. A malformed asset is a fatal
//! startup condition, distinct from the runtime "document unavailable"
//! case handled in [`crate::source`].

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use thiserror::Error;

const STOPWORDS: &str = include_str!("../../data/stopwords.txt");
const LEMMA_EXCEPTIONS: &str = include_str!("../../data/lemma_exceptions.tsv");

/// Suffix rewrite rules in the WordNet noun-morphy style, tried in
/// order. The first rule whose guard passes wins. Irregular forms are
/// resolved through the exception table before any rule runs.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("zes", "z"),
    ("ies", "y"),
    ("ves", "f"),
    ("men", "man"),
    ("s", ""),
];

/// Errors raised while parsing the bundled linguistic assets.
///
/// These are startup-fatal: a process with no stopword set or a
/// corrupt exception table must not begin answering queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexiconError {
    /// The stopword asset contained no entries.
    #[error("stopword list is empty")]
    EmptyStopwords,
    /// An exception line was not two tab-separated fields.
    #[error("malformed lemma exception at line {line}: expected `inflected<TAB>lemma`, got {content:?}")]
    MalformedException {
        /// 1-based line number in the asset.
        line: usize,
        /// The offending line.
        content: String,
    },
}

/// Immutable stopword set and lemmatization table.
///
/// Built once at startup and injected into the
/// [`Normalizer`](crate::analyzer::Normalizer); never mutated after
/// construction.
#[derive(Debug)]
pub struct Lexicon {
    stopwords: FxHashSet<&'static str>,
    exceptions: FxHashMap<&'static str, &'static str>,
}

impl Lexicon {
    /// Parses the bundled assets.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError`] if an asset is empty or malformed.
    /// Callers should treat this as fatal.
    pub fn load() -> Result<Self, LexiconError> {
        let lexicon = Self::parse(STOPWORDS, LEMMA_EXCEPTIONS)?;
        tracing::debug!(
            stopwords = lexicon.stopwords.len(),
            exceptions = lexicon.exceptions.len(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }

    fn parse(stopwords: &'static str, exceptions: &'static str) -> Result<Self, LexiconError> {
        let stopwords: FxHashSet<&'static str> = stopwords
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();

        if stopwords.is_empty() {
            return Err(LexiconError::EmptyStopwords);
        }

        let mut table = FxHashMap::default();
        for (idx, line) in exceptions.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.split_once('\t') {
                Some((inflected, lemma)) if !inflected.is_empty() && !lemma.is_empty() => {
                    table.insert(inflected, lemma);
                }
                _ => {
                    return Err(LexiconError::MalformedException {
                        line: idx + 1,
                        content: line.to_string(),
                    });
                }
            }
        }

        Ok(Self {
            stopwords,
            exceptions: table,
        })
    }

    /// Returns `true` if `token` is a member of the stopword closed set.
    #[inline(always)]
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Reduces a lowercase token to its dictionary base form.
    ///
    /// Noun-form reduction: the exception table is checked first, then
    /// the suffix rules in priority order. A token no rule applies to
    /// is returned unchanged.
    pub fn lemmatize(&self, token: &str) -> String {
        if let Some(&lemma) = self.exceptions.get(token) {
            return lemma.to_string();
        }

        self.suffix_candidates(token)
            .into_iter()
            .next()
            .unwrap_or_else(|| token.to_string())
    }

    /// Candidate base forms from the suffix rules, in priority order.
    fn suffix_candidates(&self, token: &str) -> SmallVec<[String; 2]> {
        let mut candidates = SmallVec::new();

        for &(suffix, replacement) in SUFFIX_RULES {
            if let Some(stem) = token.strip_suffix(suffix) {
                if Self::rule_applies(token, suffix, stem) {
                    candidates.push(format!("{stem}{replacement}"));
                }
            }
        }

        candidates
    }

    #[inline]
    fn rule_applies(token: &str, suffix: &str, stem: &str) -> bool {
        if stem.is_empty() {
            return false;
        }

        match suffix {
            // Bare "s" stripping misfires on mass nouns and Latinate
            // endings ("glass", "bus", "basis"), so it only runs on
            // longer tokens with a safe ending.
            "s" => token.len() >= 4 && !["ss", "us", "is"].iter().any(|end| token.ends_with(end)),
            // "ties"/"pies" pluralize a short -ie noun; the "ies" -> "y"
            // rewrite only holds past four characters ("cities").
            "ies" => token.len() > 4,
            _ => true,
        }
    }

    /// Number of stopword entries.
    #[inline(always)]
    #[must_use]
    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    /// Number of irregular-form entries.
    #[inline(always)]
    #[must_use]
    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }
}
