//! Sentence boundary detection.
//!
//! Splits a document into sentences on `.`, `!` and `?`, with
//! protection for the common non-boundary uses of the period:
//! abbreviations ("Mrs. Bennet"), single initials ("J. Austen") and
//! decimal numbers ("3.14"). Closing quotes and brackets directly after
//! a terminator stay with the sentence they close.
//!
//! The contract:
//!
//! - Returned slices borrow from the input, trimmed of surrounding
//!   whitespace; no sentence text is copied
//! - Concatenating the sentences (plus the separators between them)
//!   reproduces the input; nothing is reordered or dropped
//! - Trailing text with no terminator is returned as a final sentence
//! - Empty and whitespace-only input yields no sentences
//!
//! A `.` only ends a sentence when followed by whitespace and then an
//! uppercase letter, digit or opening quote. `!` and `?` end a sentence
//! whenever followed by whitespace. This is a heuristic, not a trained
//! model; it is tuned for prose.

use memchr::memchr3_iter;

/// Titles and other abbreviations whose trailing period never ends a
/// sentence. Compared case-insensitively against the word before the
/// period.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "hon", "st", "jr", "sr", "vs", "etc", "inc", "ltd",
    "co", "no", "gen", "col", "capt", "lt", "sgt", "messrs", "esq",
];

/// Closing punctuation absorbed into the sentence after its terminator.
const TRAILERS: &[char] = &['"', '\'', ')', ']', '\u{201d}', '\u{2019}', '\u{00bb}'];

/// Quote and bracket characters that may open the next sentence.
const OPENERS: &[char] = &['"', '\'', '(', '[', '\u{201c}', '\u{2018}', '\u{00ab}'];

/// Splits `document` into trimmed sentence slices.
///
/// # Examples
///
/// ```
/// use concord_core::analyzer::split_sentences;
///
/// let sentences = split_sentences("Cats are great. Dogs are loyal.");
/// assert_eq!(sentences, vec!["Cats are great.", "Dogs are loyal."]);
///
/// assert_eq!(
///     split_sentences("Mrs. Bennet spoke first."),
///     vec!["Mrs. Bennet spoke first."]
/// );
/// ```
pub fn split_sentences(document: &str) -> Vec<&str> {
    let bytes = document.as_bytes();
    let mut sentences = Vec::new();
    let mut start = 0;

    for i in memchr3_iter(b'.', b'!', b'?', bytes) {
        if i < start {
            // Terminator inside a run already consumed by an earlier
            // boundary.
            continue;
        }

        let end = absorb_trailers(document, i);

        if bytes[i] == b'.' && is_protected_period(document, i) {
            continue;
        }

        if !boundary_follows(document, bytes[i], end) {
            continue;
        }

        let sentence = document[start..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = end;
    }

    let tail = document[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

/// Extends past consecutive terminators ("?!", "...") and any closing
/// quotes or brackets.
fn absorb_trailers(document: &str, terminator: usize) -> usize {
    let mut end = terminator + 1;

    for ch in document[end..].chars() {
        if matches!(ch, '.' | '!' | '?') || TRAILERS.contains(&ch) {
            end += ch.len_utf8();
        } else {
            break;
        }
    }

    end
}

/// Returns `true` when the period at `i` belongs to an abbreviation,
/// a single initial or a decimal number.
fn is_protected_period(document: &str, i: usize) -> bool {
    let bytes = document.as_bytes();

    // Decimal: digit on both sides, as in "3.14".
    if i > 0
        && i + 1 < bytes.len()
        && bytes[i - 1].is_ascii_digit()
        && bytes[i + 1].is_ascii_digit()
    {
        return true;
    }

    let word = preceding_word(document, i);
    if word.is_empty() {
        return false;
    }

    if ABBREVIATIONS
        .iter()
        .any(|abbr| word.eq_ignore_ascii_case(abbr))
    {
        return true;
    }

    // Single uppercase letter reads as an initial, "J. Austen".
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

/// The alphanumeric word immediately before byte offset `i`.
fn preceding_word(document: &str, i: usize) -> &str {
    let head = &document[..i];
    match head.char_indices().rev().find(|(_, c)| !c.is_alphanumeric()) {
        Some((pos, c)) => &head[pos + c.len_utf8()..],
        None => head,
    }
}

/// Checks the text after `end` for a plausible sentence start.
fn boundary_follows(document: &str, terminator: u8, end: usize) -> bool {
    let rest = &document[end..];
    if rest.is_empty() {
        return true;
    }

    // A terminator glued to the next word ("e.g.word", file names,
    // URLs) is not a boundary.
    let after_space = rest.trim_start();
    if after_space.len() == rest.len() {
        return false;
    }
    if after_space.is_empty() {
        return true;
    }

    if terminator != b'.' {
        return true;
    }

    // For the ambiguous period, demand a capitalized continuation so
    // unknown abbreviations mid-sentence stay unsplit.
    match after_space.chars().next() {
        Some(ch) => ch.is_uppercase() || ch.is_numeric() || OPENERS.contains(&ch),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_simple_sentences() {
        assert_eq!(
            split_sentences("Cats are great. Dogs are loyal."),
            vec!["Cats are great.", "Dogs are loyal."]
        );
    }

    #[test]
    fn handles_all_three_terminators() {
        assert_eq!(
            split_sentences("Stop! Who goes there? Nobody answered."),
            vec!["Stop!", "Who goes there?", "Nobody answered."]
        );
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t  ").is_empty());
    }

    #[test]
    fn unterminated_tail_kept() {
        assert_eq!(
            split_sentences("First sentence. second thought without an end"),
            vec!["First sentence. second thought without an end"]
        );
        assert_eq!(split_sentences("no terminator at all"), vec![
            "no terminator at all"
        ]);
    }

    #[test]
    fn abbreviations_do_not_split() {
        assert_eq!(
            split_sentences("Mrs. Bennet spoke to Mr. Darcy. He bowed."),
            vec!["Mrs. Bennet spoke to Mr. Darcy.", "He bowed."]
        );
        assert_eq!(
            split_sentences("Dr. Smith arrived at St. James."),
            vec!["Dr. Smith arrived at St. James."]
        );
    }

    #[test]
    fn initials_do_not_split() {
        assert_eq!(
            split_sentences("J. Austen wrote it. We read it."),
            vec!["J. Austen wrote it.", "We read it."]
        );
    }

    #[test]
    fn decimals_do_not_split() {
        assert_eq!(
            split_sentences("The value is 3.14 exactly. Check it."),
            vec!["The value is 3.14 exactly.", "Check it."]
        );
    }

    #[test]
    fn lowercase_continuation_after_period_stays_joined() {
        assert_eq!(
            split_sentences("See fig. two for details. The rest follows."),
            vec!["See fig. two for details.", "The rest follows."]
        );
    }

    #[test]
    fn exclamation_splits_before_lowercase() {
        assert_eq!(
            split_sentences("What a day! the rain never stopped."),
            vec!["What a day!", "the rain never stopped."]
        );
    }

    #[test]
    fn ellipsis_consumed_as_one_terminator() {
        assert_eq!(
            split_sentences("He paused... Then he spoke."),
            vec!["He paused...", "Then he spoke."]
        );
    }

    #[test]
    fn closing_quote_stays_with_sentence() {
        assert_eq!(
            split_sentences("\"Come in!\" she said. He entered."),
            vec!["\"Come in!\"", "she said.", "He entered."]
        );
        assert_eq!(
            split_sentences("It was \"fine.\" Nobody argued."),
            vec!["It was \"fine.\"", "Nobody argued."]
        );
    }

    #[test]
    fn glued_period_is_not_a_boundary() {
        assert_eq!(
            split_sentences("Open readme.txt for details. Then build."),
            vec!["Open readme.txt for details.", "Then build."]
        );
    }

    #[test]
    fn slices_borrow_from_input() {
        let document = "Cats are great. Dogs are loyal.";
        let range = document.as_bytes().as_ptr_range();
        for sentence in split_sentences(document) {
            let ptr = sentence.as_bytes().as_ptr();
            assert!(range.contains(&ptr), "sentence must borrow from input");
        }
    }

    #[test]
    fn order_preserved() {
        let document = "One. Two. Three. Four.";
        assert_eq!(
            split_sentences(document),
            vec!["One.", "Two.", "Three.", "Four."]
        );
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        assert_eq!(
            split_sentences("  First one.   Second one.\n"),
            vec!["First one.", "Second one."]
        );
    }
}
