//! Hangman word representation
//!
//! A `WordRecord` pairs the text to guess with a hint. Everything a round needs
//! is derived from it: the letter position index, the initial mask and the
//! number of guessable positions.

use super::letters::{fold_case, is_letter};
use rustc_hash::FxHashMap;
use std::fmt;

/// Placeholder shown for a letter that has not been revealed yet
pub const MASK_CHAR: char = '_';

/// A word (or phrase) with its hint
///
/// Positions are counted in `char`s throughout, so a word's mask always has
/// exactly `text.chars().count()` tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    text: String,
    hint: String,
}

impl WordRecord {
    /// Create a record from its text and hint
    ///
    /// Empty text is accepted here; it is rejected when a round starts.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::WordRecord;
    ///
    /// let word = WordRecord::new("hello", "A greeting");
    /// assert_eq!(word.text(), "hello");
    /// assert_eq!(word.alphabet_length(), 5);
    /// ```
    pub fn new(text: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            hint: hint.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Build the map from folded letter to the positions it occupies
    #[must_use]
    pub fn letter_index(&self) -> LetterIndex {
        let mut positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, ch) in self.text.chars().enumerate() {
            if is_letter(ch) {
                positions.entry(fold_case(ch)).or_default().push(i);
            }
        }
        LetterIndex { positions }
    }

    /// Initial display tokens: `MASK_CHAR` for letters, the literal character otherwise
    #[must_use]
    pub fn mask_template(&self) -> Vec<char> {
        self.text
            .chars()
            .map(|ch| if is_letter(ch) { MASK_CHAR } else { ch })
            .collect()
    }

    /// Number of guessable (letter) positions
    #[must_use]
    pub fn alphabet_length(&self) -> usize {
        self.text.chars().filter(|&ch| is_letter(ch)).count()
    }
}

impl fmt::Display for WordRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Letter to position lookup for one word
///
/// Position lists are in left-to-right order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterIndex {
    positions: FxHashMap<char, Vec<usize>>,
}

impl LetterIndex {
    /// Check if the word contains a (folded) letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.positions.len()
    }

    /// Sum of all position list lengths; equals the word's alphabet length
    #[must_use]
    pub fn total_positions(&self) -> usize {
        self.positions.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.positions.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> WordRecord {
        WordRecord::new(text, "")
    }

    #[test]
    fn index_simple_word() {
        let index = word("hello").letter_index();
        assert_eq!(index.positions_of('h'), &[0]);
        assert_eq!(index.positions_of('e'), &[1]);
        assert_eq!(index.positions_of('l'), &[2, 3]);
        assert_eq!(index.positions_of('o'), &[4]);
        assert_eq!(index.distinct_letters(), 4);
    }

    #[test]
    fn index_duplicates_in_scan_order() {
        let index = word("banana").letter_index();
        assert_eq!(index.positions_of('b'), &[0]);
        assert_eq!(index.positions_of('a'), &[1, 3, 5]);
        assert_eq!(index.positions_of('n'), &[2, 4]);
    }

    #[test]
    fn index_folds_case() {
        let index = word("Hello").letter_index();
        assert_eq!(index.positions_of('h'), &[0]);
        assert!(!index.contains('H'));
    }

    #[test]
    fn index_skips_non_letters() {
        let index = word("hi world").letter_index();
        assert!(!index.contains(' '));
        assert_eq!(index.positions_of('w'), &[3]);
        assert_eq!(index.positions_of('d'), &[7]);
        assert_eq!(index.positions_of('z'), &[]);
    }

    #[test]
    fn index_uses_char_positions() {
        // 'é' is two bytes; 'z' must still be at char position 2
        let index = word("ézé").letter_index();
        assert_eq!(index.positions_of('é'), &[0, 2]);
        let index = word("céz").letter_index();
        assert_eq!(index.positions_of('z'), &[2]);
    }

    #[test]
    fn mask_all_letters() {
        assert_eq!(word("hello").mask_template(), vec!['_'; 5]);
    }

    #[test]
    fn mask_keeps_separators() {
        assert_eq!(
            word("hello world").mask_template(),
            vec!['_', '_', '_', '_', '_', ' ', '_', '_', '_', '_', '_']
        );
        assert_eq!(word("it's").mask_template(), vec!['_', '_', '\'', '_']);
        assert_eq!(word("co-op").mask_template(), vec!['_', '_', '-', '_', '_']);
    }

    #[test]
    fn mask_length_matches_char_count() {
        for text in ["café au lait", "naïve", "", "123 !@#"] {
            assert_eq!(word(text).mask_template().len(), text.chars().count());
        }
    }

    #[test]
    fn alphabet_lengths() {
        assert_eq!(word("hello").alphabet_length(), 5);
        assert_eq!(word("hello world").alphabet_length(), 10);
        assert_eq!(word("it's cool").alphabet_length(), 7);
        assert_eq!(word("123 !@#").alphabet_length(), 0);
        assert_eq!(word("a").alphabet_length(), 1);
        assert_eq!(word("abc123").alphabet_length(), 3);
    }

    #[test]
    fn combining_marks_stay_literal() {
        // न म स ् त े: the virama and the vowel sign are marks, not letters
        let w = word("नमस्ते");
        assert_eq!(w.alphabet_length(), 4);
        assert_eq!(
            w.mask_template(),
            vec!['_', '_', '_', '\u{94D}', '_', '\u{947}']
        );
        assert_eq!(w.letter_index().total_positions(), 4);
    }

    #[test]
    fn empty_word() {
        let w = word("");
        assert!(w.is_empty());
        assert!(w.letter_index().is_empty());
        assert!(w.mask_template().is_empty());
        assert_eq!(w.alphabet_length(), 0);
    }

    #[test]
    fn index_total_matches_alphabet_length() {
        for text in [
            "hello",
            "Mississippi",
            "it's cool",
            "Crème Brûlée",
            "123 !@#",
            "",
            "rock 'n' roll",
        ] {
            let w = word(text);
            assert_eq!(
                w.letter_index().total_positions(),
                w.alphabet_length(),
                "mismatch for {text:?}"
            );
        }
    }

    #[test]
    fn display_shows_text() {
        let w = WordRecord::new("apple", "A fruit");
        assert_eq!(format!("{w}"), "apple");
        assert_eq!(w.hint(), "A fruit");
    }
}
