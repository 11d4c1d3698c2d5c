//! Corpus check command
//!
//! Summarises each category and flags entries that make poor rounds.

use crate::core::{MASK_CHAR, WordRecord};
use crate::corpus::Corpus;
use rustc_hash::FxHashSet;

/// Findings for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    pub name: String,
    pub words: usize,
    /// Entries with empty text; starting a round with them fails
    pub empty: usize,
    /// Entries without any letter; they are won before the first guess
    pub letterless: Vec<String>,
    /// Entries listed more than once
    pub duplicates: Vec<String>,
    /// Entries containing the mask character, which looks hidden on the board
    pub mask_clashes: Vec<String>,
    pub longest: Option<String>,
}

impl CategoryReport {
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.empty > 0
            || !self.letterless.is_empty()
            || !self.duplicates.is_empty()
            || !self.mask_clashes.is_empty()
    }
}

/// Result of checking a whole corpus
#[derive(Debug, Clone, Default)]
pub struct CorpusReport {
    pub categories: Vec<CategoryReport>,
}

impl CorpusReport {
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.categories.iter().map(|c| c.words).sum()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.categories
            .iter()
            .map(|c| c.empty + c.letterless.len() + c.duplicates.len() + c.mask_clashes.len())
            .sum()
    }
}

/// Check every category of a corpus
#[must_use]
pub fn check_corpus(corpus: &Corpus) -> CorpusReport {
    CorpusReport {
        categories: corpus
            .iter()
            .map(|(name, words)| check_category(name, words))
            .collect(),
    }
}

fn check_category(name: &str, words: &[WordRecord]) -> CategoryReport {
    let mut seen = FxHashSet::default();
    let mut reported = FxHashSet::default();
    let mut duplicates = Vec::new();
    for word in words {
        let key = word.text().to_lowercase();
        if !seen.insert(key.clone()) && reported.insert(key) {
            duplicates.push(word.text().to_string());
        }
    }

    CategoryReport {
        name: name.to_string(),
        words: words.len(),
        empty: words.iter().filter(|w| w.is_empty()).count(),
        letterless: words
            .iter()
            .filter(|w| !w.is_empty() && w.alphabet_length() == 0)
            .map(|w| w.text().to_string())
            .collect(),
        duplicates,
        mask_clashes: words
            .iter()
            .filter(|w| w.text().contains(MASK_CHAR))
            .map(|w| w.text().to_string())
            .collect(),
        longest: words
            .iter()
            .max_by_key(|w| w.alphabet_length())
            .map(|w| w.text().to_string()),
    }
}
