//! Corpus loading and lookup
//!
//! Collects word records by category from a directory tree, from the embedded
//! default files, or from in-memory sources, and serves random words for new
//! rounds.

use super::embedded::EMBEDDED_SOURCES;
use super::{CorpusError, parse_source};
use crate::core::WordRecord;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// All categories and their words
///
/// Categories keep the order in which they were first seen.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    categories: Vec<String>,
    words: FxHashMap<String, Vec<WordRecord>>,
}

impl Corpus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every file below `path`
    ///
    /// Directories are walked recursively; entries are visited in sorted path
    /// order so category order is stable. A category found in several files
    /// collects the words of all of them.
    ///
    /// # Errors
    /// `SourceUnreadable` if the directory or a file cannot be read,
    /// `MalformedRecord` if a file does not parse.
    ///
    /// # Examples
    /// ```no_run
    /// use hangman::corpus::Corpus;
    ///
    /// let corpus = Corpus::load_dir("data").unwrap();
    /// println!("Loaded {} categories", corpus.categories().len());
    /// ```
    pub fn load_dir<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let mut corpus = Self::new();
        for file in collect_files(path.as_ref())? {
            let content = fs::read_to_string(&file).map_err(|source| {
                CorpusError::SourceUnreadable {
                    path: file.clone(),
                    source,
                }
            })?;
            corpus.add_source(&file.display().to_string(), &content)?;
        }
        log::debug!(
            "loaded {} categories from {}",
            corpus.categories.len(),
            path.as_ref().display()
        );
        Ok(corpus)
    }

    /// The default corpus compiled into the binary
    ///
    /// # Errors
    /// `MalformedRecord` if an embedded file does not parse.
    pub fn embedded() -> Result<Self, CorpusError> {
        let mut corpus = Self::new();
        for (name, content) in EMBEDDED_SOURCES {
            corpus.add_source(name, content)?;
        }
        Ok(corpus)
    }

    /// Parse one source and merge it in
    ///
    /// # Errors
    /// `MalformedRecord` if the source does not parse; the corpus is unchanged.
    pub fn add_source(&mut self, origin: &str, content: &str) -> Result<(), CorpusError> {
        let (category, words) = parse_source(origin, content)?;
        self.insert(category, words);
        Ok(())
    }

    /// Append words to a category, registering it on first use
    pub fn insert(&mut self, category: impl Into<String>, words: Vec<WordRecord>) {
        let category = category.into();
        if let Some(existing) = self.words.get_mut(&category) {
            existing.extend(words);
        } else {
            self.categories.push(category.clone());
            self.words.insert(category, words);
        }
    }

    /// Category names in load order
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Words of a category
    ///
    /// # Errors
    /// `CategoryNotFound` for an unknown category, `CategoryEmpty` if it holds no words.
    pub fn words(&self, category: &str) -> Result<&[WordRecord], CorpusError> {
        let words = self
            .words
            .get(category)
            .ok_or_else(|| CorpusError::CategoryNotFound(category.to_string()))?;

        if words.is_empty() {
            return Err(CorpusError::CategoryEmpty(category.to_string()));
        }

        Ok(words)
    }

    /// Uniformly random word from a category
    ///
    /// # Errors
    /// Same as [`Corpus::words`].
    pub fn random_word(&self, category: &str) -> Result<&WordRecord, CorpusError> {
        self.random_word_with(category, &mut rand::rng())
    }

    /// Uniformly random word from a category using the given generator
    ///
    /// # Errors
    /// Same as [`Corpus::words`].
    pub fn random_word_with<R: Rng + ?Sized>(
        &self,
        category: &str,
        rng: &mut R,
    ) -> Result<&WordRecord, CorpusError> {
        self.words(category)?
            .choose(rng)
            .ok_or_else(|| CorpusError::CategoryEmpty(category.to_string()))
    }

    /// Categories paired with their words, in load order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[WordRecord])> + '_ {
        self.categories.iter().map(|category| {
            let words = self.words.get(category).map_or(&[][..], Vec::as_slice);
            (category.as_str(), words)
        })
    }

    /// Total number of words across categories
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Files below `dir`, depth first, in sorted order
///
/// Symlinks are followed only when they point at a file, so link cycles and
/// links to sibling directories are skipped.
fn collect_files(dir: &Path) -> Result<Vec<PathBuf>, CorpusError> {
    let unreadable = |source: io::Error| CorpusError::SourceUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(unreadable)?
        .map(|entry| entry.and_then(|e| Ok((e.path(), e.file_type()?))))
        .collect::<Result<Vec<_>, _>>()
        .map_err(unreadable)?;
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut files = Vec::new();
    for (path, file_type) in entries {
        if file_type.is_dir() {
            files.extend(collect_files(&path)?);
        } else if !file_type.is_symlink() || path.is_file() {
            files.push(path);
        } else {
            log::debug!("skipping link {}", path.display());
        }
    }
    Ok(files)
}
