//! Autoplay - solver evaluation over the corpus
//!
//! Lets the solver play every word of the selected categories and collects
//! statistics about wins, scores and misses.

use crate::core::WordRecord;
use crate::corpus::{Corpus, CorpusError};
use crate::game::{Round, RoundConfig, RoundError, RoundOutcome, play_round};
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result from playing a single word
#[derive(Debug, Clone)]
pub struct WordPlayResult {
    pub category: String,
    pub word: String,
    pub outcome: RoundOutcome,
    pub score: u32,
    pub misses: usize,
}

/// Statistics from an autoplay run
#[derive(Debug, Default)]
pub struct AutoplayStatistics {
    pub total_words: usize,
    pub won: usize,
    pub lost: usize,
    /// The solver had no letter left to offer
    pub stuck: usize,
    /// Entries that could not start a round
    pub skipped: usize,
    pub average_score: f64,
    pub average_misses: f64,
    /// Misses per won round
    pub miss_distribution: FxHashMap<usize, usize>,
    pub best: Option<(String, u32)>,
    /// Lost words and words with the most misses, worst first
    pub hardest: Vec<(String, usize)>,
    pub total_time: Duration,
}

impl AutoplayStatistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.won as f64 / self.total_words as f64 * 100.0
        }
    }
}

/// Play every word of `category` (or of all categories) with the solver
///
/// # Errors
///
/// Returns `CategoryNotFound` or `CategoryEmpty` for a bad `category`.
pub fn run_autoplay<S: Strategy + Sync>(
    corpus: &Corpus,
    category: Option<&str>,
    limit: Option<usize>,
    config: RoundConfig,
    strategy: &S,
) -> Result<AutoplayStatistics, CorpusError> {
    let pools: Vec<(&str, &[WordRecord])> = match category {
        Some(name) => vec![(name, corpus.words(name)?)],
        None => corpus.iter().filter(|(_, words)| !words.is_empty()).collect(),
    };

    let jobs: Vec<(&str, &[WordRecord], &WordRecord)> = pools
        .iter()
        .flat_map(|&(name, pool)| pool.iter().map(move |word| (name, pool, word)))
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    println!("🎯 Playing {} words...", jobs.len());

    let pb = ProgressBar::new(jobs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let results: Vec<Result<WordPlayResult, RoundError>> = jobs
        .par_iter()
        .map(|&(name, pool, word)| {
            let result = play_word(name, pool, word, config, strategy);
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_with_message("Complete!");

    let mut stats = summarize(&results);
    stats.total_time = start.elapsed();
    Ok(stats)
}

fn play_word<S: Strategy>(
    category: &str,
    pool: &[WordRecord],
    word: &WordRecord,
    config: RoundConfig,
    strategy: &S,
) -> Result<WordPlayResult, RoundError> {
    let mut round = Round::new(word, config)?;
    let mut solver = Solver::new(strategy, pool);
    let outcome = play_round(&mut round, &mut solver);

    Ok(WordPlayResult {
        category: category.to_string(),
        word: word.text().to_string(),
        outcome,
        score: round.score(),
        misses: round.incorrect().len(),
    })
}

fn summarize(results: &[Result<WordPlayResult, RoundError>]) -> AutoplayStatistics {
    let played: Vec<&WordPlayResult> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
    let count = |outcome: RoundOutcome| played.iter().filter(|r| r.outcome == outcome).count();

    let total = played.len();
    let (average_score, average_misses) = if total == 0 {
        (0.0, 0.0)
    } else {
        (
            played.iter().map(|r| f64::from(r.score)).sum::<f64>() / total as f64,
            played.iter().map(|r| r.misses as f64).sum::<f64>() / total as f64,
        )
    };

    let mut miss_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for result in played.iter().filter(|r| r.outcome == RoundOutcome::Win) {
        *miss_distribution.entry(result.misses).or_insert(0) += 1;
    }

    let best = played
        .iter()
        .filter(|r| r.outcome == RoundOutcome::Win)
        .max_by_key(|r| r.score)
        .map(|r| (r.word.clone(), r.score));

    let mut hardest: Vec<(String, usize)> = played
        .iter()
        .filter(|r| r.outcome != RoundOutcome::Win || r.misses > 0)
        .map(|r| (format!("{} ({})", r.word, r.category), r.misses))
        .collect();
    hardest.sort_by_key(|(_, misses)| std::cmp::Reverse(*misses));
    hardest.truncate(10);

    AutoplayStatistics {
        total_words: total,
        won: count(RoundOutcome::Win),
        lost: count(RoundOutcome::Lose),
        stuck: count(RoundOutcome::Quit),
        skipped: results.len() - total,
        average_score,
        average_misses,
        miss_distribution,
        best,
        hardest,
        total_time: Duration::ZERO,
    }
}
