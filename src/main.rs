//! Hangman - CLI
//!
//! Word-guessing game with TUI and line-based modes, plus corpus tooling.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{check_corpus, run_autoplay, run_simple},
    corpus::Corpus,
    game::{DEFAULT_ADDITIONAL_GUESSES, POINTS_PER_CORRECT_GUESS, RoundConfig},
    output::{logger, print_autoplay_statistics, print_categories, print_check_report},
    solver::StrategyType,
};
use log::LevelFilter;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman word-guessing game with streak scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory of category files (default: the built-in corpus)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Extra guesses on top of the word's letter count
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_ADDITIONAL_GUESSES,
        allow_negative_numbers = true
    )]
    guesses: i32,

    /// Base points for a correct guess, multiplied by the streak
    #[arg(short, long, global = true, default_value_t = POINTS_PER_CORRECT_GUESS)]
    points: u32,

    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line prompts without TUI)
    Simple,

    /// List categories and their word counts
    Categories,

    /// Check the corpus for entries that make poor rounds
    Check,

    /// Let the solver play every word and report statistics
    Autoplay {
        /// Only play words from this category
        #[arg(short, long)]
        category: Option<String>,

        /// Limit number of words to play
        #[arg(short, long)]
        limit: Option<usize>,

        /// Strategy: frequency (default), random
        #[arg(short, long, default_value = "frequency")]
        strategy: String,
    },
}

/// Load the corpus from `dir`, or the built-in one
fn load_corpus(dir: Option<&Path>) -> Result<Corpus> {
    match dir {
        Some(dir) => Corpus::load_dir(dir)
            .with_context(|| format!("failed to load words from {}", dir.display())),
        None => Corpus::embedded().context("built-in corpus is malformed"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let level = match (&command, cli.verbose) {
        // Log lines would tear the alternate screen
        (Commands::Play, _) => LevelFilter::Off,
        (_, true) => LevelFilter::Debug,
        (Commands::Autoplay { .. }, false) => LevelFilter::Warn,
        (_, false) => LevelFilter::Info,
    };
    logger::init(level).context("failed to install logger")?;

    let corpus = load_corpus(cli.data_dir.as_deref())?;
    let config = RoundConfig::new(cli.guesses, cli.points);

    match command {
        Commands::Play => run_play_command(&corpus, config),
        Commands::Simple => {
            run_simple(&corpus, config)?;
            Ok(())
        }
        Commands::Categories => {
            print_categories(&corpus);
            Ok(())
        }
        Commands::Check => {
            print_check_report(&check_corpus(&corpus));
            Ok(())
        }
        Commands::Autoplay {
            category,
            limit,
            strategy,
        } => run_autoplay_command(&corpus, config, category.as_deref(), limit, &strategy),
    }
}

fn run_play_command(corpus: &Corpus, config: RoundConfig) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let stats = run_tui(App::new(corpus, config))?;
    println!(
        "👋 Thanks for playing! Won {} of {} rounds, total score {}.",
        stats.won,
        stats.played(),
        stats.total_score
    );
    Ok(())
}

fn run_autoplay_command(
    corpus: &Corpus,
    config: RoundConfig,
    category: Option<&str>,
    limit: Option<usize>,
    strategy_name: &str,
) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Hangman Solver Autoplay ");
    println!("{}", "═".repeat(70));
    println!("\nCategory: {}", category.unwrap_or("all"));
    println!("Strategy: {strategy_name}");
    println!();

    let strategy = StrategyType::from_name(strategy_name);
    let stats = run_autoplay(corpus, category, limit, config, &strategy)?;
    print_autoplay_statistics(&stats);
    Ok(())
}
