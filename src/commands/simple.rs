//! Simple interactive CLI mode
//!
//! Line-based hangman without the TUI: a numbered category menu, then one
//! letter per line.

use crate::corpus::Corpus;
use crate::game::{
    GuessSource, InputError, Round, RoundConfig, RoundOutcome, Session, SessionError,
    SessionStats, SessionUi, parse_guess,
};
use crate::output::formatters::board_line;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Prompts on a writer and reads answers line by line
pub struct LineUi<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineUi<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one line; end of input is an error
    fn ask(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.output, "{prompt} ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(line)
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> GuessSource for LineUi<R, W> {
    fn next_guess(&mut self, _round: &Round<'_>) -> Result<char, InputError> {
        loop {
            let line = self.ask(">")?;
            match parse_guess(&line) {
                Ok(letter) => return Ok(letter),
                Err(err) if err.is_retryable() => {
                    writeln!(self.output, "✗ {err}")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn show_turn(&mut self, round: &Round<'_>) {
        log::info!("{}", board_line(round));
    }
}

impl<R: BufRead, W: Write> SessionUi for LineUi<R, W> {
    fn choose_category(&mut self, categories: &[String]) -> Result<Option<usize>, InputError> {
        writeln!(self.output, "\n{}", "Hangman Menu - Select Category".bright_cyan().bold())?;
        for (i, category) in categories.iter().enumerate() {
            writeln!(self.output, "  {}. 📂 {category}", i + 1)?;
        }
        let quit = categories.len() + 1;
        writeln!(self.output, "  {quit}. ❌ Quit")?;

        loop {
            let line = self.ask("Choice:")?;
            match line.trim().parse::<usize>() {
                Ok(n) if n == quit => return Ok(None),
                Ok(n) if (1..quit).contains(&n) => return Ok(Some(n - 1)),
                _ => writeln!(self.output, "✗ enter a number between 1 and {quit}")?,
            }
        }
    }

    fn announce(&mut self, outcome: RoundOutcome, round: &Round<'_>) {
        let answer = round.answer().unwrap_or_default();
        let line = match outcome {
            RoundOutcome::Win => format!("✓ Solved: {answer} (score {})", round.score())
                .green()
                .bold(),
            RoundOutcome::Lose => format!("✗ The word was: {answer}").red().bold(),
            RoundOutcome::Quit => return,
        };
        // A failed write only loses the banner; the session goes on
        let _ = writeln!(self.output, "{line}");
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error only if the session reaches an inconsistent phase.
pub fn run_simple(corpus: &Corpus, config: RoundConfig) -> Result<SessionStats, SessionError> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Hangman - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the word one letter at a time. Consecutive hits multiply your points.");
    println!("Press Ctrl-D to quit at any prompt.\n");

    let stdin = io::stdin();
    let mut ui = LineUi::new(stdin.lock(), io::stdout());
    let stats = Session::new(corpus, config).run(&mut ui)?;

    println!(
        "\n👋 Thanks for playing! Won {} of {} rounds, total score {}.\n",
        stats.won,
        stats.played(),
        stats.total_score
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordRecord;
    use std::io::Cursor;

    fn corpus() -> Corpus {
        let mut corpus = Corpus::new();
        corpus.insert("Animals", vec![WordRecord::new("cat", "A pet")]);
        corpus
    }

    fn play(script: &str, config: RoundConfig) -> (SessionStats, String) {
        let corpus = corpus();
        let mut ui = LineUi::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let stats = Session::new(&corpus, config).run(&mut ui).unwrap();
        let (_, output) = ui.into_inner();
        (stats, String::from_utf8(output).unwrap())
    }

    #[test]
    fn plays_a_winning_round_then_quits() {
        let (stats, output) = play("1\nc\na\nt\n2\n", RoundConfig::default());
        assert_eq!(stats.won, 1);
        assert_eq!(stats.total_score, 60);
        assert!(output.contains("📂 Animals"));
        assert!(output.contains("Solved: cat"));
    }

    #[test]
    fn reprompts_on_invalid_guesses() {
        let (stats, output) = play("1\nab\n7\nc\na\nt\n2\n", RoundConfig::default());
        assert_eq!(stats.won, 1);
        assert!(output.contains("single character"));
        assert!(output.contains("alphabetic character"));
    }

    #[test]
    fn reprompts_on_invalid_menu_choice() {
        let (stats, output) = play("9\nzero\n2\n", RoundConfig::default());
        assert_eq!(stats.played(), 0);
        assert!(output.contains("between 1 and 2"));
    }

    #[test]
    fn losing_round_reveals_answer() {
        let (stats, output) = play("1\nx\ny\nz\n2\n", RoundConfig::new(0, 10));
        assert_eq!(stats.lost, 1);
        assert!(output.contains("The word was: cat"));
    }

    #[test]
    fn end_of_input_mid_round_quits_without_loss() {
        let (stats, output) = play("1\nc\n", RoundConfig::default());
        assert_eq!(stats.played(), 0);
        assert!(!output.contains("The word was"));
    }

    #[test]
    fn uppercase_guesses_are_folded() {
        let (stats, _) = play("1\nC\nA\nT\n2\n", RoundConfig::default());
        assert_eq!(stats.won, 1);
    }
}
