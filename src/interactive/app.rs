//! TUI application state and logic

use crate::corpus::{Corpus, CorpusError};
use crate::game::{
    Event, GuessOutcome, Phase, Round, RoundConfig, RoundError, RoundOutcome, RoundStatus,
    SessionError, SessionStats, parse_guess,
};
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use thiserror::Error;

/// Failures that end the TUI session
#[derive(Debug, Error)]
pub enum AppError {
    #[error("cannot start a round: {0}")]
    Corpus(#[from] CorpusError),
    #[error("cannot start a round: {0}")]
    Round(#[from] RoundError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Application state
pub struct App<'a> {
    pub corpus: &'a Corpus,
    pub config: RoundConfig,
    pub phase: Phase,
    pub round: Option<Round<'a>>,
    pub category: Option<String>,
    /// Attempts the current round started with
    pub budget: usize,
    /// Highlighted menu entry; `categories().len()` is the Quit entry
    pub selected: usize,
    pub messages: Vec<Message>,
    pub stats: SessionStats,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(corpus: &'a Corpus, config: RoundConfig) -> Self {
        Self {
            corpus,
            config,
            phase: Phase::Pending,
            round: None,
            category: None,
            budget: 0,
            selected: 0,
            messages: vec![Message {
                text: "Welcome! Pick a category and guess the word one letter at a time."
                    .to_string(),
                style: MessageStyle::Info,
            }],
            stats: SessionStats::default(),
            should_quit: false,
        }
    }

    /// Menu entries including the trailing Quit entry
    #[must_use]
    pub fn menu_len(&self) -> usize {
        self.corpus.categories().len() + 1
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.menu_len();
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.checked_sub(1).unwrap_or(self.menu_len() - 1);
    }

    /// Act on the highlighted menu entry
    ///
    /// # Errors
    /// Returns an error if the session is not waiting at the menu.
    pub fn confirm_selection(&mut self) -> Result<(), AppError> {
        if self.selected >= self.corpus.categories().len() {
            self.quit(Event::QuitRequested)
        } else {
            self.start_round(self.selected)
        }
    }

    /// Draw a word from the category at `index` and start playing it
    ///
    /// # Errors
    /// A category that cannot supply a playable word ends the session and its
    /// error is returned. Also fails if the session is not waiting at the menu.
    pub fn start_round(&mut self, index: usize) -> Result<(), AppError> {
        let corpus = self.corpus;
        let Some(category) = corpus.categories().get(index) else {
            return self.quit(Event::QuitRequested);
        };

        let round = match self.build_round(category) {
            Ok(round) => round,
            Err(err) => {
                self.quit(Event::Aborted)?;
                return Err(err);
            }
        };

        self.phase = self.phase.advance(Event::RoundStarted)?;
        self.budget = round.remaining();
        self.category = Some(category.clone());
        self.messages.clear();
        self.add_message(&format!("Hint: {}", round.hint()), MessageStyle::Info);

        let already_won = round.is_win();
        self.round = Some(round);
        if already_won {
            self.finish(RoundOutcome::Win)?;
        }
        Ok(())
    }

    fn build_round(&self, category: &str) -> Result<Round<'a>, AppError> {
        let word = self.corpus.random_word(category)?;
        Ok(Round::new(word, self.config)?)
    }

    /// Apply a typed character as a guess
    ///
    /// Characters that are not letters are reported and cost nothing.
    ///
    /// # Errors
    /// Returns an error if no round is being played.
    pub fn submit_guess(&mut self, ch: char) -> Result<(), AppError> {
        let letter = match parse_guess(&ch.to_string()) {
            Ok(letter) => letter,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return Ok(());
            }
        };

        let Some(round) = self.round.as_mut() else {
            return Err(SessionError::IllegalTransition {
                from: self.phase,
                event: Event::RoundWon,
            }
            .into());
        };

        let (outcome, status) = (round.process_guess(letter), round.status());
        match outcome {
            GuessOutcome::Duplicate => {
                self.add_message(&format!("Already guessed '{letter}'"), MessageStyle::Error);
            }
            GuessOutcome::Miss => {
                self.add_message(&format!("No '{letter}' in the word"), MessageStyle::Error);
            }
            GuessOutcome::Hit { revealed, points } => {
                self.add_message(
                    &format!("'{letter}' x{revealed} (+{points} points)"),
                    MessageStyle::Success,
                );
            }
        }

        match status {
            RoundStatus::Won => self.finish(RoundOutcome::Win),
            RoundStatus::Lost => self.finish(RoundOutcome::Lose),
            RoundStatus::InProgress => Ok(()),
        }
    }

    fn finish(&mut self, outcome: RoundOutcome) -> Result<(), AppError> {
        self.phase = self.phase.advance(outcome.into())?;

        let (score, answer) = self
            .round
            .as_ref()
            .map_or((0, ""), |round| (round.score(), round.answer().unwrap_or_default()));
        self.stats.record(outcome, score);

        match outcome {
            RoundOutcome::Win => {
                self.add_message(
                    &format!("🎉 You win! {answer} scored {score} points"),
                    MessageStyle::Success,
                );
            }
            RoundOutcome::Lose => {
                self.add_message(
                    &format!("😢 You lose! The word was: {answer}"),
                    MessageStyle::Error,
                );
            }
            RoundOutcome::Quit => {}
        }
        self.add_message("Press Enter for the menu or 'q' to quit.", MessageStyle::Info);
        Ok(())
    }

    /// Leave a finished round and return to the menu
    ///
    /// # Errors
    /// Returns an error unless the round has been won or lost.
    pub fn acknowledge(&mut self) -> Result<(), AppError> {
        self.phase = self.phase.advance(Event::Acknowledged)?;
        self.round = None;
        self.category = None;
        Ok(())
    }

    /// End the session
    ///
    /// # Errors
    /// Returns an error if the session has already ended.
    pub fn quit(&mut self, event: Event) -> Result<(), AppError> {
        self.phase = self.phase.advance(event)?;
        self.should_quit = true;
        Ok(())
    }

    /// Dispatch one key press according to the current phase
    ///
    /// # Errors
    /// Returns an error if a key would break the phase order.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), AppError> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.quit(Event::Aborted);
        }

        match self.phase {
            Phase::Pending => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
                KeyCode::Down | KeyCode::Char('j') => self.select_next(),
                KeyCode::Enter => return self.confirm_selection(),
                KeyCode::Char('q') | KeyCode::Esc => return self.quit(Event::QuitRequested),
                _ => {}
            },
            Phase::Playing => match key.code {
                KeyCode::Esc => return self.quit(Event::Aborted),
                KeyCode::Char(c) => return self.submit_guess(c),
                _ => {}
            },
            Phase::Win | Phase::Lose => match key.code {
                KeyCode::Enter | KeyCode::Char('n') => return self.acknowledge(),
                KeyCode::Char('q') | KeyCode::Esc => return self.quit(Event::QuitRequested),
                _ => {}
            },
            Phase::Quit => self.should_quit = true,
        }
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Share of the attempt budget already used, in percent
    #[must_use]
    pub fn attempts_used_percent(&self) -> u16 {
        match &self.round {
            Some(round) if self.budget > 0 => {
                let used = self.budget - round.remaining().min(self.budget);
                (used * 100 / self.budget) as u16
            }
            _ => 0,
        }
    }
}

/// Run the TUI application
///
/// Returns the statistics of the rounds played.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<SessionStats> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<SessionStats> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let event::Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }
    }

    Ok(app.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordRecord;

    fn corpus() -> Corpus {
        let mut corpus = Corpus::new();
        corpus.insert("Animals", vec![WordRecord::new("cat", "A pet")]);
        corpus.insert("Symbols", vec![WordRecord::new("42", "The answer")]);
        corpus
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code)).unwrap();
    }

    #[test]
    fn menu_wraps_around() {
        let corpus = corpus();
        let mut app = App::new(&corpus, RoundConfig::default());
        assert_eq!(app.menu_len(), 3);
        app.select_previous();
        assert_eq!(app.selected, 2);
        app.select_next();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn winning_round_by_keys() {
        let corpus = corpus();
        let mut app = App::new(&corpus, RoundConfig::default());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.phase, Phase::Playing);
        assert_eq!(app.category.as_deref(), Some("Animals"));
        assert_eq!(app.budget, 6);

        for c in ['C', 'a', 't'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.phase, Phase::Win);
        assert_eq!(app.stats.won, 1);
        assert_eq!(app.stats.total_score, 60);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.phase, Phase::Pending);
        assert!(app.round.is_none());
    }

    #[test]
    fn losing_round() {
        let corpus = corpus();
        let mut app = App::new(&corpus, RoundConfig::new(0, 10));
        app.start_round(0).unwrap();
        for c in ['x', 'y', 'z'] {
            app.submit_guess(c).unwrap();
        }
        assert_eq!(app.phase, Phase::Lose);
        assert_eq!(app.stats.lost, 1);
        assert!(app.messages.iter().any(|m| m.text.contains("The word was: cat")));
    }

    #[test]
    fn non_letters_cost_nothing() {
        let corpus = corpus();
        let mut app = App::new(&corpus, RoundConfig::default());
        app.start_round(0).unwrap();
        app.submit_guess('7').unwrap();
        assert_eq!(app.round.as_ref().map(Round::remaining), Some(6));
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));
    }

    #[test]
    fn duplicate_costs_an_attempt() {
        let corpus = corpus();
        let mut app = App::new(&corpus, RoundConfig::default());
        app.start_round(0).unwrap();
        app.submit_guess('x').unwrap();
        app.submit_guess('x').unwrap();
        assert_eq!(app.round.as_ref().map(Round::remaining), Some(4));
        assert_eq!(app.attempts_used_percent(), 33);
    }

    #[test]
    fn letterless_word_is_won_at_once() {
        let corpus = corpus();
        let mut app = App::new(&corpus, RoundConfig::default());
        app.start_round(1).unwrap();
        assert_eq!(app.phase, Phase::Win);
        assert_eq!(app.stats.won, 1);
    }

    #[test]
    fn escape_mid_round_quits_without_loss() {
        let corpus = corpus();
        let mut app = App::new(&corpus, RoundConfig::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.phase, Phase::Quit);
        assert!(app.should_quit);
        assert_eq!(app.stats.played(), 0);
    }

    #[test]
    fn quit_entry_ends_session() {
        let corpus = corpus();
        let mut app = App::new(&corpus, RoundConfig::default());
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.phase, Phase::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn bad_config_is_returned_to_caller() {
        let corpus = corpus();
        let mut app = App::new(&corpus, RoundConfig::new(-1, 10));
        let err = app.handle_key(KeyEvent::from(KeyCode::Enter)).unwrap_err();
        assert!(matches!(err, AppError::Round(RoundError::InvalidConfig(_))));
        assert!(err.to_string().contains("cannot start a round"));
        assert_eq!(app.phase, Phase::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn empty_category_is_returned_to_caller() {
        let mut corpus = corpus();
        corpus.insert("Nothing", Vec::new());
        let mut app = App::new(&corpus, RoundConfig::default());
        let err = app.start_round(2).unwrap_err();
        assert!(matches!(err, AppError::Corpus(CorpusError::CategoryEmpty(_))));
        assert_eq!(app.phase, Phase::Quit);
    }

    #[test]
    fn acknowledge_outside_result_is_illegal() {
        let corpus = corpus();
        let mut app = App::new(&corpus, RoundConfig::default());
        assert!(app.acknowledge().is_err());
    }
}
