//! Game rules and flow
//!
//! The round engine, its configuration, guess input and the session loop that
//! strings rounds together.

mod config;
mod input;
mod round;
mod session;

pub use config::{DEFAULT_ADDITIONAL_GUESSES, POINTS_PER_CORRECT_GUESS, RoundConfig};
pub use input::{GuessSource, InputError, parse_guess};
pub use round::{GuessOutcome, Round, RoundError, RoundOutcome, RoundStatus, play_round};
pub use session::{Event, Phase, Session, SessionError, SessionStats, SessionUi};
