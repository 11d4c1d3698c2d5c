//! Formatting utilities for terminal output

use crate::game::Round;

/// Letters joined with commas, e.g. `"x,q"`
#[must_use]
pub fn join_letters(letters: &[char]) -> String {
    let mut out = String::with_capacity(letters.len() * 2);
    for (i, letter) in letters.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push(*letter);
    }
    out
}

/// One-line board: mask, score, remaining attempts and wrong letters
#[must_use]
pub fn board_line(round: &Round<'_>) -> String {
    format!(
        "{}\tscore: {},\tremaining: {}\tincorrect: {}",
        round.masked(),
        round.score(),
        round.remaining(),
        join_letters(round.incorrect())
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordRecord;
    use crate::game::RoundConfig;

    #[test]
    fn join_letters_empty() {
        assert_eq!(join_letters(&[]), "");
    }

    #[test]
    fn join_letters_several() {
        assert_eq!(join_letters(&['x', 'q', 'z']), "x,q,z");
    }

    #[test]
    fn board_line_after_guesses() {
        let word = WordRecord::new("hello", "A greeting");
        let mut round = Round::new(&word, RoundConfig::default()).unwrap();
        round.process_guess('l');
        round.process_guess('x');
        assert_eq!(
            board_line(&round),
            "_ _ l l _\tscore: 10,\tremaining: 7\tincorrect: x"
        );
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
