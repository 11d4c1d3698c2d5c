//! Category source parsing
//!
//! A source is plain text: the first line names the category and every
//! following line is `word,hint`. Both fields are trimmed. Blank lines at the
//! end of the source are ignored; a blank line anywhere else is malformed.
//!
//! ```text
//! Fruits
//! apple, Keeps the doctor away
//! banana, Long yellow fruit monkeys love
//! ```

use super::CorpusError;
use crate::core::WordRecord;

/// Parse one category source
///
/// `origin` names the source in error messages (usually the file path).
///
/// # Errors
/// Returns `MalformedRecord` if a data line does not split into exactly two
/// comma-separated fields, or if the category label or the data lines are
/// missing.
///
/// # Examples
/// ```
/// use hangman::corpus::parse_source;
///
/// let (category, words) = parse_source("inline", "Fruits\napple, A fruit\n").unwrap();
/// assert_eq!(category, "Fruits");
/// assert_eq!(words[0].text(), "apple");
/// assert_eq!(words[0].hint(), "A fruit");
///
/// assert!(parse_source("inline", "Fruits\napplefruit\n").is_err());
/// ```
pub fn parse_source(origin: &str, content: &str) -> Result<(String, Vec<WordRecord>), CorpusError> {
    let mut lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .collect();
    while lines.last().is_some_and(|(_, line)| line.is_empty()) {
        lines.pop();
    }
    let mut lines = lines.into_iter();

    let category = match lines.next() {
        Some((_, category)) if !category.is_empty() => category,
        _ => return Err(malformed(origin, "missing category line")),
    };

    let words = lines
        .map(|(line_no, line)| {
            parse_record(line).ok_or_else(|| {
                malformed(
                    origin,
                    format!("line {line_no}: invalid word format {line:?}, expected 'word,hint'"),
                )
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if words.is_empty() {
        return Err(malformed(origin, format!("category {category:?} has no words")));
    }

    Ok((category.to_string(), words))
}

/// Split a `word,hint` line; `None` unless there is exactly one comma
fn parse_record(line: &str) -> Option<WordRecord> {
    let mut fields = line.split(',');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(text), Some(hint), None) => Some(WordRecord::new(text.trim(), hint.trim())),
        _ => None,
    }
}

fn malformed(origin: &str, reason: impl Into<String>) -> CorpusError {
    CorpusError::MalformedRecord {
        origin: origin.to_string(),
        reason: reason.into(),
    }
}
