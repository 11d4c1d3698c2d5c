//! Letter classification
//!
//! Decides which characters of a word are guessable letters. A letter is any
//! character in the Unicode letter categories (Lu, Ll, Lt, Lm, Lo), so accented
//! letters count while spaces, digits, punctuation, combining marks and letter
//! numerals do not.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Check whether a single character is a letter
///
/// # Examples
/// ```
/// use hangman::core::is_letter;
///
/// assert!(is_letter('a'));
/// assert!(is_letter('é'));
/// assert!(!is_letter('-'));
/// assert!(!is_letter('\u{093E}')); // Devanagari vowel sign AA
/// ```
#[inline]
#[must_use]
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Check whether every character of `s` is a letter
///
/// The empty string has no offending character and is therefore alphabetic.
/// Callers that need a non-empty word must check emptiness separately.
#[must_use]
pub fn is_alphabetic(s: &str) -> bool {
    s.chars().all(is_letter)
}

/// Fold a character to lowercase
///
/// Characters whose lowercase form spans several scalars (`'İ'`) are returned
/// unchanged so one text position always stays one mask position.
#[must_use]
pub fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letters() {
        assert!(is_letter('a'));
        assert!(is_letter('Z'));
        assert!(is_letter('é'));
        assert!(is_letter('ß'));
    }

    #[test]
    fn non_letters() {
        for c in ['1', ' ', '!', '_', '-', '\''] {
            assert!(!is_letter(c), "{c:?} should not be a letter");
        }
    }

    #[test]
    fn marks_and_letter_numerals_are_not_letters() {
        // Mc vowel sign, Mn virama, Nl roman numeral, Mn ypogegrammeni
        for c in ['\u{093E}', '\u{094D}', '\u{216B}', '\u{0345}'] {
            assert!(!is_letter(c), "{c:?} should not be a letter");
        }
    }

    #[test]
    fn other_letter_categories() {
        assert!(is_letter('न')); // Lo
        assert!(is_letter('ǅ')); // Lt
        assert!(is_letter('ʰ')); // Lm
    }

    #[test]
    fn whole_strings() {
        assert!(is_alphabetic("abc"));
        assert!(is_alphabetic("aBc"));
        assert!(is_alphabetic("café"));
        assert!(!is_alphabetic("a1"));
        assert!(!is_alphabetic("a b"));
        assert!(!is_alphabetic("!@#"));
        assert!(!is_alphabetic("abc123"));
    }

    #[test]
    fn empty_string_is_vacuously_alphabetic() {
        assert!(is_alphabetic(""));
    }

    #[test]
    fn fold_case_lowercases() {
        assert_eq!(fold_case('A'), 'a');
        assert_eq!(fold_case('É'), 'é');
        assert_eq!(fold_case('x'), 'x');
        assert_eq!(fold_case('-'), '-');
    }

    #[test]
    fn fold_case_keeps_multi_scalar_lowercase() {
        // 'İ' lowercases to "i\u{307}"
        assert_eq!(fold_case('İ'), 'İ');
    }
}
