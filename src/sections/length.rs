//! Length section - rewards longer passwords.

use secrecy::{ExposeSecret, SecretString};
use super::SectionOutcome;

const MIN_LENGTH: usize = 8;
const LONG_LENGTH: usize = 12;

pub const SHORT_PASSWORD_SUGGESTION: &str = "Increase password length to at least 8 characters.";

/// Scores the password length, counted in characters.
///
/// - 12 or more: +2
/// - 8 to 11: +1
/// - shorter: +0 with a suggestion
pub fn length_section(password: &SecretString) -> SectionOutcome {
    let len = password.expose_secret().chars().count();
    if len >= LONG_LENGTH {
        SectionOutcome::points(2)
    } else if len >= MIN_LENGTH {
        SectionOutcome::points(1)
    } else {
        SectionOutcome::suggest(SHORT_PASSWORD_SUGGESTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_length_section_too_short() {
        let result = length_section(&secret("Short1!"));
        assert_eq!(result.points, 0);
        assert_eq!(result.suggestions, vec![SHORT_PASSWORD_SUGGESTION.to_string()]);
    }

    #[test]
    fn test_length_section_empty() {
        let result = length_section(&secret(""));
        assert_eq!(result.points, 0);
        assert_eq!(result.suggestions.len(), 1);
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let result = length_section(&secret("12345678"));
        assert_eq!(result, SectionOutcome::points(1));
    }

    #[test]
    fn test_length_section_just_below_long() {
        let result = length_section(&secret("abcdefghijk"));
        assert_eq!(result, SectionOutcome::points(1));
    }

    #[test]
    fn test_length_section_long() {
        let result = length_section(&secret("LongEnough123!"));
        assert_eq!(result, SectionOutcome::points(2));
    }

    #[test]
    fn test_length_section_counts_characters_not_bytes() {
        // 7 characters, 14 bytes
        let result = length_section(&secret("ééééééé"));
        assert_eq!(result.points, 0);
        assert_eq!(result.suggestions.len(), 1);
    }
}
