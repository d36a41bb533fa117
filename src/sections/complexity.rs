//! Complexity section - checks for lowercase, uppercase, digits, special chars.

use secrecy::{ExposeSecret, SecretString};
use super::SectionOutcome;

/// Characters that satisfy the special-character predicate.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()-_+";

pub const MISSING_LOWERCASE: &str = "Include at least one lowercase letter.";
pub const MISSING_UPPERCASE: &str = "Include at least one uppercase letter.";
pub const MISSING_DIGIT: &str = "Include at least one digit.";
pub const MISSING_SPECIAL: &str = "Include at least one special character.";

fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

/// Awards one point per character class present.
///
/// Every missing class adds its own suggestion, always in the order
/// lowercase, uppercase, digit, special.
pub fn complexity_section(password: &SecretString) -> SectionOutcome {
    let pwd = password.expose_secret();
    let checks = [
        (pwd.chars().any(char::is_lowercase), MISSING_LOWERCASE),
        (pwd.chars().any(char::is_uppercase), MISSING_UPPERCASE),
        (pwd.chars().any(|c| c.is_ascii_digit()), MISSING_DIGIT),
        (pwd.chars().any(is_special), MISSING_SPECIAL),
    ];

    let points = checks.iter().filter(|(present, _)| *present).count() as i64;
    let suggestions = checks
        .iter()
        .filter(|(present, _)| !*present)
        .map(|(_, suggestion)| suggestion.to_string())
        .collect();

    SectionOutcome { points, suggestions }
}
