//! Common password section - penalizes well-known passwords.

use crate::common::CommonPasswordSet;
use secrecy::{ExposeSecret, SecretString};
use super::SectionOutcome;

const COMMON_PENALTY: i64 = -2;

pub const COMMON_PASSWORD_SUGGESTION: &str = "Choose a less common password.";

/// Checks the password against a common password list.
///
/// # Returns
/// - `Some(outcome)` with a penalty if the password is an exact match
/// - `None` if the password is not in the list
pub fn common_password_section(
    password: &SecretString,
    common: &CommonPasswordSet,
) -> Option<SectionOutcome> {
    if common.contains(password.expose_secret()) {
        return Some(SectionOutcome {
            points: COMMON_PENALTY,
            suggestions: vec![COMMON_PASSWORD_SUGGESTION.to_string()],
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_common_password_section_match() {
        let common = CommonPasswordSet::builtin();
        let result = common_password_section(&secret("qwerty"), &common);
        let outcome = result.expect("qwerty is common");
        assert_eq!(outcome.points, -2);
        assert_eq!(outcome.suggestions, vec![COMMON_PASSWORD_SUGGESTION.to_string()]);
    }

    #[test]
    fn test_common_password_section_case_sensitive() {
        let common = CommonPasswordSet::builtin();
        assert_eq!(common_password_section(&secret("Qwerty"), &common), None);
    }

    #[test]
    fn test_common_password_section_strong_password() {
        let common = CommonPasswordSet::builtin();
        let result = common_password_section(&secret("CorrectHorseBatteryStaple!123"), &common);
        assert_eq!(result, None);
    }

    #[test]
    fn test_common_password_section_custom_list() {
        let common = CommonPasswordSet::from_entries(["letmein"]);
        assert!(common_password_section(&secret("letmein"), &common).is_some());
        assert!(common_password_section(&secret("password"), &common).is_none());
    }
}
