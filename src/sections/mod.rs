//! Password analysis sections
//!
//! Each section scores one aspect of password strength and contributes its
//! own improvement suggestions.

mod common;
mod complexity;
mod length;

pub use common::{COMMON_PASSWORD_SUGGESTION, common_password_section};
pub use complexity::{
    MISSING_DIGIT, MISSING_LOWERCASE, MISSING_SPECIAL, MISSING_UPPERCASE, SPECIAL_CHARACTERS,
    complexity_section,
};
pub use length::{SHORT_PASSWORD_SUGGESTION, length_section};

/// Contribution of one section to the final analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionOutcome {
    /// Added to the running score; may be negative.
    pub points: i64,
    pub suggestions: Vec<String>,
}

impl SectionOutcome {
    pub fn points(points: i64) -> Self {
        Self { points, suggestions: Vec::new() }
    }

    pub fn suggest(suggestion: &str) -> Self {
        Self { points: 0, suggestions: vec![suggestion.to_string()] }
    }
}
