//! Password strength analyzer - main analysis logic.

use std::fmt;
use std::sync::Arc;

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::breach::{BreachLookup, NoBreachLookup};
use crate::common::CommonPasswordSet;
use crate::result::AnalysisResult;
use crate::sections::{
    SectionOutcome, common_password_section, complexity_section, length_section,
};

/// Delay before an async analysis starts, so rapid keystrokes can cancel it.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Scores passwords against a common password list and a breach lookup.
///
/// Cloning is cheap; the list and lookup are shared.
#[derive(Clone)]
pub struct PasswordAnalyzer {
    common_passwords: Arc<CommonPasswordSet>,
    breach_lookup: Arc<dyn BreachLookup>,
}

impl Default for PasswordAnalyzer {
    fn default() -> Self {
        Self {
            common_passwords: CommonPasswordSet::builtin(),
            breach_lookup: Arc::new(NoBreachLookup),
        }
    }
}

impl fmt::Debug for PasswordAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordAnalyzer")
            .field("common_passwords", &self.common_passwords.len())
            .finish_non_exhaustive()
    }
}

impl PasswordAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the built-in common password list.
    pub fn with_common_passwords(mut self, common: CommonPasswordSet) -> Self {
        self.common_passwords = Arc::new(common);
        self
    }

    pub fn with_breach_lookup<B: BreachLookup + 'static>(mut self, lookup: B) -> Self {
        self.breach_lookup = Arc::new(lookup);
        self
    }

    pub fn common_passwords(&self) -> &CommonPasswordSet {
        &self.common_passwords
    }

    /// Analyzes a password.
    ///
    /// Total over every input, including the empty string. Sections run in a
    /// fixed order (length, complexity, common password) and suggestions keep
    /// that order; the category is taken from the final score.
    pub fn analyze(&self, password: &SecretString) -> AnalysisResult {
        let mut score: i64 = 0;
        let mut suggestions: Vec<String> = Vec::new();

        let mut apply = |outcome: SectionOutcome| {
            score += outcome.points;
            suggestions.extend(outcome.suggestions);
        };

        apply(length_section(password));
        apply(complexity_section(password));

        let common = common_password_section(password, &self.common_passwords);
        let common_password = common.is_some();
        if let Some(outcome) = common {
            apply(outcome);
        }

        let breach_history_found = self.breach_lookup.is_breached(password);

        AnalysisResult::new(score, suggestions, breach_history_found, common_password)
    }
}

/// Analyzes a password with the built-in common password list and no breach
/// data.
pub fn analyze_password_strength(password: &SecretString) -> AnalysisResult {
    PasswordAnalyzer::default().analyze(password)
}

/// Async version that sends the analysis result via channel.
///
/// Waits [`DEBOUNCE`] first; if `token` is cancelled in the meantime nothing
/// is sent.
#[cfg(feature = "async")]
pub async fn analyze_password_strength_tx(
    analyzer: &PasswordAnalyzer,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<AnalysisResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("analysis is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("analysis cancelled before start");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let result = analyzer.analyze(password);

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
