//! Password strength analysis library
//!
//! Scores a password, labels it weak, medium or strong, and lists what to
//! change to make it stronger.
//!
//! # Features
//!
//! - `async`: Enables debounced async analysis with cancellation
//! - `tracing`: Enables logging via tracing crate
//! - `server`: HTTP endpoint (`POST /password/analyze`) and the
//!   `pwd-analyzer-server` binary
//!
//! # Environment Variables (server)
//!
//! - `PWD_ANALYZER_ADDR`: listen address (default: `127.0.0.1:8000`)
//! - `PWD_COMMON_PASSWORDS_PATH`: file replacing the built-in common list
//!
//! # Example
//!
//! ```rust
//! use pwd_strength_analyzer::{analyze_password_strength, StrengthCategory};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdefghijk1!".to_string().into());
//! let result = analyze_password_strength(&password);
//!
//! assert_eq!(result.strength_score(), 6);
//! assert_eq!(result.strength_category(), StrengthCategory::Strong);
//! assert!(result.improvement_suggestions().is_empty());
//! ```

// Internal modules
mod analyzer;
mod breach;
mod common;
mod result;
mod sections;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

// Public API
pub use analyzer::{PasswordAnalyzer, analyze_password_strength};
pub use breach::{BreachLookup, NoBreachLookup};
pub use common::{BUILTIN_COMMON_PASSWORDS, CommonListError, CommonPasswordSet};
pub use result::{AnalysisResult, StrengthCategory};
pub use sections::{
    COMMON_PASSWORD_SUGGESTION, MISSING_DIGIT, MISSING_LOWERCASE, MISSING_SPECIAL,
    MISSING_UPPERCASE, SHORT_PASSWORD_SUGGESTION, SPECIAL_CHARACTERS,
};

#[cfg(feature = "async")]
pub use analyzer::{DEBOUNCE, analyze_password_strength_tx};
