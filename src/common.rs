//! Common password list
//!
//! Holds the fixed set of well-known weak passwords and, optionally, custom
//! lists loaded from disk.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};
use thiserror::Error;

/// Passwords flagged by every default analyzer.
pub const BUILTIN_COMMON_PASSWORDS: [&str; 5] =
    ["password", "123456", "12345678", "qwerty", "abc123"];

static BUILTIN: LazyLock<Arc<CommonPasswordSet>> = LazyLock::new(|| {
    Arc::new(CommonPasswordSet::from_entries(BUILTIN_COMMON_PASSWORDS))
});

#[derive(Error, Debug)]
pub enum CommonListError {
    #[error("Common password file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common password file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Common password file is empty")]
    EmptyFile,
}

/// Immutable set of known-weak passwords.
///
/// Membership is exact and case-sensitive: `"Password"` does not match
/// `"password"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonPasswordSet {
    entries: HashSet<String>,
}

impl CommonPasswordSet {
    /// Returns the process-wide built-in set, built on first use.
    pub fn builtin() -> Arc<CommonPasswordSet> {
        Arc::clone(&BUILTIN)
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Loads a newline-separated list.
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped; case is
    /// preserved.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CommonListError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common password list FAILED: FileNotFound {}", path.display());
            return Err(CommonListError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        let set = Self::from_entries(
            content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty()),
        );

        if set.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common password list FAILED: Empty file {}", path.display());
            return Err(CommonListError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Common password list loaded: {} entries from {:?}", set.len(), path);

        Ok(set)
    }

    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(password)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_contains_exactly_five() {
        let set = CommonPasswordSet::builtin();
        assert_eq!(set.len(), 5);
        for pwd in BUILTIN_COMMON_PASSWORDS {
            assert!(set.contains(pwd), "{pwd} should be common");
        }
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = CommonPasswordSet::builtin();
        let b = CommonPasswordSet::builtin();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_membership_is_exact_and_case_sensitive() {
        let set = CommonPasswordSet::builtin();
        assert!(!set.contains("Password"));
        assert!(!set.contains("QWERTY"));
        assert!(!set.contains("password1"));
        assert!(!set.contains(" password"));
        assert!(!set.contains("1234567"));
        assert!(!set.contains(""));
    }

    #[test]
    fn test_from_path_file_not_found() {
        let result = CommonPasswordSet::from_path("/nonexistent/path/common.txt");
        match result {
            Err(CommonListError::FileNotFound(_)) => {}
            _ => panic!("Expected FileNotFound error"),
        }
    }

    #[test]
    fn test_from_path_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "").expect("Failed to write empty content");

        let result = CommonPasswordSet::from_path(temp_file.path());
        assert!(matches!(result, Err(CommonListError::EmptyFile)));
    }

    #[test]
    fn test_from_path_blank_lines_only() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "   ").expect("Failed to write");
        writeln!(temp_file).expect("Failed to write");

        let result = CommonPasswordSet::from_path(temp_file.path());
        assert!(matches!(result, Err(CommonListError::EmptyFile)));
    }

    #[test]
    fn test_from_path_success() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "  letmein  ").expect("Failed to write");
        writeln!(temp_file).expect("Failed to write");
        writeln!(temp_file, "Dragon").expect("Failed to write");

        let set = CommonPasswordSet::from_path(temp_file.path()).expect("list should load");
        assert_eq!(set.len(), 2);
        assert!(set.contains("letmein"));
        assert!(set.contains("Dragon"));
        assert!(!set.contains("dragon"));
    }
}
