//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

use crate::analyzer::PasswordAnalyzer;
use crate::common::{CommonListError, CommonPasswordSet};

pub const ADDR_ENV: &str = "PWD_ANALYZER_ADDR";
pub const COMMON_PASSWORDS_PATH_ENV: &str = "PWD_COMMON_PASSWORDS_PATH";
pub const DEFAULT_ADDR: &str = "127.0.0.1:8000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid listen address {value:?}: {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error(transparent)]
    CommonList(#[from] CommonListError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Replaces the built-in common password list when set.
    pub common_passwords_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Reads the configuration.
    ///
    /// - `PWD_ANALYZER_ADDR`: listen address (default `127.0.0.1:8000`)
    /// - `PWD_COMMON_PASSWORDS_PATH`: optional common password file
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_addr = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse()
            .map_err(|source| ConfigError::InvalidAddr { value: raw_addr.clone(), source })?;

        let common_passwords_path = std::env::var(COMMON_PASSWORDS_PATH_ENV)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { addr, common_passwords_path })
    }

    pub fn build_analyzer(&self) -> Result<PasswordAnalyzer, ConfigError> {
        let analyzer = PasswordAnalyzer::new();
        match &self.common_passwords_path {
            Some(path) => {
                let common = CommonPasswordSet::from_path(path)?;
                Ok(analyzer.with_common_passwords(common))
            }
            None => Ok(analyzer),
        }
    }
}
