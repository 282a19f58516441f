//! Session and environment configuration.
//!
//! Malformed options are rejected here, at construction time — never mid-
//! countdown.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::safepoint::SafepointUnit;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("countdown duration must be at least one second, got {0}")]
    InvalidCountdown(u32),

    #[error("units per safepoint must be nonzero")]
    InvalidSafepointStep,

    #[error("cannot open draft directory {path}: {source}")]
    DraftDir {
        path: PathBuf,
        #[source]
        source: draft_store::DraftStoreError,
    },
}

/// Recognized session options.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Seconds of inactivity before unconfirmed text is deleted.
    pub countdown_seconds: u32,
    /// Whether safepoints trigger on word or character counts.
    pub safepoint_unit: SafepointUnit,
    /// Unit count between safepoints.
    pub units_per_safepoint: usize,
    /// Persist confirmed text to a dated draft file at each safepoint.
    pub persist_on_safepoint: bool,
    /// Directory draft files are written into.
    pub draft_dir: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            countdown_seconds: 10,
            safepoint_unit: SafepointUnit::Words,
            units_per_safepoint: 100,
            persist_on_safepoint: false,
            draft_dir: PathBuf::from("."),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.countdown_seconds == 0 {
            return Err(ConfigError::InvalidCountdown(self.countdown_seconds));
        }
        if self.units_per_safepoint == 0 {
            return Err(ConfigError::InvalidSafepointStep);
        }
        Ok(())
    }

    /// Applies environment overrides on top of the configured values.
    #[must_use]
    pub fn with_env(mut self, env: &EnvConfig) -> Self {
        if let Some(dir) = &env.draft_dir {
            self.draft_dir = PathBuf::from(dir);
        }
        self
    }
}

/// Environment switches, read once at startup.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub debug: bool,
    pub draft_dir: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            debug: env_flag("DANGEROUS_WRITING_DEBUG"),
            draft_dir: env_string_opt("DANGEROUS_WRITING_DRAFT_DIR"),
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}
