//! Runtime configuration for callers of the core.
//!
//! # Responsibility
//! - Resolve DB path and logging settings from explicit values, then
//!   environment variables, then defaults.
//!
//! # Invariants
//! - Blank values (explicit or env) are treated as unset.
//! - `log_level` is always a normalized level string.

use crate::logging::{default_log_level, normalize_level};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "COURSE_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "COURSE_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "COURSE_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "course_catalog.sqlite3";

/// Resolved settings for opening storage and starting logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: &'static str,
    /// `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl CoreConfig {
    /// Resolves config against the process environment.
    pub fn resolve(
        db_path: Option<&str>,
        log_level: Option<&str>,
        log_dir: Option<&str>,
    ) -> Result<Self, String> {
        Self::resolve_with(db_path, log_level, log_dir, |key| std::env::var(key).ok())
    }

    /// Resolves config using `lookup` in place of `std::env::var`.
    pub fn resolve_with(
        db_path: Option<&str>,
        log_level: Option<&str>,
        log_dir: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, String> {
        let pick = |explicit: Option<&str>, key: &str| -> Option<String> {
            non_blank(explicit.map(str::to_string)).or_else(|| non_blank(lookup(key)))
        };

        let db_path = pick(db_path, DB_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
        let log_level = match pick(log_level, LOG_LEVEL_ENV) {
            Some(level) => normalize_level(&level)?,
            None => default_log_level(),
        };
        let log_dir = pick(log_dir, LOG_DIR_ENV).map(PathBuf::from);

        Ok(Self {
            db_path,
            log_level,
            log_dir,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
