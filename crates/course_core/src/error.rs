//! Business-facing error type shared by DTO validation and use-cases.
//!
//! # Invariants
//! - `Validation` and `NotFound` messages are user-facing and returned
//!   verbatim to callers.
//! - Storage failures are wrapped, never rewritten.

use crate::repo::course_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CourseResult<T> = Result<T, CourseError>;

/// Error returned by `CourseDto` and `CourseBusiness`.
#[derive(Debug)]
pub enum CourseError {
    /// Malformed input or a rule violation (400-class).
    Validation(String),
    /// Referenced course id does not exist (404-class).
    NotFound(String),
    /// Storage collaborator failure.
    Repo(RepoError),
}

impl CourseError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// HTTP-style status class for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::Repo(_) => 500,
        }
    }

    /// Stable short code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NotFound(_) => "not_found",
            Self::Repo(_) => "repo",
        }
    }
}

impl Display for CourseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(message) | Self::NotFound(message) => f.write_str(message),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CourseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for CourseError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
