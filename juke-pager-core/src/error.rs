//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum PagerError {
    /// The wrapper element the pager renders into does not exist
    #[error("pagination should have exist wrapper dom: {0}")]
    MissingContainer(String),

    /// Class names passed to the class-list helpers must be a single token
    #[error("className should not contain space: {0:?}")]
    InvalidClassName(String),

    /// Options payload could not be decoded
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Event name other than `changePage` / `changePageSize`
    #[error("Unknown event type: {0}")]
    UnknownEventType(String),
}

impl PagerError {
    /// Whether it is expected behavior (bad caller input), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidClassName(_) | Self::InvalidOptions(_) | Self::UnknownEventType(_) => {
                true
            }
            Self::MissingContainer(_) => false,
        }
    }

    /// Log this error at the level chosen by [`Self::is_expected`].
    pub fn log(&self) {
        if self.is_expected() {
            log::warn!("{self}");
        } else {
            log::error!("{self}");
        }
    }
}

impl From<serde_json::Error> for PagerError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidOptions(err.to_string())
    }
}

/// Core layer Result type alias
pub type PagerResult<T> = std::result::Result<T, PagerError>;
