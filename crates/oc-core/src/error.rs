//! Core error type.
//!
//! Expected gameplay violations (over-capacity loads, duplicate segments, …)
//! are not errors; they leave state unchanged.  `CoreError` covers inputs the
//! engine cannot run with at all.

use thiserror::Error;

use crate::grid::Point;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("depot {0} lies outside the grid")]
    DepotOffGrid(Point),
}

/// Shorthand result type for `oc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
