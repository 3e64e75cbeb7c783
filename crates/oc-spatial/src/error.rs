//! Spatial-subsystem error type.

use thiserror::Error;

use oc_core::Point;

use crate::obstacles::ObstacleKind;

/// Reasons a checked route edit was refused.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SpatialError {
    #[error("cell {0} is outside the grid")]
    OffGrid(Point),

    #[error("cell {at} is blocked by {kind:?}")]
    Blocked { at: Point, kind: ObstacleKind },

    #[error("cells {a} and {b} are not adjacent")]
    NotAdjacent { a: Point, b: Point },

    #[error("path limit reached: at most {max} segments allowed")]
    SegmentBudgetExhausted { max: u32 },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
