use grid_util::point::Point;
use thiserror::Error;

/// Reasons a query can fail before producing a path. An unreachable goal is not one of them: that
/// is reported as an empty path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The grid has no cells, or too many to address with `i32` coordinates.
    #[error("degenerate grid of size {width}x{height}")]
    DegenerateGrid { width: usize, height: usize },

    /// The start or goal lies outside `[0, width) x [0, height)`.
    #[error("point ({}, {}) is outside the {width}x{height} grid", .point.x, .point.y)]
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },

    /// The expansion or time budget ran out before the search finished.
    #[error("search aborted after {expansions} expansions")]
    Aborted { expansions: usize },
}

pub type Result<T> = std::result::Result<T, SearchError>;
