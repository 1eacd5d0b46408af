//! Error types for chart layer operations.

use thiserror::Error;

/// Result type alias using [`ChartError`].
pub type Result<T> = std::result::Result<T, ChartError>;

/// Data axis an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal data axis.
    X,
    /// Vertical data axis.
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// Errors reported by the chart layer.
///
/// A failed operation leaves the chart state untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// An input array holds fewer values than the declared sample count.
    #[error("{axis} data has {len} values but {count} samples were declared")]
    DataTooShort {
        /// Axis of the short array.
        axis: Axis,
        /// Actual array length.
        len: usize,
        /// Declared sample count.
        count: usize,
    },

    /// X and Y arrays differ in length.
    #[error("data length mismatch: x has {x_len} values, y has {y_len} values")]
    DataLengthMismatch {
        /// Length of x data.
        x_len: usize,
        /// Length of y data.
        y_len: usize,
    },

    /// A sample value is NaN or infinite.
    #[error("non-finite {axis} value at index {index}")]
    NonFiniteValue {
        /// Axis of the offending value.
        axis: Axis,
        /// Sample index.
        index: usize,
    },

    /// A pinned axis bound is NaN or infinite.
    #[error("non-finite pinned {axis} bound")]
    NonFiniteBound {
        /// Axis of the offending bound.
        axis: Axis,
    },

    /// The margins leave no room to plot in.
    #[error("viewport {width}x{height} leaves no plotting area with margin {margin}")]
    ViewportTooSmall {
        /// Viewport width in pixels.
        width: u32,
        /// Viewport height in pixels.
        height: u32,
        /// Effective margin in pixels.
        margin: u32,
    },
}
