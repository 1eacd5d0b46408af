//! Sample storage and input normalization.
//!
//! Callers hand over x and y values as integer or floating slices. Both are
//! normalized to `f64` and copied into an owned [`SampleSet`], which is
//! replaced wholesale on every load.

mod sampling;
mod store;

pub use sampling::{Sampling, sampling_stride, x_order};
pub use store::DataStore;

use crate::error::{Axis, ChartError, Result};
use crate::geom::Point;

/// Representation of caller-supplied values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Whole numbers, converted to floating point on load.
    Int,
    /// Floating point values, copied as-is.
    Float,
}

/// Borrowed input values for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Values<'a> {
    /// Integer input.
    Int(&'a [i32]),
    /// Floating point input.
    Float(&'a [f64]),
}

impl Values<'_> {
    /// Representation of the input.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
        }
    }

    /// Number of values available.
    pub fn len(&self) -> usize {
        match self {
            Self::Int(values) => values.len(),
            Self::Float(values) => values.len(),
        }
    }

    /// Check whether there are no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy the first `count` values into `out` as `f64`.
    ///
    /// `i32` converts to `f64` without loss.
    fn normalize_into(&self, count: usize, out: &mut Vec<f64>) {
        out.clear();
        out.reserve(count);
        match self {
            Self::Int(values) => out.extend(values[..count].iter().map(|&v| f64::from(v))),
            Self::Float(values) => out.extend_from_slice(&values[..count]),
        }
    }
}

impl<'a> From<&'a [i32]> for Values<'a> {
    fn from(values: &'a [i32]) -> Self {
        Self::Int(values)
    }
}

impl<'a> From<&'a [f64]> for Values<'a> {
    fn from(values: &'a [f64]) -> Self {
        Self::Float(values)
    }
}

impl<'a, const N: usize> From<&'a [i32; N]> for Values<'a> {
    fn from(values: &'a [i32; N]) -> Self {
        Self::Int(values)
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for Values<'a> {
    fn from(values: &'a [f64; N]) -> Self {
        Self::Float(values)
    }
}

impl<'a> From<&'a Vec<i32>> for Values<'a> {
    fn from(values: &'a Vec<i32>) -> Self {
        Self::Int(values)
    }
}

impl<'a> From<&'a Vec<f64>> for Values<'a> {
    fn from(values: &'a Vec<f64>) -> Self {
        Self::Float(values)
    }
}

/// Owned samples in caller order.
///
/// `x` and `y` always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl SampleSet {
    /// Create an empty sample set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the first `count` values of each axis.
    ///
    /// Fails if either input holds fewer than `count` values or contains a
    /// non-finite value in that prefix.
    pub fn from_values(x: Values<'_>, y: Values<'_>, count: usize) -> Result<Self> {
        for (axis, values) in [(Axis::X, &x), (Axis::Y, &y)] {
            if values.len() < count {
                return Err(ChartError::DataTooShort {
                    axis,
                    len: values.len(),
                    count,
                });
            }
        }
        let mut samples = Self::new();
        x.normalize_into(count, &mut samples.x);
        y.normalize_into(count, &mut samples.y);
        samples.check_finite()?;
        Ok(samples)
    }

    /// Copy x and y values of equal length.
    pub fn from_xy(x: Values<'_>, y: Values<'_>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(ChartError::DataLengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Self::from_values(x, y, x.len())
    }

    /// Collect samples from data points.
    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let (x, y) = points.into_iter().map(|p| (p.x, p.y)).unzip();
        let samples = Self { x, y };
        samples.check_finite()?;
        Ok(samples)
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check whether there are no samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// X values in caller order.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Y values in caller order.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Sample at `index`.
    pub fn point(&self, index: usize) -> Option<Point> {
        Some(Point::new(*self.x.get(index)?, *self.y.get(index)?))
    }

    fn check_finite(&self) -> Result<()> {
        for (axis, values) in [(Axis::X, &self.x), (Axis::Y, &self.y)] {
            if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                return Err(ChartError::NonFiniteValue { axis, index });
            }
        }
        Ok(())
    }
}
