//! Axis bounds and tick spacing math.

use crate::error::{Axis, ChartError, Result};
use crate::geom::to_pixel;
use crate::view::Range;

/// Order of magnitude used for gridline spacing.
///
/// For `value > 1` this is the exponent of the largest power of ten not above
/// `value`; for `0 < value <= 1` it is the exponent of the smallest power of
/// ten not below `value`. Zero, negative and non-finite values map to `0`.
pub fn closest_log10(value: f64) -> i32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let mut value = value;
    let mut log = 0;
    if value > 1.0 {
        while value >= 10.0 {
            value /= 10.0;
            log += 1;
        }
    } else {
        while value * 10.0 <= 1.0 {
            value *= 10.0;
            log -= 1;
        }
    }
    log
}

/// `10^exp`.
pub fn exponential10(exp: i32) -> f64 {
    10_f64.powi(exp)
}

/// Pixel distance between major gridlines for a data span drawn at `scale`
/// pixels per unit.
pub fn tick_spacing_px(scale: f64, span: f64) -> i32 {
    to_pixel(scale * exponential10(closest_log10(span)))
}

/// User-pinned bounds for one axis.
///
/// `None` on either side means that side is auto-ranged from the data.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisBounds {
    /// Pinned minimum.
    pub min: Option<f64>,
    /// Pinned maximum.
    pub max: Option<f64>,
}

impl AxisBounds {
    /// Bounds with nothing pinned.
    pub const fn auto() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Check whether either side is pinned.
    pub fn is_pinned(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Override the data range with whatever is pinned.
    ///
    /// Sides are never reordered: a pinned minimum above the maximum yields a
    /// range with a negative span, which layout treats as degenerate.
    pub fn resolve(&self, data: Range) -> Range {
        Range {
            min: self.min.unwrap_or(data.min),
            max: self.max.unwrap_or(data.max),
        }
    }
}

/// Reject NaN and infinite pinned values.
pub(crate) fn check_bound(axis: Axis, value: Option<f64>) -> Result<Option<f64>> {
    match value {
        Some(value) if !value.is_finite() => Err(ChartError::NonFiniteBound { axis }),
        other => Ok(other),
    }
}
