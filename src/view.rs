//! Closed intervals in data space.

/// Closed interval `[min, max]` of data values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Range {
    /// Interval between `a` and `b`, in either order.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Smallest interval containing every value, or `None` when there are none.
    pub fn covering(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |range, value| {
            Some(match range {
                Some(range) => range.including(value),
                None => Self::new(value, value),
            })
        })
    }

    /// This interval grown to contain `value`.
    pub fn including(self, value: f64) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }

    /// Width of the interval.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when the interval has no usable width.
    pub fn is_degenerate(&self) -> bool {
        let span = self.span();
        span.is_nan() || span <= 0.0
    }

    /// Distance of `value` above the lower bound.
    pub fn offset(&self, value: f64) -> f64 {
        value - self.min
    }

    /// Widen to at least `min_span`, keeping the midpoint.
    pub fn with_min_span(&self, min_span: f64) -> Self {
        if self.span() >= min_span {
            return *self;
        }
        let mid = self.min + self.span() / 2.0;
        Self {
            min: mid - min_span / 2.0,
            max: mid + min_span / 2.0,
        }
    }
}
