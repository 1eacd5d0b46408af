//! Geometric primitives used by the layout pipeline.
//!
//! [`Point`] lives in data space. [`ScreenPoint`] and [`ScreenRect`] are whole
//! pixel coordinates with the origin at the top-left of the widget.

/// A sample in data space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X value in data coordinates.
    pub x: f64,
    /// Y value in data coordinates.
    pub y: f64,
}

impl Point {
    /// Create a new data point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    /// Pixel column.
    pub x: i32,
    /// Pixel row, growing downward.
    pub y: i32,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a rectangle from two corners, ordering them so `min <= max`.
    pub fn from_corners(a: ScreenPoint, b: ScreenPoint) -> Self {
        Self {
            min: ScreenPoint::new(a.x.min(b.x), a.y.min(b.y)),
            max: ScreenPoint::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Create a rectangle from an origin and a (possibly negative) size.
    pub fn from_origin_size(origin: ScreenPoint, width: i32, height: i32) -> Self {
        let far = ScreenPoint::new(
            origin.x.saturating_add(width),
            origin.y.saturating_add(height),
        );
        Self::from_corners(origin, far)
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }
}

/// Size of the widget's drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewportSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ViewportSize {
    /// Create a viewport size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width left for plotting once `margin` is removed from both sides.
    pub fn plot_width(&self, margin: u32) -> i64 {
        i64::from(self.width) - 2 * i64::from(margin)
    }

    /// Height left for plotting once `margin` is removed from both sides.
    pub fn plot_height(&self, margin: u32) -> i64 {
        i64::from(self.height) - 2 * i64::from(margin)
    }
}

/// Round a pixel value and saturate it into the `i32` range.
pub(crate) fn to_pixel(value: f64) -> i32 {
    // `as` saturates on overflow and maps NaN to zero.
    value.round() as i32
}

/// Saturate a wide pixel value into the `i32` range.
pub(crate) fn clamp_px(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Convert a pixel count into a screen coordinate.
pub(crate) fn px(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_from_negative_size_is_normalized() {
        let rect = ScreenRect::from_origin_size(ScreenPoint::new(10, 40), 6, -15);
        assert_eq!(rect.min, ScreenPoint::new(10, 25));
        assert_eq!(rect.max, ScreenPoint::new(16, 40));
        assert_eq!(rect.width(), 6);
        assert_eq!(rect.height(), 15);
    }

    #[test]
    fn plot_area_can_be_negative() {
        let size = ViewportSize::new(8, 80);
        assert_eq!(size.plot_width(5), -2);
        assert_eq!(size.plot_height(5), 70);
    }

    #[test]
    fn to_pixel_rounds_and_saturates() {
        assert_eq!(to_pixel(63.6), 64);
        assert_eq!(to_pixel(-111.67), -112);
        assert_eq!(to_pixel(-0.0), 0);
        assert_eq!(to_pixel(1e20), i32::MAX);
        assert_eq!(to_pixel(f64::NAN), 0);
        assert_eq!(clamp_px(i64::from(i32::MIN) - 1), i32::MIN);
    }
}
