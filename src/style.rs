//! Plot kinds and colors.

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
}

/// How samples are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlotKind {
    /// Segments joining samples in ascending x order.
    #[default]
    Line,
    /// A marker per sample, in insertion order.
    Scatter,
    /// A bar per sample, rising from the x-axis.
    Bar,
}

impl PlotKind {
    /// Whether samples are reordered by x before layout.
    pub fn sorts_by_x(self) -> bool {
        !matches!(self, Self::Scatter)
    }

    /// Whether the layout may drop samples to fit the plot width.
    pub fn allows_downsampling(self) -> bool {
        !matches!(self, Self::Scatter)
    }
}
