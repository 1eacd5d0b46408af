//! Chart configuration.

use std::time::Duration;

use crate::axis::{AxisBounds, check_bound};
use crate::error::{Axis, Result};
use crate::style::{Color, PlotKind};

/// Default reveal duration.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(1500);

/// Default margin around the plot, in pixels.
pub const DEFAULT_MARGIN: u32 = 5;

/// Styling, bounds and animation settings for a chart.
///
/// Every setter that can change the layout bumps [`ChartConfig::revision`];
/// the color setters do not.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChartConfig {
    kind: PlotKind,
    plot_color: Color,
    canvas_color: Color,
    show_points: bool,
    margin: u32,
    x_bounds: AxisBounds,
    y_bounds: AxisBounds,
    show_frame: bool,
    animate: bool,
    animation_duration: Duration,
    #[cfg_attr(feature = "serde", serde(skip))]
    revision: u64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            kind: PlotKind::Line,
            plot_color: Color::WHITE,
            canvas_color: Color::BLACK,
            show_points: false,
            margin: DEFAULT_MARGIN,
            x_bounds: AxisBounds::auto(),
            y_bounds: AxisBounds::auto(),
            show_frame: false,
            animate: true,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            revision: 0,
        }
    }
}

impl ChartConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the plot kind.
    pub fn with_kind(mut self, kind: PlotKind) -> Self {
        self.set_kind(kind);
        self
    }

    /// Set the base margin.
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.set_margin(margin);
        self
    }

    /// Set the frame visibility.
    pub fn with_frame(mut self, show: bool) -> Self {
        self.set_show_frame(show);
        self
    }

    /// Set whether new data is revealed progressively.
    pub fn with_animation(mut self, animate: bool) -> Self {
        self.set_animate(animate);
        self
    }

    /// Plot kind.
    pub fn kind(&self) -> PlotKind {
        self.kind
    }

    /// Color of lines, bars, markers, axes and frame.
    pub fn plot_color(&self) -> Color {
        self.plot_color
    }

    /// Background color.
    pub fn canvas_color(&self) -> Color {
        self.canvas_color
    }

    /// Whether markers are requested on line plots.
    pub fn show_points(&self) -> bool {
        self.show_points
    }

    /// Margin as set by the caller, without the frame pixel.
    pub fn base_margin(&self) -> u32 {
        self.margin
    }

    /// Margin used for layout: the base margin plus one pixel while the
    /// frame is drawn.
    pub fn margin(&self) -> u32 {
        self.margin.saturating_add(u32::from(self.show_frame))
    }

    /// Pinned x bounds.
    pub fn x_bounds(&self) -> AxisBounds {
        self.x_bounds
    }

    /// Pinned y bounds.
    pub fn y_bounds(&self) -> AxisBounds {
        self.y_bounds
    }

    /// Whether the frame is drawn.
    pub fn show_frame(&self) -> bool {
        self.show_frame
    }

    /// Whether new layouts are revealed progressively.
    pub fn animate(&self) -> bool {
        self.animate
    }

    /// Duration of a reveal.
    pub fn animation_duration(&self) -> Duration {
        self.animation_duration
    }

    /// Counter bumped by every layout-affecting change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Set the plot kind.
    pub fn set_kind(&mut self, kind: PlotKind) {
        self.kind = kind;
        self.touch();
    }

    /// Set the plot color.
    pub fn set_plot_color(&mut self, color: Color) {
        self.plot_color = color;
    }

    /// Set the background color.
    pub fn set_canvas_color(&mut self, color: Color) {
        self.canvas_color = color;
    }

    /// Show markers on line plots.
    pub fn set_show_points(&mut self, show: bool) {
        self.show_points = show;
        self.touch();
    }

    /// Set the base margin in pixels.
    pub fn set_margin(&mut self, margin: u32) {
        self.margin = margin;
        self.touch();
    }

    /// Pin or clear the x-axis minimum.
    pub fn set_x_min(&mut self, value: Option<f64>) -> Result<()> {
        self.x_bounds.min = check_bound(Axis::X, value)?;
        self.touch();
        Ok(())
    }

    /// Pin or clear the x-axis maximum.
    pub fn set_x_max(&mut self, value: Option<f64>) -> Result<()> {
        self.x_bounds.max = check_bound(Axis::X, value)?;
        self.touch();
        Ok(())
    }

    /// Pin or clear the y-axis minimum.
    pub fn set_y_min(&mut self, value: Option<f64>) -> Result<()> {
        self.y_bounds.min = check_bound(Axis::Y, value)?;
        self.touch();
        Ok(())
    }

    /// Pin or clear the y-axis maximum.
    pub fn set_y_max(&mut self, value: Option<f64>) -> Result<()> {
        self.y_bounds.max = check_bound(Axis::Y, value)?;
        self.touch();
        Ok(())
    }

    /// Return the x-axis minimum to auto-ranging.
    pub fn clear_x_min(&mut self) {
        self.x_bounds.min = None;
        self.touch();
    }

    /// Return the x-axis maximum to auto-ranging.
    pub fn clear_x_max(&mut self) {
        self.x_bounds.max = None;
        self.touch();
    }

    /// Return the y-axis minimum to auto-ranging.
    pub fn clear_y_min(&mut self) {
        self.y_bounds.min = None;
        self.touch();
    }

    /// Return the y-axis maximum to auto-ranging.
    pub fn clear_y_max(&mut self) {
        self.y_bounds.max = None;
        self.touch();
    }

    /// Toggle the frame. The effective margin grows by one pixel while the
    /// frame is shown.
    pub fn set_show_frame(&mut self, show: bool) {
        if self.show_frame != show {
            self.show_frame = show;
            self.touch();
        }
    }

    /// Toggle progressive reveal.
    pub fn set_animate(&mut self, animate: bool) {
        self.animate = animate;
        self.touch();
    }

    /// Set the reveal duration. A reveal already running keeps its duration.
    pub fn set_animation_duration(&mut self, duration: Duration) {
        self.animation_duration = duration;
        self.touch();
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
