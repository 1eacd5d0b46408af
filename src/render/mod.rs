//! Draw instructions for a laid out chart.
//!
//! These types are backend-agnostic: a host walks the [`RenderList`] in order
//! and maps each command onto its own line, rectangle and circle primitives.

use crate::config::ChartConfig;
use crate::geom::{ScreenPoint, ScreenRect, ViewportSize, px};
use crate::layout::{RenderModel, bottom_edge, right_edge};
use crate::style::{Color, PlotKind};

/// Length of a major y tick in pixels.
const MAJOR_TICK_LENGTH: i32 = 4;
/// Length of a minor y tick in pixels.
const MINOR_TICK_LENGTH: i32 = 2;
/// Marker radius when samples are sparse.
const SPARSE_MARKER_RADIUS: u16 = 3;
/// Marker radius when samples are dense.
const DENSE_MARKER_RADIUS: u16 = 2;

/// A line segment in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSegment {
    /// Segment start.
    pub start: ScreenPoint,
    /// Segment end.
    pub end: ScreenPoint,
}

impl LineSegment {
    /// Create a new line segment.
    pub fn new(start: ScreenPoint, end: ScreenPoint) -> Self {
        Self { start, end }
    }
}

/// A single draw instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderCommand {
    /// Fill a rectangle.
    FillRect {
        /// Rectangle bounds.
        rect: ScreenRect,
        /// Fill color.
        color: Color,
    },
    /// Outline a rectangle with a one pixel stroke.
    StrokeRect {
        /// Rectangle bounds.
        rect: ScreenRect,
        /// Stroke color.
        color: Color,
    },
    /// Draw a one pixel line.
    Line {
        /// Segment to draw.
        segment: LineSegment,
        /// Stroke color.
        color: Color,
    },
    /// Fill a circle.
    FillCircle {
        /// Circle center.
        center: ScreenPoint,
        /// Radius in pixels.
        radius: u16,
        /// Fill color.
        color: Color,
    },
}

/// Ordered draw instructions.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Iterate over the commands in paint order.
    pub fn iter(&self) -> std::slice::Iter<'_, RenderCommand> {
        self.commands.iter()
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check whether there are no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn line(&mut self, start: ScreenPoint, end: ScreenPoint, color: Color) {
        self.push(RenderCommand::Line {
            segment: LineSegment::new(start, end),
            color,
        });
    }
}

impl IntoIterator for RenderList {
    type Item = RenderCommand;
    type IntoIter = std::vec::IntoIter<RenderCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl<'a> IntoIterator for &'a RenderList {
    type Item = &'a RenderCommand;
    type IntoIter = std::slice::Iter<'a, RenderCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// Translate a model into draw instructions.
///
/// Commands come in paint order: background, optional frame, x-axis, y-axis,
/// major then minor ticks, then the plot. The background (and frame) are
/// always emitted. Axes, ticks and the plot itself only appear when the model
/// has points, and only the first `points_to_draw` points contribute plot
/// instructions.
pub fn render_instructions(
    model: &RenderModel,
    config: &ChartConfig,
    size: ViewportSize,
    points_to_draw: usize,
) -> RenderList {
    let mut render = RenderList::new();
    let plot_color = config.plot_color();

    let canvas = ScreenRect::from_corners(
        ScreenPoint::new(0, 0),
        ScreenPoint::new(px(size.width) - 1, px(size.height) - 1),
    );
    render.push(RenderCommand::FillRect {
        rect: canvas,
        color: config.canvas_color(),
    });
    if config.show_frame() {
        render.push(RenderCommand::StrokeRect {
            rect: canvas,
            color: plot_color,
        });
    }

    if model.is_empty() {
        return render;
    }

    let margin = px(config.margin());
    let right = right_edge(size, config.margin());
    let bottom = bottom_edge(size, config.margin());

    build_axes(&mut render, model, margin, right, bottom, plot_color);
    build_series(&mut render, model, config, size, points_to_draw, bottom);
    render
}

fn build_axes(
    render: &mut RenderList,
    model: &RenderModel,
    margin: i32,
    right: i32,
    bottom: i32,
    color: Color,
) {
    let axis_row = model.x_axis_screen_y();
    render.line(
        ScreenPoint::new(margin, axis_row),
        ScreenPoint::new(right, axis_row),
        color,
    );

    let axis_column = model.y_axis_screen_x();
    render.line(
        ScreenPoint::new(axis_column, margin),
        ScreenPoint::new(axis_column, bottom),
        color,
    );

    let spacing = model.tick_spacing_px();
    let half = spacing / 2;
    let mut tick = |row: i32, length: i32| {
        render.line(
            ScreenPoint::new(margin, row),
            ScreenPoint::new(margin + length, row),
            color,
        );
    };
    for row in ladder(axis_row, spacing, margin, bottom, Direction::Down) {
        tick(row, MAJOR_TICK_LENGTH);
    }
    for row in ladder(axis_row.saturating_sub(spacing), spacing, margin, bottom, Direction::Up) {
        tick(row, MAJOR_TICK_LENGTH);
    }
    if half > 0 {
        for row in ladder(axis_row.saturating_add(half), spacing, margin, bottom, Direction::Down) {
            tick(row, MINOR_TICK_LENGTH);
        }
        for row in ladder(axis_row.saturating_sub(half), spacing, margin, bottom, Direction::Up) {
            tick(row, MINOR_TICK_LENGTH);
        }
    }
}

fn build_series(
    render: &mut RenderList,
    model: &RenderModel,
    config: &ChartConfig,
    size: ViewportSize,
    points_to_draw: usize,
    bottom: i32,
) {
    let kind = config.kind();
    let color = config.plot_color();
    let points = model.points();
    let visible = points_to_draw.min(points.len());

    let sparse = model.source_count() < (size.width / 3) as usize;
    let show_markers = match kind {
        PlotKind::Scatter => true,
        PlotKind::Line => config.show_points() && sparse,
        PlotKind::Bar => false,
    };
    let radius = if sparse {
        SPARSE_MARKER_RADIUS
    } else {
        DENSE_MARKER_RADIUS
    };
    let bar_width = model.bar_width_px();
    let bar_base = model.x_axis_screen_y().min(bottom);

    for (index, &point) in points.iter().enumerate().take(visible) {
        match kind {
            PlotKind::Line => {
                if let Some(&next) = points.get(index + 1) {
                    render.line(point, next, color);
                }
            }
            PlotKind::Bar => {
                let origin = ScreenPoint::new(point.x - bar_width / 2, point.y);
                render.push(RenderCommand::FillRect {
                    rect: ScreenRect::from_origin_size(origin, bar_width, bar_base - point.y),
                    color,
                });
            }
            PlotKind::Scatter => {}
        }
        if show_markers {
            render.push(RenderCommand::FillCircle {
                center: point,
                radius,
                color,
            });
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Down,
    Up,
}

/// Rows `origin ± k * step` (`k >= 0`) inside `(lo, hi]`, walking away from
/// `origin` in `direction`.
fn ladder(origin: i32, step: i32, lo: i32, hi: i32, direction: Direction) -> Vec<i32> {
    if step <= 0 || lo >= hi {
        return Vec::new();
    }
    let (origin, step, lo, hi) = (
        i64::from(origin),
        i64::from(step),
        i64::from(lo),
        i64::from(hi),
    );
    let first = lo + 1 + (origin - (lo + 1)).rem_euclid(step);
    let step_len = usize::try_from(step).unwrap_or(usize::MAX);
    let rows = (first..=hi).step_by(step_len);
    // Rows lie in (lo, hi], so they fit in an i32.
    let mut rows: Vec<i32> = match direction {
        Direction::Down => rows.filter(|&row| row >= origin).map(|row| row as i32).collect(),
        Direction::Up => rows.filter(|&row| row <= origin).map(|row| row as i32).collect(),
    };
    if direction == Direction::Up {
        rows.reverse();
    }
    rows
}
