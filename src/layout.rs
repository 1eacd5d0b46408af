//! Projection of samples into pixel space.
//!
//! [`compute_layout`] is a pure function of the samples, the configuration and
//! the viewport size. [`LayoutCache`] keeps its last result and only calls it
//! again when one of those inputs has changed identity.

use tracing::{debug, warn};

use crate::axis::{AxisBounds, tick_spacing_px};
use crate::config::ChartConfig;
use crate::datasource::{SampleSet, Sampling};
use crate::error::{Axis, ChartError, Result};
use crate::geom::{Point, ScreenPoint, ViewportSize, clamp_px, px, to_pixel};
use crate::style::PlotKind;
use crate::view::Range;

/// Span substituted for a zero-width axis range.
const DEGENERATE_SPAN: f64 = 1.0;

/// Pixel-space projection of the retained samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderModel {
    points: Vec<ScreenPoint>,
    source_count: usize,
    stride: usize,
    x_range: Option<Range>,
    y_range: Option<Range>,
    x_axis_screen_y: i32,
    y_axis_screen_x: i32,
    tick_spacing_px: i32,
    bar_width_px: i32,
}

impl RenderModel {
    /// Model with no points.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Retained points in drawing order.
    pub fn points(&self) -> &[ScreenPoint] {
        &self.points
    }

    /// Number of retained points.
    pub fn sampled_count(&self) -> usize {
        self.points.len()
    }

    /// Number of samples the model was built from.
    pub fn source_count(&self) -> usize {
        self.source_count
    }

    /// Check whether there is nothing to plot.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Step between retained samples (zero for an empty model).
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Resolved x range in data units.
    pub fn x_range(&self) -> Option<Range> {
        self.x_range
    }

    /// Resolved y range in data units.
    pub fn y_range(&self) -> Option<Range> {
        self.y_range
    }

    /// Pixel row of the `y = 0` line.
    pub fn x_axis_screen_y(&self) -> i32 {
        self.x_axis_screen_y
    }

    /// Pixel column of the `x = 0` line.
    pub fn y_axis_screen_x(&self) -> i32 {
        self.y_axis_screen_x
    }

    /// Pixel distance between major y gridlines.
    pub fn tick_spacing_px(&self) -> i32 {
        self.tick_spacing_px
    }

    /// Bar width in pixels (zero unless the model was built for bars).
    pub fn bar_width_px(&self) -> i32 {
        self.bar_width_px
    }
}

/// Project `samples` into a viewport of `size` pixels.
///
/// An empty sample set yields an empty model regardless of the viewport. A
/// zero-width data range is widened around its value, so the scales are always
/// finite.
pub fn compute_layout(
    samples: &SampleSet,
    config: &ChartConfig,
    size: ViewportSize,
) -> Result<RenderModel> {
    if samples.is_empty() {
        return Ok(RenderModel::empty());
    }

    let margin = config.margin();
    let plot_width = size.plot_width(margin);
    let plot_height = size.plot_height(margin);
    if plot_width <= 0 || plot_height <= 0 {
        return Err(ChartError::ViewportTooSmall {
            width: size.width,
            height: size.height,
            margin,
        });
    }

    let kind = config.kind();
    let plot_columns = usize::try_from(plot_width).unwrap_or(usize::MAX);
    let sampling = Sampling::new(samples, kind, plot_columns);
    let retained: Vec<Point> = sampling
        .indices()
        .filter_map(|index| samples.point(index))
        .collect();

    let Some(y_data) = Range::covering(retained.iter().map(|p| p.y)) else {
        return Ok(RenderModel::empty());
    };
    let Some(x_data) = Range::covering(retained.iter().map(|p| p.x)) else {
        return Ok(RenderModel::empty());
    };

    let height = i64::from(size.height);
    let margin_px = i64::from(margin);

    let y_range = resolve_range(Axis::Y, config.y_bounds(), y_data);
    let y_scale = plot_height as f64 / y_range.span();
    let row = |y: f64| {
        clamp_px(height - (i64::from(to_pixel(y_scale * y_range.offset(y))) + margin_px))
    };

    let min_x_separation = match kind {
        PlotKind::Bar => min_separation(&retained),
        PlotKind::Line | PlotKind::Scatter => 0.0,
    };
    let x_range = resolve_range(Axis::X, config.x_bounds(), x_data);
    let x_scale = plot_width as f64 / (x_range.span() + min_x_separation);
    let column = |x: f64| {
        clamp_px(
            i64::from(to_pixel(x_scale * (x_range.offset(x) + min_x_separation / 2.0))) + margin_px,
        )
    };

    let points = retained
        .iter()
        .map(|p| ScreenPoint::new(column(p.x), row(p.y)))
        .collect();

    let bar_width_px = match kind {
        PlotKind::Bar => {
            let width = to_pixel(x_scale * min_x_separation);
            if width > 2 { width - 2 } else { width.max(0) }
        }
        PlotKind::Line | PlotKind::Scatter => 0,
    };

    let model = RenderModel {
        points,
        source_count: samples.len(),
        stride: sampling.stride(),
        x_range: Some(x_range),
        y_range: Some(y_range),
        x_axis_screen_y: row(0.0),
        y_axis_screen_x: clamp_px(i64::from(to_pixel(x_scale * x_range.offset(0.0))) + margin_px),
        tick_spacing_px: tick_spacing_px(y_scale, y_range.span()),
        bar_width_px,
    };
    debug!(
        count = model.source_count,
        sampled = model.sampled_count(),
        stride = model.stride,
        x_min = x_range.min,
        x_max = x_range.max,
        y_min = y_range.min,
        y_max = y_range.max,
        "layout recomputed"
    );
    Ok(model)
}

fn resolve_range(axis: Axis, bounds: AxisBounds, data: Range) -> Range {
    let range = bounds.resolve(data);
    if !range.is_degenerate() {
        return range;
    }
    warn!(
        %axis,
        min = range.min,
        max = range.max,
        pinned = bounds.is_pinned(),
        "degenerate axis range widened"
    );
    range.with_min_span(DEGENERATE_SPAN)
}

/// Smallest gap between consecutive x values of points already in x order.
fn min_separation(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[1].x - pair[0].x)
        .reduce(f64::min)
        .unwrap_or(0.0)
}

/// Identity of the inputs a [`RenderModel`] was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutStamp {
    /// Data store generation.
    pub data_generation: u64,
    /// Configuration revision.
    pub config_revision: u64,
    /// Viewport size in pixels.
    pub size: ViewportSize,
}

/// Last computed [`RenderModel`] with the stamp it was built for.
#[derive(Debug, Clone, Default)]
pub struct LayoutCache {
    stamp: Option<LayoutStamp>,
    model: RenderModel,
}

impl LayoutCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the cached model was built for `stamp`.
    pub fn is_current(&self, stamp: LayoutStamp) -> bool {
        self.stamp == Some(stamp)
    }

    /// Access the cached model.
    pub fn model(&self) -> &RenderModel {
        &self.model
    }

    /// Return the model for `stamp`, calling `compute` only when the cached
    /// one is stale. The flag is `true` when a new model was installed.
    ///
    /// A failed computation leaves the cache as it was.
    pub fn get_or_update(
        &mut self,
        stamp: LayoutStamp,
        compute: impl FnOnce() -> Result<RenderModel>,
    ) -> Result<(&RenderModel, bool)> {
        if self.is_current(stamp) {
            return Ok((&self.model, false));
        }
        self.model = compute()?;
        self.stamp = Some(stamp);
        Ok((&self.model, true))
    }

}

/// Pixel column at the right edge of the plotting area.
pub(crate) fn right_edge(size: ViewportSize, margin: u32) -> i32 {
    px(size.width).saturating_sub(px(margin))
}

/// Pixel row at the bottom of the plotting area.
pub(crate) fn bottom_edge(size: ViewportSize, margin: u32) -> i32 {
    px(size.height).saturating_sub(px(margin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::Values;

    fn line_config() -> ChartConfig {
        ChartConfig::default()
    }

    fn set(x: Values<'_>, y: Values<'_>) -> SampleSet {
        SampleSet::from_xy(x, y).unwrap()
    }

    fn xs(model: &RenderModel) -> Vec<i32> {
        model.points().iter().map(|p| p.x).collect()
    }

    fn ys(model: &RenderModel) -> Vec<i32> {
        model.points().iter().map(|p| p.y).collect()
    }

    #[test]
    fn empty_samples_give_empty_model() {
        let model =
            compute_layout(&SampleSet::new(), &line_config(), ViewportSize::new(144, 80)).unwrap();
        assert!(model.is_empty());
        assert_eq!(model.sampled_count(), 0);
        assert_eq!(model.x_range(), None);
    }

    #[test]
    fn pinned_y_min_line_layout() {
        let samples = set(
            Values::from(&[50, 60, 80, 90, 100, 110]),
            Values::from(&[20, 22, 21, 20, 19, 17]),
        );
        let mut config = line_config();
        config.set_y_min(Some(0.0)).unwrap();
        let model = compute_layout(&samples, &config, ViewportSize::new(144, 80)).unwrap();

        assert_eq!(model.sampled_count(), 6);
        assert_eq!(model.stride(), 1);
        assert_eq!(model.y_range(), Some(Range::new(0.0, 22.0)));
        assert_eq!(xs(&model), vec![5, 27, 72, 94, 117, 139]);
        assert_eq!(ys(&model), vec![11, 5, 8, 11, 15, 21]);
        assert_eq!(model.x_axis_screen_y(), 75);
        assert_eq!(model.y_axis_screen_x(), -107);
        assert_eq!(model.tick_spacing_px(), 32);
        assert_eq!(model.bar_width_px(), 0);
    }

    #[test]
    fn unsorted_line_input_is_drawn_in_x_order() {
        let values = [4.0, 2.0, 5.0, 0.0, 3.0, 1.0];
        let samples = set(Values::from(&values), Values::from(&values));
        let model = compute_layout(&samples, &line_config(), ViewportSize::new(144, 168)).unwrap();

        let columns = xs(&model);
        assert!(columns.windows(2).all(|pair| pair[0] < pair[1]));
        // y follows x, so rows climb (decrease) left to right.
        let rows = ys(&model);
        assert!(rows.windows(2).all(|pair| pair[0] > pair[1]));
        assert_eq!(columns[0], 5);
        assert_eq!(rows[0], 163);
    }

    #[test]
    fn scatter_keeps_insertion_order() {
        let values = [4.0, 2.0, 5.0, 0.0, 3.0, 1.0];
        let samples = set(Values::from(&values), Values::from(&values));
        let config = line_config().with_kind(PlotKind::Scatter);
        let model = compute_layout(&samples, &config, ViewportSize::new(144, 168)).unwrap();
        let columns = xs(&model);
        let expected: Vec<i32> = values.iter().map(|&v| to_pixel(134.0 / 5.0 * v) + 5).collect();
        assert_eq!(columns, expected);
    }

    #[test]
    fn bars_reserve_half_a_slot_on_each_side() {
        let samples = set(
            Values::from(&[0, 1, 2, 3, 4, 5]),
            Values::from(&[10, 22, 20, 13, 15, 12]),
        );
        let mut config = line_config().with_kind(PlotKind::Bar);
        config.set_y_min(Some(0.0)).unwrap();
        let model = compute_layout(&samples, &config, ViewportSize::new(144, 80)).unwrap();

        // 134 px over 6 one-unit slots.
        assert_eq!(model.points()[0].x, 16);
        assert_eq!(model.bar_width_px(), 20);
        assert_eq!(model.y_axis_screen_x(), 5);
        assert_eq!(model.x_axis_screen_y(), 75);
    }

    #[test]
    fn pinned_x_max_extends_the_plot() {
        let samples = set(Values::from(&[0, 1, 2, 3]), Values::from(&[0, 1, 2, 3]));
        let mut config = line_config();
        config.set_x_max(Some(6.0)).unwrap();
        let model = compute_layout(&samples, &config, ViewportSize::new(144, 80)).unwrap();
        assert_eq!(model.x_range(), Some(Range::new(0.0, 6.0)));
        assert_eq!(xs(&model), vec![5, 27, 50, 72]);
        assert_eq!(model.y_axis_screen_x(), 5);
    }

    #[test]
    fn pinned_y_max_leaves_headroom() {
        let samples = set(Values::from(&[0, 1, 2, 3]), Values::from(&[0, 1, 2, 3]));
        let mut config = line_config();
        config.set_y_max(Some(10.0)).unwrap();
        let model = compute_layout(&samples, &config, ViewportSize::new(144, 80)).unwrap();
        assert_eq!(model.y_range(), Some(Range::new(0.0, 10.0)));
        assert_eq!(ys(&model), vec![75, 68, 61, 54]);
        assert_eq!(model.tick_spacing_px(), 70);
    }

    #[test]
    fn inverted_pins_are_widened_around_their_midpoint() {
        let samples = set(Values::from(&[0, 1, 2, 3]), Values::from(&[0, 1, 2, 3]));
        let mut config = line_config();
        config.set_x_min(Some(10.0)).unwrap();
        config.set_x_max(Some(5.0)).unwrap();
        let model = compute_layout(&samples, &config, ViewportSize::new(144, 80)).unwrap();
        assert_eq!(model.x_range(), Some(Range::new(7.0, 8.0)));
    }

    #[test]
    fn y_min_above_the_data_is_widened_not_swapped() {
        let samples = set(Values::from(&[0, 1, 2]), Values::from(&[17, 20, 22]));
        let mut config = line_config();
        config.set_y_min(Some(30.0)).unwrap();
        let model = compute_layout(&samples, &config, ViewportSize::new(144, 80)).unwrap();
        assert_eq!(model.y_range(), Some(Range::new(25.5, 26.5)));
        // Every sample lies below the pinned minimum.
        assert!(ys(&model).iter().all(|&row| row > 75));
    }

    #[test]
    fn duplicate_bar_x_leaves_no_room_for_bars() {
        let samples = set(Values::from(&[3, 1, 3, 0]), Values::from(&[1, 2, 3, 4]));
        let config = line_config().with_kind(PlotKind::Bar);
        let model = compute_layout(&samples, &config, ViewportSize::new(144, 80)).unwrap();
        assert_eq!(model.bar_width_px(), 0);
        assert_eq!(xs(&model), vec![5, 50, 139, 139]);
    }

    #[test]
    fn narrow_bars_keep_their_width() {
        let x: Vec<i32> = (0..60).collect();
        let y = vec![1; 60];
        let samples = set(Values::from(&x), Values::from(&y));
        let config = line_config().with_kind(PlotKind::Bar);
        let model = compute_layout(&samples, &config, ViewportSize::new(144, 80)).unwrap();
        // 134 / 60 px per slot rounds to 2, which is not narrowed further.
        assert_eq!(model.bar_width_px(), 2);
    }

    #[test]
    fn dense_line_is_downsampled() {
        let x: Vec<i32> = (0..1000).collect();
        let samples = set(Values::from(&x), Values::from(&x));
        let model = compute_layout(&samples, &line_config(), ViewportSize::new(144, 80)).unwrap();
        assert_eq!(model.stride(), 7);
        assert_eq!(model.sampled_count(), 142);
        assert_eq!(model.source_count(), 1000);
    }

    #[test]
    fn flat_data_is_centred() {
        let samples = set(Values::from(&[0, 1, 2]), Values::from(&[4, 4, 4]));
        let model = compute_layout(&samples, &line_config(), ViewportSize::new(144, 80)).unwrap();
        assert_eq!(model.y_range(), Some(Range::new(3.5, 4.5)));
        assert!(ys(&model).iter().all(|&row| row == 40));
    }

    #[test]
    fn single_point_is_centred_on_both_axes() {
        let samples = set(Values::from(&[3]), Values::from(&[7]));
        let config = line_config().with_kind(PlotKind::Bar);
        let model = compute_layout(&samples, &config, ViewportSize::new(144, 80)).unwrap();
        assert_eq!(model.points(), &[ScreenPoint::new(72, 40)]);
        assert_eq!(model.bar_width_px(), 0);
    }

    #[test]
    fn margins_larger_than_viewport_are_an_error() {
        let samples = set(Values::from(&[0, 1]), Values::from(&[0, 1]));
        let err = compute_layout(&samples, &line_config(), ViewportSize::new(10, 80)).unwrap_err();
        assert_eq!(
            err,
            ChartError::ViewportTooSmall {
                width: 10,
                height: 80,
                margin: 5,
            }
        );
    }

    #[test]
    fn cache_recomputes_only_on_new_stamp() {
        let mut cache = LayoutCache::new();
        let stamp = LayoutStamp {
            data_generation: 1,
            config_revision: 0,
            size: ViewportSize::new(144, 80),
        };
        let mut calls = 0;
        let (_, fresh) = cache
            .get_or_update(stamp, || {
                calls += 1;
                Ok(RenderModel::empty())
            })
            .unwrap();
        assert!(fresh);
        let (_, fresh) = cache
            .get_or_update(stamp, || {
                calls += 1;
                Ok(RenderModel::empty())
            })
            .unwrap();
        assert!(!fresh);
        assert_eq!(calls, 1);

        let resized = LayoutStamp {
            size: ViewportSize::new(100, 80),
            ..stamp
        };
        assert!(!cache.is_current(resized));
    }

    #[test]
    fn failed_compute_keeps_cache_stale() {
        let mut cache = LayoutCache::new();
        let stamp = LayoutStamp {
            data_generation: 1,
            config_revision: 0,
            size: ViewportSize::new(4, 4),
        };
        let result = cache.get_or_update(stamp, || {
            Err(ChartError::ViewportTooSmall {
                width: 4,
                height: 4,
                margin: 5,
            })
        });
        assert!(result.is_err());
        assert!(!cache.is_current(stamp));
    }
}
