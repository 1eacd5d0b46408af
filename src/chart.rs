//! Chart widget entry points and builders.
//!
//! [`ChartLayer`] is what a host widget holds. The host forwards data and
//! configuration calls, asks for a [`FrameOutput`] whenever it paints, and
//! feeds its animation clock back through [`ChartLayer::animation_tick`].

use std::time::Duration;

use tracing::debug;

use crate::animation::RevealAnimation;
use crate::config::ChartConfig;
use crate::datasource::{DataStore, SampleSet, Values};
use crate::error::Result;
use crate::geom::{Point, ViewportSize};
use crate::layout::{LayoutCache, LayoutStamp, RenderModel, compute_layout};
use crate::render::{RenderList, render_instructions};
use crate::style::{Color, PlotKind};

/// Result of drawing one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    /// Draw instructions for this frame, in paint order.
    pub commands: RenderList,
    /// Reveal the host should start animating, if any.
    pub start_animation: Option<Duration>,
}

/// Main chart widget state.
#[derive(Debug, Clone, Default)]
pub struct ChartLayer {
    config: ChartConfig,
    data: DataStore,
    cache: LayoutCache,
    reveal: RevealAnimation,
    redraw_requested: bool,
}

impl ChartLayer {
    /// Create a chart with default configuration and no data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a chart with custom configuration.
    pub fn builder() -> ChartLayerBuilder {
        ChartLayerBuilder::default()
    }

    /// Access the configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Access the current samples.
    pub fn samples(&self) -> &SampleSet {
        self.data.samples()
    }

    /// Number of retained points visible this frame.
    pub fn points_to_draw(&self) -> usize {
        self.reveal.points_to_draw()
    }

    /// Check whether a reveal is running.
    pub fn is_animating(&self) -> bool {
        self.reveal.is_running()
    }

    /// Replace the samples with the first `count` values of `x` and `y`.
    ///
    /// Either side may be integer or floating point. Fails without touching
    /// the current samples if either side is shorter than `count` or holds a
    /// non-finite value.
    pub fn set_data<'a>(
        &mut self,
        x: impl Into<Values<'a>>,
        y: impl Into<Values<'a>>,
        count: usize,
    ) -> Result<()> {
        self.data.set_data(x.into(), y.into(), count)?;
        self.request_redraw();
        Ok(())
    }

    /// Replace the samples with `x` and `y`, which must have equal lengths.
    pub fn set_xy<'a>(&mut self, x: impl Into<Values<'a>>, y: impl Into<Values<'a>>) -> Result<()> {
        let samples = SampleSet::from_xy(x.into(), y.into())?;
        self.data.replace(samples);
        self.request_redraw();
        Ok(())
    }

    /// Replace the samples with `points`.
    pub fn set_points<I>(&mut self, points: I) -> Result<()>
    where
        I: IntoIterator<Item = Point>,
    {
        let samples = SampleSet::from_points(points)?;
        self.data.replace(samples);
        self.request_redraw();
        Ok(())
    }

    /// Set the plot kind.
    pub fn set_plot_kind(&mut self, kind: PlotKind) {
        self.config.set_kind(kind);
        self.request_redraw();
    }

    /// Set the color used for data, axes and frame.
    pub fn set_plot_color(&mut self, color: Color) {
        self.config.set_plot_color(color);
        self.request_redraw();
    }

    /// Set the background color.
    pub fn set_canvas_color(&mut self, color: Color) {
        self.config.set_canvas_color(color);
        self.request_redraw();
    }

    /// Show markers on sparse line plots.
    pub fn set_show_points(&mut self, show: bool) {
        self.config.set_show_points(show);
        self.request_redraw();
    }

    /// Set the base margin in pixels.
    pub fn set_margin(&mut self, margin: u32) {
        self.config.set_margin(margin);
        self.request_redraw();
    }

    /// Pin or clear the x-axis minimum.
    pub fn set_x_min(&mut self, value: Option<f64>) -> Result<()> {
        self.config.set_x_min(value)?;
        self.request_redraw();
        Ok(())
    }

    /// Pin or clear the x-axis maximum.
    pub fn set_x_max(&mut self, value: Option<f64>) -> Result<()> {
        self.config.set_x_max(value)?;
        self.request_redraw();
        Ok(())
    }

    /// Pin or clear the y-axis minimum.
    pub fn set_y_min(&mut self, value: Option<f64>) -> Result<()> {
        self.config.set_y_min(value)?;
        self.request_redraw();
        Ok(())
    }

    /// Pin or clear the y-axis maximum.
    pub fn set_y_max(&mut self, value: Option<f64>) -> Result<()> {
        self.config.set_y_max(value)?;
        self.request_redraw();
        Ok(())
    }

    /// Return the x-axis minimum to auto-ranging.
    pub fn clear_x_min(&mut self) {
        self.config.clear_x_min();
        self.request_redraw();
    }

    /// Return the x-axis maximum to auto-ranging.
    pub fn clear_x_max(&mut self) {
        self.config.clear_x_max();
        self.request_redraw();
    }

    /// Return the y-axis minimum to auto-ranging.
    pub fn clear_y_min(&mut self) {
        self.config.clear_y_min();
        self.request_redraw();
    }

    /// Return the y-axis maximum to auto-ranging.
    pub fn clear_y_max(&mut self) {
        self.config.clear_y_max();
        self.request_redraw();
    }

    /// Toggle the frame around the canvas.
    pub fn set_show_frame(&mut self, show: bool) {
        self.config.set_show_frame(show);
        self.request_redraw();
    }

    /// Toggle progressive reveal.
    pub fn set_animate(&mut self, animate: bool) {
        self.config.set_animate(animate);
        self.request_redraw();
    }

    /// Set the duration used by the next reveal.
    pub fn set_animation_duration(&mut self, duration: Duration) {
        self.config.set_animation_duration(duration);
        self.request_redraw();
    }

    /// Return the model for `size`, recomputing it only if data,
    /// configuration or size changed since the last call.
    ///
    /// A fresh model hides every point until the reveal catches up.
    pub fn recompute_if_dirty(&mut self, size: ViewportSize) -> Result<&RenderModel> {
        let stamp = LayoutStamp {
            data_generation: self.data.generation(),
            config_revision: self.config.revision(),
            size,
        };
        let samples = self.data.samples();
        let config = &self.config;
        let (model, fresh) = self
            .cache
            .get_or_update(stamp, || compute_layout(samples, config, size))?;
        if fresh {
            self.reveal.reset();
        }
        Ok(model)
    }

    /// Lay out (if needed) and translate the chart for one frame.
    ///
    /// Satisfies any pending redraw request.
    pub fn draw(&mut self, size: ViewportSize) -> Result<FrameOutput> {
        self.recompute_if_dirty(size)?;
        let model = self.cache.model();
        let start_animation = self.reveal.on_redraw(
            model.sampled_count(),
            self.config.animate(),
            self.config.animation_duration(),
        );
        if let Some(duration) = start_animation {
            debug!(
                points = model.sampled_count(),
                ?duration,
                "requesting reveal"
            );
        }
        let commands = render_instructions(model, &self.config, size, self.reveal.points_to_draw());
        self.redraw_requested = false;
        Ok(FrameOutput {
            commands,
            start_animation,
        })
    }

    /// Advance the running reveal to normalized time `t`.
    ///
    /// Returns `true` when the host should redraw.
    pub fn animation_tick(&mut self, t: f64) -> bool {
        let redraw = self.reveal.tick(t, self.cache.model().sampled_count());
        if redraw {
            self.request_redraw();
        }
        redraw
    }

    /// Return and clear the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }
}

/// Builder for configuring a chart before construction.
#[derive(Debug, Default)]
pub struct ChartLayerBuilder {
    config: ChartConfig,
}

impl ChartLayerBuilder {
    /// Start from an existing configuration.
    pub fn config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the plot kind.
    pub fn kind(mut self, kind: PlotKind) -> Self {
        self.config = self.config.with_kind(kind);
        self
    }

    /// Set the plot color.
    pub fn plot_color(mut self, color: Color) -> Self {
        self.config.set_plot_color(color);
        self
    }

    /// Set the background color.
    pub fn canvas_color(mut self, color: Color) -> Self {
        self.config.set_canvas_color(color);
        self
    }

    /// Show markers on sparse line plots.
    pub fn show_points(mut self, show: bool) -> Self {
        self.config.set_show_points(show);
        self
    }

    /// Set the base margin in pixels.
    pub fn margin(mut self, margin: u32) -> Self {
        self.config = self.config.with_margin(margin);
        self
    }

    /// Draw a frame around the canvas.
    pub fn frame(mut self, show: bool) -> Self {
        self.config = self.config.with_frame(show);
        self
    }

    /// Enable or disable progressive reveal.
    pub fn animate(mut self, animate: bool) -> Self {
        self.config = self.config.with_animation(animate);
        self
    }

    /// Set the reveal duration.
    pub fn animation_duration(mut self, duration: Duration) -> Self {
        self.config.set_animation_duration(duration);
        self
    }

    /// Build the chart.
    pub fn build(self) -> ChartLayer {
        ChartLayer {
            config: self.config,
            ..ChartLayer::default()
        }
    }
}
