//! chart_layer lays out small line, scatter and bar charts for pixel
//! widgets and reveals them progressively.
//!
//! The host owns painting and the animation clock. It feeds samples and
//! settings into a [`ChartLayer`], calls [`ChartLayer::draw`] for each frame
//! and replays the resulting [`RenderCommand`]s with its own primitives.

#![forbid(unsafe_code)]

pub mod animation;
pub mod axis;
pub mod chart;
pub mod config;
pub mod datasource;
pub mod error;
pub mod geom;
pub mod layout;
pub mod render;
pub mod style;
pub mod view;

pub use animation::{RevealAnimation, RevealState};
pub use axis::AxisBounds;
pub use chart::{ChartLayer, ChartLayerBuilder, FrameOutput};
pub use config::{ChartConfig, DEFAULT_ANIMATION_DURATION, DEFAULT_MARGIN};
pub use datasource::{DataStore, SampleSet, ValueKind, Values};
pub use error::{Axis, ChartError, Result};
pub use geom::{Point, ScreenPoint, ScreenRect, ViewportSize};
pub use layout::{LayoutCache, LayoutStamp, RenderModel, compute_layout};
pub use render::{LineSegment, RenderCommand, RenderList, render_instructions};
pub use style::{Color, PlotKind};
pub use view::Range;
