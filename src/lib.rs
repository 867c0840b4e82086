//! Animated per-country cohort outcome bar charts.
//!
//! - Load a CSV into a [`DataView`]
//! - Drive years through a [`TimelineController`] (set year, play/pause, timer ticks)
//! - Draw each year on a [`RenderSurface`]: SVG files, PNG frames, or an MP4 via `ffmpeg`
#![forbid(unsafe_code)]

mod foundation;

pub mod chart;
pub mod config;
pub mod data;
pub mod encode;
pub mod render;
pub mod session;
pub mod timeline;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex, Rect, Rgb8, Year, YearRange};
pub use crate::foundation::error::{ChartError, ChartResult, LoadError};

pub use crate::chart::{ChartFrame, Ease, layout_year, write_svg};
pub use crate::config::ChartConfig;
pub use crate::data::{DataView, Record, read_records};
pub use crate::encode::{FfmpegSink, FfmpegSinkOpts, FrameSink, InMemorySink, PngSequenceSink};
pub use crate::render::{FrameRGBA, FrameRecorder, Rasterizer, SvgFileSurface, VideoSurface};
pub use crate::session::ChartSession;
pub use crate::timeline::{
    Flow, Input, PlayState, RenderSurface, TimelineController, TimelineOpts, play_realtime,
    run_live,
};
