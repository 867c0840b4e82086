//! Frame sinks for exported animations.
//!
//! Sinks consume rendered frames in increasing frame order.

/// `ffmpeg`-based MP4 output.
pub mod ffmpeg;
/// Sink trait and built-in sinks.
pub mod sink;

pub use ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig};
