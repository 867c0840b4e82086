//! Turning chart years into pixels and files.

pub mod raster;
pub mod surface;
pub mod video;

pub use raster::{FrameRGBA, Rasterizer, save_png};
pub use surface::{FrameRecorder, SvgFileSurface};
pub use video::VideoSurface;
