//! Chart geometry: scales, color ramp, per-year bar layout, keyed transitions and SVG output.

pub mod color;
pub mod ease;
pub mod layout;
pub mod scale;
pub mod svg;
pub mod transition;

pub use color::interpolate_blues;
pub use ease::Ease;
pub use layout::{Bar, ChartFrame, layout_year};
pub use scale::{BandScale, LinearScale};
pub use svg::write_svg;
pub use transition::Transition;
