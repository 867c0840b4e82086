//! Playback state: the authoritative current year, play/pause and the repeating step timer.

pub mod controller;
pub mod driver;
pub mod input;
pub mod timer;

pub use controller::{PlayState, RenderSurface, TimelineController, TimelineOpts};
pub use driver::{Flow, play_realtime, run_live};
pub use input::Input;
pub use timer::{RepeatingTimer, TimerSlot};
