use std::time::Duration;

use crate::foundation::core::{Year, YearRange};
use crate::foundation::error::ChartResult;
use crate::timeline::timer::TimerSlot;

/// Something that can show the chart for a year.
///
/// `render` must synchronously reflect the rows of `year`. Surfaces also observe play state
/// transitions, e.g. to relabel a play button.
pub trait RenderSurface {
    fn render(&mut self, year: Year) -> ChartResult<()>;

    fn play_state_changed(&mut self, _state: PlayState) -> ChartResult<()> {
        Ok(())
    }
}

impl<S: RenderSurface + ?Sized> RenderSurface for &mut S {
    fn render(&mut self, year: Year) -> ChartResult<()> {
        (**self).render(year)
    }

    fn play_state_changed(&mut self, state: PlayState) -> ChartResult<()> {
        (**self).play_state_changed(state)
    }
}

impl<S: RenderSurface + ?Sized> RenderSurface for Box<S> {
    fn render(&mut self, year: Year) -> ChartResult<()> {
        (**self).render(year)
    }

    fn play_state_changed(&mut self, state: PlayState) -> ChartResult<()> {
        (**self).play_state_changed(state)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    Paused,
    Playing,
}

impl PlayState {
    /// Label of the toggle control: the action a click would perform.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Paused => "Play",
            Self::Playing => "Pause",
        }
    }
}

#[derive(Clone, Debug)]
pub struct TimelineOpts {
    /// Period of the playback timer.
    pub step: Duration,
}

impl Default for TimelineOpts {
    fn default() -> Self {
        Self {
            step: Duration::from_millis(500),
        }
    }
}

/// Owner of the current year and of the playback timer.
///
/// The controller runs on a logical clock that callers move forward with
/// [`TimelineController::advance`]. Play state is derived from the timer slot: the controller is
/// playing exactly while a timer is armed.
pub struct TimelineController<S> {
    range: YearRange,
    current_year: i64,
    timer: TimerSlot,
    now: Duration,
    opts: TimelineOpts,
    surface: S,
}

impl<S: RenderSurface> TimelineController<S> {
    /// Paused at `range.min`. Nothing is rendered until the first input or tick.
    pub fn new(range: YearRange, surface: S, opts: TimelineOpts) -> Self {
        Self {
            range,
            current_year: i64::from(range.min),
            timer: TimerSlot::default(),
            now: Duration::ZERO,
            opts,
            surface,
        }
    }

    pub fn range(&self) -> YearRange {
        self.range
    }

    /// Current position. May be `range.max + 1` right after playback ran off the end.
    pub fn current_year(&self) -> i64 {
        self.current_year
    }

    pub fn state(&self) -> PlayState {
        if self.timer.is_armed() {
            PlayState::Playing
        } else {
            PlayState::Paused
        }
    }

    pub fn is_playing(&self) -> bool {
        self.timer.is_armed()
    }

    /// Logical time elapsed since construction.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn step(&self) -> Duration {
        self.opts.step
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Jump to `year`, clamped into the data range, and render it.
    pub fn set_year(&mut self, year: i64) -> ChartResult<()> {
        let year = self.range.clamp(year);
        self.current_year = i64::from(year);
        tracing::debug!(year, "set year");
        self.surface.render(year)
    }

    /// Raw slider value: rounded to the nearest year, NaN reads as the first year.
    pub fn set_year_value(&mut self, value: f64) -> ChartResult<()> {
        if value.is_nan() {
            return self.set_year(i64::from(self.range.min));
        }
        // Float to int casts saturate, which the clamp then absorbs.
        self.set_year(value.round() as i64)
    }

    /// Flip between paused and playing.
    ///
    /// Starting playback after it ran off the end (`current_year > range.max`) rewinds to
    /// `range.min` first, so pressing play again replays the whole timeline.
    pub fn toggle_play(&mut self) -> ChartResult<()> {
        match self.state() {
            PlayState::Paused => self.start_playback(),
            PlayState::Playing => self.stop_playback(),
        }
    }

    pub fn play(&mut self) -> ChartResult<()> {
        if self.is_playing() {
            return Ok(());
        }
        self.start_playback()
    }

    pub fn pause(&mut self) -> ChartResult<()> {
        if !self.is_playing() {
            return Ok(());
        }
        self.stop_playback()
    }

    /// Cancel any running timer. Used on teardown.
    pub fn shutdown(&mut self) -> ChartResult<()> {
        self.pause()
    }

    /// Time left until the next tick, `None` while paused.
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        self.timer
            .next_due()
            .map(|due| due.saturating_sub(self.now))
    }

    /// Move the logical clock forward by `dt`, firing every tick that falls due on the way.
    ///
    /// Returns the number of ticks fired. Ticks scheduled after an auto-stop are dropped.
    pub fn advance(&mut self, dt: Duration) -> ChartResult<u32> {
        let until = self.now + dt;
        let mut fired = 0;
        while let Some(due) = self.timer.pop_due(until) {
            self.now = due;
            self.tick()?;
            fired += 1;
        }
        self.now = until;
        Ok(fired)
    }

    /// Fire ticks back to back until playback stops on its own. Returns the ticks fired.
    pub fn run_until_paused(&mut self) -> ChartResult<u32> {
        let mut fired = 0;
        while let Some(wait) = self.time_until_next_tick() {
            fired += self.advance(wait)?;
        }
        Ok(fired)
    }

    fn tick(&mut self) -> ChartResult<()> {
        if self.current_year <= i64::from(self.range.max) {
            let year = self.current_year as Year;
            self.surface.render(year)?;
            self.current_year += 1;
            Ok(())
        } else {
            tracing::debug!(year = self.current_year, "playback reached end of range");
            self.stop_playback()
        }
    }

    fn start_playback(&mut self) -> ChartResult<()> {
        if self.current_year > i64::from(self.range.max) {
            self.current_year = i64::from(self.range.min);
        }
        if !self.timer.arm(self.now, self.opts.step) {
            tracing::warn!("playback timer already armed, not starting another");
            return Ok(());
        }
        tracing::debug!(year = self.current_year, "playback started");
        self.surface.play_state_changed(PlayState::Playing)
    }

    fn stop_playback(&mut self) -> ChartResult<()> {
        if self.timer.cancel() {
            tracing::debug!(year = self.current_year, "playback stopped");
        }
        self.surface.play_state_changed(PlayState::Paused)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/controller.rs"]
mod tests;
