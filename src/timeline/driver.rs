use std::io::BufRead;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Instant;

use crate::foundation::error::ChartResult;
use crate::timeline::controller::{RenderSurface, TimelineController};
use crate::timeline::input::Input;

/// Whether the event loop keeps running after an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl<S: RenderSurface> TimelineController<S> {
    /// Route one input to the matching controller operation.
    pub fn dispatch(&mut self, input: Input) -> ChartResult<Flow> {
        match input {
            Input::SetYear(year) => self.set_year(year)?,
            Input::Scrub(value) => self.set_year_value(value)?,
            Input::TogglePlay => self.toggle_play()?,
            Input::Play => self.play()?,
            Input::Pause => self.pause()?,
            Input::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

/// Run an interactive event loop on the current thread.
///
/// Lines from `input` are parsed on a reader thread and forwarded over a channel. The loop
/// sleeps until either an input arrives or the next timer tick is due, then moves the controller
/// clock forward by the wall time that passed. Returns on `quit`, or once `input` is exhausted
/// and any running playback has stopped on its own. The timer is cancelled on the way out.
pub fn run_live<S, R>(controller: &mut TimelineController<S>, input: R) -> ChartResult<()>
where
    S: RenderSurface,
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<Input>();
    std::thread::spawn(move || {
        for line in input.lines() {
            let Ok(line) = line else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Input>() {
                Ok(parsed) => {
                    if tx.send(parsed).is_err() {
                        break;
                    }
                }
                Err(e) => tracing::warn!("ignoring input: {e}"),
            }
        }
    });

    let mut last = Instant::now();
    let result = loop {
        let msg = match controller.time_until_next_tick() {
            Some(wait) => rx.recv_timeout(wait),
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        let now = Instant::now();
        if let Err(e) = controller.advance(now - last) {
            break Err(e);
        }
        last = now;

        match msg {
            Ok(input) => match controller.dispatch(input) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break Ok(()),
                Err(e) => break Err(e),
            },
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                break pace_until_paused(controller).map(|_| ());
            }
        }
    };

    controller.shutdown()?;
    result
}

/// Start playback and pace ticks against the wall clock until playback stops on its own.
pub fn play_realtime<S: RenderSurface>(controller: &mut TimelineController<S>) -> ChartResult<u32> {
    controller.play()?;
    pace_until_paused(controller)
}

fn pace_until_paused<S: RenderSurface>(controller: &mut TimelineController<S>) -> ChartResult<u32> {
    let mut fired = 0;
    let mut last = Instant::now();
    while let Some(wait) = controller.time_until_next_tick() {
        std::thread::sleep(wait);
        let now = Instant::now();
        fired += controller.advance(now - last)?;
        last = now;
    }
    Ok(fired)
}
