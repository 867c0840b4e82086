use std::sync::Arc;

use crate::chart::layout::{ChartFrame, layout_year};
use crate::chart::svg::write_svg;
use crate::chart::transition::Transition;
use crate::config::ChartConfig;
use crate::data::view::DataView;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, Year};
use crate::foundation::error::ChartResult;
use crate::render::raster::Rasterizer;
use crate::timeline::controller::RenderSurface;

/// Surface that turns every rendered year into a run of video frames.
///
/// Each render holds the screen for one timer step. The first `transition_ms` of that step
/// animate from the previously shown year, bars matched by country.
pub struct VideoSurface<K> {
    view: Arc<DataView>,
    cfg: ChartConfig,
    rasterizer: Rasterizer,
    sink: K,
    shown: Option<ChartFrame>,
    next_idx: u64,
    frames_per_step: u64,
    transition_frames: u64,
}

impl<K: FrameSink> VideoSurface<K> {
    /// Start the sink and return a surface ready for the first render.
    pub fn begin(
        view: Arc<DataView>,
        cfg: ChartConfig,
        rasterizer: Rasterizer,
        mut sink: K,
    ) -> ChartResult<Self> {
        cfg.validate()?;
        sink.begin(SinkConfig {
            width: cfg.canvas.width,
            height: cfg.canvas.height,
            fps: cfg.video_fps,
        })?;

        let frames_per_step = cfg.video_fps.frames_for_millis(cfg.step_ms);
        let transition_frames = if cfg.transition_ms == 0 {
            0
        } else {
            cfg.video_fps
                .frames_for_millis(cfg.transition_ms)
                .min(frames_per_step)
        };
        Ok(Self {
            view,
            cfg,
            rasterizer,
            sink,
            shown: None,
            next_idx: 0,
            frames_per_step,
            transition_frames,
        })
    }

    pub fn frames_written(&self) -> u64 {
        self.next_idx
    }

    /// Close the sink and hand it back.
    pub fn finish(mut self) -> ChartResult<K> {
        self.sink.end()?;
        tracing::info!(frames = self.next_idx, "video finished");
        Ok(self.sink)
    }

    fn push(&mut self, frame: &ChartFrame) -> ChartResult<()> {
        let svg = write_svg(frame, &self.cfg);
        let pixels = self.rasterizer.rasterize(&svg)?;
        self.sink.push_frame(FrameIndex(self.next_idx), &pixels)?;
        self.next_idx += 1;
        Ok(())
    }
}

impl<K: FrameSink> RenderSurface for VideoSurface<K> {
    fn render(&mut self, year: Year) -> ChartResult<()> {
        let target = layout_year(&self.view, year, &self.cfg);
        let transition = Transition::between(self.shown.as_ref(), &target);

        for k in 0..self.frames_per_step {
            if k < self.transition_frames {
                let t = (k + 1) as f64 / self.transition_frames as f64;
                let frame = transition.sample(self.cfg.ease.apply(t));
                self.push(&frame)?;
            } else {
                self.push(&target)?;
            }
        }

        tracing::debug!(year, frames = self.frames_per_step, "video step");
        self.shown = Some(target);
        Ok(())
    }
}
