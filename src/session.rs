use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;

use crate::chart::layout::{ChartFrame, layout_year};
use crate::chart::svg::write_svg;
use crate::config::ChartConfig;
use crate::data::view::DataView;
use crate::encode::sink::FrameSink;
use crate::foundation::core::{Year, YearRange};
use crate::foundation::error::{ChartError, ChartResult};
use crate::render::raster::{Rasterizer, save_png};
use crate::render::surface::FrameRecorder;
use crate::render::video::VideoSurface;
use crate::timeline::controller::{RenderSurface, TimelineController, TimelineOpts};

/// A loaded data set plus the chart configuration used to draw it.
///
/// The session is the owner of the [`DataView`]; surfaces and controllers it creates share the
/// view through an `Arc`.
pub struct ChartSession {
    view: Arc<DataView>,
    cfg: ChartConfig,
    range: YearRange,
}

impl ChartSession {
    /// Load `path` and build a session.
    ///
    /// Load failures are logged and returned. Nothing is rendered in that case.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn open(path: &Path, cfg: ChartConfig) -> ChartResult<Self> {
        let view = DataView::load(path).map_err(|e| {
            tracing::error!("error loading data: {e}");
            ChartError::from(e)
        })?;
        Self::from_view(view, cfg)
    }

    /// Build a session over an already loaded view. Fails when the view has no rows.
    pub fn from_view(view: DataView, cfg: ChartConfig) -> ChartResult<Self> {
        cfg.validate()?;
        let range = view
            .year_range()
            .ok_or_else(|| ChartError::validation("data set has no rows with a valid year"))?;
        Ok(Self {
            view: Arc::new(view),
            cfg,
            range,
        })
    }

    pub fn view(&self) -> &Arc<DataView> {
        &self.view
    }

    pub fn config(&self) -> &ChartConfig {
        &self.cfg
    }

    pub fn range(&self) -> YearRange {
        self.range
    }

    pub fn frame(&self, year: Year) -> ChartFrame {
        layout_year(&self.view, year, &self.cfg)
    }

    pub fn svg(&self, year: Year) -> String {
        write_svg(&self.frame(year), &self.cfg)
    }

    /// A paused controller over this session's year range, stepping at the configured period.
    pub fn controller<S: RenderSurface>(&self, surface: S) -> TimelineController<S> {
        TimelineController::new(
            self.range,
            surface,
            TimelineOpts {
                step: self.cfg.step(),
            },
        )
    }

    /// Headless run of the whole timeline: show the first year, press play, and fire ticks until
    /// playback stops at the end of the range. Returns the surface.
    pub fn play_through<S: RenderSurface>(&self, surface: S) -> ChartResult<S> {
        let mut controller = self.controller(surface);
        controller.set_year(i64::from(self.range.min))?;
        controller.toggle_play()?;
        let ticks = controller.run_until_paused()?;
        tracing::info!(ticks, "playback finished");
        Ok(controller.into_surface())
    }

    /// Every SVG document a full playback renders, in render order.
    pub fn record_playback(&self) -> ChartResult<Vec<(Year, String)>> {
        let recorder = FrameRecorder::new(self.view.clone(), self.cfg.clone());
        Ok(self.play_through(recorder)?.into_frames())
    }

    /// Rasterize recorded documents to `<dir>/<year>.png` in parallel. Repeated years are
    /// written once.
    pub fn export_png_frames(
        &self,
        frames: &[(Year, String)],
        dir: &Path,
        rasterizer: &Rasterizer,
    ) -> ChartResult<usize> {
        let mut unique: Vec<&(Year, String)> = Vec::with_capacity(frames.len());
        for frame in frames {
            if !unique.iter().any(|f| f.0 == frame.0) {
                unique.push(frame);
            }
        }

        unique.par_iter().try_for_each(|(year, svg)| {
            let pixels = rasterizer.rasterize(svg)?;
            save_png(&pixels, &dir.join(format!("{year}.png")))
        })?;
        Ok(unique.len())
    }

    /// Play the whole timeline into a video sink with transitions between years.
    pub fn render_video<K: FrameSink>(&self, rasterizer: Rasterizer, sink: K) -> ChartResult<K> {
        let surface = VideoSurface::begin(self.view.clone(), self.cfg.clone(), rasterizer, sink)?;
        self.play_through(surface)?.finish()
    }
}
