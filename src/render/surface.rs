use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;

use crate::chart::layout::layout_year;
use crate::chart::svg::write_svg;
use crate::config::ChartConfig;
use crate::data::view::DataView;
use crate::foundation::core::Year;
use crate::foundation::error::ChartResult;
use crate::timeline::controller::{PlayState, RenderSurface};

/// Where an [`SvgFileSurface`] puts its documents.
#[derive(Clone, Debug)]
enum SvgTarget {
    /// One file, replaced on every render.
    Latest(PathBuf),
    /// `<dir>/<year>.svg`, one file per rendered year.
    PerYear(PathBuf),
}

/// Surface writing each rendered year as an SVG file.
pub struct SvgFileSurface {
    view: Arc<DataView>,
    cfg: ChartConfig,
    target: SvgTarget,
    written: Vec<PathBuf>,
}

impl SvgFileSurface {
    /// Keep only the most recent frame at `path`.
    pub fn latest(view: Arc<DataView>, cfg: ChartConfig, path: impl Into<PathBuf>) -> Self {
        Self::with_target(view, cfg, SvgTarget::Latest(path.into()))
    }

    /// Write `<dir>/<year>.svg` for every render.
    pub fn per_year(view: Arc<DataView>, cfg: ChartConfig, dir: impl Into<PathBuf>) -> Self {
        Self::with_target(view, cfg, SvgTarget::PerYear(dir.into()))
    }

    fn with_target(view: Arc<DataView>, cfg: ChartConfig, target: SvgTarget) -> Self {
        Self {
            view,
            cfg,
            target,
            written: Vec::new(),
        }
    }

    /// Paths written so far, in render order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl RenderSurface for SvgFileSurface {
    fn render(&mut self, year: Year) -> ChartResult<()> {
        let svg = write_svg(&layout_year(&self.view, year, &self.cfg), &self.cfg);
        let path = match &self.target {
            SvgTarget::Latest(path) => path.clone(),
            SvgTarget::PerYear(dir) => dir.join(format!("{year}.svg")),
        };
        write_replacing(&path, &svg)?;
        tracing::info!(year, path = %path.display(), "rendered");
        self.written.push(path);
        Ok(())
    }

    fn play_state_changed(&mut self, state: PlayState) -> ChartResult<()> {
        tracing::info!(button = state.button_label(), "play state changed");
        Ok(())
    }
}

// Readers polling the file never observe a half-written document.
fn write_replacing(path: &Path, contents: &str) -> ChartResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let tmp = path.with_extension("svg.tmp");
    std::fs::write(&tmp, contents).with_context(|| format!("write '{}'", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .with_context(|| format!("move '{}' into place", path.display()))?;
    Ok(())
}

/// Surface collecting SVG documents in memory, in render order.
pub struct FrameRecorder {
    view: Arc<DataView>,
    cfg: ChartConfig,
    frames: Vec<(Year, String)>,
}

impl FrameRecorder {
    pub fn new(view: Arc<DataView>, cfg: ChartConfig) -> Self {
        Self {
            view,
            cfg,
            frames: Vec::new(),
        }
    }

    pub fn frames(&self) -> &[(Year, String)] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<(Year, String)> {
        self.frames
    }
}

impl RenderSurface for FrameRecorder {
    fn render(&mut self, year: Year) -> ChartResult<()> {
        let svg = write_svg(&layout_year(&self.view, year, &self.cfg), &self.cfg);
        self.frames.push((year, svg));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record::Record;

    fn view() -> Arc<DataView> {
        Arc::new(DataView::from_records(vec![
            Record::new("A", 2000, 10.0, 0.5, 0.1),
            Record::new("B", 2001, 20.0, 0.8, 0.05),
        ]))
    }

    #[test]
    fn recorder_keeps_render_order() {
        let mut rec = FrameRecorder::new(view(), ChartConfig::default());
        rec.render(2001).unwrap();
        rec.render(2000).unwrap();
        let years: Vec<_> = rec.frames().iter().map(|(y, _)| *y).collect();
        assert_eq!(years, vec![2001, 2000]);
        assert!(rec.frames()[0].1.contains(r#"data-country="B""#));
    }

    #[test]
    fn per_year_surface_writes_one_file_per_render() {
        let dir = PathBuf::from("target").join("surface_per_year");
        let _ = std::fs::remove_dir_all(&dir);
        let mut s = SvgFileSurface::per_year(view(), ChartConfig::default(), &dir);
        s.render(2000).unwrap();
        s.render(2001).unwrap();
        assert_eq!(s.written().len(), 2);
        let text = std::fs::read_to_string(dir.join("2001.svg")).unwrap();
        assert!(text.contains("Country: B"));
    }

    #[test]
    fn latest_surface_replaces_the_file() {
        let path = PathBuf::from("target").join("surface_latest").join("now.svg");
        let mut s = SvgFileSurface::latest(view(), ChartConfig::default(), &path);
        s.render(2000).unwrap();
        s.render(2001).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains(">2001</text>"));
        assert!(!path.with_extension("svg.tmp").exists());
    }
}
