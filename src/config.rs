//! Chart configuration, loadable from JSON. Every field has a default.

use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;

use crate::chart::ease::Ease;
use crate::foundation::core::{Canvas, Fps, Rgb8};
use crate::foundation::error::{ChartError, ChartResult};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub canvas: Canvas,
    /// Band scale padding, shared by the inner and outer gaps.
    pub band_padding: f64,
    /// Timer period between playback steps.
    pub step_ms: u64,
    /// Duration of the bar transition when a new year is shown.
    pub transition_ms: u64,
    pub ease: Ease,
    pub background: Rgb8,
    pub show_year_label: bool,
    /// Frame rate of exported video.
    pub video_fps: Fps,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 1000,
                height: 500,
            },
            band_padding: 0.1,
            step_ms: 500,
            transition_ms: 500,
            ease: Ease::InOutCubic,
            background: Rgb8::new(255, 255, 255),
            show_year_label: true,
            video_fps: Fps { num: 30, den: 1 },
        }
    }
}

impl ChartConfig {
    pub fn from_path(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read chart config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(s: &str) -> ChartResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| ChartError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ChartError::validation("canvas width/height must be non-zero"));
        }
        if !(0.0..1.0).contains(&self.band_padding) {
            return Err(ChartError::validation("band_padding must be in [0, 1)"));
        }
        if self.step_ms == 0 {
            return Err(ChartError::validation("step_ms must be > 0"));
        }
        Fps::new(self.video_fps.num, self.video_fps.den)?;
        Ok(())
    }

    pub fn step(&self) -> Duration {
        Duration::from_millis(self.step_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_chart() {
        let cfg = ChartConfig::default();
        assert_eq!(cfg.canvas, Canvas { width: 1000, height: 500 });
        assert_eq!(cfg.step(), Duration::from_millis(500));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = ChartConfig::from_json_str(r##"{"step_ms": 250, "background": "#101418"}"##)
            .unwrap();
        assert_eq!(cfg.step_ms, 250);
        assert_eq!(cfg.background, Rgb8::new(0x10, 0x14, 0x18));
        assert_eq!(cfg.band_padding, 0.1);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(ChartConfig::from_json_str(r#"{"step_ms": 0}"#).is_err());
        assert!(ChartConfig::from_json_str(r#"{"band_padding": 1.0}"#).is_err());
        assert!(ChartConfig::from_json_str(r#"{"canvas": {"width": 0, "height": 10}}"#).is_err());
        assert!(ChartConfig::from_json_str(r#"{"video_fps": {"num": 0, "den": 1}}"#).is_err());
        assert!(ChartConfig::from_json_str(r#"{"colour": "red"}"#).is_err());
    }
}
