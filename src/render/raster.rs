use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::error::{ChartError, ChartResult};
use crate::foundation::math::demultiply_rgba8_in_place;

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

/// SVG to pixel rasterizer backed by `usvg`/`resvg`.
///
/// The font database is loaded once and shared, so one rasterizer can serve many threads.
#[derive(Clone)]
pub struct Rasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl Rasterizer {
    /// Rasterizer with the system fonts loaded.
    pub fn new() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        Self::with_fontdb(Arc::new(db))
    }

    pub fn with_fontdb(fontdb: Arc<usvg::fontdb::Database>) -> Self {
        Self { fontdb }
    }

    /// Parse `svg` and render it at its own width/height.
    pub fn rasterize(&self, svg: &str) -> ChartResult<FrameRGBA> {
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(svg, &opts).context("parse chart svg")?;

        let size = tree.size();
        let width = to_px(size.width())?;
        let height = to_px(size.height())?;
        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| ChartError::render("failed to allocate pixmap"))?;

        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );
        Ok(FrameRGBA {
            width,
            height,
            data: pixmap.data().to_vec(),
            premultiplied: true,
        })
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_px(v: f32) -> ChartResult<u32> {
    const MAX_DIM: f32 = 16_384.0;
    if !v.is_finite() || v <= 0.0 || v > MAX_DIM {
        return Err(ChartError::render(format!("svg has unusable size {v}")));
    }
    Ok((v.ceil() as u32).max(1))
}

/// Write `frame` as a PNG, converting premultiplied pixels to straight alpha first.
pub fn save_png(frame: &FrameRGBA, path: &Path) -> ChartResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let mut data = frame.data.clone();
    if frame.premultiplied {
        demultiply_rgba8_in_place(&mut data);
    }
    image::save_buffer_with_format(
        path,
        &data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}
