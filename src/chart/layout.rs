use crate::chart::color::interpolate_blues;
use crate::chart::scale::{BandScale, LinearScale};
use crate::config::ChartConfig;
use crate::data::view::DataView;
use crate::foundation::core::{Canvas, Rect, Rgb8, Year};

/// One drawn bar, keyed by country.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub country: String,
    pub rect: Rect,
    pub fill: Rgb8,
    /// Hover detail text.
    pub detail: String,
}

/// Everything needed to draw the chart for one year.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartFrame {
    pub year: Year,
    pub canvas: Canvas,
    pub bars: Vec<Bar>,
}

impl ChartFrame {
    pub fn empty(year: Year, canvas: Canvas) -> Self {
        Self {
            year,
            canvas,
            bars: Vec::new(),
        }
    }

    pub fn bar(&self, country: &str) -> Option<&Bar> {
        self.bars.iter().find(|b| b.country == country)
    }
}

/// Lay out the bars of `year`.
///
/// x is a band over that year's countries, height is linear in cohort size up to the year's
/// largest cohort, fill follows the completion rate on the blue ramp. Bars never go below the
/// baseline.
pub fn layout_year(view: &DataView, year: Year, cfg: &ChartConfig) -> ChartFrame {
    let rows = view.rows_for_year(year);
    let width = f64::from(cfg.canvas.width);
    let height = f64::from(cfg.canvas.height);

    let x = BandScale::new(
        rows.iter().map(|r| r.country.as_str()),
        [0.0, width],
        cfg.band_padding,
    );
    let max_cohort = rows
        .iter()
        .map(|r| r.cohort_size)
        .fold(f64::NEG_INFINITY, f64::max);
    let max_cohort = if max_cohort.is_finite() { max_cohort } else { 0.0 };
    let y = LinearScale::new([0.0, max_cohort], [height, 0.0]);

    let bars = rows
        .iter()
        .filter_map(|r| {
            let x0 = x.position(&r.country)?;
            let top = y.map(r.cohort_size).clamp(0.0, height);
            Some(Bar {
                country: r.country.clone(),
                rect: Rect::new(x0, top, x0 + x.bandwidth(), height),
                fill: interpolate_blues(r.completion_rate),
                detail: r.detail_text(),
            })
        })
        .collect();

    ChartFrame {
        year,
        canvas: cfg.canvas,
        bars,
    }
}
