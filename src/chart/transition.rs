use crate::chart::layout::{Bar, ChartFrame};
use crate::foundation::core::{Rect, Rgb8};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Enter,
    Update,
    Exit,
}

#[derive(Clone, Debug)]
struct TweenBar {
    country: String,
    from: Rect,
    to: Rect,
    from_fill: Rgb8,
    to_fill: Rgb8,
    detail: String,
    phase: Phase,
}

/// Keyed join between two consecutive chart frames.
///
/// Bars are matched by country. Entering bars grow from the baseline, updated bars move and
/// recolor, exiting bars shrink into the baseline and are gone once the transition completes.
#[derive(Clone, Debug)]
pub struct Transition {
    target: ChartFrame,
    bars: Vec<TweenBar>,
}

impl Transition {
    pub fn between(prev: Option<&ChartFrame>, next: &ChartFrame) -> Self {
        let baseline = f64::from(next.canvas.height);
        let collapse = |r: Rect| Rect::new(r.x0, baseline, r.x1, baseline);

        let mut bars = Vec::with_capacity(next.bars.len());
        if let Some(prev) = prev {
            for old in &prev.bars {
                if next.bar(&old.country).is_none() {
                    bars.push(TweenBar {
                        country: old.country.clone(),
                        from: old.rect,
                        to: collapse(old.rect),
                        from_fill: old.fill,
                        to_fill: old.fill,
                        detail: old.detail.clone(),
                        phase: Phase::Exit,
                    });
                }
            }
        }

        for bar in &next.bars {
            let old = prev.and_then(|p| p.bar(&bar.country));
            let (from, from_fill, phase) = match old {
                Some(old) => (old.rect, old.fill, Phase::Update),
                None => (collapse(bar.rect), bar.fill, Phase::Enter),
            };
            bars.push(TweenBar {
                country: bar.country.clone(),
                from,
                to: bar.rect,
                from_fill,
                to_fill: bar.fill,
                detail: bar.detail.clone(),
                phase,
            });
        }

        Self {
            target: next.clone(),
            bars,
        }
    }

    /// Frame at eased progress `t`. At `t >= 1` this is exactly the target frame.
    pub fn sample(&self, t: f64) -> ChartFrame {
        if t >= 1.0 {
            return self.target.clone();
        }
        let t = t.max(0.0);
        let bars = self
            .bars
            .iter()
            .map(|b| Bar {
                country: b.country.clone(),
                rect: lerp_rect(b.from, b.to, t),
                fill: b.from_fill.lerp(b.to_fill, t),
                detail: b.detail.clone(),
            })
            .collect();
        ChartFrame {
            year: self.target.year,
            canvas: self.target.canvas,
            bars,
        }
    }

    pub fn entering(&self) -> usize {
        self.count(Phase::Enter)
    }

    pub fn exiting(&self) -> usize {
        self.count(Phase::Exit)
    }

    fn count(&self, phase: Phase) -> usize {
        self.bars.iter().filter(|b| b.phase == phase).count()
    }
}

fn lerp_rect(a: Rect, b: Rect, t: f64) -> Rect {
    let l = |x: f64, y: f64| x + (y - x) * t;
    Rect::new(l(a.x0, b.x0), l(a.y0, b.y0), l(a.x1, b.x1), l(a.y1, b.y1))
}
