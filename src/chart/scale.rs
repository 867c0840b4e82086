use std::collections::HashMap;

/// Ordinal band scale: evenly spaced bands over a continuous range.
///
/// Domain entries are deduplicated keeping the first occurrence. Padding is applied both between
/// bands and at the outer edges, and the bands are centered in the range.
#[derive(Clone, Debug)]
pub struct BandScale {
    index: HashMap<String, usize>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new<'a>(domain: impl IntoIterator<Item = &'a str>, range: [f64; 2], padding: f64) -> Self {
        let mut index = HashMap::new();
        for key in domain {
            let next = index.len();
            index.entry(key.to_owned()).or_insert(next);
        }

        let n = index.len() as f64;
        let [r0, r1] = range;
        let step = (r1 - r0) / (n - padding + padding * 2.0).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
        Self {
            index,
            start,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    /// Left edge of the band for `key`, `None` when not in the domain.
    pub fn position(&self, key: &str) -> Option<f64> {
        self.index
            .get(key)
            .map(|&i| self.start + self.step * i as f64)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Linear map from `domain` onto `range`.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// A degenerate domain maps every value to the middle of the range.
    pub fn map(&self, v: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (v - d0) / span };
        r0 + (r1 - r0) * t
    }
}
