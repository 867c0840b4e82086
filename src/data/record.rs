use crate::foundation::core::Year;

/// One observation for a country-year pair.
///
/// Numeric fields are always defined: fallbacks are applied while loading, never later.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub country: String,
    pub year: Year,
    /// New smear-positive cohort size. Falls back to `1`.
    pub cohort_size: f64,
    /// Share of the cohort that completed treatment. Falls back to `0`.
    pub completion_rate: f64,
    /// Share of the cohort whose treatment failed. Falls back to `0`.
    pub failure_rate: f64,
}

impl Record {
    pub fn new(
        country: impl Into<String>,
        year: Year,
        cohort_size: f64,
        completion_rate: f64,
        failure_rate: f64,
    ) -> Self {
        Self {
            country: country.into(),
            year,
            cohort_size,
            completion_rate,
            failure_rate,
        }
    }

    /// Label/value pairs shown when hovering a bar.
    pub fn detail_lines(&self) -> [(&'static str, String); 5] {
        [
            ("Country", self.country.clone()),
            ("Year", self.year.to_string()),
            ("Cohort Size", self.cohort_size.to_string()),
            ("Completion Rate", self.completion_rate.to_string()),
            ("Failure Rate", self.failure_rate.to_string()),
        ]
    }

    /// Hover detail as newline separated `Label: value` lines.
    pub fn detail_text(&self) -> String {
        self.detail_lines()
            .iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A CSV row before coercion. Every column is optional text; `None` when the file has no such
/// column or the row is too short to reach it.
#[derive(Debug, Default)]
pub(crate) struct RawRow {
    pub(crate) country: Option<String>,
    pub(crate) year: Option<String>,
    pub(crate) cohort_size: Option<String>,
    pub(crate) completion_rate: Option<String>,
    pub(crate) failure_rate: Option<String>,
}

impl RawRow {
    /// Apply the field coercion rules. `None` when the row has no usable year.
    pub(crate) fn coerce(self) -> Option<Record> {
        let year = coerce_year(self.year.as_deref())?;
        Some(Record {
            country: self.country.unwrap_or_default(),
            year,
            cohort_size: or_fallback(numeric_cast(self.cohort_size.as_deref()), 1.0),
            completion_rate: or_fallback(numeric_cast(self.completion_rate.as_deref()), 0.0),
            failure_rate: or_fallback(numeric_cast(self.failure_rate.as_deref()), 0.0),
        })
    }
}

/// Numeric cast with string-to-number semantics of a loosely typed source: whitespace is
/// trimmed and an empty cell reads as zero. Unparsable and non-finite values yield `None`.
pub(crate) fn numeric_cast(raw: Option<&str>) -> Option<f64> {
    let s = raw?.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

// Zero counts as missing, matching the source data's `value || default` convention.
fn or_fallback(v: Option<f64>, fallback: f64) -> f64 {
    match v {
        Some(v) if v != 0.0 => v,
        _ => fallback,
    }
}

fn coerce_year(raw: Option<&str>) -> Option<Year> {
    let s = raw?.trim();
    if s.is_empty() {
        return None;
    }
    let v = s.parse::<f64>().ok()?;
    if !v.is_finite() || v.fract() != 0.0 {
        return None;
    }
    if v < f64::from(Year::MIN) || v > f64::from(Year::MAX) {
        return None;
    }
    Some(v as Year)
}
