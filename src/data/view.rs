use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::Path;

use crate::data::record::Record;
use crate::data::source::{read_records, read_records_from_path};
use crate::foundation::core::{Year, YearRange};
use crate::foundation::error::LoadError;

/// Read-only, load-once container over all records with year-indexed lookup.
///
/// Records keep their load order. The year range is computed once at construction.
#[derive(Clone, Debug, Default)]
pub struct DataView {
    records: Vec<Record>,
    range: Option<YearRange>,
}

impl DataView {
    /// Build a view over records that are already typed.
    pub fn from_records(records: Vec<Record>) -> Self {
        let range = records
            .iter()
            .map(|r| r.year)
            .fold(None, |acc: Option<YearRange>, y| {
                Some(match acc {
                    None => YearRange { min: y, max: y },
                    Some(r) => YearRange {
                        min: r.min.min(y),
                        max: r.max.max(y),
                    },
                })
            });
        Self { records, range }
    }

    /// Load and coerce a CSV file.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let records = read_records_from_path(path.as_ref())?;
        let view = Self::from_records(records);
        tracing::info!(rows = view.len(), range = ?view.range, "data loaded");
        Ok(view)
    }

    /// Load and coerce CSV text from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        Ok(Self::from_records(read_records(reader)?))
    }

    /// All records with `year` exactly, in load order. Empty when the year has no data.
    pub fn rows_for_year(&self, year: Year) -> Vec<&Record> {
        self.iter_year(year).collect()
    }

    /// Iterator form of [`DataView::rows_for_year`].
    pub fn iter_year(&self, year: Year) -> impl Iterator<Item = &Record> + '_ {
        self.records.iter().filter(move |r| r.year == year)
    }

    /// `(min, max)` over all loaded years, `None` for an empty view.
    pub fn year_range(&self) -> Option<YearRange> {
        self.range
    }

    /// Distinct years in ascending order.
    pub fn years(&self) -> Vec<Year> {
        self.records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Row count per year, ascending by year.
    pub fn year_counts(&self) -> BTreeMap<Year, usize> {
        let mut out = BTreeMap::new();
        for r in &self.records {
            *out.entry(r.year).or_insert(0) += 1;
        }
        out
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
