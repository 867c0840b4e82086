use std::io::Read;
use std::path::Path;

use crate::data::record::{RawRow, Record};
use crate::foundation::error::LoadError;

/// Header positions of the columns a [`Record`] is built from.
#[derive(Debug, Default)]
struct Columns {
    country: Option<usize>,
    year: Option<usize>,
    cohort_size: Option<usize>,
    completion_rate: Option<usize>,
    failure_rate: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h == name);
        Self {
            country: find("country"),
            year: find("year"),
            cohort_size: find("new_sp_coh"),
            completion_rate: find("completion_rate"),
            failure_rate: find("failure_rate"),
        }
    }

    fn raw_row(&self, record: &csv::StringRecord) -> RawRow {
        let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i)).map(str::to_owned);
        RawRow {
            country: cell(self.country),
            year: cell(self.year),
            cohort_size: cell(self.cohort_size),
            completion_rate: cell(self.completion_rate),
            failure_rate: cell(self.failure_rate),
        }
    }
}

/// Parse CSV rows from `reader` and coerce them into [`Record`]s.
///
/// Columns are looked up by header name; unknown columns are ignored and cells missing from a
/// short row read as absent. Rows without a usable year are dropped. Malformed numeric cells are
/// repaired with their fallback values. Only I/O, UTF-8 and CSV framing problems fail the load.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?);
    if columns.year.is_none() {
        tracing::warn!("data source has no `year` column");
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (line, row) in rdr.records().enumerate() {
        let row = row?;
        match columns.raw_row(&row).coerce() {
            Some(record) => records.push(record),
            None => {
                skipped += 1;
                tracing::debug!(row = line + 1, "skipping row without an integral year");
            }
        }
    }

    if skipped > 0 {
        tracing::warn!(skipped, kept = records.len(), "dropped rows without a valid year");
    }
    Ok(records)
}

/// Open `path` and parse it with [`read_records`].
pub fn read_records_from_path(path: &Path) -> Result<Vec<Record>, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(std::io::BufReader::new(file))
}
