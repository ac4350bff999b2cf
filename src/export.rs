//! Loading of SDRangel APRS packet exports.
//!
//! The export is a CSV table with a header row. Columns are looked up by
//! name, so their order does not matter and extra columns are ignored.

use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::ColumnConfig;
use crate::error::{FinderError, Result};

const UTF8_BOM: &str = "\u{feff}";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d.%m.%Y", "%a %b %e %Y"];
const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M:%S%.f", "%H:%M"];

/// Where an export comes from.
#[derive(Debug, Clone, Copy)]
pub enum ExportSource<'a> {
    /// A file on disk
    Path(&'a Path),
    /// Export contents already in memory, e.g. piped on stdin
    Bytes(&'a [u8]),
}

/// One row of the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub sender: String,
    pub recipient: String,
    pub payload: String,
    pub date: String,
    pub time: String,
}

impl RawRecord {
    /// Receive time of this row, if the `Date`/`Time` columns hold a
    /// recognisable layout.
    pub fn received_at(&self) -> Option<NaiveDateTime> {
        let date = DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(self.date.trim(), fmt).ok())?;
        let time = TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(self.time.trim(), fmt).ok())?;
        Some(date.and_time(time))
    }
}

/// Load every row of an export in file order.
///
/// Files are read fully and handed to the same parser as in-memory buffers,
/// so both sources behave identically.
pub fn load_records(source: ExportSource<'_>, columns: &ColumnConfig) -> Result<Vec<RawRecord>> {
    match source {
        ExportSource::Path(path) => {
            let bytes = fs::read(path).map_err(|source| FinderError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_export(&bytes, columns)
        }
        ExportSource::Bytes(bytes) => parse_export(bytes, columns),
    }
}

/// Parse UTF-8 export bytes into records.
pub fn parse_export(bytes: &[u8], columns: &ColumnConfig) -> Result<Vec<RawRecord>> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        FinderError::MalformedInput(format!("export is not valid UTF-8: {}", e))
    })?;
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let layout = ColumnLayout::from_headers(reader.headers()?, columns)?;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        records.push(layout.record(&row, index + 1)?);
    }

    log::debug!("Loaded {} records from export", records.len());
    Ok(records)
}

/// Positions of the required columns within a header row.
struct ColumnLayout<'a> {
    names: &'a ColumnConfig,
    from: usize,
    to: usize,
    data: usize,
    date: usize,
    time: usize,
}

impl<'a> ColumnLayout<'a> {
    fn from_headers(headers: &csv::StringRecord, names: &'a ColumnConfig) -> Result<Self> {
        // duplicate header names: the last one wins
        let find = |name: &str| {
            headers
                .iter()
                .collect::<Vec<_>>()
                .iter()
                .rposition(|h| *h == name)
                .ok_or_else(|| FinderError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            from: find(&names.from)?,
            to: find(&names.to)?,
            data: find(&names.data)?,
            date: find(&names.date)?,
            time: find(&names.time)?,
            names,
        })
    }

    fn record(&self, row: &csv::StringRecord, row_number: usize) -> Result<RawRecord> {
        let field = |index: usize, name: &str| {
            row.get(index).map(str::to_string).ok_or_else(|| {
                FinderError::MalformedInput(format!("row {} has no '{}' field", row_number, name))
            })
        };

        Ok(RawRecord {
            sender: field(self.from, &self.names.from)?,
            recipient: field(self.to, &self.names.to)?,
            payload: field(self.data, &self.names.data)?,
            date: field(self.date, &self.names.date)?,
            time: field(self.time, &self.names.time)?,
        })
    }
}
