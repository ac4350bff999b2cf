//! Selection of the most recent position fix in an export.
//!
//! Rows are taken in file order, which is treated as arrival order. Every row
//! that decodes to a packet with coordinates replaces the current candidate,
//! so the last such row wins regardless of its values or its `Date`/`Time`.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::config::ColumnConfig;
use crate::error::Result;
use crate::export::{ExportSource, RawRecord, load_records};
use crate::packet::{DecodedPacket, PacketDecoder, reconstruct};

/// The packet chosen as the latest fix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedFix {
    /// Decoded fields of the winning packet
    pub packet: DecodedPacket,
    /// 1-based data row the packet came from
    pub row: usize,
    /// Receive time from the row's `Date`/`Time` columns, if parseable
    pub received_at: Option<NaiveDateTime>,
}

impl SelectedFix {
    pub fn latitude(&self) -> f64 {
        self.packet.latitude().unwrap_or_default()
    }

    pub fn longitude(&self) -> f64 {
        self.packet.longitude().unwrap_or_default()
    }
}

/// Outcome of scanning one export.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FixReport {
    /// Latest fix, or `None` when no row carried coordinates
    pub fix: Option<SelectedFix>,
    /// Rows read from the export
    pub records: usize,
    /// Rows the decoder rejected
    pub undecodable: usize,
    /// Rows that decoded but carried no position
    pub positionless: usize,
}

/// Walk records in order and keep the last one that decodes to a fix.
///
/// Decode failures and packets without coordinates are logged and skipped.
pub fn select_latest_fix<I, D>(records: I, decoder: &D) -> FixReport
where
    I: IntoIterator<Item = RawRecord>,
    D: PacketDecoder + ?Sized,
{
    let mut report = FixReport::default();

    for (index, record) in records.into_iter().enumerate() {
        let row = index + 1;
        report.records += 1;

        let wire = reconstruct(&record);
        let packet = match decoder.decode(&wire) {
            Ok(packet) => packet,
            Err(e) => {
                log::warn!("Skipping undecodable row {}: {} ({})", row, e, wire);
                report.undecodable += 1;
                continue;
            }
        };

        if !packet.is_fix() {
            log::info!("Skipping data without LAT/LON values in row {}: {}", row, wire);
            report.positionless += 1;
            continue;
        }

        log::debug!(
            "Row {}: fix at {:?}, {:?}",
            row,
            packet.latitude(),
            packet.longitude()
        );
        report.fix = Some(SelectedFix {
            packet,
            row,
            received_at: record.received_at(),
        });
    }

    match &report.fix {
        Some(fix) => log::info!(
            "Latest fix in row {} of {} ({} undecodable, {} without position)",
            fix.row,
            report.records,
            report.undecodable,
            report.positionless
        ),
        None => log::info!("No fix among {} rows", report.records),
    }

    report
}

/// Load an export and select its latest fix.
///
/// Load failures (unreadable source, missing columns) are returned as errors;
/// an export without any fix is a successful report with `fix == None`.
pub fn find_last_fix<D>(
    source: ExportSource<'_>,
    columns: &ColumnConfig,
    decoder: &D,
) -> Result<FixReport>
where
    D: PacketDecoder + ?Sized,
{
    let records = load_records(source, columns)?;
    Ok(select_latest_fix(records, decoder))
}
