use super::{FixOutput, Formatter, iso8601_timestamp};
use crate::error::{FinderError, Result};
use crate::links::format_degrees;

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, output: &FixOutput<'_>) -> String {
        let report = output.report;
        let fix = report.fix.as_ref();
        let received = fix
            .and_then(|f| f.received_at)
            .map_or(String::new(), |t| t.format("%Y-%m-%dT%H:%M:%S").to_string());
        let record = [
            iso8601_timestamp(),
            output.source.to_string(),
            report.records.to_string(),
            report.undecodable.to_string(),
            report.positionless.to_string(),
            fix.map_or(String::new(), |f| f.row.to_string()),
            fix.map_or(String::new(), |f| format_degrees(f.latitude())),
            fix.map_or(String::new(), |f| format_degrees(f.longitude())),
            received,
            output.links.map_or(String::new(), |l| l.web.clone()),
            output.links.map_or(String::new(), |l| l.geo.clone()),
        ];

        match write_line(&record) {
            Ok(line) => line,
            Err(e) => {
                log::error!("Cannot write CSV row for {}: {}", output.source, e);
                String::new()
            }
        }
    }

    fn header(&self) -> Option<&'static str> {
        Some("ts,source,records,undecodable,positionless,row,latitude,longitude,received_at,web_link,geo_link")
    }
}

/// One record, quoted where needed, without the line terminator.
fn write_line(record: &[String]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(vec![]);
    writer.write_record(record)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| FinderError::Csv(e.into_error().into()))?;
    let line = String::from_utf8(bytes).map_err(|e| FinderError::MalformedInput(e.to_string()))?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
