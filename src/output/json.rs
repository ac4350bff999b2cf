use serde_json::json;

use super::{FixOutput, Formatter, iso8601_timestamp};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, output: &FixOutput<'_>) -> String {
        let report = output.report;
        json!({
            "ts": iso8601_timestamp(),
            "source": output.source,
            "records": report.records,
            "undecodable": report.undecodable,
            "positionless": report.positionless,
            "fix": report.fix,
            "links": output.links,
        })
        .to_string()
    }
}
