use super::{FixOutput, Formatter};
use crate::links::format_degrees;

pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, output: &FixOutput<'_>) -> String {
        let report = output.report;
        let mut lines = vec![format!("== {} ==", output.source)];

        if self.verbose {
            lines.push(format!(
                "Records: {} ({} undecodable, {} without position)",
                report.records, report.undecodable, report.positionless
            ));
        }

        let (Some(fix), Some(links)) = (&report.fix, output.links) else {
            lines.push("No datapoint found in the CSV file.".to_string());
            return lines.join("\n");
        };

        lines.push(format!("Latitude:  {}", format_degrees(fix.latitude())));
        lines.push(format!("Longitude: {}", format_degrees(fix.longitude())));
        if let Some(received) = fix.received_at {
            lines.push(format!("Received:  {} (row {})", received, fix.row));
        } else {
            lines.push(format!("Row:       {}", fix.row));
        }
        lines.push(format!("Google Maps Link: {}", links.web));
        lines.push(format!("Default Maps App: {}", links.geo));

        if self.verbose {
            lines.push("Raw APRS Data:".to_string());
            for (key, value) in fix.packet.fields() {
                lines.push(format!("  {}: {}", key, value));
            }
        }

        lines.join("\n")
    }
}
