mod csv;
mod json;
mod text;

use chrono::Utc;

use crate::fix::FixReport;
use crate::links::LinkPair;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Result of processing one export, as handed to a formatter.
pub struct FixOutput<'a> {
    /// File name, or `-` for stdin
    pub source: &'a str,
    pub report: &'a FixReport,
    /// Links for the selected fix; `None` when there is no fix
    pub links: Option<&'a LinkPair>,
}

pub trait Formatter: Send {
    fn format(&self, output: &FixOutput<'_>) -> String;

    fn header(&self) -> Option<&'static str> {
        None
    }
}

pub fn create_formatter(format: OutputFormat, verbose: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

pub fn iso8601_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
