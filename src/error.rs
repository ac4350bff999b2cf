use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed export: {0}")]
    MalformedInput(String),

    #[error("Export is missing required column '{0}'")]
    MissingColumn(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Datapoint does not contain longitude and latitude: {0}")]
    InvalidFix(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FinderError>;
