//! Configuration for the balloon finder.
//!
//! All fields have defaults matching an SDRangel APRS packet export, so a
//! configuration file is only needed when the export was produced with
//! renamed columns or links should point at a different web map.
//!
//! ```toml
//! [columns]
//! data = "Data ASCII"
//!
//! [links]
//! web_map_base = "https://www.google.com/maps/place/"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{FinderError, Result};

/// Top-level configuration
///
/// # Example
/// ```
/// use balloonfinder::config::FinderConfig;
///
/// let config = FinderConfig::default();
/// assert_eq!(config.columns.data, "Data UTF-8");
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Export column names
    pub columns: ColumnConfig,
    /// Location link settings
    pub links: LinkConfig,
}

/// Header names of the export columns the loader maps by name.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    /// Sender callsign column
    pub from: String,
    /// Destination (tocall) column
    pub to: String,
    /// Packet information field column
    pub data: String,
    /// Receive date column
    pub date: String,
    /// Receive time column
    pub time: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            from: "From".to_string(),
            to: "To".to_string(),
            data: "Data UTF-8".to_string(),
            date: "Date".to_string(),
            time: "Time".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Prefix of the web map link; the `<lat>N+<lon>E` segment is appended
    pub web_map_base: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            web_map_base: "https://www.google.com/maps/place/".to_string(),
        }
    }
}

impl FinderConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| FinderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FinderError::Config(e.to_string()))
    }
}
