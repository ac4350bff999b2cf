//! Wire-format reconstruction and the decoder seam.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::export::RawRecord;

/// Why a wire string could not be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot decode packet: {0}")]
pub struct DecodeError(String);

impl DecodeError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Decoded fields of one packet, keyed by field name.
///
/// Only `latitude` and `longitude` carry meaning for fix selection; any other
/// keys are decoder specific.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DecodedPacket(Map<String, Value>);

impl DecodedPacket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn latitude(&self) -> Option<f64> {
        self.get("latitude").and_then(degrees)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.get("longitude").and_then(degrees)
    }

    /// Latitude and longitude as numbers, if both are present and readable.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude()?, self.longitude()?))
    }

    /// A packet is a fix when both coordinate keys are present. Whether the
    /// values are usable is checked where links are built.
    pub fn is_fix(&self) -> bool {
        self.contains_key("latitude") && self.contains_key("longitude")
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Turns a `SENDER>RECIPIENT:PAYLOAD` wire string into decoded fields.
pub trait PacketDecoder {
    fn decode(&self, wire: &str) -> Result<DecodedPacket, DecodeError>;
}

/// Numbers, or strings holding a number.
fn degrees(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        other => other.as_f64(),
    }
}

/// Rebuild the wire string the export split into columns.
pub fn reconstruct(record: &RawRecord) -> String {
    format!("{}>{}:{}", record.sender, record.recipient, record.payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(sender: &str, recipient: &str, payload: &str) -> RawRecord {
        RawRecord {
            sender: sender.to_string(),
            recipient: recipient.to_string(),
            payload: payload.to_string(),
            date: String::new(),
            time: String::new(),
        }
    }

    #[test]
    fn test_reconstruct() {
        let r = record("N0CALL-11", "APRS,WIDE2-1", "!4903.50N/07201.75WO");
        assert_eq!(reconstruct(&r), "N0CALL-11>APRS,WIDE2-1:!4903.50N/07201.75WO");
    }

    #[test]
    fn test_reconstruct_does_not_validate() {
        assert_eq!(reconstruct(&record("", "", "")), ">:");
        assert_eq!(reconstruct(&record("a>b", ":", "ä:ö")), "a>b>::ä:ö");
    }

    #[test]
    fn test_fix_requires_both_coordinates() {
        let mut packet = DecodedPacket::new();
        assert!(!packet.is_fix());

        packet.insert("latitude", 52.1);
        assert!(!packet.is_fix());

        packet.insert("longitude", 21.0);
        assert!(packet.is_fix());
        assert_eq!(packet.coordinates(), Some((52.1, 21.0)));
    }

    #[test]
    fn test_fix_is_key_presence() {
        let mut packet = DecodedPacket::new();
        packet.insert("latitude", "north");
        packet.insert("longitude", 21.0);
        assert!(packet.is_fix());
        assert_eq!(packet.coordinates(), None);
    }

    #[test]
    fn test_string_coordinates_are_read() {
        let mut packet = DecodedPacket::new();
        packet.insert("latitude", "52.1");
        packet.insert("longitude", " 21.0");
        assert!(packet.is_fix());
        assert_eq!(packet.coordinates(), Some((52.1, 21.0)));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut packet = DecodedPacket::new();
        packet.insert("from", "N0CALL");
        packet.insert("latitude", 10.5);
        assert_eq!(
            serde_json::to_value(&packet).unwrap(),
            json!({"from": "N0CALL", "latitude": 10.5})
        );
    }
}
