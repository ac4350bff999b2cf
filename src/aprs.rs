//! APRS decoding via the `aprs-parser` crate.
//!
//! Maps a parsed packet onto the field names common APRS tooling uses
//! (`from`, `to`, `path`, `latitude`, `longitude`, `comment`, ...). Only
//! position reports produce `latitude`/`longitude`.

use aprs_parser::AprsData;

use crate::packet::{DecodeError, DecodedPacket, PacketDecoder};

/// Decoder for APRS wire strings (`SRC>DEST,PATH:INFO`).
#[derive(Debug, Default, Clone, Copy)]
pub struct AprsDecoder;

impl AprsDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl PacketDecoder for AprsDecoder {
    fn decode(&self, wire: &str) -> Result<DecodedPacket, DecodeError> {
        let parsed = aprs_parser::parse(wire).map_err(|e| DecodeError::new(e.to_string()))?;

        let mut packet = DecodedPacket::new();
        packet.insert("raw", wire);
        packet.insert("from", callsign(&parsed.from.call, parsed.from.ssid.as_deref()));
        packet.insert("to", callsign(&parsed.to.call, parsed.to.ssid.as_deref()));
        packet.insert(
            "path",
            parsed
                .via
                .iter()
                .map(|c| callsign(&c.call, c.ssid.as_deref()))
                .collect::<Vec<_>>(),
        );

        match &parsed.data {
            AprsData::Position(position) => {
                packet.insert("format", "position");
                packet.insert("latitude", round6(f64::from(*position.latitude)));
                packet.insert("longitude", round6(f64::from(*position.longitude)));
                packet.insert("comment", position.comment.as_str());
                if let Some(timestamp) = &position.timestamp {
                    packet.insert("timestamp", format!("{:?}", timestamp));
                }
            }
            other => {
                packet.insert("format", "other");
                packet.insert("data", format!("{:?}", other));
            }
        }

        Ok(packet)
    }
}

fn callsign(call: &str, ssid: Option<&str>) -> String {
    match ssid {
        Some(ssid) => format!("{}-{}", call, ssid),
        None => call.to_string(),
    }
}

/// The parser reports single-precision degrees; six decimals drops the
/// widening noise (`52.099998474` -> `52.1`).
fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}
