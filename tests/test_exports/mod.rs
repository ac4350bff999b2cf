//! Helpers for building SDRangel-style exports in tests.

#![allow(dead_code)]

use std::collections::HashMap;

use balloonfinder::{DecodeError, DecodedPacket, PacketDecoder};

pub const HEADER: &str = "Date,Time,From,To,Via,Type,PID,Data ASCII,Data UTF-8";

/// Build an export with the SDRangel column layout, one row per
/// `(from, to, payload)`, timestamps one minute apart.
pub fn sdrangel_export(rows: &[(&str, &str, &str)]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for (i, (from, to, payload)) in rows.iter().enumerate() {
        let payload = payload.replace('"', "\"\"");
        out.push_str(&format!(
            "2024-03-16,10:{:02}:00,{},\"{}\",WIDE2-1,UI,f0,\"{}\",\"{}\"\n",
            i % 60,
            from,
            to,
            payload,
            payload
        ));
    }
    out
}

/// Decoder with canned results keyed by payload; unknown payloads fail.
pub struct FakeDecoder {
    results: HashMap<String, Option<(f64, f64)>>,
}

impl FakeDecoder {
    pub fn new(entries: &[(&str, Option<(f64, f64)>)]) -> Self {
        Self {
            results: entries
                .iter()
                .map(|(payload, fix)| (payload.to_string(), *fix))
                .collect(),
        }
    }
}

impl PacketDecoder for FakeDecoder {
    fn decode(&self, wire: &str) -> Result<DecodedPacket, DecodeError> {
        let (_, payload) = wire.split_once(':').ok_or_else(|| DecodeError::new("no body"))?;
        let result = self
            .results
            .get(payload)
            .ok_or_else(|| DecodeError::new("unknown payload"))?;

        let mut packet = DecodedPacket::new();
        packet.insert("raw", wire);
        packet.insert("format", "fake");
        if let Some((lat, lon)) = result {
            packet.insert("latitude", *lat);
            packet.insert("longitude", *lon);
        }
        Ok(packet)
    }
}
