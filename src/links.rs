//! Location links for a selected fix.

use serde::Serialize;

use crate::config::LinkConfig;
use crate::error::{FinderError, Result};
use crate::packet::DecodedPacket;

/// The two shareable forms of a fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkPair {
    /// Web map link, `<base><lat>N+<lon>E`
    pub web: String,
    /// `geo:<lat>,<lon>` URI for the platform's default maps app
    pub geo: String,
}

impl LinkPair {
    pub fn new(packet: &DecodedPacket, config: &LinkConfig) -> Result<Self> {
        Ok(Self {
            web: web_map_link(packet, &config.web_map_base)?,
            geo: geo_uri(packet)?,
        })
    }
}

/// Web map link. The `N`/`E` suffixes are literal and do not follow the
/// coordinate signs.
pub fn web_map_link(packet: &DecodedPacket, base: &str) -> Result<String> {
    let (lat, lon) = coordinates(packet)?;
    Ok(format!(
        "{}{}N+{}E",
        base,
        format_degrees(lat),
        format_degrees(lon)
    ))
}

pub fn geo_uri(packet: &DecodedPacket) -> Result<String> {
    let (lat, lon) = coordinates(packet)?;
    Ok(format!("geo:{},{}", format_degrees(lat), format_degrees(lon)))
}

fn coordinates(packet: &DecodedPacket) -> Result<(f64, f64)> {
    packet
        .coordinates()
        .ok_or_else(|| FinderError::InvalidFix(serde_json::to_string(packet).unwrap_or_default()))
}

/// Shortest round-trip form, keeping one decimal on whole degrees (`21.0`).
/// Small values are written positionally (`0.00005`), never in exponent form.
pub fn format_degrees(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix(lat: f64, lon: f64) -> DecodedPacket {
        let mut packet = DecodedPacket::new();
        packet.insert("latitude", lat);
        packet.insert("longitude", lon);
        packet
    }

    #[test]
    fn test_links() {
        let links = LinkPair::new(&fix(52.1, 21.0), &LinkConfig::default()).unwrap();
        assert_eq!(links.web, "https://www.google.com/maps/place/52.1N+21.0E");
        assert_eq!(links.geo, "geo:52.1,21.0");
    }

    #[test]
    fn test_suffixes_do_not_follow_sign() {
        let packet = fix(-33.865, -151.2094);
        assert_eq!(
            web_map_link(&packet, "https://www.google.com/maps/place/").unwrap(),
            "https://www.google.com/maps/place/-33.865N+-151.2094E"
        );
        assert_eq!(geo_uri(&packet).unwrap(), "geo:-33.865,-151.2094");
    }

    #[test]
    fn test_custom_base() {
        let config = LinkConfig {
            web_map_base: "https://maps.example.org/?q=".to_string(),
        };
        let links = LinkPair::new(&fix(1.5, 2.25), &config).unwrap();
        assert_eq!(links.web, "https://maps.example.org/?q=1.5N+2.25E");
    }

    #[test]
    fn test_missing_coordinate_is_error() {
        let mut packet = DecodedPacket::new();
        packet.insert("latitude", 52.1);
        assert!(matches!(geo_uri(&packet), Err(FinderError::InvalidFix(_))));
        assert!(matches!(
            LinkPair::new(&packet, &LinkConfig::default()),
            Err(FinderError::InvalidFix(_))
        ));
    }

    #[test]
    fn test_unusable_coordinate_is_error() {
        let mut packet = DecodedPacket::new();
        packet.insert("latitude", "north");
        packet.insert("longitude", 21.0);
        assert!(packet.is_fix());
        assert!(matches!(geo_uri(&packet), Err(FinderError::InvalidFix(_))));
    }

    #[test]
    fn test_numeric_strings_give_links() {
        let mut packet = DecodedPacket::new();
        packet.insert("latitude", "52.1");
        packet.insert("longitude", "21.0");
        let links = LinkPair::new(&packet, &LinkConfig::default()).unwrap();
        assert_eq!(links.web, "https://www.google.com/maps/place/52.1N+21.0E");
        assert_eq!(links.geo, "geo:52.1,21.0");
    }

    #[test]
    fn test_small_values_stay_positional() {
        // never scientific notation: `5e-05` would break the web link
        assert_eq!(format_degrees(0.00005), "0.00005");
        assert_eq!(format_degrees(-0.000001), "-0.000001");
    }

    #[test]
    fn test_format_degrees() {
        assert_eq!(format_degrees(21.0), "21.0");
        assert_eq!(format_degrees(-0.5), "-0.5");
        assert_eq!(format_degrees(49.058333), "49.058333");
        assert_eq!(format_degrees(180.0), "180.0");
    }
}
