//! Links to external map and messaging services

use crate::GeodeticCoordinate;

/// A Google Maps link centered on `geo`, at full precision
#[must_use]
pub fn maps_url(geo: &GeodeticCoordinate) -> String {
    format!(
        "https://www.google.com/maps?q={},{}",
        geo.latitude, geo.longitude
    )
}

/// A WhatsApp share link, carrying a message with the map link for `geo`
#[must_use]
pub fn share_url(geo: &GeodeticCoordinate) -> String {
    let message = format!("Here is the location: {}", maps_url(geo));
    format!("https://wa.me/?text={}", encode_uri_component(&message))
}

/// Percent-encode everything except the unreserved characters
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, with non-ASCII characters
/// encoded as their UTF-8 bytes
#[must_use]
pub fn encode_uri_component(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len() * 3);
    for byte in text.bytes() {
        let unreserved = byte.is_ascii_alphanumeric()
            || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')');
        if unreserved {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}

// ----- T E S T S ---------------------------------------------------------------------
