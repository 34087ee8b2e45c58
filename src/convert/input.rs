//! Validation of raw, user supplied text fields

use crate::{Error, GeodeticCoordinate, ProjectedCoordinate};
use log::trace;

/// Interpret the leading numeric part of `text`, ignoring surrounding
/// whitespace and any trailing garbage, so "12.5m" reads as 12.5.
/// Fails if no numeric prefix is found.
pub fn parse_number(text: &str) -> Result<f64, Error> {
    let text = text.trim();
    let prefix = numeric_prefix(text);
    let value = match prefix.trim_start_matches(&['+', '-'][..]) {
        "Infinity" if prefix.starts_with('-') => Some(f64::NEG_INFINITY),
        "Infinity" => Some(f64::INFINITY),
        _ => prefix.parse::<f64>().ok(),
    };
    value.ok_or_else(|| Error::Syntax(format!("'{text}' is not a number")))
}

// The longest prefix of `text` shaped as [sign] digits [. digits] [e [sign] digits],
// or [sign] "Infinity"
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if text[end..].starts_with("Infinity") {
        return &text[..end + "Infinity".len()];
    }

    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let integral = digits(end);
    end += integral;
    let mut mantissa = integral;
    if bytes.get(end) == Some(&b'.') {
        let fraction = digits(end + 1);
        if integral > 0 || fraction > 0 {
            end += 1 + fraction;
            mantissa += fraction;
        }
    }
    if mantissa == 0 {
        return "";
    }

    // An exponent only counts if it has at least one digit
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    &text[..end]
}

// Both fields must be present, and both must be numbers
fn parse_pair(first: &str, second: &str, names: &'static str) -> Result<(f64, f64), Error> {
    let (first, second) = (first.trim(), second.trim());
    if first.is_empty() || second.is_empty() {
        return Err(Error::Missing(names));
    }
    let pair = (parse_number(first)?, parse_number(second)?);
    trace!("{names}: {pair:?}");
    Ok(pair)
}

/// Parse and validate a pair of grid coordinate fields.
/// The DLTM grid convention requires non-negative values.
pub fn parse_grid(easting: &str, northing: &str) -> Result<ProjectedCoordinate, Error> {
    let (easting, northing) = parse_pair(easting, northing, "Easting and Northing")?;
    if easting < 0. {
        return Err(Error::Negative("easting", easting));
    }
    if northing < 0. {
        return Err(Error::Negative("northing", northing));
    }
    Ok(ProjectedCoordinate::raw(easting, northing))
}

/// Parse and validate a pair of latitude/longitude fields, in degrees
pub fn parse_geographic(latitude: &str, longitude: &str) -> Result<GeodeticCoordinate, Error> {
    let (latitude, longitude) = parse_pair(latitude, longitude, "Latitude and Longitude")?;
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::OutOfRange("latitude", latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::OutOfRange("longitude", longitude));
    }
    Ok(GeodeticCoordinate::geo(latitude, longitude))
}

// ----- T E S T S ---------------------------------------------------------------------
