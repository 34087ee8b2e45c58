//! *Conversion between geographical coordinates and the
//! Dubai Local Transverse Mercator grid*.
//!
//! The heart of the crate is [`TransverseMercator`], an ellipsoidal
//! transverse Mercator projection following
//! [Engsager & Poder, 2007](crate::Bibliography::Eng07), with the Krüger
//! series extended to 6th order by [Karney, 2011](crate::Bibliography::Kar11).
//! It is parameterized by a typed [`ProjectionConfig`], of which the
//! DLTM grid ([`ProjectionConfig::DLTM`]) is the canonical instance.
//!
//! ```
//! let op = dltm::dltm();
//! let grid = op.forward(25.2048, 55.2708)?;
//! let geo = op.inverse(grid.easting, grid.northing)?;
//! assert!((geo.latitude - 25.2048).abs() < 1e-9);
//! # Ok::<(), dltm::Error>(())
//! ```
//!
//! Around the projection, the [`convert`] module provides the input and
//! output layers needed by interactive front ends: validation of raw text
//! fields, display rounding, and map/share links.

mod bibliography;
pub mod convert;
mod coordinate;
mod ellipsoid;
pub mod math;
mod projection;

pub use bibliography::Bibliography;
pub use coordinate::GeodeticCoordinate;
pub use coordinate::ProjectedCoordinate;
pub use ellipsoid::Ellipsoid;
pub use projection::dltm;
pub use projection::ProjectionConfig;
pub use projection::TransverseMercator;

/// The bread-and-butter, shrink-wrapped and ready to use
pub mod prelude {
    pub use crate::convert::Conversion;
    pub use crate::dltm;
    pub use crate::Direction;
    pub use crate::Direction::*;
    pub use crate::Ellipsoid;
    pub use crate::Error;
    pub use crate::GeodeticCoordinate;
    pub use crate::ProjectedCoordinate;
    pub use crate::ProjectionConfig;
    pub use crate::TransverseMercator;
}

use thiserror::Error;

/// The errors reported by the projection and by the conversion layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Non-finite or out-of-domain input handed directly to the projection
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The series or the footpoint iteration cannot deliver a result
    #[error("no convergence: {0}")]
    ConvergenceFailure(String),

    #[error("missing value: {0}")]
    Missing(&'static str),

    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("negative {0}: {1}")]
    Negative(&'static str, f64),

    #[error("{0} out of range: {1}")]
    OutOfRange(&'static str, f64),

    #[error("malformed value for parameter {0}: {1}")]
    BadParam(String, String),

    #[error("{0} not found")]
    NotFound(String),
}

impl Error {
    /// The message shown to an end user when a conversion request fails
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Error::Missing(what) => format!("Please enter both {what} values."),
            Error::Syntax(_) => "Coordinates must be valid numbers.".to_string(),
            Error::Negative(..) => "Values must be positive.".to_string(),
            Error::OutOfRange(..) => "Invalid Latitude or Longitude range.".to_string(),
            Error::InvalidInput(_) | Error::ConvergenceFailure(_) => {
                "Conversion failed. Check your coordinates.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// `Fwd`: Geographical coordinates to grid coordinates.
/// `Inv`: Grid coordinates to geographical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Fwd,
    Inv,
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages() {
        let e = Error::Missing("Easting and Northing");
        assert_eq!(
            e.user_message(),
            "Please enter both Easting and Northing values."
        );
        assert_eq!(
            Error::Syntax("abc".into()).user_message(),
            "Coordinates must be valid numbers."
        );
        assert_eq!(
            Error::Negative("easting", -1.).user_message(),
            "Values must be positive."
        );
        assert_eq!(
            Error::ConvergenceFailure("beyond the pole".into()).user_message(),
            "Conversion failed. Check your coordinates."
        );
        assert_eq!(Error::NotFound("krass".into()).user_message(), "krass not found");
    }
}
