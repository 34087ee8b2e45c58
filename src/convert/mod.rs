//! The input and output layers around the projection: validation of raw
//! text fields, the immutable result of a conversion request, display
//! rounding, and links to external services.
//!
//! ```
//! use dltm::convert;
//! let conversion = convert::convert_grid(dltm::dltm(), "494060.205", "2787900.173")?;
//! assert_eq!(conversion.latitude_text(), "25.19720000");
//! # Ok::<(), dltm::Error>(())
//! ```

mod input;
mod links;

pub use input::{parse_geographic, parse_grid, parse_number};
pub use links::{encode_uri_component, maps_url, share_url};

use crate::{Direction, Error, GeodeticCoordinate, ProjectedCoordinate, TransverseMercator};
use std::fmt;

/// Decimals shown for angular output, in degrees
pub const DEGREE_DECIMALS: usize = 8;
/// Decimals shown for linear output, in meters
pub const METER_DECIMALS: usize = 3;

/// The result of one conversion request: both representations of the
/// same point, and the direction in which it was computed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    direction: Direction,
    geodetic: GeodeticCoordinate,
    projected: ProjectedCoordinate,
}

impl Conversion {
    /// Geographical input, computed in the forward direction
    pub fn from_geographic(
        op: &TransverseMercator,
        geo: GeodeticCoordinate,
    ) -> Result<Conversion, Error> {
        let projected = op.forward(geo.latitude, geo.longitude)?;
        Ok(Conversion {
            direction: Direction::Fwd,
            geodetic: geo,
            projected,
        })
    }

    /// Grid input, computed in the inverse direction
    pub fn from_grid(
        op: &TransverseMercator,
        grid: ProjectedCoordinate,
    ) -> Result<Conversion, Error> {
        let geodetic = op.inverse(grid.easting, grid.northing)?;
        Ok(Conversion {
            direction: Direction::Inv,
            geodetic,
            projected: grid,
        })
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn geodetic(&self) -> GeodeticCoordinate {
        self.geodetic
    }

    #[must_use]
    pub fn projected(&self) -> ProjectedCoordinate {
        self.projected
    }

    #[must_use]
    pub fn latitude_text(&self) -> String {
        format!("{:.*}", DEGREE_DECIMALS, self.geodetic.latitude)
    }

    #[must_use]
    pub fn longitude_text(&self) -> String {
        format!("{:.*}", DEGREE_DECIMALS, self.geodetic.longitude)
    }

    #[must_use]
    pub fn easting_text(&self) -> String {
        format!("{:.*}", METER_DECIMALS, self.projected.easting)
    }

    #[must_use]
    pub fn northing_text(&self) -> String {
        format!("{:.*}", METER_DECIMALS, self.projected.northing)
    }

    #[must_use]
    pub fn maps_url(&self) -> String {
        maps_url(&self.geodetic)
    }

    #[must_use]
    pub fn share_url(&self) -> String {
        share_url(&self.geodetic)
    }
}

/// The computed side of the conversion, rounded for display
impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.direction {
            Direction::Fwd => write!(f, "{} {}", self.easting_text(), self.northing_text()),
            Direction::Inv => write!(f, "{} {}", self.latitude_text(), self.longitude_text()),
        }
    }
}

/// Validate raw grid fields and convert them to geographical coordinates
pub fn convert_grid(
    op: &TransverseMercator,
    easting: &str,
    northing: &str,
) -> Result<Conversion, Error> {
    Conversion::from_grid(op, parse_grid(easting, northing)?)
}

/// Validate raw latitude/longitude fields and convert them to grid coordinates
pub fn convert_geographic(
    op: &TransverseMercator,
    latitude: &str,
    longitude: &str,
) -> Result<Conversion, Error> {
    Conversion::from_geographic(op, parse_geographic(latitude, longitude)?)
}

/// Dispatch on direction: `Fwd` takes latitude/longitude fields,
/// `Inv` takes easting/northing fields
pub fn convert(
    op: &TransverseMercator,
    direction: Direction,
    first: &str,
    second: &str,
) -> Result<Conversion, Error> {
    match direction {
        Direction::Fwd => convert_geographic(op, first, second),
        Direction::Inv => convert_grid(op, first, second),
    }
}

// ----- T E S T S ---------------------------------------------------------------------
