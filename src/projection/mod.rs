//! Projection configuration, and the transverse Mercator projection itself

mod tmerc;
pub use tmerc::TransverseMercator;

use crate::Ellipsoid;
use crate::Error;
use log::error;
use once_cell::sync::Lazy;

/// The fixed parameters of a transverse Mercator grid. Angles in degrees,
/// lengths in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionConfig {
    ellipsoid: Ellipsoid,
    lat_0: f64,
    lon_0: f64,
    k_0: f64,
    x_0: f64,
    y_0: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        ProjectionConfig::new(Ellipsoid::GRS80)
    }
}

impl ProjectionConfig {
    /// Dubai Local Transverse Mercator:
    /// `tmerc lat_0=0 lon_0=55.3333333333333 k_0=1 x_0=500000 y_0=0 ellps=WGS84`
    pub const DLTM: ProjectionConfig = ProjectionConfig::new(Ellipsoid::WGS84)
        .with_origin(0., 55.333_333_333_333_3)
        .with_scale(1.)
        .with_false_origin(500_000., 0.);

    /// Origin at the intersection of the equator and the Greenwich meridian,
    /// unit scale, and no false origin.
    #[must_use]
    pub const fn new(ellipsoid: Ellipsoid) -> ProjectionConfig {
        ProjectionConfig {
            ellipsoid,
            lat_0: 0.,
            lon_0: 0.,
            k_0: 1.,
            x_0: 0.,
            y_0: 0.,
        }
    }

    #[must_use]
    pub const fn with_ellipsoid(self, ellipsoid: Ellipsoid) -> ProjectionConfig {
        ProjectionConfig { ellipsoid, ..self }
    }

    /// Latitude of origin and central meridian, in degrees
    #[must_use]
    pub const fn with_origin(self, lat_0: f64, lon_0: f64) -> ProjectionConfig {
        ProjectionConfig {
            lat_0,
            lon_0,
            ..self
        }
    }

    /// Scale factor along the central meridian
    #[must_use]
    pub const fn with_scale(self, k_0: f64) -> ProjectionConfig {
        ProjectionConfig { k_0, ..self }
    }

    /// False easting and false northing, in meters
    #[must_use]
    pub const fn with_false_origin(self, x_0: f64, y_0: f64) -> ProjectionConfig {
        ProjectionConfig { x_0, y_0, ..self }
    }

    /// Universal Transverse Mercator, zone 1..=60, on GRS80
    pub fn utm(zone: usize, south: bool) -> Result<ProjectionConfig, Error> {
        if !(1..61).contains(&zone) {
            error!("UTM: {zone}. Must be an integer in the interval 1..60");
            return Err(Error::BadParam(
                "zone".to_string(),
                format!("{zone} is not in the interval 1..60"),
            ));
        }
        let y_0 = if south { 10_000_000. } else { 0. };
        Ok(ProjectionConfig::default()
            .with_origin(0., -183. + 6. * zone as f64)
            .with_scale(0.9996)
            .with_false_origin(500_000., y_0))
    }

    /// Reject configurations the projection cannot handle
    pub fn validate(&self) -> Result<(), Error> {
        self.ellipsoid.validate()?;
        let checks = [
            ("lat_0", self.lat_0, self.lat_0.abs() <= 90.),
            ("lon_0", self.lon_0, self.lon_0.abs() <= 180.),
            ("k_0", self.k_0, self.k_0 > 0. && self.k_0.is_finite()),
            ("x_0", self.x_0, self.x_0.is_finite()),
            ("y_0", self.y_0, self.y_0.is_finite()),
        ];
        for (key, value, ok) in checks {
            if !ok {
                error!("Bad projection parameter {key}={value}");
                return Err(Error::BadParam(key.to_string(), value.to_string()));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn ellipsoid(&self) -> Ellipsoid {
        self.ellipsoid
    }

    #[must_use]
    pub fn lat_0(&self) -> f64 {
        self.lat_0
    }

    #[must_use]
    pub fn lon_0(&self) -> f64 {
        self.lon_0
    }

    #[must_use]
    pub fn k_0(&self) -> f64 {
        self.k_0
    }

    #[must_use]
    pub fn x_0(&self) -> f64 {
        self.x_0
    }

    #[must_use]
    pub fn y_0(&self) -> f64 {
        self.y_0
    }
}

static DLTM: Lazy<TransverseMercator> =
    Lazy::new(|| TransverseMercator::precomputed(ProjectionConfig::DLTM));

/// The process wide, lazily instantiated, Dubai Local Transverse Mercator projection
#[must_use]
pub fn dltm() -> &'static TransverseMercator {
    &DLTM
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dltm_parameters() {
        let config = ProjectionConfig::DLTM;
        assert!(config.validate().is_ok());
        assert_eq!(config.ellipsoid(), Ellipsoid::WGS84);
        assert_eq!(config.lat_0(), 0.);
        assert_eq!(config.lon_0(), 55.3333333333333);
        assert_eq!(config.k_0(), 1.);
        assert_eq!(config.x_0(), 500_000.);
        assert_eq!(config.y_0(), 0.);
        assert_eq!(dltm().config(), &config);
    }

    #[test]
    fn utm() -> Result<(), Error> {
        let config = ProjectionConfig::utm(32, false)?;
        assert_eq!(config.lon_0(), 9.);
        assert_eq!(config.k_0(), 0.9996);
        assert_eq!(config.y_0(), 0.);
        assert_eq!(ProjectionConfig::utm(32, true)?.y_0(), 10_000_000.);

        assert!(matches!(ProjectionConfig::utm(0, false), Err(Error::BadParam(..))));
        assert!(matches!(ProjectionConfig::utm(61, true), Err(Error::BadParam(..))));
        Ok(())
    }

    #[test]
    fn validation() {
        let base = ProjectionConfig::DLTM;
        assert!(base.with_scale(0.).validate().is_err());
        assert!(base.with_scale(f64::NAN).validate().is_err());
        assert!(base.with_origin(90.5, 0.).validate().is_err());
        assert!(base.with_origin(0., -181.).validate().is_err());
        assert!(base.with_origin(f64::NAN, 0.).validate().is_err());
        assert!(base.with_false_origin(f64::INFINITY, 0.).validate().is_err());
        assert!(base
            .with_ellipsoid(Ellipsoid::new(6_378_137.0, 1.5))
            .validate()
            .is_err());

        let Err(Error::BadParam(key, _)) = base.with_scale(-1.).validate() else {
            panic!("Expected a BadParam error");
        };
        assert_eq!(key, "k_0");
    }
}
