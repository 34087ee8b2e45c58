mod constants;
mod latitudes;
mod meridians;

use crate::Error;
use log::error;

/// Representation of a biaxial ellipsoid of revolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    f: f64,
}

/// GRS80 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        Ellipsoid::GRS80
    }
}

impl Ellipsoid {
    pub const GRS80: Ellipsoid = Ellipsoid::new(6_378_137.0, 1. / 298.257_222_100_882_7);
    pub const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 1. / 298.257_223_563);

    /// User defined ellipsoid
    #[must_use]
    pub const fn new(semimajor_axis: f64, flattening: f64) -> Ellipsoid {
        Ellipsoid {
            a: semimajor_axis,
            f: flattening,
        }
    }

    /// One of the built in ellipsoids
    pub fn named(name: &str) -> Result<Ellipsoid, Error> {
        let ellps = match name {
            "GRS80" => Ellipsoid::GRS80,
            "WGS84" => Ellipsoid::WGS84,
            "intl" => Ellipsoid::new(6_378_388.0, 1. / 297.0),
            "Helmert" => Ellipsoid::new(6_378_200.0, 1. / 298.3),
            "clrk66" => Ellipsoid::new(6_378_206.4, 1. / 294.978_698_2),
            "clrk80" => Ellipsoid::new(6_378_249.145, 1. / 293.465),
            "bessel" => Ellipsoid::new(6_377_397.155, 1. / 299.152_812_8),
            "airy" => Ellipsoid::new(6_377_563.396, 1. / 299.324_964_6),
            _ => {
                error!("Unknown ellipsoid: {name}");
                return Err(Error::NotFound(format!("ellipsoid {name}")));
            }
        };
        Ok(ellps)
    }

    /// Check that the ellipsoid is usable for projection purposes:
    /// a finite, positive size and a flattening in [0, 1)
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.a.is_finite() && self.a > 0.) {
            return Err(Error::BadParam("a".to_string(), self.a.to_string()));
        }
        if !(0. ..1.).contains(&self.f) {
            return Err(Error::BadParam("f".to_string(), self.f.to_string()));
        }
        Ok(())
    }

    // ----- Eccentricities --------------------------------------------------------

    /// The squared eccentricity *e² = (a² - b²) / a²*.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.f * (2_f64 - self.f)
    }

    /// The eccentricity *e*
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_squared().sqrt()
    }

    // ----- Axes ------------------------------------------------------------------

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b*
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    // ----- Flattenings -----------------------------------------------------------

    /// The flattening, *f = (a - b)/a*
    #[must_use]
    pub fn flattening(&self) -> f64 {
        self.f
    }

    /// The third flattening, *n = (a - b) / (a + b) = f / (2 - f)*
    #[must_use]
    pub fn third_flattening(&self) -> f64 {
        self.f / (2.0 - self.f)
    }

    // ----- Curvatures ------------------------------------------------------------

    /// The meridian radius of curvature, *M*
    #[must_use]
    pub fn meridian_radius_of_curvature(&self, latitude: f64) -> f64 {
        if self.f == 0.0 {
            return self.a;
        }
        let num = self.a * (1.0 - self.eccentricity_squared());
        let denom = (1.0 - latitude.sin().powi(2) * self.eccentricity_squared()).powf(1.5);
        num / denom
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named() -> Result<(), Error> {
        let ellps = Ellipsoid::named("intl")?;
        assert_eq!(ellps.flattening(), 1. / 297.);

        let ellps = Ellipsoid::named("GRS80")?;
        assert_eq!(ellps.semimajor_axis(), 6378137.0);
        assert_eq!(ellps.flattening(), 1. / 298.25722_21008_82711_24316);
        assert_eq!(ellps, Ellipsoid::default());

        let ellps = Ellipsoid::named("WGS84")?;
        assert_eq!(ellps.flattening(), 1. / 298.257223563);

        assert!(matches!(Ellipsoid::named("krass"), Err(Error::NotFound(_))));
        Ok(())
    }

    #[test]
    fn shape_and_size() -> Result<(), Error> {
        let ellps = Ellipsoid::named("GRS80")?;
        assert!((ellps.eccentricity() - 0.081819191).abs() < 1.0e-10);
        assert!((ellps.eccentricity_squared() - 0.00669_43800_22903_41574).abs() < 1.0e-10);
        assert!((ellps.semiminor_axis() - 6_356_752.31414_0347).abs() < 1e-9);
        assert!((ellps.third_flattening() - 0.001_679_220_394_629_406).abs() < 1e-15);
        Ok(())
    }

    #[test]
    fn validation() {
        assert!(Ellipsoid::WGS84.validate().is_ok());
        assert!(Ellipsoid::new(6_378_137.0, 0.).validate().is_ok());
        assert!(Ellipsoid::new(-1., 0.).validate().is_err());
        assert!(Ellipsoid::new(f64::NAN, 0.).validate().is_err());
        assert!(Ellipsoid::new(6_378_137.0, 1.).validate().is_err());
        assert!(Ellipsoid::new(6_378_137.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn curvatures() -> Result<(), Error> {
        let ellps = Ellipsoid::named("GRS80")?;
        // At the North Pole, the meridian radius of curvature is the polar radius
        let polar = ellps.semimajor_axis().powi(2) / ellps.semiminor_axis();
        assert!((ellps.meridian_radius_of_curvature(90_f64.to_radians()) - polar).abs() < 1e-6);
        assert!((ellps.meridian_radius_of_curvature(0.0) - 6_335_439.3271).abs() < 1.0e-4);
        Ok(())
    }
}
