use super::*;
use crate::math::{fourier, horner};
use crate::Direction;
use std::f64::consts::FRAC_PI_2;

// ----- Meridian geometry -----------------------------------------------------
impl Ellipsoid {
    /// The Normalized Meridian Arc Unit, *Qn*, is the mean length of one radian
    ///  of the meridian. "Normalized", because we measure it in units of the
    /// semimajor axis, *a*.
    ///
    /// König und Weise p.50 (96), p.19 (38b), p.5 (2), here using the extended
    /// version from [Karney 2010](crate::Bibliography::Kar10) eq. (29)
    #[must_use]
    pub fn normalized_meridian_arc_unit(&self) -> f64 {
        let n = self.third_flattening();
        horner(n * n, &constants::MERIDIAN_ARC_COEFFICIENTS) / (1. + n)
    }

    /// The Meridian Quadrant, *Qm*, is the distance from the equator to one of the poles.
    /// i.e. *π/2 · Qn · a*, where *Qn* is the
    /// [normalized meridian arc unit](Ellipsoid::normalized_meridian_arc_unit)
    #[must_use]
    pub fn meridian_quadrant(&self) -> f64 {
        self.a * FRAC_PI_2 * self.normalized_meridian_arc_unit()
    }

    /// The distance, *M*, along a meridian from the equator to the given
    /// latitude (`Fwd`), or the latitude at a given distance from the
    /// equator (`Inv`). Angles in radians, distances in meters.
    #[must_use]
    pub fn meridional_distance(&self, arg: f64, direction: Direction) -> f64 {
        let rectifying = self.coefficients_for_rectifying_latitude_computations();
        let scale = self.a * self.normalized_meridian_arc_unit();
        if direction == Direction::Fwd {
            return scale * (arg + fourier::sin(2. * arg, &rectifying.fwd));
        }
        let mu = arg / scale;
        mu + fourier::sin(2. * mu, &rectifying.inv)
    }
}

// ----- Tests ---------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction::Fwd;
    use crate::Direction::Inv;

    #[test]
    fn meridional_distance() -> Result<(), Error> {
        let ellps = Ellipsoid::named("GRS80")?;

        assert!((ellps.normalized_meridian_arc_unit() - 0.9983242984230415).abs() < 1e-13);
        assert!((4.0 * ellps.meridian_quadrant() - 40007862.9169218).abs() < 1e-7);

        // Internal consistency: at 90°, the meridional distance
        // is identical to the meridian quadrant.
        assert!((ellps.meridional_distance(FRAC_PI_2, Fwd) - ellps.meridian_quadrant()).abs() < 1e-8);
        assert!((ellps.meridional_distance(ellps.meridian_quadrant(), Inv) - FRAC_PI_2).abs() < 1e-15);

        // Roundtrip replication accuracy
        for i in 0..10 {
            let b = (10. * i as f64).to_radians();
            assert!((ellps.meridional_distance(ellps.meridional_distance(b, Fwd), Inv) - b).abs() < 5e-11);
            let d = 1_000_000. * i as f64;
            assert!((ellps.meridional_distance(ellps.meridional_distance(d, Inv), Fwd) - d).abs() < 6e-5);
        }

        // Meridional distances for angles 0, 10, 20, 30 ... 90, obtained from Charles Karney's
        // online geodesic solver, https://geographiclib.sourceforge.io/cgi-bin/GeodSolve
        let s = [
            0_000_000.000000000,
            1_105_854.833198446,
            2_212_366.254102976,
            3_320_113.397845014,
            4_429_529.030236580,
            5_540_847.041560960,
            6_654_072.819367435,
            7_768_980.727655508,
            8_885_139.871836751,
            10_001_965.729230457,
        ];

        for (i, distance) in s.iter().enumerate() {
            let angle = (10.0 * i as f64).to_radians();
            assert!((ellps.meridional_distance(angle, Fwd) - distance).abs() < 6e-6);
            assert!((ellps.meridional_distance(*distance, Inv) - angle).abs() < 6e-11);
        }
        Ok(())
    }

    #[test]
    fn against_numerical_integration() {
        // Midpoint-rule integration of the meridian radius of curvature
        let ellps = Ellipsoid::WGS84;
        let lat = 25_f64.to_radians();
        let steps = 20_000;
        let h = lat / steps as f64;
        let integral: f64 = (0..steps)
            .map(|i| ellps.meridian_radius_of_curvature((i as f64 + 0.5) * h) * h)
            .sum();
        assert!((ellps.meridional_distance(lat, Direction::Fwd) - integral).abs() < 1e-3);
        assert!((integral - 2_766_054.169).abs() < 1e-2);
    }
}
