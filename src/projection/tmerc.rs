//! Transverse Mercator, following [Engsager & Poder, 2007](crate::Bibliography::Eng07).
//! The series is Krüger's [(1912)](crate::Bibliography::Kru12), in the
//! 6th order form of [Deakin et al., 2012](crate::Bibliography::Dea12).
use super::ProjectionConfig;
use crate::math::angular::normalize_symmetric;
use crate::math::{fourier, fourier_coefficients, gudermannian};
use crate::math::{FourierCoefficients, PolynomialCoefficients};
use crate::{Error, GeodeticCoordinate, ProjectedCoordinate};
use log::debug;
use std::f64::consts::PI;

/// Beyond this normalized distance from the central meridian, the Krüger series
/// no longer converges (corresponds to roughly 4000 km on the equator)
const ETA_MAX: f64 = 2.623395162778;

/// Normalized northings this far beyond the antipode of the origin are
/// still accepted as rounding noise (roughly half a millimeter)
const POLE_TOLERANCE: f64 = 1e-10;

/// An instantiated transverse Mercator projection, with the
/// computationally heavy prerequisites precomputed from its
/// [`ProjectionConfig`]. Immutable, hence freely shareable between threads.
#[derive(Clone, Copy, Debug)]
pub struct TransverseMercator {
    config: ProjectionConfig,
    /// Central meridian, in radians
    lon_0: f64,
    /// The scaled spherical Earth radius - Qn in Engsager's implementation
    qs: f64,
    /// Origin northing minus true northing at the origin latitude
    zb: f64,
    /// Krüger series coefficients
    tm: FourierCoefficients,
}

impl TransverseMercator {
    pub fn new(config: ProjectionConfig) -> Result<TransverseMercator, Error> {
        config.validate()?;
        Ok(TransverseMercator::precomputed(config))
    }

    // Pre-compute the computationally heavy prerequisites, to get better
    // amortization over the full projection lifetime. Expects a valid config.
    pub(super) fn precomputed(config: ProjectionConfig) -> TransverseMercator {
        let ellps = config.ellipsoid();
        let n = ellps.third_flattening();
        let qs = config.k_0() * ellps.semimajor_axis() * ellps.normalized_meridian_arc_unit();

        // The Fourier series for the transverse mercator coordinates,
        // from [Engsager & Poder, 2007](crate::Bibliography::Eng07),
        // with extensions to 6th order by [Karney, 2011](crate::Bibliography::Kar11).
        let tm = fourier_coefficients(n, &TRANSVERSE_MERCATOR);

        // Conformal latitude value of the latitude-of-origin - Z in Engsager's notation
        let z = ellps.latitude_geographic_to_conformal(config.lat_0().to_radians());
        let zb = config.y_0() - qs * (z + fourier::sin(2. * z, &tm.fwd));

        TransverseMercator {
            config,
            lon_0: config.lon_0().to_radians(),
            qs,
            zb,
            tm,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    // ----- F O R W A R D -----------------------------------------------------------------

    /// Geographical coordinates (degrees) to grid coordinates (meters)
    pub fn forward(&self, latitude: f64, longitude: f64) -> Result<ProjectedCoordinate, Error> {
        let geo = GeodeticCoordinate::geo(latitude, longitude);
        if !geo.is_within_domain() {
            return Err(Error::InvalidInput(format!(
                "latitude/longitude ({latitude}, {longitude}) outside [-90, 90] x [-180, 180]"
            )));
        }
        let ellps = self.config.ellipsoid();

        // --- 1. Geographical -> Conformal latitude, rotated longitude

        let lat = ellps.latitude_geographic_to_conformal(latitude.to_radians());
        let mut lon = longitude.to_radians() - self.lon_0;
        if lon.abs() > PI {
            lon = normalize_symmetric(lon);
        }

        // --- 2. Conformal LAT, LNG -> complex spherical LAT

        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();
        let cos_lat_lon = cos_lat * cos_lon;
        let mut xi = sin_lat.atan2(cos_lat_lon);
        let mut eta = (sin_lon * cos_lat / sin_lat.hypot(cos_lat_lon)).asinh();

        // --- 3. Complex spherical N, E -> ellipsoidal normalized N, E

        let dc = fourier::complex_sin([2. * xi, 2. * eta], &self.tm.fwd);
        xi += dc[0];
        eta += dc[1];

        // Don't wanna play if we're too far from the center meridian
        if !(eta.abs() <= ETA_MAX && xi.is_finite()) {
            debug!("tmerc: ({latitude}, {longitude}) too far from the central meridian");
            return Err(Error::ConvergenceFailure(format!(
                "({latitude}, {longitude}) is too far from the central meridian"
            )));
        }

        // --- 4. ellipsoidal normalized N, E -> metric N, E

        Ok(ProjectedCoordinate::raw(
            self.qs * eta + self.config.x_0(),
            self.qs * xi + self.zb,
        ))
    }

    // ----- I N V E R S E -----------------------------------------------------------------

    /// Grid coordinates (meters) to geographical coordinates (degrees)
    pub fn inverse(&self, easting: f64, northing: f64) -> Result<GeodeticCoordinate, Error> {
        if !(easting.is_finite() && northing.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "non-finite easting/northing ({easting}, {northing})"
            )));
        }

        // --- 1. Normalize N, E

        let mut eta = (easting - self.config.x_0()) / self.qs;
        let mut xi = (northing - self.zb) / self.qs;

        if eta.abs() > ETA_MAX {
            debug!("tmerc: easting {easting} too far from the central meridian");
            return Err(Error::ConvergenceFailure(format!(
                "easting {easting} is too far from the central meridian"
            )));
        }
        if xi.abs() > PI + POLE_TOLERANCE {
            debug!("tmerc: northing {northing} beyond the range of the projection");
            return Err(Error::ConvergenceFailure(format!(
                "northing {northing} has no footpoint on the ellipsoid"
            )));
        }

        // --- 2. Normalized N, E -> complex spherical LAT, LNG

        let dc = fourier::complex_sin([2. * xi, 2. * eta], &self.tm.inv);
        xi += dc[0];
        eta += dc[1];
        eta = gudermannian::fwd(eta);

        // --- 3. Complex spherical LAT -> Gaussian LAT, LNG

        let (sin_xi, cos_xi) = xi.sin_cos();
        let (sin_eta, cos_eta) = eta.sin_cos();
        let cos_xi_eta = cos_xi * cos_eta;
        let lon = sin_eta.atan2(cos_xi_eta);
        let lat = (sin_xi * cos_eta).atan2(sin_eta.hypot(cos_xi_eta));

        // --- 4. Gaussian LAT, LNG -> ellipsoidal LAT, LNG

        let lat = self
            .config
            .ellipsoid()
            .latitude_conformal_to_geographic(lat)
            .map_err(|e| {
                debug!("tmerc: ({easting}, {northing}): {e}");
                e
            })?;
        let mut lon = lon + self.lon_0;
        if lon.abs() > PI {
            lon = normalize_symmetric(lon);
        }

        Ok(GeodeticCoordinate::geo(lat.to_degrees(), lon.to_degrees()))
    }
}

// ----- A N C I L L A R Y   F U N C T I O N S -----------------------------------------

#[rustfmt::skip]
const TRANSVERSE_MERCATOR: PolynomialCoefficients = PolynomialCoefficients {
    // Geodetic to TM. [Engsager & Poder, 2007](crate::Bibliography::Eng07)
    fwd: [
        [1./2.,   -2./3.,   5./16.,   41./180.,   -127./288.0 ,   7891./37800.],
        [0., 13./48.,   -3./5.,   557./1440.,   281./630.,   -1983433./1935360.],
        [0., 0., 61./240.,  -103./140.,   15061./26880.,   167603./181440.],
        [0., 0., 0., 49561./161280.,   -179./168.,   6601661./7257600.],
        [0., 0., 0., 0., 34729./80640.,   -3418889./1995840.],
        [0., 0., 0., 0., 0., 212378941./319334400.]
    ],

    // TM to Geodetic. [Engsager & Poder, 2007](crate::Bibliography::Eng07)
    inv: [
        [-1./2.,   2./3.,   -37./96.,   1./360.,   81./512.,   -96199./604800.],
        [0., -1./48.,   -1./15.,   437./1440.,   -46./105.,   1118711./3870720.],
        [0., 0., -17./480.,   37./840.,   209./4480.,   -5569./90720.],
        [0., 0., 0., -4397./161280.,   11./504.,   830251./7257600.],
        [0., 0., 0., 0., -4583./161280.,   108847./3991680.],
        [0., 0., 0., 0., 0., -20648693./638668800.]
    ]
};

// ----- T E S T S ---------------------------------------------------------------------
