//! The two coordinate types handled by the projection: geographical
//! (latitude, longitude in degrees) and projected (easting, northing in meters).

/// Latitude and longitude, in degrees
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct GeodeticCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Easting and northing, in meters
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct ProjectedCoordinate {
    pub easting: f64,
    pub northing: f64,
}

// ----- C O N S T R U C T O R S ---------------------------------------------

impl GeodeticCoordinate {
    /// A `GeodeticCoordinate` from latitude/longitude, in that order
    #[must_use]
    pub fn geo(latitude: f64, longitude: f64) -> GeodeticCoordinate {
        GeodeticCoordinate {
            latitude,
            longitude,
        }
    }

    /// A `GeodeticCoordinate` from longitude/latitude, in that order
    #[must_use]
    pub fn gis(longitude: f64, latitude: f64) -> GeodeticCoordinate {
        GeodeticCoordinate::geo(latitude, longitude)
    }

    /// Latitude within [-90, 90] and longitude within [-180, 180]
    #[must_use]
    pub fn is_within_domain(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Largest absolute difference of the angular components, in degrees
    #[must_use]
    pub fn max_deviation(&self, other: &GeodeticCoordinate) -> f64 {
        (self.latitude - other.latitude)
            .abs()
            .max((self.longitude - other.longitude).abs())
    }
}

impl ProjectedCoordinate {
    #[must_use]
    pub fn raw(easting: f64, northing: f64) -> ProjectedCoordinate {
        ProjectedCoordinate { easting, northing }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.easting.is_finite() && self.northing.is_finite()
    }

    /// Euclidean distance in the plane
    #[must_use]
    pub fn hypot2(&self, other: &ProjectedCoordinate) -> f64 {
        (self.easting - other.easting).hypot(self.northing - other.northing)
    }
}

impl From<(f64, f64)> for ProjectedCoordinate {
    fn from(pair: (f64, f64)) -> Self {
        ProjectedCoordinate::raw(pair.0, pair.1)
    }
}

impl From<ProjectedCoordinate> for (f64, f64) {
    fn from(coord: ProjectedCoordinate) -> Self {
        (coord.easting, coord.northing)
    }
}

impl From<GeodeticCoordinate> for (f64, f64) {
    fn from(coord: GeodeticCoordinate) -> Self {
        (coord.latitude, coord.longitude)
    }
}

// ----- T E S T S ---------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geodetic() {
        let geo = GeodeticCoordinate::geo(25., 55.);
        let gis = GeodeticCoordinate::gis(55., 25.);
        assert_eq!(geo, gis);
        assert!(geo.is_within_domain());
        assert!(!GeodeticCoordinate::geo(91., 0.).is_within_domain());
        assert!(!GeodeticCoordinate::geo(0., -180.5).is_within_domain());
        assert!(!GeodeticCoordinate::geo(f64::NAN, 0.).is_within_domain());
        assert_eq!(geo.max_deviation(&GeodeticCoordinate::geo(25.5, 54.)), 1.);
        let (lat, lon) = geo.into();
        assert_eq!((lat, lon), (25., 55.));
    }

    #[test]
    fn projected() {
        let a = ProjectedCoordinate::raw(500_000., 2_766_054.);
        let b: ProjectedCoordinate = (500_003., 2_766_058.).into();
        assert_eq!(a.hypot2(&b), 5.);
        assert!(a.is_finite());
        assert!(!ProjectedCoordinate::raw(f64::INFINITY, 0.).is_finite());
        assert_eq!(<(f64, f64)>::from(a), (500_000., 2_766_054.));
    }
}
