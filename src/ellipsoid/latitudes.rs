use super::*;
use crate::math::ancillary::{sinhpsi_to_tanphi, tanphi_to_sinhpsi};
use crate::math::{fourier_coefficients, FourierCoefficients};

// ----- Latitudes -------------------------------------------------------------
impl Ellipsoid {
    // --- Rectifying latitude ---

    /// Obtain the Fourier coefficients for conversions between geographic
    /// and rectifying latitudes
    #[must_use]
    pub fn coefficients_for_rectifying_latitude_computations(&self) -> FourierCoefficients {
        fourier_coefficients(self.third_flattening(), &constants::RECTIFYING)
    }

    // --- Conformal latitude ---

    /// Geographic latitude, 𝜙, to conformal, 𝜒. Closed form,
    /// following [Karney, 2011](crate::Bibliography::Kar11) eq. (7).
    /// See also [Snyder, 1987](crate::Bibliography::Sny87), eq. (3-1).
    #[must_use]
    pub fn latitude_geographic_to_conformal(&self, geographic_latitude: f64) -> f64 {
        tanphi_to_sinhpsi(geographic_latitude.tan(), self.eccentricity()).atan()
    }

    /// Conformal latitude, 𝜒, to geographic, 𝜙, by Newton iteration.
    /// Fails with [Error::ConvergenceFailure] if the iteration does not settle.
    pub fn latitude_conformal_to_geographic(&self, conformal_latitude: f64) -> Result<f64, Error> {
        Ok(sinhpsi_to_tanphi(conformal_latitude.tan(), self.eccentricity())?.atan())
    }
}

// ----- Tests ---------------------------------------------------------------------
