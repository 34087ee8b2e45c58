use crate::Error;
use log::trace;

/// The Gudermannian function (often written as gd), is the work horse for computations involving
/// the isometric latitude (i.e. the vertical coordinate of the Mercator projection)
pub mod gudermannian {
    #[must_use]
    pub fn fwd(arg: f64) -> f64 {
        arg.sinh().atan()
    }

    #[must_use]
    pub fn inv(arg: f64) -> f64 {
        arg.tan().asinh()
    }
}

/// The maximum number of Newton steps taken by [sinhpsi_to_tanphi].
/// In practice, 1 or 2 steps suffice.
pub const MAX_NEWTON_ITERATIONS: usize = 5;

/// Geographic to conformal latitude, in the form tan 𝜙 → sinh 𝜓 = tan 𝜒,
/// where 𝜓 is the isometric latitude. Closed form, following
/// [Karney, 2011](crate::Bibliography::Kar11) eq. (7).
#[must_use]
pub fn tanphi_to_sinhpsi(tau: f64, e: f64) -> f64 {
    let tau1 = 1_f64.hypot(tau);
    let sig = (e * (e * tau / tau1).atanh()).sinh();
    1_f64.hypot(sig) * tau - sig * tau1
}

/// The inverse of [tanphi_to_sinhpsi]: sinh 𝜓 → tan 𝜙, by Newton iteration.
/// Follows [Karney, 2011](crate::Bibliography::Kar11), and the PROJ
/// implementation in proj/src/phi2.cpp, but reports failure to converge
/// within [MAX_NEWTON_ITERATIONS] steps, rather than returning a NaN.
pub fn sinhpsi_to_tanphi(taup: f64, e: f64) -> Result<f64, Error> {
    let rooteps: f64 = f64::EPSILON.sqrt();
    // the criterion for Newton's method
    let tol: f64 = rooteps / 10.;
    // threshold for large arg limit exact
    let tmax: f64 = 2. / rooteps;

    if !taup.is_finite() {
        return Err(Error::ConvergenceFailure(format!(
            "non-finite isometric latitude: {taup}"
        )));
    }

    let e2m = 1. - e * e;
    let stol = tol * taup.abs().max(1.0);

    // The initial guess.  70 corresponds to chi = 89.18 deg
    let mut tau = if taup.abs() > 70. {
        taup * (e * e.atanh()).exp()
    } else {
        taup / e2m
    };

    if tau.abs() >= tmax {
        return Ok(tau);
    }

    for i in 0..MAX_NEWTON_ITERATIONS {
        let tau1 = 1_f64.hypot(tau);
        let taupa = tanphi_to_sinhpsi(tau, e);
        let dtau = (taup - taupa) * (1. + e2m * (tau * tau)) / (e2m * tau1 * 1_f64.hypot(taupa));
        tau += dtau;

        if tau.is_nan() {
            break;
        }
        if dtau.abs() < stol {
            trace!("sinhpsi_to_tanphi: converged after {} steps", i + 1);
            return Ok(tau);
        }
    }

    Err(Error::ConvergenceFailure(format!(
        "footpoint latitude for sinh(psi) = {taup} not found in {MAX_NEWTON_ITERATIONS} steps"
    )))
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gudermannian() {
        let x = 0.5_f64;
        assert!((gudermannian::inv(gudermannian::fwd(x)) - x).abs() < 1e-15);
        assert_eq!(gudermannian::fwd(0.), 0.);
    }

    #[test]
    fn isometric_roundtrip() -> Result<(), Error> {
        // WGS84 eccentricity
        let e = 0.081_819_190_842_621_49;
        for lat in [-89.9_f64, -60., -25., 0., 10., 25., 45., 80., 89.99] {
            let tau = lat.to_radians().tan();
            let taup = tanphi_to_sinhpsi(tau, e);
            let back = sinhpsi_to_tanphi(taup, e)?;
            assert!((back.atan() - tau.atan()).abs() < 1e-14);
        }

        // On the sphere, the conformal latitude is the geographic latitude
        assert!((tanphi_to_sinhpsi(1.5, 0.) - 1.5).abs() < 1e-15);
        Ok(())
    }

    #[test]
    fn pathological_input() {
        let e = 0.081_819_190_842_621_49;
        assert!(matches!(
            sinhpsi_to_tanphi(f64::NAN, e),
            Err(Error::ConvergenceFailure(_))
        ));
        assert!(matches!(
            sinhpsi_to_tanphi(f64::INFINITY, e),
            Err(Error::ConvergenceFailure(_))
        ));
        // Very large but finite values are handled by the large-argument limit
        assert!(sinhpsi_to_tanphi(1e12, e).is_ok());
    }
}
