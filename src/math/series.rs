/// The order of the Fourier series used for the auxiliary latitudes
/// and for the Krüger series of the transverse Mercator
pub const POLYNOMIAL_ORDER: usize = 6;

/// Two upper triangular matrices of polynomial coefficients in the third
/// flattening, *n*, one for each direction of a series expansion.
/// Row *i* holds the coefficients of *n¹ ... n⁶* for the *(i+1)*'th
/// Fourier coefficient.
#[derive(Clone, Copy, Debug, Default)]
pub struct PolynomialCoefficients {
    pub fwd: [[f64; POLYNOMIAL_ORDER]; POLYNOMIAL_ORDER],
    pub inv: [[f64; POLYNOMIAL_ORDER]; POLYNOMIAL_ORDER],
}

/// Fourier coefficients, evaluated for a specific ellipsoid
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FourierCoefficients {
    pub fwd: [f64; POLYNOMIAL_ORDER],
    pub inv: [f64; POLYNOMIAL_ORDER],
}

// --- Taylor series polynomial evaluation ----

pub mod taylor {
    use super::FourierCoefficients;
    use super::PolynomialCoefficients;
    use super::POLYNOMIAL_ORDER;

    /// Compute Fourier coefficients by evaluating their corresponding
    /// Taylor polynomials in `arg` (typically the third flattening)
    #[must_use]
    pub fn fourier_coefficients(
        arg: f64,
        coefficients: &PolynomialCoefficients,
    ) -> FourierCoefficients {
        let mut result = FourierCoefficients::default();
        for i in 0..POLYNOMIAL_ORDER {
            result.fwd[i] = arg * horner(arg, &coefficients.fwd[i]);
            result.inv[i] = arg * horner(arg, &coefficients.inv[i]);
        }
        result
    }

    /// Evaluate Σ cᵢ · xⁱ using Horner's scheme
    #[must_use]
    pub fn horner(arg: f64, coefficients: &[f64]) -> f64 {
        let mut coefficients = coefficients.iter().rev();
        let Some(highest) = coefficients.next() else {
            return 0.;
        };
        coefficients.fold(*highest, |value, c| value.mul_add(arg, *c))
    }
}

// --- Fourier series summation using Clenshaw's recurrence ---

pub mod fourier {

    /// Evaluate Σ cᵢ sin( i · arg ), for i ∈ {order, ... , 1}, using Clenshaw summation
    #[must_use]
    pub fn sin(arg: f64, coefficients: &[f64]) -> f64 {
        let (sin_arg, cos_arg) = arg.sin_cos();
        let x = 2.0 * cos_arg;
        let mut c0 = 0.0;
        let mut c1 = 0.0;

        for c in coefficients.iter().rev() {
            (c1, c0) = (c0, x.mul_add(c0, c - c1));
        }
        sin_arg * c0
    }

    /// Evaluate Σ cᵢ Sin( i · arg ), for i ∈ {order, ... , 1}, using Clenshaw summation,
    /// i.e. a series of complex sines with real coefficients. The complex argument
    /// is given as `[real, imaginary]`, and so is the result.
    #[allow(unused_assignments)] // For symmetric initialization of hr2, hi2
    #[must_use]
    pub fn complex_sin(arg: [f64; 2], coefficients: &[f64]) -> [f64; 2] {
        let (sin_r, cos_r) = arg[0].sin_cos();
        let sinh_i = arg[1].sinh();
        let cosh_i = arg[1].cosh();
        let r = 2. * cos_r * cosh_i;
        let i = -2. * sin_r * sinh_i;
        let mut coefficients = coefficients.iter().rev();

        // The empty series sums to 0
        let Some(c) = coefficients.next() else {
            return [0.; 2];
        };

        let (mut hr2, mut hr1, mut hr) = (0., 0., *c);
        let (mut hi2, mut hi1, mut hi) = (0., 0., 0.);

        for c in coefficients {
            (hr2, hi2, hr1, hi1) = (hr1, hi1, hr, hi);
            hr = -hr2 + r * hr1 - i * hi1 + c;
            hi = -hi2 + i * hr1 + r * hi1;
        }

        let r = sin_r * cosh_i;
        let i = cos_r * sinh_i;
        [r * hr - i * hi, r * hi + i * hr]
    }
}

// ----- Tests ---------------------------------------------------------------------
