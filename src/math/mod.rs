//! Miscellaneous math functions supporting the projection

/// Free functions used in more than one module of the crate.
pub mod ancillary;
pub use ancillary::gudermannian;

/// Free functions for handling angles.
pub mod angular;

/// Fourier- and Taylor series
pub mod series;
pub use series::fourier;
pub use series::taylor;

pub use series::taylor::fourier_coefficients;
pub use series::taylor::horner;
pub use series::FourierCoefficients;
pub use series::PolynomialCoefficients;
