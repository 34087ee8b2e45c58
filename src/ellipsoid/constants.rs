// ----- Series coefficients for the meridian geometry and auxiliary latitudes ---------

use crate::math::PolynomialCoefficients;

/// Coefficients of the series in *n²* for the normalized meridian arc unit,
/// [Karney 2010](crate::Bibliography::Kar10) eq. (29)
pub(super) const MERIDIAN_ARC_COEFFICIENTS: [f64; 5] =
    [1., 1. / 4., 1. / 64., 1. / 256., 25. / 16384.];

/// Geographic latitude 𝜙 ↔ rectifying latitude 𝜇,
/// [Karney 2010](crate::Bibliography::Kar10) eqs. (35) and (36)
#[rustfmt::skip]
pub(super) const RECTIFYING: PolynomialCoefficients = PolynomialCoefficients {
    // Geographic to rectifying
    fwd: [
        [-3./2.,   0.,        9./16.,    0.,         -3./32.,      0.],
        [0.,       15./16.,   0.,        -15./32.,   0.,           135./2048.],
        [0.,       0.,        -35./48.,  0.,         105./256.,    0.],
        [0.,       0.,        0.,        315./512.,  0.,           -189./512.],
        [0.,       0.,        0.,        0.,         -693./1280.,  0.],
        [0.,       0.,        0.,        0.,         0.,           1001./2048.],
    ],

    // Rectifying to geographic
    inv: [
        [3./2.,    0.,        -27./32.,  0.,         269./512.,    0.],
        [0.,       21./16.,   0.,        -55./32.,   0.,           6759./4096.],
        [0.,       0.,        151./96.,  0.,         -417./128.,   0.],
        [0.,       0.,        0.,        1097./512., 0.,           -15543./2560.],
        [0.,       0.,        0.,        0.,         8011./2560.,  0.],
        [0.,       0.,        0.,        0.,         0.,           293393./61440.],
    ],
};
