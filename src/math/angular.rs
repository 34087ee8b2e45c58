use std::f64::consts::PI;

/// normalize arbitrary angles to [-π, π):
#[must_use]
pub fn normalize_symmetric(angle: f64) -> f64 {
    let angle = (angle + PI) % (2.0 * PI);
    angle - PI * angle.signum()
}

// ----- Tests ---------------------------------------------------------------------
