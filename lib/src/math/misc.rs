use crate::utils::Float;

/// Sign of `x` as -1, 0 or 1. Unlike [`f64::signum`] zero maps to zero (keeping its own sign bit) and NaN stays NaN.
pub fn sign(x: Float) -> Float {
    if x > 0. {
        1.
    } else if x < 0. {
        -1.
    } else {
        x
    }
}
