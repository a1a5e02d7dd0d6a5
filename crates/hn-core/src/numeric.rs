//! Float helpers shared by the friction laws.

use crate::HnError;

pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, HnError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HnError::NonFinite { what, value: v })
    }
}

/// Sign of `v` as -1, 0 or +1 (`f64::signum` maps 0.0 to 1.0).
#[inline]
pub fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
