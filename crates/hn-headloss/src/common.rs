//! Common utilities for head-loss calculations.

use crate::error::{HeadLossError, HeadLossResult};
use hn_core::numeric::ensure_finite;

/// Flows below this magnitude (m³/s) are treated as zero.
pub const EPSILON_FLOW: f64 = 1e-9;

/// Ensure a value is finite, returning HeadLossError if not.
pub fn check_finite(value: f64, what: &'static str) -> HeadLossResult<()> {
    ensure_finite(value, what).map_err(|_| HeadLossError::NonPhysical { what })?;
    Ok(())
}

/// Cross-sectional area of a circular pipe (m²); 0 for non-positive diameters.
#[inline]
pub fn circle_area(diameter: f64) -> f64 {
    if diameter <= 0.0 {
        0.0
    } else {
        std::f64::consts::PI * diameter * diameter / 4.0
    }
}

/// Velocity head v²/2g (m).
#[inline]
pub fn velocity_head(velocity: f64, g: f64) -> f64 {
    velocity * velocity / (2.0 * g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_area() {
        assert!((circle_area(2.0) - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(circle_area(0.0), 0.0);
        assert_eq!(circle_area(-1.0), 0.0);
    }

    #[test]
    fn test_velocity_head() {
        assert!((velocity_head(1.0, 9.81) - 1.0 / 19.62).abs() < 1e-12);
    }

    #[test]
    fn test_check_finite() {
        assert!(check_finite(1.0, "test").is_ok());
        assert!(check_finite(f64::INFINITY, "test").is_err());
        assert!(check_finite(f64::NAN, "test").is_err());
    }
}
