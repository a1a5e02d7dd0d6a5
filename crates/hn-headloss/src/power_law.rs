//! Generalized power law `h = K Q |Q|^(n-1)`.
//!
//! This is the form the Hardy Cross loop correction is written in. The
//! exponent `n` is a nominal value (2 by default) and need not match the
//! exponent of the pipe's own friction law.

/// Default nominal exponent for loop corrections.
pub const DEFAULT_EXPONENT: f64 = 2.0;

/// Signed loss `K q |q|^(n-1)`. Zero at zero flow for every exponent.
#[inline]
pub fn loss(k: f64, q: f64, n: f64) -> f64 {
    if q == 0.0 {
        return 0.0;
    }
    k * q * q.abs().powf(n - 1.0)
}

/// Derivative `n K |q|^(n-1)`.
///
/// Below `n = 1` the derivative is unbounded at zero flow; that case
/// reports 0 so callers fall back to a zero correction.
#[inline]
pub fn slope(k: f64, q: f64, n: f64) -> f64 {
    if q == 0.0 && n < 1.0 {
        return 0.0;
    }
    n * k * q.abs().powf(n - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadratic_case() {
        assert_eq!(loss(2.0, 3.0, 2.0), 18.0);
        assert_eq!(loss(2.0, -3.0, 2.0), -18.0);
        assert_eq!(slope(2.0, -3.0, 2.0), 12.0);
    }

    #[test]
    fn zero_flow() {
        assert_eq!(loss(5.0, 0.0, 2.0), 0.0);
        assert_eq!(slope(5.0, 0.0, 2.0), 0.0);
        assert_eq!(loss(5.0, 0.0, 1.852), 0.0);
    }

    #[test]
    fn linear_exponent_has_constant_slope() {
        assert_eq!(slope(4.0, 0.0, 1.0), 4.0);
        assert_eq!(slope(4.0, 10.0, 1.0), 4.0);
    }

    #[test]
    fn sub_linear_exponent_stays_finite_at_zero_flow() {
        assert_eq!(loss(5.0, 0.0, 0.5), 0.0);
        assert_eq!(loss(5.0, -0.0, 0.9), 0.0);
        assert_eq!(slope(5.0, 0.0, 0.5), 0.0);
        assert!(loss(5.0, 0.04, 0.5).is_finite());
        assert!((loss(5.0, -0.04, 0.5) + 1.0).abs() < 1e-12);
    }
}
