//! Cross-section velocity profiles for open channels and full pipes.

/// Open-channel velocity from the 1/7 power law.
///
/// `y` is clipped to `[y_bed, y_surface]`; a dry channel (non-positive or
/// non-finite depth) has zero velocity everywhere.
pub fn open_channel_velocity(y: f64, y_bed: f64, y_surface: f64, v_max: f64) -> f64 {
    let depth = y_surface - y_bed;
    if !depth.is_finite() || depth <= 0.0 {
        return 0.0;
    }
    let rel = (y.clamp(y_bed, y_surface) - y_bed) / depth;
    v_max * rel.powf(1.0 / 7.0)
}

/// Laminar (parabolic) velocity across a full pipe, zero at and beyond the wall.
pub fn closed_pipe_velocity(y: f64, y_bottom: f64, y_top: f64, v_max: f64) -> f64 {
    let radius = (y_top - y_bottom) / 2.0;
    let center = (y_top + y_bottom) / 2.0;
    let r = (y - center).abs();
    if r >= radius {
        return 0.0;
    }
    v_max * (1.0 - (r / radius).powi(2))
}

/// Sample a profile at `samples` evenly spaced heights between `lo` and `hi`.
///
/// Returns `(y, v)` pairs; fewer than two samples yields the single midpoint.
pub fn sample<F>(profile: F, lo: f64, hi: f64, samples: usize) -> Vec<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    if samples < 2 {
        let mid = 0.5 * (lo + hi);
        return vec![(mid, profile(mid))];
    }
    let step = (hi - lo) / (samples - 1) as f64;
    (0..samples)
        .map(|i| {
            let y = lo + step * i as f64;
            (y, profile(y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_channel_bed_and_surface() {
        assert_eq!(open_channel_velocity(0.0, 0.0, 2.0, 3.0), 0.0);
        assert_eq!(open_channel_velocity(2.0, 0.0, 2.0, 3.0), 3.0);
        // Above the surface clips to v_max, below the bed clips to 0.
        assert_eq!(open_channel_velocity(5.0, 0.0, 2.0, 3.0), 3.0);
        assert_eq!(open_channel_velocity(-1.0, 0.0, 2.0, 3.0), 0.0);
    }

    #[test]
    fn open_channel_dry() {
        assert_eq!(open_channel_velocity(1.0, 1.0, 1.0, 3.0), 0.0);
        assert_eq!(open_channel_velocity(1.0, 2.0, 1.0, 3.0), 0.0);
    }

    #[test]
    fn open_channel_unknown_levels_are_dry() {
        assert_eq!(open_channel_velocity(1.0, f64::NAN, 2.0, 3.0), 0.0);
        assert_eq!(open_channel_velocity(1.0, 0.0, f64::NAN, 3.0), 0.0);
        assert_eq!(open_channel_velocity(1.0, 0.0, f64::INFINITY, 3.0), 0.0);
        let pts = sample(|y| open_channel_velocity(y, 0.0, f64::NAN, 3.0), 0.0, 2.0, 4);
        assert!(pts.iter().all(|&(_, v)| v == 0.0));
    }

    #[test]
    fn closed_pipe_parabola() {
        assert_eq!(closed_pipe_velocity(0.0, -1.0, 1.0, 2.0), 2.0);
        assert_eq!(closed_pipe_velocity(1.0, -1.0, 1.0, 2.0), 0.0);
        assert_eq!(closed_pipe_velocity(-3.0, -1.0, 1.0, 2.0), 0.0);
        assert!((closed_pipe_velocity(0.5, -1.0, 1.0, 2.0) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn sampling_covers_range() {
        let pts = sample(|y| closed_pipe_velocity(y, 0.0, 1.0, 1.0), 0.0, 1.0, 5);
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0].0, 0.0);
        assert_eq!(pts[4].0, 1.0);
        assert_eq!(pts[2].1, 1.0);
        assert_eq!(sample(|y| y, 0.0, 2.0, 1), vec![(1.0, 1.0)]);
    }
}
