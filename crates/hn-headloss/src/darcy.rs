//! Darcy-Weisbach friction with the Swamee-Jain friction factor.

use crate::common::{EPSILON_FLOW, circle_area, velocity_head};
use crate::fluid::Fluid;
use crate::traits::{HeadLossModel, PipeGeometry};
use hn_core::numeric::sign;

/// Reynolds number below which flow is treated as laminar.
pub const LAMINAR_LIMIT: f64 = 2000.0;

/// Mean velocity (m/s) for a flow rate through a circular pipe.
///
/// Returns 0 for non-positive diameters.
pub fn velocity(flow: f64, diameter: f64) -> f64 {
    if diameter <= 0.0 {
        return 0.0;
    }
    flow / circle_area(diameter)
}

/// Reynolds number `v D / ν`. A non-positive viscosity gives `+∞`.
pub fn reynolds(velocity: f64, diameter: f64, nu: f64) -> f64 {
    if nu <= 0.0 {
        return f64::INFINITY;
    }
    velocity * diameter / nu
}

/// Darcy friction factor: `64/Re` when laminar, Swamee-Jain otherwise.
///
/// The regime test uses `|Re|` so reversed flow picks the same branch.
/// Zero Reynolds number (no flow) and non-positive diameters give 0.
pub fn friction_factor(re: f64, roughness: f64, diameter: f64) -> f64 {
    let re = re.abs();
    if re < LAMINAR_LIMIT {
        if re == 0.0 {
            return 0.0;
        }
        return 64.0 / re;
    }
    if diameter <= 0.0 {
        return 0.0;
    }
    let relative = roughness / (3.7 * diameter);
    let transition = 5.74 / re.powf(0.9);
    0.25 / (relative + transition).log10().powi(2)
}

/// Unsigned head loss `f (L/D) v²/2g` for a mean velocity.
///
/// Degenerate geometry (`D <= 0` or `L <= 0`) loses nothing.
pub fn head_loss(length: f64, diameter: f64, velocity: f64, fluid: &Fluid, roughness: f64) -> f64 {
    if diameter <= 0.0 || length <= 0.0 {
        return 0.0;
    }
    let re = reynolds(velocity, diameter, fluid.nu());
    let f = friction_factor(re, roughness, diameter);
    f * (length / diameter) * velocity_head(velocity, fluid.g())
}

/// Darcy-Weisbach friction with absolute wall roughness `ε` (m).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DarcyWeisbach {
    pub roughness: f64,
}

impl DarcyWeisbach {
    pub fn new(roughness: f64) -> Self {
        Self { roughness }
    }

    /// Friction factor at the given flow.
    ///
    /// At zero flow the fully rough limit (`Re → ∞`) is used so that the
    /// pipe still presents a finite resistance to a loop correction.
    pub fn factor_at(&self, geom: PipeGeometry, flow: f64, fluid: &Fluid) -> f64 {
        if flow.abs() < EPSILON_FLOW {
            return friction_factor(f64::INFINITY, self.roughness, geom.diameter);
        }
        let v = velocity(flow, geom.diameter);
        friction_factor(reynolds(v, geom.diameter, fluid.nu()), self.roughness, geom.diameter)
    }
}

impl HeadLossModel for DarcyWeisbach {
    fn name(&self) -> &'static str {
        "darcy-weisbach"
    }

    fn exponent(&self) -> f64 {
        2.0
    }

    /// `K = 8 f L / (g π² D⁵)`, so that `|h| = K Q²` at this flow.
    fn resistance(&self, geom: PipeGeometry, flow: f64, fluid: &Fluid) -> f64 {
        if geom.is_degenerate() {
            return 0.0;
        }
        let f = self.factor_at(geom, flow, fluid);
        let pi2 = std::f64::consts::PI * std::f64::consts::PI;
        8.0 * f * geom.length / (fluid.g() * pi2 * geom.diameter.powi(5))
    }

    fn head_loss(&self, geom: PipeGeometry, flow: f64, fluid: &Fluid) -> f64 {
        let v = velocity(flow, geom.diameter);
        sign(flow) * head_loss(geom.length, geom.diameter, v.abs(), fluid, self.roughness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_guards_zero_diameter() {
        assert_eq!(velocity(0.1, 0.0), 0.0);
        assert_eq!(velocity(0.1, -1.0), 0.0);
        let v = velocity(std::f64::consts::PI / 4.0, 1.0);
        assert!((v - 1.0).abs() < 1e-12);
    }

    #[test]
    fn reynolds_zero_viscosity_is_infinite() {
        assert!(reynolds(1.0, 0.1, 0.0).is_infinite());
        assert!(reynolds(1.0, 0.1, -1.0).is_infinite());
        assert!((reynolds(1.0, 0.1, 1e-6) - 1.0e5).abs() < 1e-6);
    }

    #[test]
    fn laminar_branch() {
        assert_eq!(friction_factor(0.0, 1e-5, 0.1), 0.0);
        assert!((friction_factor(1000.0, 1e-5, 0.1) - 0.064).abs() < 1e-15);
        assert!((friction_factor(-1000.0, 1e-5, 0.1) - 0.064).abs() < 1e-15);
    }

    #[test]
    fn turbulent_branch_is_reasonable() {
        // Smooth-ish pipe at Re = 1e5: Moody chart gives roughly 0.018.
        let f = friction_factor(1.0e5, 1.5e-6, 0.1);
        assert!(f > 0.015 && f < 0.02, "f = {f}");
    }

    #[test]
    fn infinite_reynolds_does_not_panic() {
        let f = friction_factor(f64::INFINITY, 1e-4, 0.1);
        assert!(f.is_finite() && f > 0.0);
        // Perfectly smooth wall in the infinite-Re limit: no friction.
        assert_eq!(friction_factor(f64::INFINITY, 0.0, 0.1), 0.0);
    }

    #[test]
    fn head_loss_guards() {
        let w = Fluid::water();
        assert_eq!(head_loss(0.0, 0.1, 1.0, &w, 1e-5), 0.0);
        assert_eq!(head_loss(10.0, 0.0, 1.0, &w, 1e-5), 0.0);
        assert_eq!(head_loss(10.0, 0.1, 0.0, &w, 1e-5), 0.0);
        let zero_nu = Fluid::new(hn_core::units::m2ps(0.0), hn_core::units::mps2(9.81));
        assert!(head_loss(10.0, 0.1, 1.0, &zero_nu, 1e-5).is_finite());
    }

    #[test]
    fn resistance_reproduces_head_loss() {
        let w = Fluid::water();
        let dw = DarcyWeisbach::new(1.5e-6);
        let geom = PipeGeometry::new(50.0, 0.15);
        let q = 0.02;
        let k = dw.resistance(geom, q, &w);
        let h = dw.head_loss(geom, q, &w);
        assert!((k * q * q - h).abs() < 1e-10 * h);
        assert_eq!(dw.head_loss(geom, -q, &w), -h);
    }

    #[test]
    fn zero_flow_resistance_is_finite() {
        let dw = DarcyWeisbach::new(1e-4);
        let k = dw.resistance(PipeGeometry::new(100.0, 0.2), 0.0, &Fluid::water());
        assert!(k.is_finite() && k > 0.0);
    }
}
