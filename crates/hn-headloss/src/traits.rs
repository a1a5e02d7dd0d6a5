//! Core trait for pipe friction laws.

use crate::common::circle_area;
use crate::fluid::Fluid;

/// Length and inner diameter of a pipe, both in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeGeometry {
    pub length: f64,
    pub diameter: f64,
}

impl PipeGeometry {
    pub fn new(length: f64, diameter: f64) -> Self {
        Self { length, diameter }
    }

    /// Flow area (m²).
    pub fn area(&self) -> f64 {
        circle_area(self.diameter)
    }

    /// True if either dimension cannot carry flow.
    pub fn is_degenerate(&self) -> bool {
        self.length <= 0.0 || self.diameter <= 0.0
    }
}

/// Trait for friction laws relating volumetric flow to head loss.
///
/// Sign convention: flow is signed relative to the pipe's declared
/// start → end orientation, and the returned head loss carries the same sign.
pub trait HeadLossModel {
    /// Law name for debugging and reports.
    fn name(&self) -> &'static str;

    /// Nominal exponent `n` in `|h| = K |Q|^n`.
    fn exponent(&self) -> f64;

    /// Resistance coefficient `K` in `|h| = K |Q|^n`, evaluated at `flow`.
    ///
    /// Laws whose coefficient depends on the flow regime (Darcy-Weisbach)
    /// linearize around the given flow.
    fn resistance(&self, geom: PipeGeometry, flow: f64, fluid: &Fluid) -> f64;

    /// Signed head loss (m) for a signed flow (m³/s).
    fn head_loss(&self, geom: PipeGeometry, flow: f64, fluid: &Fluid) -> f64;

    /// Derivative magnitude `d|h|/d|Q|` at `flow`.
    ///
    /// Default uses the power-law form `n K |Q|^(n-1)`.
    fn slope(&self, geom: PipeGeometry, flow: f64, fluid: &Fluid) -> f64 {
        let n = self.exponent();
        n * self.resistance(geom, flow, fluid) * flow.abs().powf(n - 1.0)
    }

    /// Mean velocity (m/s), signed like the flow; 0 for degenerate diameters.
    fn velocity(&self, geom: PipeGeometry, flow: f64) -> f64 {
        let area = geom.area();
        if area > 0.0 { flow / area } else { 0.0 }
    }
}
