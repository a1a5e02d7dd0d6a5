//! Hazen-Williams empirical friction law (SI form).

use crate::common::EPSILON_FLOW;
use crate::fluid::Fluid;
use crate::traits::{HeadLossModel, PipeGeometry};
use hn_core::numeric::sign;

/// Flow exponent of the Hazen-Williams law.
pub const HW_EXPONENT: f64 = 1.852;

/// Diameter exponent of the Hazen-Williams law.
pub const HW_DIAMETER_EXPONENT: f64 = 4.87;

/// SI unit coefficient of the Hazen-Williams law.
pub const HW_COEFFICIENT: f64 = 10.67;

/// Hazen-Williams friction with roughness coefficient `C`
/// (typically 100 to 150; higher is smoother).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazenWilliams {
    pub c: f64,
}

impl HazenWilliams {
    pub fn new(c: f64) -> Self {
        Self { c }
    }

    /// `K = 10.67 L / (C^1.852 D^4.87)`; zero for degenerate geometry or `C <= 0`.
    pub fn coefficient(&self, geom: PipeGeometry) -> f64 {
        if geom.is_degenerate() || self.c <= 0.0 {
            return 0.0;
        }
        HW_COEFFICIENT * geom.length
            / (self.c.powf(HW_EXPONENT) * geom.diameter.powf(HW_DIAMETER_EXPONENT))
    }
}

impl HeadLossModel for HazenWilliams {
    fn name(&self) -> &'static str {
        "hazen-williams"
    }

    fn exponent(&self) -> f64 {
        HW_EXPONENT
    }

    fn resistance(&self, geom: PipeGeometry, _flow: f64, _fluid: &Fluid) -> f64 {
        self.coefficient(geom)
    }

    fn head_loss(&self, geom: PipeGeometry, flow: f64, _fluid: &Fluid) -> f64 {
        let q_abs = flow.abs();
        if q_abs < EPSILON_FLOW {
            return 0.0;
        }
        sign(flow) * self.coefficient(geom) * q_abs.powf(HW_EXPONENT)
    }
}
