//! Fluid properties needed by the Darcy-Weisbach law.

use hn_core::units::{Accel, KinVisc, constants, m2ps, mps2};

/// Kinematic viscosity and gravity for an incompressible liquid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fluid {
    pub kinematic_viscosity: KinVisc,
    pub gravity: Accel,
}

impl Fluid {
    pub fn new(kinematic_viscosity: KinVisc, gravity: Accel) -> Self {
        Self {
            kinematic_viscosity,
            gravity,
        }
    }

    /// Water near 20 °C under standard hydraulics gravity.
    pub fn water() -> Self {
        Self::new(m2ps(constants::WATER_NU_M2PS), constants::g())
    }

    /// Kinematic viscosity in m²/s.
    #[inline]
    pub fn nu(&self) -> f64 {
        self.kinematic_viscosity.value
    }

    /// Gravitational acceleration in m/s².
    #[inline]
    pub fn g(&self) -> f64 {
        self.gravity.value
    }

    pub fn with_gravity(mut self, g_mps2: f64) -> Self {
        self.gravity = mps2(g_mps2);
        self
    }
}

impl Default for Fluid {
    fn default() -> Self {
        Self::water()
    }
}
