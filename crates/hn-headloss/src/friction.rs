//! Per-pipe selection between the supported friction laws.

use crate::darcy::DarcyWeisbach;
use crate::fluid::Fluid;
use crate::hazen_williams::HazenWilliams;
use crate::traits::{HeadLossModel, PipeGeometry};

/// Friction law attached to a pipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrictionLaw {
    /// Hazen-Williams with roughness coefficient C.
    HazenWilliams(HazenWilliams),
    /// Darcy-Weisbach with absolute roughness ε (m).
    DarcyWeisbach(DarcyWeisbach),
}

impl FrictionLaw {
    pub fn hazen_williams(c: f64) -> Self {
        FrictionLaw::HazenWilliams(HazenWilliams::new(c))
    }

    pub fn darcy_weisbach(roughness: f64) -> Self {
        FrictionLaw::DarcyWeisbach(DarcyWeisbach::new(roughness))
    }

    fn model(&self) -> &dyn HeadLossModel {
        match self {
            FrictionLaw::HazenWilliams(hw) => hw as &dyn HeadLossModel,
            FrictionLaw::DarcyWeisbach(dw) => dw,
        }
    }
}

impl Default for FrictionLaw {
    fn default() -> Self {
        FrictionLaw::hazen_williams(130.0)
    }
}

impl HeadLossModel for FrictionLaw {
    fn name(&self) -> &'static str {
        self.model().name()
    }

    fn exponent(&self) -> f64 {
        self.model().exponent()
    }

    fn resistance(&self, geom: PipeGeometry, flow: f64, fluid: &Fluid) -> f64 {
        self.model().resistance(geom, flow, fluid)
    }

    fn head_loss(&self, geom: PipeGeometry, flow: f64, fluid: &Fluid) -> f64 {
        self.model().head_loss(geom, flow, fluid)
    }

    fn slope(&self, geom: PipeGeometry, flow: f64, fluid: &Fluid) -> f64 {
        self.model().slope(geom, flow, fluid)
    }
}
