// hn-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, DiffusionCoefficient as UomKinematicViscosity,
    Pressure as UomPressure, Velocity as UomVelocity, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64). uom models m²/s as a diffusion
// coefficient; kinematic viscosity shares the dimension.
pub type Accel = UomAcceleration;
pub type KinVisc = UomKinematicViscosity;
pub type Pressure = UomPressure;
pub type Velocity = UomVelocity;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn m2ps(v: f64) -> KinVisc {
    use uom::si::diffusion_coefficient::square_meter_per_second;
    KinVisc::new::<square_meter_per_second>(v)
}

#[inline]
pub fn mps2(v: f64) -> Accel {
    use uom::si::acceleration::meter_per_second_squared;
    Accel::new::<meter_per_second_squared>(v)
}

#[inline]
pub fn kpa(v: f64) -> Pressure {
    use uom::si::pressure::kilopascal;
    Pressure::new::<kilopascal>(v)
}

pub mod constants {
    use super::*;

    /// Gravitational acceleration used by the hydraulics formulas (m/s²).
    pub const G_MPS2: f64 = 9.81;

    /// Unit weight of water, ρg, in kN/m³. Multiplying a pressure head in
    /// metres by this gives gauge pressure in kPa.
    pub const WATER_UNIT_WEIGHT_KN_M3: f64 = 9.81;

    /// Kinematic viscosity of water near 20 °C (m²/s).
    pub const WATER_NU_M2PS: f64 = 1.0e-6;

    #[inline]
    pub fn g() -> Accel {
        mps2(G_MPS2)
    }

    /// Gauge pressure (kPa) for a hydraulic head above the given elevation.
    #[inline]
    pub fn pressure_kpa_from_head(head: f64, elevation: f64) -> f64 {
        WATER_UNIT_WEIGHT_KN_M3 * (head - elevation)
    }
}
