//! Scenario schema definitions.

use hn_core::units::{constants, m2ps, mps2};
use hn_headloss::{Fluid, FrictionLaw};
use hn_solver::HardyCrossConfig;
use serde::{Deserialize, Serialize};

/// Newest schema version this crate reads and writes.
pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub fluid: FluidDef,
    #[serde(default)]
    pub solver: SolverDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceDef>,
    #[serde(default)]
    pub nodes: Vec<NodeDef>,
    #[serde(default)]
    pub pipes: Vec<PipeDef>,
    #[serde(default)]
    pub loops: Vec<LoopDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FluidDef {
    /// m²/s
    #[serde(default = "default_kinematic_viscosity")]
    pub kinematic_viscosity: f64,
    /// m/s²
    #[serde(default = "default_gravity")]
    pub gravity: f64,
}

fn default_kinematic_viscosity() -> f64 {
    constants::WATER_NU_M2PS
}

fn default_gravity() -> f64 {
    constants::G_MPS2
}

impl Default for FluidDef {
    fn default() -> Self {
        Self {
            kinematic_viscosity: default_kinematic_viscosity(),
            gravity: default_gravity(),
        }
    }
}

impl FluidDef {
    pub fn to_fluid(&self) -> Fluid {
        Fluid::new(m2ps(self.kinematic_viscosity), mps2(self.gravity))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SolverDef {
    #[serde(default = "default_exponent")]
    pub exponent: f64,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

fn default_exponent() -> f64 {
    HardyCrossConfig::default().exponent
}

fn default_tolerance() -> f64 {
    HardyCrossConfig::default().tolerance
}

fn default_max_iterations() -> usize {
    HardyCrossConfig::default().max_iterations
}

impl Default for SolverDef {
    fn default() -> Self {
        Self {
            exponent: default_exponent(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl SolverDef {
    pub fn to_config(&self) -> HardyCrossConfig {
        HardyCrossConfig {
            exponent: self.exponent,
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }
}

/// Where pressure propagation starts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceDef {
    pub node: String,
    /// Hydraulic head at the source node (m)
    pub head: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeDef {
    pub id: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    /// m
    #[serde(default)]
    pub elevation: f64,
    /// m³/s, positive leaves the network
    #[serde(default)]
    pub demand: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipeDef {
    pub id: String,
    pub start: String,
    pub end: String,
    /// m
    pub length: f64,
    /// m
    pub diameter: f64,
    #[serde(default)]
    pub friction: FrictionDef,
    /// m³/s, signed start → end
    #[serde(default)]
    pub initial_flow: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FrictionDef {
    HazenWilliams {
        #[serde(default = "default_hazen_williams_c")]
        c: f64,
    },
    DarcyWeisbach {
        /// Absolute roughness (m)
        roughness: f64,
    },
}

fn default_hazen_williams_c() -> f64 {
    130.0
}

impl Default for FrictionDef {
    fn default() -> Self {
        FrictionDef::HazenWilliams {
            c: default_hazen_williams_c(),
        }
    }
}

impl FrictionDef {
    pub fn to_law(self) -> FrictionLaw {
        match self {
            FrictionDef::HazenWilliams { c } => FrictionLaw::hazen_williams(c),
            FrictionDef::DarcyWeisbach { roughness } => FrictionLaw::darcy_weisbach(roughness),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoopDef {
    pub id: String,
    #[serde(default)]
    pub members: Vec<LoopMemberDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoopMemberDef {
    pub pipe: String,
    /// +1 to traverse start → end, -1 for end → start
    pub direction: i32,
}
