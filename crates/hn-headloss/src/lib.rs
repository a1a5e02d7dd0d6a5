//! hn-headloss: pipe friction and hydraulic profile models.
//!
//! Provides:
//! - Hazen-Williams and Darcy-Weisbach (Swamee-Jain) friction laws
//! - the generalized power law `h = K Q |Q|^(n-1)` used by loop solvers
//! - energy/hydraulic grade lines along a pipe path
//! - open-channel and closed-pipe velocity profiles
//!
//! All functions are pure and guard degenerate inputs (zero length, zero
//! diameter, zero flow, zero viscosity) by returning zero instead of failing,
//! so parameter sweeps can pass through them safely.
//!
//! # Example
//!
//! ```
//! use hn_headloss::{Fluid, FrictionLaw, HeadLossModel, PipeGeometry};
//!
//! let geom = PipeGeometry::new(100.0, 0.2);
//! let law = FrictionLaw::hazen_williams(100.0);
//! let h = law.head_loss(geom, 0.05, &Fluid::water());
//! assert!(h > 0.0);
//! assert_eq!(law.head_loss(geom, -0.05, &Fluid::water()), -h);
//! ```

pub mod common;
pub mod darcy;
pub mod error;
pub mod fluid;
pub mod friction;
pub mod grade_line;
pub mod hazen_williams;
pub mod power_law;
pub mod traits;
pub mod velocity_profile;

// Re-exports
pub use darcy::DarcyWeisbach;
pub use error::{HeadLossError, HeadLossResult};
pub use fluid::Fluid;
pub use friction::FrictionLaw;
pub use grade_line::{GradePoint, Segment, grade_lines};
pub use hazen_williams::HazenWilliams;
pub use traits::{HeadLossModel, PipeGeometry};
