//! hn-core: shared foundation for hydronet.
//!
//! Contains:
//! - units (uom SI types + constructors + hydraulic constants)
//! - numeric (finite checks and sign helper)
//! - ids (compact IDs for nodes and pipes)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HnError, HnResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
