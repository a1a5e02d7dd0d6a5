//! Flow and head solvers for pipe networks.
//!
//! The centerpiece is the Hardy Cross loop-correction method: every loop's
//! flows are shifted by a uniform correction until the head losses around
//! each loop cancel. Around it sit a breadth-first pressure propagator, the
//! closed-form parallel flow split and a series chain walker.
//!
//! ```
//! use hn_network::{Direction, Loop, NetworkBuilder};
//! use hn_solver::{HardyCrossConfig, propagate_pressure, solve};
//!
//! let mut b = NetworkBuilder::new();
//! let a = b.add_node("a", 0.0, 0.0, 0.0, -0.1).unwrap();
//! let z = b.add_node("z", 1.0, 0.0, 0.0, 0.1).unwrap();
//! let short = b.add_pipe("short", a, z, 100.0, 0.2, 120.0).unwrap();
//! let long = b.add_pipe("long", a, z, 400.0, 0.2, 120.0).unwrap();
//! b.set_initial_flow(short, 0.05).unwrap();
//! b.set_initial_flow(long, 0.05).unwrap();
//! b.set_loops(vec![Loop::new(
//!     "ring",
//!     [(short, Direction::Forward), (long, Direction::Reverse)],
//! )])
//! .unwrap();
//! let mut net = b.build().unwrap();
//!
//! let report = solve(&mut net, &HardyCrossConfig::default()).unwrap();
//! assert!(report.converged);
//! assert!(net.pipes()[0].flow() > net.pipes()[1].flow());
//!
//! let heads = propagate_pressure(&mut net, a, 50.0).unwrap();
//! assert!(heads.unreached.is_empty());
//! ```

pub mod error;
pub mod hardy_cross;
pub mod parallel;
pub mod propagate;
pub mod series;

pub use error::{SolverError, SolverResult};
pub use hardy_cross::{HardyCrossConfig, HardyCrossReport, correct_flows, solve};
pub use parallel::{Branch, BranchFlow, distribute_parallel_flow};
pub use propagate::{NodeHead, PropagationReport, propagate_pressure};
pub use series::{SeriesPipe, SeriesStation, series_heads};
