//! hn-network: pipe network model for hydronet.
//!
//! Provides:
//! - Node, Pipe and Loop data structures with computed hydraulic state
//! - Incremental network builder with fail-fast validation
//! - Loop closure validation
//! - Compact node adjacency for traversals
//!
//! # Example
//!
//! ```
//! use hn_network::{Direction, Loop, NetworkBuilder};
//!
//! let mut b = NetworkBuilder::new();
//! let a = b.add_node("A", 0.0, 0.0, 10.0, -0.1).unwrap();
//! let c = b.add_node("C", 1.0, 0.0, 10.0, 0.1).unwrap();
//! let p1 = b.add_pipe("P1", a, c, 100.0, 0.2, 100.0).unwrap();
//! let p2 = b.add_pipe("P2", a, c, 150.0, 0.2, 100.0).unwrap();
//! b.set_initial_flow(p1, 0.06).unwrap();
//! b.set_initial_flow(p2, 0.04).unwrap();
//! b.set_loops(vec![Loop::new(
//!     "L1",
//!     [(p1, Direction::Forward), (p2, Direction::Reverse)],
//! )])
//! .unwrap();
//! let net = b.build().unwrap();
//!
//! assert_eq!(net.nodes().len(), 2);
//! assert_eq!(net.pipes().len(), 2);
//! assert!(net.node_imbalance(a).unwrap().abs() < 1e-12);
//! ```

pub mod adjacency;
pub mod builder;
pub mod error;
pub mod network;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use adjacency::{Adjacency, Edge};
pub use builder::NetworkBuilder;
pub use error::{NetworkError, NetworkResult};
pub use network::{Direction, Loop, LoopMember, Network, Node, Pipe};
