//! Network topology module.
//!
//! This module builds the static router graph of ring, 2-D torus and 3-D
//! torus interconnection networks: coordinate mapping, directional neighbor
//! computation, endpoint attachment and the assembly of all link records.

pub mod types;
pub mod coords;
pub mod connections;
pub mod distribution;
pub mod builder;

// Re-export key types and functions for easier access
pub use types::{
    ConfigurationError, Direction, Endpoint, ExternalLink, InternalLink, Router, Shape, ShapeKind,
    Topology,
};
pub use coords::{Coords, Dims};
pub use connections::{has_port, neighbor};
pub use distribution::router_for_endpoint;
pub use builder::{build, TopologyParams};
