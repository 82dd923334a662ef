//! # Netshape - Topology generator for interconnection networks
//!
//! This library builds the static router graph of an interconnection network
//! for a cycle-level router/link simulation engine to consume.
//!
//! ## Overview
//!
//! Given a router count, a list of endpoint nodes and a shape, netshape
//! deterministically produces every router, every external link (endpoint to
//! router) and every internal link (router to router, labeled with the port
//! directions at both ends).
//!
//! ## Supported Shapes
//!
//! - **Ring**: one dimension, ports `Right` and `Left`
//! - **Torus2D**: `x_length` columns per row, ports `North`, `South`, `East`, `West`
//! - **Torus3D**: `x_length` x `y_length` planes stacked `z_length` deep,
//!   adding ports `Up` and `Down`
//!
//! Every dimension wraps around. `x_length` is always the row width: router
//! `i` sits in column `i % x_length`.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `topology`: Coordinate mapping, neighbor computation and topology assembly
//! - `address`: Address space partitioning across endpoints
//! - `config`: Type-safe configuration structures and YAML parsing
//! - `config_loader`: Configuration file loading and compatibility checks
//! - `output`: YAML/JSON/DOT rendering of built topologies
//! - `utils`: Size parsing and topology invariant validation
//! - `orchestrator`: High-level orchestration from configuration to output file
//!
//! ## Example Usage
//!
//! ```rust
//! use netshape::topology::{build, Direction, Endpoint, Shape, TopologyParams};
//!
//! let params = TopologyParams::new(8, Shape::Torus2d { x_length: 4, y_length: None });
//! let topology = build(&Endpoint::numbered(8), &params)?;
//!
//! assert_eq!(topology.internal_links.len(), 32);
//! assert_eq!(topology.neighbor_of(3, Direction::East), Some(0));
//! # Ok::<(), netshape::topology::ConfigurationError>(())
//! ```
//!
//! ## Configuration Format
//!
//! ```yaml
//! network:
//!   topology: torus3d
//!   num_routers: 64
//!   x_length: 4
//!   y_length: 4
//!   z_length: 4
//!   link_latency: 1
//!   router_latency: 1
//!
//! endpoints:
//!   count: 128      # or names: [...]
//!
//! memory:
//!   total_size: "512MB"
//! ```
//!
//! ## Link Ids
//!
//! Link ids come from a single counter: all external links in endpoint
//! order, then one pass of internal links per direction in the shape's
//! canonical order (see [`topology::ShapeKind::directions`]).
//!
//! ## Error Handling
//!
//! Invalid shapes are reported as [`topology::ConfigurationError`] before
//! anything is built. The configuration and orchestration layers return
//! `color_eyre::eyre::Result` with context attached.

pub mod topology;
pub mod address;
pub mod config;
pub mod config_loader;
pub mod output;
pub mod utils;
pub mod orchestrator;
