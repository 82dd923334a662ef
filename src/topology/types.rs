//! Topology type definitions.
//!
//! This file contains the records produced by the topology builder (routers,
//! external links, internal links) together with the port directions and the
//! shape variants (Ring, Torus2D, Torus3D) that the system supports.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::coords::Dims;

/// Logical side of a router a link attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
    /// Ring only
    Left,
    /// Ring only
    Right,
}

impl Direction {
    /// The port a link leaving through `self` enters on the neighbor
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Port label as understood by the simulation engine
    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Topology families without their parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[serde(alias = "Ring")]
    Ring,
    #[serde(alias = "Torus2D")]
    Torus2d,
    #[serde(alias = "Torus3D")]
    Torus3d,
}

impl ShapeKind {
    /// Directions in the order their internal links are emitted.
    ///
    /// This order fixes the link ids handed to the simulation engine. Ring
    /// ids therefore differ from the legacy numbering that interleaved
    /// Right and Left links per router.
    pub fn directions(self) -> &'static [Direction] {
        match self {
            ShapeKind::Ring => &[Direction::Right, Direction::Left],
            ShapeKind::Torus2d => &[
                Direction::North,
                Direction::South,
                Direction::East,
                Direction::West,
            ],
            ShapeKind::Torus3d => &[
                Direction::Up,
                Direction::Down,
                Direction::North,
                Direction::South,
                Direction::East,
                Direction::West,
            ],
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Ring => f.write_str("Ring"),
            ShapeKind::Torus2d => f.write_str("Torus2D"),
            ShapeKind::Torus3d => f.write_str("Torus3D"),
        }
    }
}

/// Shape parameters, one case per topology family.
///
/// `x_length` is the row width (number of columns) in both torus variants:
/// router `i` sits in column `i % x_length` of row `i / x_length`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Ring,
    Torus2d {
        x_length: usize,
        /// Derived as `num_routers / x_length` when absent
        #[serde(skip_serializing_if = "Option::is_none")]
        y_length: Option<usize>,
    },
    Torus3d {
        x_length: usize,
        y_length: usize,
        z_length: usize,
    },
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Ring => ShapeKind::Ring,
            Shape::Torus2d { .. } => ShapeKind::Torus2d,
            Shape::Torus3d { .. } => ShapeKind::Torus3d,
        }
    }

    /// Check the shape against the router count and resolve its dimension lengths.
    ///
    /// Fails when a length is zero or the lengths don't multiply out to
    /// `num_routers`.
    pub fn dims(&self, num_routers: usize) -> Result<Dims, ConfigurationError> {
        if num_routers == 0 {
            return Err(ConfigurationError::NoRouters);
        }

        let sides = match *self {
            Shape::Ring => vec![num_routers],
            Shape::Torus2d { x_length, y_length } => {
                if x_length == 0 {
                    return Err(ConfigurationError::ZeroLength { dimension: "x_length" });
                }
                let y_length = y_length.unwrap_or(num_routers / x_length);
                if y_length == 0 {
                    return Err(ConfigurationError::ZeroLength { dimension: "y_length" });
                }
                vec![x_length, y_length]
            }
            Shape::Torus3d { x_length, y_length, z_length } => {
                for (dimension, length) in [("x_length", x_length), ("y_length", y_length), ("z_length", z_length)] {
                    if length == 0 {
                        return Err(ConfigurationError::ZeroLength { dimension });
                    }
                }
                vec![x_length, y_length, z_length]
            }
        };

        let product = sides.iter().fold(1usize, |acc, side| acc.saturating_mul(*side));
        if product != num_routers {
            return Err(ConfigurationError::ProductMismatch {
                shape: self.kind(),
                sides,
                product,
                num_routers,
            });
        }

        Ok(Dims::new(&sides))
    }
}

/// Fatal errors in the parameters of a topology build
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("a topology needs at least one router")]
    NoRouters,
    #[error("{dimension} can't be 0")]
    ZeroLength { dimension: &'static str },
    #[error("{shape} dimensions {sides:?} multiply to {product}, which must equal num_routers = {num_routers}")]
    ProductMismatch {
        shape: ShapeKind,
        sides: Vec<usize>,
        product: usize,
        num_routers: usize,
    },
    #[error("{shape} topology requires {parameter}")]
    MissingParameter {
        shape: ShapeKind,
        parameter: &'static str,
    },
}

/// Caller-supplied handle of a traffic source/sink attached to the network
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    pub name: String,
}

impl Endpoint {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// `count` endpoints named `endpoint0`, `endpoint1`, ...
    pub fn numbered(count: usize) -> Vec<Endpoint> {
        (0..count).map(|i| Endpoint::new(format!("endpoint{}", i))).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Router {
    pub id: usize,
    /// Processing latency in cycles
    pub latency: u32,
}

/// Endpoint-to-router attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub link_id: usize,
    /// Position of the endpoint in the caller's list
    pub endpoint: usize,
    pub endpoint_name: String,
    pub router: usize,
    pub latency: u32,
}

/// Directed router-to-router link.
///
/// Every internal link has a partner running the other way whose
/// port labels are swapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalLink {
    pub link_id: usize,
    pub src_router: usize,
    pub dst_router: usize,
    pub src_outport: Direction,
    pub dst_inport: Direction,
    pub latency: u32,
}

/// A fully built network topology, ready to hand to a simulation engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    pub kind: ShapeKind,
    pub dims: Dims,
    pub routers: Vec<Router>,
    pub external_links: Vec<ExternalLink>,
    pub internal_links: Vec<InternalLink>,
}

impl Topology {
    pub fn num_routers(&self) -> usize {
        self.routers.len()
    }

    pub fn directions(&self) -> &'static [Direction] {
        self.kind.directions()
    }

    /// Total number of links, external and internal
    pub fn num_links(&self) -> usize {
        self.external_links.len() + self.internal_links.len()
    }

    /// Internal links leaving `router`, in emission order
    pub fn outgoing(&self, router: usize) -> impl Iterator<Item = &InternalLink> {
        self.internal_links.iter().filter(move |link| link.src_router == router)
    }

    /// Neighbor of `router` through its `direction` port, if that port exists
    pub fn neighbor_of(&self, router: usize, direction: Direction) -> Option<usize> {
        self.outgoing(router)
            .find(|link| link.src_outport == direction)
            .map(|link| link.dst_router)
    }
}
