//! Output document type definitions.
//!
//! This module contains the serializable form of a built topology, written
//! for the simulation engine that consumes it.

use serde::Serialize;

use crate::address::{AddressAssignment, AddressRegistry};
use crate::topology::{ExternalLink, InternalLink, Router, ShapeKind, Topology};

/// Shape of the network and its resolved dimension lengths
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ShapeSummary {
    /// Topology family
    pub kind: ShapeKind,
    pub num_routers: usize,
    /// Dimension lengths, x first
    pub sides: Vec<usize>,
}

/// Complete topology description handed to the simulation engine.
///
/// Link ids are shared between `external_links` and `internal_links`:
/// external links come first, followed by one pass per direction.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TopologyDocument {
    pub shape: ShapeSummary,
    pub routers: Vec<Router>,
    pub external_links: Vec<ExternalLink>,
    pub internal_links: Vec<InternalLink>,
    /// Address range owned by each endpoint, when memory was partitioned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_map: Option<Vec<AddressAssignment>>,
}

impl TopologyDocument {
    pub fn new(topology: &Topology, addresses: Option<&AddressRegistry>) -> Self {
        Self {
            shape: ShapeSummary {
                kind: topology.kind,
                num_routers: topology.num_routers(),
                sides: topology.dims.sides().to_vec(),
            },
            routers: topology.routers.clone(),
            external_links: topology.external_links.clone(),
            internal_links: topology.internal_links.clone(),
            address_map: addresses.map(|registry| registry.assignments().to_vec()),
        }
    }
}
