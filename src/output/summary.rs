//! Topology summary statistics.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::topology::{Direction, Topology};

/// Link and degree counts of a built topology
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TopologySummary {
    pub num_routers: usize,
    pub num_endpoints: usize,
    pub num_links: usize,
    /// Internal links per outport direction
    pub links_per_direction: BTreeMap<Direction, usize>,
    /// Smallest and largest number of outgoing internal links of any router
    pub min_out_degree: usize,
    pub max_out_degree: usize,
    /// Largest number of endpoints attached to a single router
    pub max_endpoints_per_router: usize,
}

/// Count links per direction and per router
pub fn summarize(topology: &Topology) -> TopologySummary {
    let num_routers = topology.num_routers();
    let mut links_per_direction = BTreeMap::new();
    let mut out_degree = vec![0usize; num_routers];
    let mut endpoints_per_router = vec![0usize; num_routers];

    for link in &topology.internal_links {
        *links_per_direction.entry(link.src_outport).or_insert(0) += 1;
        out_degree[link.src_router] += 1;
    }
    for link in &topology.external_links {
        endpoints_per_router[link.router] += 1;
    }

    TopologySummary {
        num_routers,
        num_endpoints: topology.external_links.len(),
        num_links: topology.num_links(),
        links_per_direction,
        min_out_degree: out_degree.iter().copied().min().unwrap_or(0),
        max_out_degree: out_degree.iter().copied().max().unwrap_or(0),
        max_endpoints_per_router: endpoints_per_router.iter().copied().max().unwrap_or(0),
    }
}
