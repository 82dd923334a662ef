//! Topology validation utilities.
//!
//! This module checks the structural invariants a generated topology must
//! satisfy before it is handed to a simulation engine.

use crate::topology::{Direction, Topology};
use std::collections::{HashMap, HashSet};

/// Validate the structural invariants of a built topology
///
/// Checks for:
/// - One internal link per router and direction of the shape
/// - Link ids numbered 0, 1, 2, ... with external links first
/// - Every link `A -> B` leaving through `D` entering through the opposite
///   port, with exactly one partner `B -> A` leaving through that opposite port
/// - Every endpoint attached exactly once, to router `index % num_routers`
///
/// # Arguments
/// * `topology` - The topology to validate
///
/// # Returns
/// * `Ok(())` if validation succeeds
/// * `Err(String)` describing the first violation found
///
/// # Examples
/// ```
/// use netshape::topology::{build, Endpoint, Shape, TopologyParams};
/// use netshape::utils::validation::validate_topology;
///
/// let topology = build(&Endpoint::numbered(4), &TopologyParams::new(4, Shape::Ring)).unwrap();
/// assert!(validate_topology(&topology).is_ok());
/// ```
pub fn validate_topology(topology: &Topology) -> Result<(), String> {
    let num_routers = topology.num_routers();
    let directions = topology.directions();

    if num_routers != topology.dims.num_routers() {
        return Err(format!(
            "{} routers but dimensions {:?} describe {}",
            num_routers,
            topology.dims.sides(),
            topology.dims.num_routers()
        ));
    }

    for (i, router) in topology.routers.iter().enumerate() {
        if router.id != i {
            return Err(format!("Router at position {} has id {}", i, router.id));
        }
    }

    let expected_internal = num_routers * directions.len();
    if topology.internal_links.len() != expected_internal {
        return Err(format!(
            "Expected {} internal links ({} routers x {} directions), found {}",
            expected_internal,
            num_routers,
            directions.len(),
            topology.internal_links.len()
        ));
    }

    validate_link_ids(topology)?;
    validate_external_links(topology)?;
    validate_ports(topology)?;
    validate_pairing(topology)?;

    Ok(())
}

fn validate_link_ids(topology: &Topology) -> Result<(), String> {
    let ids = topology
        .external_links
        .iter()
        .map(|link| link.link_id)
        .chain(topology.internal_links.iter().map(|link| link.link_id));

    for (expected, id) in ids.enumerate() {
        if id != expected {
            return Err(format!("Link id {} found where {} was expected", id, expected));
        }
    }
    Ok(())
}

fn validate_external_links(topology: &Topology) -> Result<(), String> {
    let num_routers = topology.num_routers();
    let mut seen = HashSet::new();

    for link in &topology.external_links {
        if !seen.insert(link.endpoint) {
            return Err(format!("Endpoint {} is attached more than once", link.endpoint_name));
        }
        if link.router != link.endpoint % num_routers {
            return Err(format!(
                "Endpoint {} attached to router {}, expected router {}",
                link.endpoint_name,
                link.router,
                link.endpoint % num_routers
            ));
        }
    }
    Ok(())
}

/// Each router has exactly one outgoing link per direction of its shape
fn validate_ports(topology: &Topology) -> Result<(), String> {
    let num_routers = topology.num_routers();
    let mut ports: HashMap<(usize, Direction), usize> = HashMap::new();

    for link in &topology.internal_links {
        if link.src_router >= num_routers || link.dst_router >= num_routers {
            return Err(format!(
                "Link {} connects {} -> {} outside of {} routers",
                link.link_id, link.src_router, link.dst_router, num_routers
            ));
        }
        if !topology.directions().contains(&link.src_outport) {
            return Err(format!(
                "Link {} uses port {} which a {} topology doesn't have",
                link.link_id, link.src_outport, topology.kind
            ));
        }
        if link.dst_inport != link.src_outport.opposite() {
            return Err(format!(
                "Link {} leaves through {} but enters through {}",
                link.link_id, link.src_outport, link.dst_inport
            ));
        }
        *ports.entry((link.src_router, link.src_outport)).or_default() += 1;
    }

    for router in 0..num_routers {
        for &direction in topology.directions() {
            match ports.get(&(router, direction)).copied().unwrap_or(0) {
                1 => {}
                count => {
                    return Err(format!(
                        "Router {} has {} links through its {} port, expected 1",
                        router, count, direction
                    ))
                }
            }
        }
    }
    Ok(())
}

/// Every directed link has exactly one partner running the other way
fn validate_pairing(topology: &Topology) -> Result<(), String> {
    let mut links: HashMap<(usize, usize, Direction), usize> = HashMap::new();
    for link in &topology.internal_links {
        *links
            .entry((link.src_router, link.dst_router, link.src_outport))
            .or_default() += 1;
    }

    for link in &topology.internal_links {
        let partner = (link.dst_router, link.src_router, link.src_outport.opposite());
        match links.get(&partner).copied().unwrap_or(0) {
            1 => {}
            count => {
                return Err(format!(
                    "Link {} ({} -> {} via {}) has {} partners, expected 1",
                    link.link_id, link.src_router, link.dst_router, link.src_outport, count
                ))
            }
        }
    }
    Ok(())
}
