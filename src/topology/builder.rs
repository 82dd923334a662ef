//! Topology assembly.
//!
//! Validates the shape, creates the routers, attaches the endpoints and
//! generates every internal link. Link ids come from one counter: external
//! links first, then one pass of internal links per direction in the shape's
//! canonical order.

use log::info;

use super::connections::generate_direction_links;
use super::distribution::attach_endpoints;
use super::types::{ConfigurationError, Endpoint, Router, Shape, Topology};

fn default_latency() -> u32 {
    1
}

/// Everything a build needs apart from the endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyParams {
    pub num_routers: usize,
    pub shape: Shape,
    /// Latency of every link, in cycles
    pub link_latency: u32,
    /// Processing latency of every router, in cycles
    pub router_latency: u32,
}

impl TopologyParams {
    pub fn new(num_routers: usize, shape: Shape) -> Self {
        Self {
            num_routers,
            shape,
            link_latency: default_latency(),
            router_latency: default_latency(),
        }
    }

    pub fn with_link_latency(mut self, latency: u32) -> Self {
        self.link_latency = latency;
        self
    }

    pub fn with_router_latency(mut self, latency: u32) -> Self {
        self.router_latency = latency;
        self
    }
}

/// Build the complete topology for `endpoints` and `params`.
///
/// Parameters are validated before anything is created, so an error never
/// leaves a partial topology behind.
pub fn build(endpoints: &[Endpoint], params: &TopologyParams) -> Result<Topology, ConfigurationError> {
    let dims = params.shape.dims(params.num_routers)?;
    let kind = params.shape.kind();
    let num_routers = dims.num_routers();

    info!("Building {} topology with {} routers, dimensions {:?}", kind, num_routers, dims.sides());

    let routers: Vec<Router> = (0..num_routers)
        .map(|id| Router { id, latency: params.router_latency })
        .collect();

    let mut next_link_id = 0;
    let external_links = attach_endpoints(endpoints, num_routers, params.link_latency, &mut next_link_id);

    let mut internal_links = Vec::with_capacity(num_routers * kind.directions().len());
    for &direction in kind.directions() {
        internal_links.extend(generate_direction_links(
            direction,
            &dims,
            params.link_latency,
            &mut next_link_id,
        ));
    }

    info!(
        "Built {} external and {} internal links",
        external_links.len(),
        internal_links.len()
    );

    Ok(Topology {
        kind,
        dims,
        routers,
        external_links,
        internal_links,
    })
}
