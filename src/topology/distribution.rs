//! Endpoint distribution across routers.
//!
//! Endpoints are attached round-robin: endpoint `i` hangs off router
//! `i % num_routers`. With more endpoints than routers a router carries
//! several endpoints, attached in endpoint order.

use log::{debug, info};

use super::types::{Endpoint, ExternalLink};

/// Router owning the endpoint at position `endpoint_index`
pub fn router_for_endpoint(endpoint_index: usize, num_routers: usize) -> usize {
    endpoint_index % num_routers
}

/// Attach every endpoint to its router, one external link each.
///
/// # Arguments
/// * `endpoints` - Endpoints in caller order
/// * `num_routers` - Router count, non-zero
/// * `latency` - Link latency in cycles
/// * `next_link_id` - Shared link id counter, advanced past the new links
pub fn attach_endpoints(
    endpoints: &[Endpoint],
    num_routers: usize,
    latency: u32,
    next_link_id: &mut usize,
) -> Vec<ExternalLink> {
    let mut external_links = Vec::with_capacity(endpoints.len());

    for (i, endpoint) in endpoints.iter().enumerate() {
        let router = router_for_endpoint(i, num_routers);
        external_links.push(ExternalLink {
            link_id: *next_link_id,
            endpoint: i,
            endpoint_name: endpoint.name.clone(),
            router,
            latency,
        });
        *next_link_id += 1;

        debug!("Endpoint {} -> router {}", endpoint.name, router);
    }

    if endpoints.len() > num_routers {
        info!(
            "{} endpoints over {} routers: up to {} endpoints per router",
            endpoints.len(),
            num_routers,
            endpoints.len().div_ceil(num_routers)
        );
    }

    external_links
}
