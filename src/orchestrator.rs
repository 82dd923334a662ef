//! Topology generation orchestrator.
//!
//! This module coordinates the overall generation process, managing the flow
//! from a validated configuration through topology construction, invariant
//! checks and address registration to the written output document.

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use log::{debug, info};
use std::path::Path;

use crate::address::{register_endpoints, AddressRegistry};
use crate::config::Config;
use crate::output::{self, summarize, OutputFormat, TopologyDocument};
use crate::topology::{self, Topology};
use crate::utils::validation::validate_topology;

/// Everything produced from one configuration
#[derive(Debug)]
pub struct GeneratedTopology {
    pub topology: Topology,
    /// Present when the configuration has a memory section
    pub addresses: Option<AddressRegistry>,
    pub document: TopologyDocument,
}

/// Build the topology and address map described by `config`
pub fn generate_topology(config: &Config) -> Result<GeneratedTopology> {
    let params = config
        .network
        .topology_params()
        .wrap_err("Invalid network configuration")?;
    let endpoints = config.endpoints();

    let topology = topology::build(&endpoints, &params)?;

    validate_topology(&topology).map_err(|e| eyre!("Generated topology is inconsistent: {}", e))?;

    let summary = summarize(&topology);
    info!(
        "Topology has {} routers, {} endpoints and {} links",
        summary.num_routers, summary.num_endpoints, summary.num_links
    );
    for (direction, count) in &summary.links_per_direction {
        debug!("  {}: {} links", direction, count);
    }

    let addresses = match &config.memory {
        Some(memory) => {
            let total_size = memory.total_bytes()?;
            info!("Partitioning {} bytes across {} endpoints", total_size, endpoints.len());
            Some(register_endpoints(&endpoints, total_size)?)
        }
        None => None,
    };

    let document = TopologyDocument::new(&topology, addresses.as_ref());

    Ok(GeneratedTopology {
        topology,
        addresses,
        document,
    })
}

/// Generate the topology described by `config` and write it to `output_path`
pub fn generate_topology_file(
    config: &Config,
    output_path: &Path,
    format: OutputFormat,
) -> Result<GeneratedTopology> {
    let generated = generate_topology(config)?;

    output::write_document(&generated.topology, &generated.document, output_path, format)?;
    info!("Wrote {:?} topology to {:?}", format, output_path);

    Ok(generated)
}
