//! # Topology Output Module
//!
//! This module turns a built topology into the documents handed to the
//! downstream simulation engine or to a human reader.
//!
//! ## Key Components
//!
//! - `types.rs`: Serializable topology document
//! - `dot.rs`: GraphViz rendering of the router graph
//! - `summary.rs`: Link and degree statistics
//!
//! ## Formats
//!
//! - **YAML** (default) and **JSON**: the full [`TopologyDocument`]
//! - **DOT**: the router graph only, for visualization

pub mod types;
pub mod dot;
pub mod summary;

pub use types::{ShapeSummary, TopologyDocument};
pub use dot::generate_dot;
pub use summary::{summarize, TopologySummary};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::fs;
use std::path::Path;

use crate::topology::Topology;

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
    Dot,
}

impl OutputFormat {
    /// Infer the format from a file extension, if it is a known one
    pub fn from_path(path: &Path) -> Option<OutputFormat> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            "json" => Some(OutputFormat::Json),
            "dot" | "gv" => Some(OutputFormat::Dot),
            _ => None,
        }
    }
}

/// Render `document` (or, for DOT, `topology`) in `format`
pub fn render(topology: &Topology, document: &TopologyDocument, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Yaml => serde_yaml::to_string(document).wrap_err("Failed to serialize topology to YAML")?,
        OutputFormat::Json => {
            serde_json::to_string_pretty(document).wrap_err("Failed to serialize topology to JSON")?
        }
        OutputFormat::Dot => generate_dot(topology),
    };
    Ok(rendered)
}

/// Render and write the topology to `path`, creating parent directories
pub fn write_document(
    topology: &Topology,
    document: &TopologyDocument,
    path: &Path,
    format: OutputFormat,
) -> Result<()> {
    let rendered = render(topology, document, format)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create output directory '{}'", parent.display()))?;
        }
    }

    fs::write(path, rendered).wrap_err_with(|| format!("Failed to write topology to '{}'", path.display()))?;
    Ok(())
}
