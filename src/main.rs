use clap::Parser;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use netshape::config_loader;
use netshape::orchestrator;
use netshape::output::{summarize, OutputFormat};

/// Topology generator for ring and torus interconnection networks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the topology configuration YAML file
    #[arg(short, long)]
    config: PathBuf,

    /// Output file for the generated topology
    #[arg(short, long, default_value = "topology.yaml")]
    output: PathBuf,

    /// Output format; inferred from the output extension when omitted
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Validate the configuration and topology without writing output
    #[arg(long)]
    check: bool,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str())).init();

    info!("Configuration file: {:?}", args.config);

    config_loader::check_config_compatibility(&args.config)?;
    let config = config_loader::load_config(&args.config)?;

    if args.check {
        let generated = orchestrator::generate_topology(&config)?;
        let summary = summarize(&generated.topology);
        println!("{}", serde_yaml::to_string(&summary)?);
        info!("Configuration and topology are valid");
        return Ok(());
    }

    let format = match args.format {
        Some(format) => format,
        None => OutputFormat::from_path(&args.output).ok_or_else(|| {
            eyre!(
                "Cannot infer output format from '{}'; pass --format",
                args.output.display()
            )
        })?,
    };

    info!("Output file: {:?}", args.output);
    orchestrator::generate_topology_file(&config, &args.output, format)?;

    info!("Topology generation completed successfully");
    Ok(())
}
