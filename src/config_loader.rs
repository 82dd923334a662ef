use crate::config::Config;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::{info, warn};
use std::fs::File;
use std::path::Path;

/// Option names from older simulator configurations that are not recognized
const LEGACY_OPTIONS: &[(&str, &str)] = &[
    ("mesh_rows", "x_length"),
    ("num_cpus", "num_routers"),
];

/// Load and parse configuration from a YAML file
pub fn load_config(config_path: &Path) -> Result<Config> {
    info!("Loading configuration from: {:?}", config_path);

    // Open the configuration file
    let file = File::open(config_path)
        .wrap_err_with(|| format!("Failed to open configuration file '{}'", config_path.display()))?;

    // Parse the YAML content
    let config: Config = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse configuration file '{}'", config_path.display()))?;

    info!(
        "Detected {} topology with {} routers",
        config.network.topology, config.network.num_routers
    );

    // Validate the configuration
    config.validate()?;

    warn_ignored_parameters(&config);

    Ok(config)
}

/// Warn about shape parameters that the chosen topology does not use
pub fn warn_ignored_parameters(config: &Config) {
    for parameter in config.network.ignored_parameters() {
        warn!(
            "{} is ignored by the {} topology",
            parameter, config.network.topology
        );
    }
}

/// Check a configuration file for legacy option names and warn about them
///
/// Returns the legacy names found, each paired with the option replacing it.
pub fn check_config_compatibility(config_path: &Path) -> Result<Vec<(&'static str, &'static str)>> {
    let content = std::fs::read_to_string(config_path)
        .wrap_err_with(|| format!("Failed to read configuration file '{}'", config_path.display()))?;

    let found: Vec<(&'static str, &'static str)> = LEGACY_OPTIONS
        .iter()
        .filter(|(legacy, _)| {
            content
                .lines()
                .any(|line| line.trim_start().starts_with(&format!("{}:", legacy)))
        })
        .copied()
        .collect();

    for (legacy, replacement) in &found {
        warn!(
            "Configuration uses '{}', which is not recognized. Use '{}' instead.",
            legacy, replacement
        );
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_ring_config() {
        let yaml = r#"
network:
  topology: ring
  num_routers: 4
  router_latency: 2
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.network.num_routers, 4);
        assert_eq!(config.network.router_latency, 2);
    }

    #[test]
    fn test_load_invalid_config() {
        let yaml = r#"
network:
  topology: torus2d
  num_routers: 10
  x_length: 3
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid network configuration"), "{}", err);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_config(Path::new("/nonexistent/netshape.yaml")).is_err());
    }

    #[test]
    fn test_check_legacy_options() {
        let yaml = r#"
network:
  topology: torus2d
  num_routers: 16
  mesh_rows: 4
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        let found = check_config_compatibility(temp_file.path()).unwrap();
        assert_eq!(found, vec![("mesh_rows", "x_length")]);
    }
}
