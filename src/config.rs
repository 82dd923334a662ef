use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::topology::{ConfigurationError, Endpoint, Shape, ShapeKind, TopologyParams};
use crate::utils::size::{parse_memory_size, SizeParseError};

/// Top-level configuration structure that mirrors the YAML configuration
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    /// (Optional) Endpoint nodes; one per router when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<EndpointsConfig>,
    /// (Optional) Memory to partition across the endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemoryConfig>,
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.network.topology_params()?;

        if let Some(endpoints) = &self.endpoints {
            endpoints.validate()?;
        }

        if let Some(memory) = &self.memory {
            let total = memory.total_bytes()?;
            let num_endpoints = self.endpoints().len();
            if total < num_endpoints as u64 {
                return Err(ValidationError::InvalidMemory(format!(
                    "total_size of {} bytes cannot be split across {} endpoints",
                    total, num_endpoints
                )));
            }
        }

        Ok(())
    }

    /// Endpoints in attachment order
    pub fn endpoints(&self) -> Vec<Endpoint> {
        match &self.endpoints {
            Some(EndpointsConfig { names: Some(names), .. }) => {
                names.iter().map(Endpoint::new).collect()
            }
            Some(EndpointsConfig { count: Some(count), .. }) => Endpoint::numbered(*count),
            _ => Endpoint::numbered(self.network.num_routers),
        }
    }
}

fn default_latency() -> u32 {
    1
}

/// Network options: the shape plus the flat set of shape parameters
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NetworkConfig {
    /// Topology family: ring, torus2d or torus3d
    pub topology: ShapeKind,
    pub num_routers: usize,
    /// Row width (number of columns) for both torus shapes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_length: Option<usize>,
    /// Number of rows; derived from `num_routers / x_length` for torus2d when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_length: Option<usize>,
    /// Number of planes (torus3d only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_length: Option<usize>,
    /// Latency of every link, in cycles (default: 1)
    #[serde(default = "default_latency")]
    pub link_latency: u32,
    /// Processing latency of every router, in cycles (default: 1)
    #[serde(default = "default_latency")]
    pub router_latency: u32,
}

impl NetworkConfig {
    /// Convert the flat parameter set into the shape variant it describes
    pub fn shape(&self) -> Result<Shape, ConfigurationError> {
        let require = |value: Option<usize>, parameter: &'static str| {
            value.ok_or(ConfigurationError::MissingParameter {
                shape: self.topology,
                parameter,
            })
        };

        Ok(match self.topology {
            ShapeKind::Ring => Shape::Ring,
            ShapeKind::Torus2d => Shape::Torus2d {
                x_length: require(self.x_length, "x_length")?,
                y_length: self.y_length,
            },
            ShapeKind::Torus3d => Shape::Torus3d {
                x_length: require(self.x_length, "x_length")?,
                y_length: require(self.y_length, "y_length")?,
                z_length: require(self.z_length, "z_length")?,
            },
        })
    }

    /// Shape parameters that are set but have no meaning for the chosen shape
    pub fn ignored_parameters(&self) -> Vec<&'static str> {
        let set = [
            ("x_length", self.x_length.is_some()),
            ("y_length", self.y_length.is_some()),
            ("z_length", self.z_length.is_some()),
        ];
        let used: &[&str] = match self.topology {
            ShapeKind::Ring => &[],
            ShapeKind::Torus2d => &["x_length", "y_length"],
            ShapeKind::Torus3d => &["x_length", "y_length", "z_length"],
        };

        set.iter()
            .filter(|(name, is_set)| *is_set && !used.contains(name))
            .map(|(name, _)| *name)
            .collect()
    }

    /// Full build parameters, with the shape checked against the router count
    pub fn topology_params(&self) -> Result<TopologyParams, ConfigurationError> {
        let shape = self.shape()?;
        shape.dims(self.num_routers)?;
        Ok(TopologyParams::new(self.num_routers, shape)
            .with_link_latency(self.link_latency)
            .with_router_latency(self.router_latency))
    }
}

/// Endpoint node definitions, either explicit names or a count
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct EndpointsConfig {
    /// (Optional) Endpoint names in attachment order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
    /// (Optional) Number of endpoints, named endpoint0, endpoint1, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl EndpointsConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        match (&self.names, self.count) {
            (Some(_), Some(_)) => Err(ValidationError::InvalidEndpoints(
                "names and count are mutually exclusive".to_string(),
            )),
            (None, None) => Err(ValidationError::InvalidEndpoints(
                "either names or count must be given".to_string(),
            )),
            (Some(names), None) => {
                if names.is_empty() {
                    return Err(ValidationError::InvalidEndpoints(
                        "names cannot be an empty list".to_string(),
                    ));
                }
                let mut seen = HashSet::new();
                for name in names {
                    if name.trim().is_empty() {
                        return Err(ValidationError::InvalidEndpoints(
                            "endpoint names cannot be empty".to_string(),
                        ));
                    }
                    if !seen.insert(name) {
                        return Err(ValidationError::InvalidEndpoints(format!(
                            "duplicate endpoint name '{}'",
                            name
                        )));
                    }
                }
                Ok(())
            }
            (None, Some(0)) => Err(ValidationError::InvalidEndpoints(
                "count must be at least 1".to_string(),
            )),
            (None, Some(_)) => Ok(()),
        }
    }
}

/// Memory to partition across the endpoints
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MemoryConfig {
    /// Total size, e.g. "512MB"
    pub total_size: String,
}

impl MemoryConfig {
    pub fn total_bytes(&self) -> Result<u64, SizeParseError> {
        parse_memory_size(&self.total_size)
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid network configuration: {0}")]
    InvalidNetwork(#[from] ConfigurationError),
    #[error("Invalid endpoints configuration: {0}")]
    InvalidEndpoints(String),
    #[error("Invalid memory configuration: {0}")]
    InvalidMemory(String),
}

impl From<SizeParseError> for ValidationError {
    fn from(err: SizeParseError) -> Self {
        ValidationError::InvalidMemory(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_torus2d_config_parsing() {
        let yaml = r#"
network:
  topology: torus2d
  num_routers: 16
  x_length: 4
  link_latency: 2
endpoints:
  count: 32
memory:
  total_size: "512MB"
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_ok());

        assert_eq!(config.network.topology, ShapeKind::Torus2d);
        assert_eq!(config.network.link_latency, 2);
        assert_eq!(config.network.router_latency, 1);
        assert_eq!(config.network.shape().unwrap(), Shape::Torus2d { x_length: 4, y_length: None });
        assert_eq!(config.endpoints().len(), 32);
        assert_eq!(config.memory.as_ref().unwrap().total_bytes(), Ok(512 << 20));
    }

    #[test]
    fn test_default_endpoints_follow_routers() {
        let yaml = r#"
network:
  topology: ring
  num_routers: 6
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_ok());
        let endpoints = config.endpoints();
        assert_eq!(endpoints.len(), 6);
        assert_eq!(endpoints[5].name, "endpoint5");
    }

    #[test]
    fn test_named_endpoints() {
        let yaml = r#"
network:
  topology: Torus3D
  num_routers: 8
  x_length: 2
  y_length: 2
  z_length: 2
endpoints:
  names: ["l1_cntrl0", "l1_cntrl1", "dir_cntrl0"]
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_ok());
        let names: Vec<String> = config.endpoints().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["l1_cntrl0", "l1_cntrl1", "dir_cntrl0"]);
    }

    #[test]
    fn test_missing_shape_parameter() {
        let yaml = r#"
network:
  topology: torus3d
  num_routers: 8
  x_length: 2
  y_length: 4
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidNetwork(ConfigurationError::MissingParameter { parameter: "z_length", .. })
        ));
    }

    #[test]
    fn test_product_mismatch_is_rejected() {
        let yaml = r#"
network:
  topology: torus2d
  num_routers: 10
  x_length: 3
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidNetwork(ConfigurationError::ProductMismatch { .. }))
        ));
    }

    #[test]
    fn test_endpoint_validation_errors() {
        let both = EndpointsConfig { names: Some(vec!["a".to_string()]), count: Some(1) };
        assert!(both.validate().is_err());

        let neither = EndpointsConfig::default();
        assert!(neither.validate().is_err());

        let empty = EndpointsConfig { names: Some(vec![]), count: None };
        assert!(empty.validate().is_err());

        let duplicate = EndpointsConfig { names: Some(vec!["a".to_string(), "a".to_string()]), count: None };
        assert!(duplicate.validate().is_err());

        let zero = EndpointsConfig { names: None, count: Some(0) };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_memory_validation() {
        let yaml = r#"
network:
  topology: ring
  num_routers: 4
memory:
  total_size: "plenty"
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(config.validate(), Err(ValidationError::InvalidMemory(_))));

        let yaml = r#"
network:
  topology: ring
  num_routers: 4
memory:
  total_size: "3"
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(config.validate(), Err(ValidationError::InvalidMemory(_))));
    }

    #[test]
    fn test_ignored_parameters() {
        let network = NetworkConfig {
            topology: ShapeKind::Ring,
            num_routers: 4,
            x_length: Some(2),
            y_length: None,
            z_length: Some(2),
            link_latency: 1,
            router_latency: 1,
        };
        assert_eq!(network.ignored_parameters(), vec!["x_length", "z_length"]);

        let network = NetworkConfig { topology: ShapeKind::Torus3d, y_length: Some(1), ..network };
        assert!(network.ignored_parameters().is_empty());
    }
}
