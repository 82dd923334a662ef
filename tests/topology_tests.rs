#[cfg(test)]
mod topology_tests {
    use std::collections::HashMap;
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use tempfile::NamedTempFile;

    use netshape::config_loader::load_config;
    use netshape::orchestrator::{generate_topology, generate_topology_file};
    use netshape::output::OutputFormat;
    use netshape::topology::{
        build, neighbor, ConfigurationError, Direction, Endpoint, InternalLink, Shape, Topology,
        TopologyParams,
    };
    use netshape::utils::validation::validate_topology;

    fn config_path(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("configs").join(name)
    }

    fn write_config(yaml: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();
        temp_file
    }

    /// Count the partners of every internal link: same pair of routers
    /// reversed, leaving through the opposite port
    fn partner_counts(topology: &Topology) -> Vec<usize> {
        let mut index: HashMap<(usize, usize, Direction), usize> = HashMap::new();
        for link in &topology.internal_links {
            *index.entry((link.src_router, link.dst_router, link.src_outport)).or_default() += 1;
        }
        topology
            .internal_links
            .iter()
            .map(|link| {
                index
                    .get(&(link.dst_router, link.src_router, link.src_outport.opposite()))
                    .copied()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn link(topology: &Topology, src: usize, direction: Direction) -> &InternalLink {
        topology
            .internal_links
            .iter()
            .find(|l| l.src_router == src && l.src_outport == direction)
            .unwrap()
    }

    /// Link counts and pairing hold for every shape and endpoint count
    #[test]
    fn test_counts_and_pairing() {
        let cases = vec![
            (TopologyParams::new(4, Shape::Ring), 2),
            (TopologyParams::new(7, Shape::Ring), 2),
            (TopologyParams::new(8, Shape::Torus2d { x_length: 4, y_length: None }), 4),
            (TopologyParams::new(12, Shape::Torus2d { x_length: 3, y_length: Some(4) }), 4),
            (TopologyParams::new(8, Shape::Torus3d { x_length: 2, y_length: 2, z_length: 2 }), 6),
            (TopologyParams::new(60, Shape::Torus3d { x_length: 5, y_length: 4, z_length: 3 }), 6),
        ];

        for (params, directions) in cases {
            for num_endpoints in [1, params.num_routers, 2 * params.num_routers + 3] {
                let topology = build(&Endpoint::numbered(num_endpoints), &params).unwrap();

                assert_eq!(topology.internal_links.len(), params.num_routers * directions);
                assert_eq!(topology.external_links.len(), num_endpoints);
                assert!(partner_counts(&topology).iter().all(|&count| count == 1), "{:?}", params);
                assert!(validate_topology(&topology).is_ok());
            }
        }
    }

    #[test]
    fn test_ring_of_four() {
        let topology = build(&Endpoint::numbered(4), &TopologyParams::new(4, Shape::Ring)).unwrap();

        assert_eq!(topology.internal_links.len(), 8);
        assert_eq!(link(&topology, 0, Direction::Right).dst_router, 1);
        assert_eq!(link(&topology, 3, Direction::Right).dst_router, 0);
        assert_eq!(link(&topology, 3, Direction::Right).dst_inport, Direction::Left);
    }

    #[test]
    fn test_torus2d_eight_routers() {
        let params = TopologyParams::new(8, Shape::Torus2d { x_length: 4, y_length: None });
        let topology = build(&Endpoint::numbered(8), &params).unwrap();

        assert_eq!(link(&topology, 0, Direction::North).dst_router, 4);
        assert_eq!(link(&topology, 4, Direction::North).dst_router, 0);
        assert_eq!(link(&topology, 3, Direction::East).dst_router, 0);
        assert_eq!(link(&topology, 3, Direction::East).dst_inport, Direction::West);
    }

    #[test]
    fn test_torus3d_cube() {
        let params = TopologyParams::new(8, Shape::Torus3d { x_length: 2, y_length: 2, z_length: 2 });
        let topology = build(&Endpoint::numbered(8), &params).unwrap();

        assert_eq!(link(&topology, 0, Direction::Up).dst_router, 4);
        assert_eq!(link(&topology, 4, Direction::Up).dst_router, 0);
        assert_eq!(link(&topology, 0, Direction::East).dst_router, 1);
    }

    #[test]
    fn test_torus3d_north_stays_in_plane() {
        let params = TopologyParams::new(18, Shape::Torus3d { x_length: 3, y_length: 2, z_length: 3 });
        let topology = build(&[], &params).unwrap();

        // Router 9 sits in the top row of plane 1 (routers 6..12); north wraps within that plane
        assert_eq!(link(&topology, 9, Direction::North).dst_router, 6);
        assert_eq!(link(&topology, 6, Direction::North).dst_router, 9);
        assert_eq!(link(&topology, 14, Direction::East).dst_router, 12);
        assert_eq!(link(&topology, 2, Direction::Down).dst_router, 14);
    }

    #[test]
    fn test_neighbor_lookup_on_validated_dims() {
        let dims = Shape::Torus2d { x_length: 4, y_length: None }.dims(8).unwrap();

        assert_eq!(neighbor(0, Direction::North, &dims), Some(4));
        assert_eq!(neighbor(3, Direction::East, &dims), Some(0));
        assert_eq!(neighbor(0, Direction::Up, &dims), None);
        assert_eq!(neighbor(0, Direction::Right, &dims), None);
        assert_eq!(neighbor(100, Direction::East, &dims), None);
    }

    #[test]
    fn test_invalid_shape_fails_before_building() {
        let params = TopologyParams::new(10, Shape::Torus2d { x_length: 3, y_length: None });
        let result = build(&Endpoint::numbered(10), &params);

        match result {
            Err(ConfigurationError::ProductMismatch { product, num_routers, .. }) => {
                assert_eq!(product, 9);
                assert_eq!(num_routers, 10);
            }
            other => panic!("expected a product mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_build_twice_is_identical() {
        let params = TopologyParams::new(16, Shape::Torus2d { x_length: 4, y_length: Some(4) })
            .with_link_latency(2);
        let endpoints = Endpoint::numbered(20);

        let first = build(&endpoints, &params).unwrap();
        let second = build(&endpoints, &params).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_shipped_configs_generate() {
        for (name, routers, links_per_router) in [("ring.yaml", 16, 2), ("torus2d.yaml", 64, 4), ("torus3d.yaml", 64, 6)] {
            let config = load_config(&config_path(name)).unwrap();
            let generated = generate_topology(&config).unwrap();

            assert_eq!(generated.topology.num_routers(), routers, "{}", name);
            assert_eq!(generated.topology.internal_links.len(), routers * links_per_router, "{}", name);
        }
    }

    #[test]
    fn test_config_to_yaml_file() {
        let config_file = write_config(
            r#"
network:
  topology: torus2d
  num_routers: 4
  x_length: 2
  link_latency: 3
endpoints:
  names: ["l1_cntrl0", "l1_cntrl1", "dir_cntrl0", "dir_cntrl1"]
memory:
  total_size: "4KB"
"#,
        );

        let config = load_config(config_file.path()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("topology.yaml");
        generate_topology_file(&config, &output, OutputFormat::Yaml).unwrap();

        let document: serde_yaml::Value = serde_yaml::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(document["shape"]["kind"].as_str(), Some("torus2d"));
        assert_eq!(document["external_links"][2]["endpoint_name"].as_str(), Some("dir_cntrl0"));
        assert_eq!(document["internal_links"][0]["link_id"].as_u64(), Some(4));
        assert_eq!(document["internal_links"][0]["latency"].as_u64(), Some(3));
        assert_eq!(document["address_map"][3]["range"]["start"].as_u64(), Some(3072));
    }

    #[test]
    fn test_config_with_mismatched_product_is_rejected() {
        let config_file = write_config(
            r#"
network:
  topology: torus3d
  num_routers: 10
  x_length: 2
  y_length: 2
  z_length: 2
"#,
        );

        assert!(load_config(config_file.path()).is_err());
    }
}
