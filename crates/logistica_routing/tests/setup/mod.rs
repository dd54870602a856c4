use std::path::PathBuf;

use logistica_routing::{
    graph::RoadGraph,
    parsers::{parser::NetworkParser, road_file::RoadFileParser},
};

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> RoadGraph {
    RoadFileParser.parse(fixture_path(name)).unwrap()
}

pub fn sample_network() -> RoadGraph {
    load_fixture("sample_network.txt")
}

pub fn iberian_network() -> RoadGraph {
    load_fixture("iberia.txt")
}

/// Scratch file path unique to the calling test.
pub fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("logistica_{}_{}", std::process::id(), name))
}
