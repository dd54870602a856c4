//! Plain-text road network format.
//!
//! One connection per line, whitespace separated:
//!
//! ```text
//! from to normal rain snow storm
//! ```
//!
//! Times are non-negative hours. Blank lines and lines starting with `#` are ignored.
//! The format has no way to express a city without connections.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tracing::{info, warn};

use crate::{
    error::LoadError,
    graph::RoadGraph,
    parsers::parser::NetworkParser,
    weather::{Weather, WeatherProfiles, Weight},
};

const FIELDS_PER_RECORD: usize = 6;

pub struct RoadFileParser;

impl NetworkParser for RoadFileParser {
    fn parse<P: AsRef<Path>>(&self, file: P) -> Result<RoadGraph, LoadError> {
        let file_content = std::fs::read_to_string(&file).map_err(LoadError::Read)?;
        let graph = parse_road_network(&file_content)?;

        info!(
            file = %file.as_ref().display(),
            cities = graph.city_count(),
            connections = graph.connection_count(),
            "Loaded road network"
        );

        Ok(graph)
    }
}

/// Builds a graph from road file text.
///
/// Records with fewer than six fields are skipped with a warning and extra trailing
/// fields are ignored. A repeated `from to` pair replaces the earlier record.
pub fn parse_road_network(text: &str) -> Result<RoadGraph, LoadError> {
    let mut graph = RoadGraph::new();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < FIELDS_PER_RECORD {
            warn!(
                line = line_number,
                fields = fields.len(),
                "Skipping incomplete road record"
            );
            continue;
        }

        let mut times: [Weight; 4] = [0.0; 4];
        for ((time, weather), raw) in times.iter_mut().zip(Weather::ALL).zip(&fields[2..6]) {
            *time = raw.parse().map_err(|_| LoadError::InvalidNumber {
                line: line_number,
                weather,
                value: raw.to_string(),
            })?;
        }

        let [normal, rain, snow, storm] = times;
        graph
            .add_edge(
                fields[0],
                fields[1],
                WeatherProfiles::new(normal, rain, snow, storm),
            )
            .map_err(|source| LoadError::Record {
                line: line_number,
                source,
            })?;
    }

    Ok(graph)
}

/// Writes every connection as one record, in insertion order.
pub fn write_road_network<W: Write>(graph: &RoadGraph, mut writer: W) -> std::io::Result<()> {
    for connection in graph.connections() {
        let profiles = connection.profiles;
        writeln!(
            writer,
            "{} {} {} {} {} {}",
            connection.from,
            connection.to,
            profiles.normal,
            profiles.rain,
            profiles.snow,
            profiles.storm
        )?;
    }

    writer.flush()
}

pub fn save_road_network<P: AsRef<Path>>(graph: &RoadGraph, path: P) -> Result<(), LoadError> {
    let file = File::create(&path).map_err(LoadError::Write)?;
    write_road_network(graph, BufWriter::new(file)).map_err(LoadError::Write)?;

    info!(
        file = %path.as_ref().display(),
        connections = graph.connection_count(),
        "Saved road network"
    );

    Ok(())
}
