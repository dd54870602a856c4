//! Point-in-time snapshots of a road network for visualization.

use std::fmt;

use serde::Serialize;

use crate::{
    error::GraphError,
    graph::RoadGraph,
    weather::{Weather, WeatherProfiles, Weight},
};

const HIGHLIGHT_COLOR: &str = "red";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SnapshotConnection {
    pub from: String,
    pub to: String,
    pub weight: Weight,
    pub profiles: WeatherProfiles,
    pub highlighted: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NetworkSnapshot {
    weather: Weather,
    cities: Vec<String>,
    connections: Vec<SnapshotConnection>,
    highlighted_path: Vec<String>,
}

impl NetworkSnapshot {
    /// Captures the graph under its current weather.
    ///
    /// Every city of `highlighted_path` must exist and every consecutive pair must be a
    /// connection of the graph.
    pub fn capture(
        graph: &RoadGraph,
        highlighted_path: Option<&[String]>,
    ) -> Result<NetworkSnapshot, GraphError> {
        let highlighted_path = highlighted_path.unwrap_or_default();

        for city in highlighted_path {
            graph.require_city(city)?;
        }
        for pair in highlighted_path.windows(2) {
            if graph.connection(&pair[0], &pair[1]).is_none() {
                return Err(GraphError::EdgeNotFound {
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                });
            }
        }

        let connections = graph
            .connections()
            .map(|connection| SnapshotConnection {
                from: connection.from.to_string(),
                to: connection.to.to_string(),
                weight: connection.weight,
                profiles: connection.profiles,
                highlighted: highlighted_path
                    .windows(2)
                    .any(|pair| pair[0] == connection.from && pair[1] == connection.to),
            })
            .collect();

        Ok(NetworkSnapshot {
            weather: graph.weather(),
            cities: graph.cities().into_iter().map(str::to_string).collect(),
            connections,
            highlighted_path: highlighted_path.to_vec(),
        })
    }

    pub fn weather(&self) -> Weather {
        self.weather
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn connections(&self) -> &[SnapshotConnection] {
        &self.connections
    }

    pub fn highlighted_path(&self) -> &[String] {
        &self.highlighted_path
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Graphviz DOT rendering; edges are labelled with their active travel time.
    pub fn to_dot(&self) -> String {
        Dot(self).to_string()
    }
}

struct Dot<'a>(&'a NetworkSnapshot);

fn quoted(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;

        writeln!(f, "digraph logistica {{")?;
        writeln!(f, "    label=\"weather: {}\";", snapshot.weather)?;
        writeln!(f, "    node [shape=ellipse];")?;

        for city in &snapshot.cities {
            if snapshot.highlighted_path.contains(city) {
                writeln!(
                    f,
                    "    {} [color={HIGHLIGHT_COLOR}, penwidth=2];",
                    quoted(city)
                )?;
            } else {
                writeln!(f, "    {};", quoted(city))?;
            }
        }

        for connection in &snapshot.connections {
            write!(
                f,
                "    {} -> {} [label=\"{:.2}\"",
                quoted(&connection.from),
                quoted(&connection.to),
                connection.weight
            )?;
            if connection.highlighted {
                write!(f, ", color={HIGHLIGHT_COLOR}, penwidth=2")?;
            }
            writeln!(f, "];")?;
        }

        writeln!(f, "}}")
    }
}
