use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use clap::ValueEnum;
use logistica_routing::{
    center::find_center,
    export::NetworkSnapshot,
    graph::RoadGraph,
    matrix::{adjacency_matrix, all_pairs_distances},
    routing::{RoutingPath, shortest_path},
};
use tracing::info;

use crate::render::{format_hours, matrix_table, route_lines};

pub const DEFAULT_DATA_FILE: &str = "data/logistica.txt";
pub const DEFAULT_MAX_CITIES: usize = 2000;

#[derive(Debug, Clone)]
pub struct Settings {
    pub data_file: PathBuf,
    pub max_cities: usize,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Dot,
}

/// All-pairs queries are cubic in the number of cities.
pub fn ensure_within_limit(graph: &RoadGraph, max_cities: usize) -> Result<(), anyhow::Error> {
    if graph.city_count() > max_cities {
        bail!(
            "Network has {} cities, all-pairs queries are limited to {} (see --max-cities)",
            graph.city_count(),
            max_cities
        );
    }

    Ok(())
}

pub fn route<W: Write>(
    graph: &RoadGraph,
    from: &str,
    to: &str,
    out: &mut W,
) -> Result<RoutingPath, anyhow::Error> {
    let path = shortest_path(graph, from, to)?;
    writeln!(out, "{}", route_lines(&path))?;
    Ok(path)
}

pub fn center<W: Write>(
    graph: &RoadGraph,
    max_cities: usize,
    out: &mut W,
) -> Result<(), anyhow::Error> {
    ensure_within_limit(graph, max_cities)?;

    let Some(center) = find_center(graph) else {
        writeln!(out, "The network is empty")?;
        return Ok(());
    };

    if !center.is_strongly_connected() {
        writeln!(
            out,
            "Warning: the network is not strongly connected, \
             using its largest component ({} of {} cities)",
            center.component().len(),
            graph.city_count()
        )?;
    }
    writeln!(out, "Graph center ({}): {}", graph.weather(), center.city())?;
    writeln!(out, "Eccentricity: {}", format_hours(center.eccentricity()))?;

    Ok(())
}

pub fn adjacency<W: Write>(graph: &RoadGraph, out: &mut W) -> Result<(), anyhow::Error> {
    writeln!(out, "Adjacency matrix ({}):", graph.weather())?;
    writeln!(out, "{}", matrix_table(&adjacency_matrix(graph)))?;
    Ok(())
}

pub fn distances<W: Write>(
    graph: &RoadGraph,
    max_cities: usize,
    out: &mut W,
) -> Result<(), anyhow::Error> {
    ensure_within_limit(graph, max_cities)?;

    writeln!(out, "Shortest travel times ({}):", graph.weather())?;
    writeln!(out, "{}", matrix_table(&all_pairs_distances(graph)))?;
    Ok(())
}

/// Renders the network, highlighting the shortest route between `route` when given.
pub fn render_snapshot(
    graph: &RoadGraph,
    format: ExportFormat,
    route: Option<(&str, &str)>,
) -> Result<String, anyhow::Error> {
    let path = match route {
        Some((from, to)) => Some(shortest_path(graph, from, to)?),
        None => None,
    };
    let snapshot = NetworkSnapshot::capture(graph, path.as_ref().map(RoutingPath::cities))?;

    Ok(match format {
        ExportFormat::Json => snapshot.to_json()?,
        ExportFormat::Dot => snapshot.to_dot(),
    })
}

pub fn write_export(content: &str, output: &Path) -> Result<(), anyhow::Error> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(output, content)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!(file = %output.display(), "Exported network snapshot");

    Ok(())
}

pub fn export<W: Write>(
    graph: &RoadGraph,
    format: ExportFormat,
    route: Option<(&str, &str)>,
    output: Option<&Path>,
    out: &mut W,
) -> Result<(), anyhow::Error> {
    let content = render_snapshot(graph, format, route)?;

    match output {
        Some(output) => write_export(&content, output)?,
        None => writeln!(out, "{content}")?,
    }

    Ok(())
}
