use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    constants::UNREACHABLE,
    graph::{CityId, RoadGraph},
    matrix::{CityMatrix, all_pairs_distances},
    stopwatch::Stopwatch,
    weather::Weight,
};

use super::components::city_components;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GraphCenter {
    city: String,
    eccentricity: Weight,
    component: Vec<String>,
    strongly_connected: bool,
}

impl GraphCenter {
    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn eccentricity(&self) -> Weight {
        self.eccentricity
    }

    /// Cities the center was chosen from, sorted by name.
    pub fn component(&self) -> &[String] {
        &self.component
    }

    /// `false` when the center was restricted to the largest strongly connected component.
    pub fn is_strongly_connected(&self) -> bool {
        self.strongly_connected
    }
}

/// Eccentricity of every city in `distances`, in row order.
///
/// Unreachable targets are skipped, so a city that reaches nothing has eccentricity zero.
pub fn eccentricities(distances: &CityMatrix) -> Vec<(String, Weight)> {
    distances
        .rows()
        .enumerate()
        .map(|(from, (city, row))| {
            let eccentricity = row
                .iter()
                .enumerate()
                .filter(|&(to, &weight)| to != from && weight != UNREACHABLE)
                .map(|(_, &weight)| weight)
                .fold(0.0, Weight::max);
            (city.to_string(), eccentricity)
        })
        .collect()
}

/// City of minimum eccentricity; ties go to the first city in row order.
pub fn center_from_distances(distances: &CityMatrix) -> Option<(String, Weight)> {
    eccentricities(distances)
        .into_iter()
        .fold(None, |best, (city, eccentricity)| match best {
            Some((_, best_eccentricity)) if best_eccentricity <= eccentricity => best,
            _ => Some((city, eccentricity)),
        })
}

/// Largest component; among equally large ones the first in name order wins.
fn largest_component(components: Vec<Vec<CityId>>) -> Option<Vec<CityId>> {
    components
        .into_iter()
        .fold(None, |best, component| match best {
            Some(best) if best.len() >= component.len() => Some(best),
            _ => Some(component),
        })
}

/// City with minimum eccentricity under the current weather.
///
/// When the graph is not strongly connected the search is restricted to the subgraph
/// induced by its largest strongly connected component. Cities are considered in name
/// order and the first one with minimal eccentricity wins. Returns `None` for an empty
/// graph.
pub fn find_center(graph: &RoadGraph) -> Option<GraphCenter> {
    let stopwatch = Stopwatch::new("center/find_center");
    let components = city_components(graph);
    let strongly_connected = components.len() == 1;

    let component = largest_component(components)?;
    let component: Vec<String> = component
        .into_iter()
        .map(|city| graph.city_name(city).to_string())
        .collect();

    let subgraph = if strongly_connected {
        None
    } else {
        warn!(
            component_size = component.len(),
            cities = graph.city_count(),
            "Graph is not strongly connected, computing the center of its largest component"
        );
        Some(graph.induced_subgraph(component.as_slice()))
    };

    let distances = all_pairs_distances(subgraph.as_ref().unwrap_or(graph));
    let (city, eccentricity) = center_from_distances(&distances)?;

    debug!(%city, eccentricity, "Found graph center");
    stopwatch.report();

    Some(GraphCenter {
        city,
        eccentricity,
        component,
        strongly_connected,
    })
}
