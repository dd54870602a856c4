use crate::{
    error::GraphError,
    graph::{CityId, RoadGraph},
};

use super::routing_path::{RoutingPath, RoutingPathLeg};

/// Builds a path by reading every leg's weight back from the graph.
///
/// The cost never comes from a search label, so it always matches the connections
/// actually traversed.
pub(crate) fn build_routing_path(
    graph: &RoadGraph,
    cities: &[CityId],
) -> Result<RoutingPath, GraphError> {
    let Some(&start) = cities.first() else {
        return Err(GraphError::NoPath {
            from: String::new(),
            to: String::new(),
        });
    };

    let mut legs: Vec<RoutingPathLeg> = Vec::with_capacity(cities.len().saturating_sub(1));

    for pair in cities.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let edge = graph
            .edge_between(from, to)
            .ok_or_else(|| GraphError::EdgeNotFound {
                from: graph.city_name(from).to_string(),
                to: graph.city_name(to).to_string(),
            })?;

        legs.push(RoutingPathLeg::new(
            graph.city_name(from).to_string(),
            graph.city_name(to).to_string(),
            edge.weight(),
        ));
    }

    Ok(RoutingPath::new(
        graph.city_name(start).to_string(),
        legs,
        graph.weather(),
    ))
}
