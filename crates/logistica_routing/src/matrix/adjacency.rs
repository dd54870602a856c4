use crate::{
    constants::UNREACHABLE,
    graph::{CityId, RoadGraph},
};

use super::{
    city_matrix::{CityMatrix, MatrixKind},
    square_matrix::SquareMatrix,
};

/// Maps every [`CityId`] to its row in a lexicographically ordered matrix.
pub(crate) fn city_positions(graph: &RoadGraph, sorted_ids: &[CityId]) -> Vec<usize> {
    let mut positions = vec![0; graph.city_count()];
    for (position, city) in sorted_ids.iter().enumerate() {
        positions[city.get()] = position;
    }
    positions
}

pub(crate) fn sorted_city_names(graph: &RoadGraph, sorted_ids: &[CityId]) -> Vec<String> {
    sorted_ids
        .iter()
        .map(|&city| graph.city_name(city).to_string())
        .collect()
}

/// Direct-connection matrix under the current weather.
///
/// The diagonal is always zero. Any other cell holds the active weight of the direct
/// connection, or [`UNREACHABLE`] if the two cities are not directly connected, even when
/// a longer route exists.
pub fn adjacency_matrix(graph: &RoadGraph) -> CityMatrix {
    let sorted_ids = graph.sorted_city_ids();
    let positions = city_positions(graph, &sorted_ids);
    let mut matrix = SquareMatrix::filled(sorted_ids.len(), UNREACHABLE);

    for (from, &city) in sorted_ids.iter().enumerate() {
        matrix.set(from, from, 0.0);

        for edge in graph.out_edges(city) {
            let to = positions[edge.end_city().get()];
            if to != from {
                matrix.set(from, to, edge.weight());
            }
        }
    }

    CityMatrix::new(
        MatrixKind::Adjacency,
        graph.weather(),
        sorted_city_names(graph, &sorted_ids),
        matrix,
    )
}
