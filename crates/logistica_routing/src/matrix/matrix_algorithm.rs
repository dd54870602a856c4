use crate::{
    error::GraphError,
    graph::RoadGraph,
    routing::Dijkstra,
    stopwatch::Stopwatch,
};

use super::{
    adjacency::{city_positions, sorted_city_names},
    city_matrix::{CityMatrix, MatrixKind},
    square_matrix::SquareMatrix,
};

/// Computes the shortest travel time between every ordered pair of cities.
pub trait MatrixAlgorithm {
    fn calc_matrix(&mut self, graph: &RoadGraph) -> Result<CityMatrix, GraphError>;
}

/// One [`Dijkstra`] search per source city.
///
/// Cheaper than Floyd-Warshall on sparse networks.
#[derive(Default)]
pub struct RepeatedDijkstra;

impl MatrixAlgorithm for RepeatedDijkstra {
    fn calc_matrix(&mut self, graph: &RoadGraph) -> Result<CityMatrix, GraphError> {
        let stopwatch = Stopwatch::new("repeated_dijkstra/calc_matrix");
        let sorted_ids = graph.sorted_city_ids();
        let positions = city_positions(graph, &sorted_ids);
        let mut matrix = SquareMatrix::filled(sorted_ids.len(), 0.0);
        let mut dijkstra = Dijkstra::new(graph);

        for (from, &city) in sorted_ids.iter().enumerate() {
            let weights = dijkstra.calc_weights(graph, city)?;
            let row = matrix.row_mut(from);
            for (city_index, weight) in weights.into_iter().enumerate() {
                row[positions[city_index]] = weight;
            }
        }

        stopwatch.report();

        Ok(CityMatrix::new(
            MatrixKind::ShortestDistance,
            graph.weather(),
            sorted_city_names(graph, &sorted_ids),
            matrix,
        ))
    }
}
