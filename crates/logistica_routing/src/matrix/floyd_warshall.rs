use tracing::debug;

use crate::{
    constants::UNREACHABLE, error::GraphError, graph::RoadGraph, stopwatch::Stopwatch,
};

use super::{
    adjacency::adjacency_matrix,
    city_matrix::{CityMatrix, MatrixKind},
    matrix_algorithm::MatrixAlgorithm,
    square_matrix::SquareMatrix,
};

/// Floyd-Warshall over the active weights: O(n^3) time, O(n^2) space.
#[derive(Default)]
pub struct FloydWarshall;

impl FloydWarshall {
    pub fn new() -> Self {
        FloydWarshall
    }

    fn relax(matrix: &mut SquareMatrix) {
        let size = matrix.size();
        let mut via_row = vec![UNREACHABLE; size];

        for via in 0..size {
            // Row `via` is left unchanged by its own pass since distance(via, via) is zero.
            via_row.copy_from_slice(matrix.row(via));

            for from in 0..size {
                let to_via = matrix.get(from, via);
                if to_via == UNREACHABLE {
                    continue;
                }

                for (current, &via_to) in matrix.row_mut(from).iter_mut().zip(&via_row) {
                    let candidate = to_via + via_to;
                    if candidate < *current {
                        *current = candidate;
                    }
                }
            }
        }
    }

    pub fn distances(&self, graph: &RoadGraph) -> CityMatrix {
        let stopwatch = Stopwatch::new("floyd_warshall/distances");
        let adjacency = adjacency_matrix(graph);

        let cities = adjacency.cities().to_vec();
        let mut matrix = adjacency.matrix().clone();
        Self::relax(&mut matrix);

        debug!(cities = cities.len(), "Computed all-pairs distances");
        stopwatch.report();

        CityMatrix::new(
            MatrixKind::ShortestDistance,
            graph.weather(),
            cities,
            matrix,
        )
    }
}

impl MatrixAlgorithm for FloydWarshall {
    fn calc_matrix(&mut self, graph: &RoadGraph) -> Result<CityMatrix, GraphError> {
        Ok(self.distances(graph))
    }
}

/// Shortest travel time between every ordered pair of cities.
///
/// Every pair has an entry: zero on the diagonal and [`UNREACHABLE`] where no route exists.
pub fn all_pairs_distances(graph: &RoadGraph) -> CityMatrix {
    FloydWarshall::new().distances(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        matrix::{adjacency::adjacency_matrix, matrix_algorithm::RepeatedDijkstra},
        test_graph_utils::test_graph::{create_iberian_network, create_sample_network},
        weather::Weather,
    };

    #[test]
    fn test_all_pairs_distances() {
        let graph = create_sample_network();

        let distances = all_pairs_distances(&graph);

        assert_eq!(distances.kind(), MatrixKind::ShortestDistance);
        assert_eq!(distances.weight("A", "D"), Ok(10.0));
        assert_eq!(distances.weight("A", "C"), Ok(8.0));
        assert_eq!(distances.weight("B", "D"), Ok(5.0));
        assert_eq!(distances.weight("D", "A"), Ok(UNREACHABLE));
    }

    #[test]
    fn test_every_pair_has_an_entry() {
        let graph = create_iberian_network();

        let distances = all_pairs_distances(&graph);

        assert_eq!(distances.entries().count(), 8 * 8);
        for (from, to, weight) in distances.entries() {
            if from == to {
                assert_eq!(weight, 0.0);
            }
        }
    }

    #[test]
    fn test_distance_never_exceeds_direct_connection() {
        let graph = create_iberian_network();

        for weather in Weather::ALL {
            let mut graph = graph.clone();
            graph.set_weather(weather);
            let distances = all_pairs_distances(&graph);

            for connection in graph.connections() {
                let distance = distances.weight(connection.from, connection.to).unwrap();
                assert!(distance <= connection.weight);
            }

            for (from, via, first) in distances.entries() {
                for to in distances.cities() {
                    let second = distances.weight(via, to).unwrap();
                    assert!(distances.weight(from, to).unwrap() <= first + second + 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_matches_repeated_dijkstra() {
        let mut graph = create_iberian_network();

        for weather in Weather::ALL {
            graph.set_weather(weather);

            let floyd = FloydWarshall::new().calc_matrix(&graph).unwrap();
            let dijkstra = RepeatedDijkstra.calc_matrix(&graph).unwrap();

            assert_eq!(floyd.cities(), dijkstra.cities());
            for ((_, _, a), (_, _, b)) in floyd.entries().zip(dijkstra.entries()) {
                assert!(a == b || (a - b).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_differs_from_adjacency_on_indirect_routes() {
        let graph = create_sample_network();

        let distances = all_pairs_distances(&graph);
        let adjacency = adjacency_matrix(&graph);

        for ((from, to, direct), (_, _, shortest)) in adjacency.entries().zip(distances.entries()) {
            let has_connection = from == to || graph.connection(from, to).is_some();
            let indirect_only = !has_connection && shortest != UNREACHABLE;

            assert_eq!(direct != shortest, indirect_only || shortest < direct);
            if indirect_only {
                assert_eq!(direct, UNREACHABLE);
            }
        }
    }

    #[test]
    fn test_empty_graph() {
        let distances = all_pairs_distances(&RoadGraph::new());

        assert!(distances.is_empty());
        assert_eq!(distances.entries().count(), 0);
    }
}
