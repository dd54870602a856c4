pub mod adjacency;
pub mod city_matrix;
pub mod floyd_warshall;
pub mod matrix_algorithm;
pub mod square_matrix;

pub use adjacency::adjacency_matrix;
pub use city_matrix::{CityMatrix, MatrixKind};
pub use floyd_warshall::{FloydWarshall, all_pairs_distances};
pub use matrix_algorithm::{MatrixAlgorithm, RepeatedDijkstra};
pub use square_matrix::SquareMatrix;
