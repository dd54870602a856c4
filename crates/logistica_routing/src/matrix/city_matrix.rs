use crate::{
    constants::UNREACHABLE,
    error::GraphError,
    weather::{Weather, Weight},
};

use super::square_matrix::SquareMatrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixKind {
    /// Weight of the direct connection only.
    Adjacency,
    /// Shortest travel time over any route.
    ShortestDistance,
}

/// Square matrix whose rows and columns are cities in lexicographic order.
#[derive(Debug, Clone, PartialEq)]
pub struct CityMatrix {
    kind: MatrixKind,
    weather: Weather,
    cities: Vec<String>,
    matrix: SquareMatrix,
}

impl CityMatrix {
    pub(crate) fn new(
        kind: MatrixKind,
        weather: Weather,
        cities: Vec<String>,
        matrix: SquareMatrix,
    ) -> Self {
        debug_assert_eq!(cities.len(), matrix.size());
        debug_assert!(cities.windows(2).all(|pair| pair[0] < pair[1]));

        CityMatrix {
            kind,
            weather,
            cities,
            matrix,
        }
    }

    pub fn kind(&self) -> MatrixKind {
        self.kind
    }

    pub fn weather(&self) -> Weather {
        self.weather
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn matrix(&self) -> &SquareMatrix {
        &self.matrix
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn position(&self, city: &str) -> Option<usize> {
        self.cities
            .binary_search_by(|candidate| candidate.as_str().cmp(city))
            .ok()
    }

    fn require_position(&self, city: &str) -> Result<usize, GraphError> {
        self.position(city)
            .ok_or_else(|| GraphError::UnknownNode(city.to_string()))
    }

    /// Entry for `from -> to`; [`UNREACHABLE`] when there is none.
    pub fn weight(&self, from: &str, to: &str) -> Result<Weight, GraphError> {
        let from = self.require_position(from)?;
        let to = self.require_position(to)?;
        Ok(self.matrix.get(from, to))
    }

    pub fn is_reachable(&self, from: &str, to: &str) -> Result<bool, GraphError> {
        Ok(self.weight(from, to)? != UNREACHABLE)
    }

    /// Every ordered pair of cities with its entry, row by row.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, Weight)> + '_ {
        self.cities.iter().enumerate().flat_map(move |(i, from)| {
            self.cities
                .iter()
                .enumerate()
                .map(move |(j, to)| (from.as_str(), to.as_str(), self.matrix.get(i, j)))
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Weight])> + '_ {
        self.cities
            .iter()
            .map(String::as_str)
            .zip(self.matrix.rows())
    }
}
