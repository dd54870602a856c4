use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, warn};

use crate::constants::{INVALID_NODE, UNREACHABLE, WEIGHT_TOLERANCE};
use crate::error::GraphError;
use crate::graph::{CityId, RoadEdge, RoadGraph};
use crate::stopwatch::Stopwatch;
use crate::weather::Weight;

use super::routing_path::RoutingPath;
use super::routing_path_builder::build_routing_path;

#[derive(Copy, Clone, Debug)]
struct HeapItem {
    node_id: usize,
    weight: Weight,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip weight to make this a min-heap
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.node_id.cmp(&self.node_id))
    }
}

#[derive(Clone)]
struct NodeData {
    weight: Weight,
    settled: bool,
    parent: usize,
}

impl NodeData {
    fn new() -> Self {
        NodeData {
            weight: UNREACHABLE,
            settled: false,
            parent: INVALID_NODE,
        }
    }
}

/// Single-source shortest paths over the active weights of a [`RoadGraph`].
pub struct Dijkstra {
    heap: BinaryHeap<HeapItem>,
    data: Vec<NodeData>,
}

fn checked_weight(graph: &RoadGraph, edge: &RoadEdge) -> Result<Weight, GraphError> {
    let weight = edge.weight();

    if weight.is_nan() || weight.is_infinite() {
        return Err(GraphError::NonFiniteWeight {
            from: graph.city_name(edge.start_city()).to_string(),
            to: graph.city_name(edge.end_city()).to_string(),
            weather: graph.weather(),
            value: weight,
        });
    }

    if weight < 0.0 {
        return Err(GraphError::NegativeWeight {
            from: graph.city_name(edge.start_city()).to_string(),
            to: graph.city_name(edge.end_city()).to_string(),
            weather: graph.weather(),
            value: weight,
        });
    }

    Ok(weight)
}

impl Dijkstra {
    pub fn new(graph: &RoadGraph) -> Self {
        Dijkstra {
            heap: BinaryHeap::with_capacity(graph.city_count()),
            data: vec![NodeData::new(); graph.city_count()],
        }
    }

    fn init(&mut self, graph: &RoadGraph, start: CityId) {
        self.heap.clear();
        self.data.clear();
        self.data.resize(graph.city_count(), NodeData::new());

        self.data[start.get()].weight = 0.0;
        self.heap.push(HeapItem {
            node_id: start.get(),
            weight: 0.0,
        });
    }

    /// Settles nodes from `start` until `target` is settled, or every reachable node when
    /// `target` is `None`.
    fn run(
        &mut self,
        graph: &RoadGraph,
        start: CityId,
        target: Option<CityId>,
    ) -> Result<(), GraphError> {
        self.init(graph, start);

        let mut iterations = 0;
        let mut relaxed_edges = 0;

        while let Some(HeapItem { node_id, weight }) = self.heap.pop() {
            if self.data[node_id].settled {
                continue;
            }

            // Stale heap entry
            if weight > self.data[node_id].weight {
                continue;
            }

            self.data[node_id].settled = true;
            iterations += 1;

            if target.is_some_and(|target| target.get() == node_id) {
                break;
            }

            for edge in graph.out_edges(CityId::new(node_id)) {
                let adj_node = edge.end_city().get();

                if self.data[adj_node].settled {
                    continue;
                }

                let next_weight = weight + checked_weight(graph, edge)?;
                relaxed_edges += 1;

                if next_weight < self.data[adj_node].weight {
                    let adj_data = &mut self.data[adj_node];
                    adj_data.weight = next_weight;
                    adj_data.parent = node_id;
                    self.heap.push(HeapItem {
                        node_id: adj_node,
                        weight: next_weight,
                    });
                }
            }
        }

        debug!(iterations, relaxed_edges, "Dijkstra search finished");

        Ok(())
    }

    fn collect_cities(&self, end: CityId) -> Vec<CityId> {
        let mut cities = Vec::with_capacity(16);
        let mut node = end.get();

        while node != INVALID_NODE {
            cities.push(CityId::new(node));
            node = self.data[node].parent;
        }

        cities.reverse();
        cities
    }

    /// Shortest path from `start` to `end` under the graph's current weather.
    ///
    /// Fails with [`GraphError::UnknownNode`] when either city is missing and with
    /// [`GraphError::NoPath`] when both exist but `end` cannot be reached.
    pub fn calc_path(
        &mut self,
        graph: &RoadGraph,
        start: &str,
        end: &str,
    ) -> Result<RoutingPath, GraphError> {
        let stopwatch = Stopwatch::new("dijkstra/calc_path");
        let start_id = graph.require_city(start)?;
        let end_id = graph.require_city(end)?;

        self.run(graph, start_id, Some(end_id))?;

        if !self.data[end_id.get()].settled {
            return Err(GraphError::NoPath {
                from: start.to_string(),
                to: end.to_string(),
            });
        }

        let path = build_routing_path(graph, &self.collect_cities(end_id))?;

        let label = self.data[end_id.get()].weight;
        if (path.cost() - label).abs() > WEIGHT_TOLERANCE * label.max(1.0) {
            warn!(
                label,
                cost = path.cost(),
                "Path cost disagrees with the search label"
            );
            debug_assert!(false, "path cost {} != label {}", path.cost(), label);
        }

        stopwatch.report();

        Ok(path)
    }

    /// Shortest travel time from `start` to every city, indexed by [`CityId`].
    ///
    /// Unreachable cities get [`UNREACHABLE`].
    pub fn calc_weights(
        &mut self,
        graph: &RoadGraph,
        start: CityId,
    ) -> Result<Vec<Weight>, GraphError> {
        self.run(graph, start, None)?;

        Ok(self
            .data
            .iter()
            .map(|data| if data.settled { data.weight } else { UNREACHABLE })
            .collect())
    }
}

/// Convenience wrapper running a fresh [`Dijkstra`] search.
pub fn shortest_path(graph: &RoadGraph, start: &str, end: &str) -> Result<RoutingPath, GraphError> {
    Dijkstra::new(graph).calc_path(graph, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_graph_utils::test_graph::{create_iberian_network, create_sample_network};
    use crate::weather::{Weather, WeatherProfiles};

    #[test]
    fn test_calc_path_prefers_indirect_route() {
        let graph = create_sample_network();

        let path = shortest_path(&graph, "A", "D").unwrap();

        assert_eq!(path.cities(), &["A", "B", "C", "D"]);
        assert_eq!(path.cost(), 10.0);
        assert_eq!(path.weather(), Weather::Normal);
    }

    #[test]
    fn test_calc_path_under_rain() {
        let mut graph = create_sample_network();
        graph.set_weather(Weather::Rain);

        let path = shortest_path(&graph, "A", "D").unwrap();

        assert_eq!(path.cities(), &["A", "B", "C", "D"]);
        assert_eq!(path.cost(), 15.0);
    }

    #[test]
    fn test_calc_path_cost_matches_legs() {
        let mut graph = create_iberian_network();
        graph.set_weather(Weather::Snow);

        let path = shortest_path(&graph, "Porto", "Barcelona").unwrap();

        let recomputed: f64 = path
            .cities()
            .windows(2)
            .map(|pair| graph.connection(&pair[0], &pair[1]).unwrap().weight)
            .sum();
        assert_eq!(path.cost(), recomputed);
    }

    #[test]
    fn test_calc_path_iberian() {
        let graph = create_iberian_network();

        let path = shortest_path(&graph, "Porto", "Barcelona").unwrap();

        assert_eq!(path.cities(), &["Porto", "Madrid", "Zaragoza", "Barcelona"]);
        assert_eq!(path.cost(), 11.5);
    }

    #[test]
    fn test_calc_path_same_city() {
        let graph = create_sample_network();

        let path = shortest_path(&graph, "B", "B").unwrap();

        assert_eq!(path.cities(), &["B"]);
        assert!(path.legs().is_empty());
        assert_eq!(path.cost(), 0.0);
    }

    #[test]
    fn test_calc_path_unknown_city() {
        let graph = create_sample_network();

        assert_eq!(
            shortest_path(&graph, "A", "Z"),
            Err(GraphError::UnknownNode("Z".to_string()))
        );
        assert_eq!(
            shortest_path(&graph, "Z", "A"),
            Err(GraphError::UnknownNode("Z".to_string()))
        );
    }

    #[test]
    fn test_calc_path_no_path() {
        let graph = create_sample_network();

        assert_eq!(
            shortest_path(&graph, "D", "A"),
            Err(GraphError::NoPath {
                from: "D".to_string(),
                to: "A".to_string()
            })
        );
    }

    #[test]
    fn test_removed_connection_without_alternative() {
        let mut graph = create_sample_network();
        graph.remove_edge("A", "B").unwrap();

        assert!(matches!(
            shortest_path(&graph, "A", "B"),
            Err(GraphError::NoPath { .. })
        ));
    }

    #[test]
    fn test_removed_connection_with_alternative() {
        let mut graph = create_sample_network();
        graph
            .add_edge("A", "C", WeatherProfiles::new(4.0, 5.0, 6.0, 7.0))
            .unwrap();
        graph
            .add_edge("C", "B", WeatherProfiles::new(1.0, 1.0, 1.0, 1.0))
            .unwrap();
        graph.remove_edge("A", "B").unwrap();

        let path = shortest_path(&graph, "A", "B").unwrap();

        assert_eq!(path.cities(), &["A", "C", "B"]);
        assert_eq!(path.cost(), 5.0);
    }

    #[test]
    fn test_zero_weight_connections() {
        let mut graph = RoadGraph::new();
        graph.add_edge("A", "B", WeatherProfiles::uniform(0.0)).unwrap();
        graph.add_edge("B", "C", WeatherProfiles::uniform(0.0)).unwrap();

        let path = shortest_path(&graph, "A", "C").unwrap();

        assert_eq!(path.cost(), 0.0);
        assert_eq!(path.cities().len(), 3);
    }

    #[test]
    fn test_calc_weights() {
        let graph = create_sample_network();
        let a = graph.city_id("A").unwrap();
        let d = graph.city_id("D").unwrap();

        let weights = Dijkstra::new(&graph).calc_weights(&graph, a).unwrap();
        assert_eq!(weights[a.get()], 0.0);
        assert_eq!(weights[d.get()], 10.0);

        let from_d = Dijkstra::new(&graph).calc_weights(&graph, d).unwrap();
        assert_eq!(from_d[a.get()], UNREACHABLE);
    }

    #[test]
    fn test_search_state_is_reusable() {
        let graph = create_iberian_network();
        let mut dijkstra = Dijkstra::new(&graph);

        let first = dijkstra.calc_path(&graph, "Sevilla", "Bilbao").unwrap();
        let second = dijkstra.calc_path(&graph, "Barcelona", "Sevilla").unwrap();

        assert_eq!(first.cost(), 9.0);
        assert_eq!(second.cost(), 11.0);
    }
}
