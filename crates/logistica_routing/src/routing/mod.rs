pub mod dijkstra;
pub mod routing_path;
pub(crate) mod routing_path_builder;

pub use dijkstra::{Dijkstra, shortest_path};
pub use routing_path::{RoutingPath, RoutingPathLeg};
