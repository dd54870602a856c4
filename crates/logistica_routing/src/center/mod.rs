mod components;
mod graph_center;

pub use components::strongly_connected_components;
pub use graph_center::{GraphCenter, center_from_distances, eccentricities, find_center};
