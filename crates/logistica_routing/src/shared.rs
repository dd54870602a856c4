use std::sync::Arc;

use parking_lot::RwLock;

use crate::{
    error::GraphError,
    graph::{EdgeId, RoadGraph},
    weather::{Weather, WeatherProfiles},
};

/// Cloneable handle to a [`RoadGraph`] shared between threads.
///
/// Mutations hold the write lock for the whole update, so readers never observe a weather
/// switch or an edge removal half applied. Queries run under the read lock and may overlap.
#[derive(Clone, Default)]
pub struct SharedRoadGraph {
    inner: Arc<RwLock<RoadGraph>>,
}

impl SharedRoadGraph {
    pub fn new(graph: RoadGraph) -> Self {
        SharedRoadGraph {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    pub fn read<T>(&self, query: impl FnOnce(&RoadGraph) -> T) -> T {
        query(&self.inner.read())
    }

    pub fn write<T>(&self, update: impl FnOnce(&mut RoadGraph) -> T) -> T {
        update(&mut self.inner.write())
    }

    pub fn add_edge(
        &self,
        from: &str,
        to: &str,
        profiles: WeatherProfiles,
    ) -> Result<EdgeId, GraphError> {
        self.inner.write().add_edge(from, to, profiles)
    }

    pub fn remove_edge(&self, from: &str, to: &str) -> Result<WeatherProfiles, GraphError> {
        self.inner.write().remove_edge(from, to)
    }

    pub fn set_weather(&self, weather: Weather) {
        self.inner.write().set_weather(weather);
    }

    pub fn weather(&self) -> Weather {
        self.inner.read().weather()
    }

    /// Clone of the current graph.
    pub fn snapshot(&self) -> RoadGraph {
        self.inner.read().clone()
    }
}
