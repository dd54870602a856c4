use fxhash::FxHashMap;
use tracing::{debug, info};

use crate::error::GraphError;
use crate::utils::newtype_index::define_index_newtype;
use crate::weather::{Weather, WeatherProfiles, Weight};

define_index_newtype!(
    /// Position of a city in the graph's city table.
    CityId,
    String
);
define_index_newtype!(
    /// Position of a connection in the graph's edge table.
    EdgeId,
    RoadEdge
);

#[derive(Debug, Clone, PartialEq)]
pub struct RoadEdge {
    start_city: CityId,
    end_city: CityId,
    profiles: WeatherProfiles,
    weight: Weight,
}

impl RoadEdge {
    fn new(
        start_city: CityId,
        end_city: CityId,
        profiles: WeatherProfiles,
        weather: Weather,
    ) -> Self {
        RoadEdge {
            start_city,
            end_city,
            weight: profiles.weight(weather),
            profiles,
        }
    }

    fn clone_between(&self, start_city: CityId, end_city: CityId) -> RoadEdge {
        RoadEdge {
            start_city,
            end_city,
            profiles: self.profiles,
            weight: self.weight,
        }
    }

    pub fn start_city(&self) -> CityId {
        self.start_city
    }

    pub fn end_city(&self) -> CityId {
        self.end_city
    }

    pub fn profiles(&self) -> &WeatherProfiles {
        &self.profiles
    }

    /// Travel time under the graph's current weather.
    #[inline(always)]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    #[inline(always)]
    fn apply_weather(&mut self, weather: Weather) {
        self.weight = self.profiles.weight(weather);
    }
}

/// City names are fields of whitespace-separated road files: non-empty, without whitespace
/// and not starting with the `#` comment marker.
fn validate_city_name(name: &str) -> Result<(), GraphError> {
    if name.is_empty() || name.starts_with('#') || name.chars().any(char::is_whitespace) {
        return Err(GraphError::InvalidCityName(name.to_string()));
    }

    Ok(())
}

/// A connection resolved to city names, as handed to loaders, writers and exporters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub profiles: WeatherProfiles,
    pub weight: Weight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkSummary {
    pub cities: usize,
    pub connections: usize,
}

/// Directed road network whose connections carry one travel time per weather condition.
///
/// Every connection's active weight always matches the current [`Weather`]: inserting a
/// connection picks the matching profile and [`RoadGraph::set_weather`] rewrites all of
/// them in one pass.
#[derive(Default, Debug, Clone)]
pub struct RoadGraph {
    cities: Vec<String>,
    city_index: FxHashMap<String, CityId>,
    edges: Vec<RoadEdge>,
    edge_index: FxHashMap<(CityId, CityId), EdgeId>,
    adjacency_list: Vec<Vec<EdgeId>>,
    weather: Weather,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a city, failing if the name is invalid or already taken.
    pub fn add_city(&mut self, name: &str) -> Result<CityId, GraphError> {
        validate_city_name(name)?;

        if self.city_index.contains_key(name) {
            return Err(GraphError::DuplicateNode(name.to_string()));
        }

        Ok(self.insert_city(name))
    }

    fn insert_city(&mut self, name: &str) -> CityId {
        let city_id = CityId::new(self.cities.len());
        self.cities.push(name.to_string());
        self.city_index.insert(name.to_string(), city_id);
        self.adjacency_list.push(Vec::new());
        city_id
    }

    fn ensure_city(&mut self, name: &str) -> CityId {
        match self.city_index.get(name) {
            Some(&city_id) => city_id,
            None => self.insert_city(name),
        }
    }

    /// Inserts or replaces the connection `from -> to`, creating missing cities.
    ///
    /// City names and profiles are validated before anything is created, so a rejected
    /// connection leaves the graph untouched.
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        profiles: WeatherProfiles,
    ) -> Result<EdgeId, GraphError> {
        validate_city_name(from)?;
        validate_city_name(to)?;
        profiles.validate(from, to)?;

        let start_city = self.ensure_city(from);
        let end_city = self.ensure_city(to);
        let edge = RoadEdge::new(start_city, end_city, profiles, self.weather);

        let edge_id = match self.edge_index.get(&(start_city, end_city)) {
            Some(&edge_id) => {
                self.edges[edge_id] = edge;
                edge_id
            }
            None => {
                let edge_id = EdgeId::new(self.edges.len());
                self.edges.push(edge);
                self.edge_index.insert((start_city, end_city), edge_id);
                self.adjacency_list[start_city.get()].push(edge_id);
                edge_id
            }
        };

        debug_assert_eq!(self.edges[edge_id].weight, profiles.weight(self.weather));

        Ok(edge_id)
    }

    /// Removes the connection `from -> to` and returns its profiles.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> Result<WeatherProfiles, GraphError> {
        let not_found = || GraphError::EdgeNotFound {
            from: from.to_string(),
            to: to.to_string(),
        };

        let start_city = self.city_id(from).ok_or_else(not_found)?;
        let end_city = self.city_id(to).ok_or_else(not_found)?;
        let edge_id = self
            .edge_index
            .remove(&(start_city, end_city))
            .ok_or_else(not_found)?;

        // Vec::remove keeps the remaining connections in insertion order for the writer.
        let edge = self.edges.remove(edge_id.get());
        self.rebuild_edge_index();

        Ok(edge.profiles)
    }

    fn rebuild_edge_index(&mut self) {
        self.edge_index.clear();
        self.adjacency_list.iter_mut().for_each(Vec::clear);

        for (index, edge) in self.edges.iter().enumerate() {
            let edge_id = EdgeId::new(index);
            self.edge_index.insert((edge.start_city, edge.end_city), edge_id);
            self.adjacency_list[edge.start_city.get()].push(edge_id);
        }

        self.debug_check_invariants();
    }

    /// Switches the active weather and rewrites the weight of every connection.
    pub fn set_weather(&mut self, weather: Weather) {
        self.weather = weather;

        for edge in self.edges.iter_mut() {
            edge.apply_weather(weather);
        }

        self.debug_check_invariants();
        info!(%weather, connections = self.edges.len(), "Weather changed");
    }

    pub fn set_weather_by_name(&mut self, name: &str) -> Result<(), GraphError> {
        let weather: Weather = name.parse()?;
        self.set_weather(weather);
        Ok(())
    }

    pub fn weather(&self) -> Weather {
        self.weather
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn connection_count(&self) -> usize {
        self.edges.len()
    }

    pub fn summary(&self) -> NetworkSummary {
        NetworkSummary {
            cities: self.city_count(),
            connections: self.connection_count(),
        }
    }

    pub fn contains_city(&self, name: &str) -> bool {
        self.city_index.contains_key(name)
    }

    pub fn city_id(&self, name: &str) -> Option<CityId> {
        self.city_index.get(name).copied()
    }

    pub fn require_city(&self, name: &str) -> Result<CityId, GraphError> {
        self.city_id(name)
            .ok_or_else(|| GraphError::UnknownNode(name.to_string()))
    }

    pub fn city_name(&self, city: CityId) -> &str {
        &self.cities[city]
    }

    /// City names in lexicographic order.
    pub fn cities(&self) -> Vec<&str> {
        let mut cities: Vec<&str> = self.cities.iter().map(String::as_str).collect();
        cities.sort_unstable();
        cities
    }

    /// City ids ordered by city name.
    pub fn sorted_city_ids(&self) -> Vec<CityId> {
        let mut ids: Vec<CityId> = (0..self.cities.len()).map(CityId::new).collect();
        ids.sort_unstable_by(|a, b| self.cities[*a].cmp(&self.cities[*b]));
        ids
    }

    pub fn edge(&self, edge_id: EdgeId) -> &RoadEdge {
        &self.edges[edge_id]
    }

    pub fn edge_between(&self, from: CityId, to: CityId) -> Option<&RoadEdge> {
        self.edge_index
            .get(&(from, to))
            .map(|&edge_id| &self.edges[edge_id])
    }

    pub fn out_edge_ids(&self, city: CityId) -> &[EdgeId] {
        &self.adjacency_list[city.get()]
    }

    pub fn out_edges(&self, city: CityId) -> impl Iterator<Item = &RoadEdge> + '_ {
        self.out_edge_ids(city)
            .iter()
            .map(move |&edge_id| &self.edges[edge_id])
    }

    pub fn connection(&self, from: &str, to: &str) -> Option<Connection<'_>> {
        let edge = self.edge_between(self.city_id(from)?, self.city_id(to)?)?;
        Some(self.resolve(edge))
    }

    /// All connections in insertion order.
    pub fn connections(&self) -> impl Iterator<Item = Connection<'_>> + '_ {
        self.edges.iter().map(|edge| self.resolve(edge))
    }

    fn resolve<'a>(&'a self, edge: &RoadEdge) -> Connection<'a> {
        Connection {
            from: &self.cities[edge.start_city],
            to: &self.cities[edge.end_city],
            profiles: edge.profiles,
            weight: edge.weight,
        }
    }

    /// Copy of the graph restricted to `cities` and the connections between them.
    ///
    /// The copy keeps the current weather. Unknown names are ignored.
    pub fn induced_subgraph<S: AsRef<str>>(&self, cities: &[S]) -> RoadGraph {
        let mut subgraph = RoadGraph {
            weather: self.weather,
            ..RoadGraph::default()
        };

        for city in cities {
            if self.contains_city(city.as_ref()) && !subgraph.contains_city(city.as_ref()) {
                subgraph.insert_city(city.as_ref());
            }
        }

        for edge in &self.edges {
            let from = &self.cities[edge.start_city];
            let to = &self.cities[edge.end_city];
            if let (Some(start_city), Some(end_city)) =
                (subgraph.city_id(from), subgraph.city_id(to))
            {
                let edge_id = EdgeId::new(subgraph.edges.len());
                subgraph.edges.push(edge.clone_between(start_city, end_city));
                subgraph.edge_index.insert((start_city, end_city), edge_id);
                subgraph.adjacency_list[start_city.get()].push(edge_id);
            }
        }

        subgraph.debug_check_invariants();
        debug!(
            cities = subgraph.city_count(),
            connections = subgraph.connection_count(),
            "Built induced subgraph"
        );

        subgraph
    }

    fn debug_check_invariants(&self) {
        debug_assert_eq!(self.cities.len(), self.adjacency_list.len());
        debug_assert_eq!(self.edges.len(), self.edge_index.len());

        for edge in &self.edges {
            debug_assert!(
                edge.start_city.get() < self.cities.len()
                    && edge.end_city.get() < self.cities.len(),
                "Connection references a city outside the graph: {:?}",
                edge
            );
            debug_assert_eq!(edge.weight, edge.profiles.weight(self.weather));
        }
    }
}
