#[cfg(test)]
pub mod test_graph {
    use crate::{graph::RoadGraph, weather::WeatherProfiles};

    type Record = (&'static str, &'static str, [f64; 4]);

    fn build(records: &[Record]) -> RoadGraph {
        let mut graph = RoadGraph::new();

        for &(from, to, [normal, rain, snow, storm]) in records {
            graph
                .add_edge(from, to, WeatherProfiles::new(normal, rain, snow, storm))
                .unwrap();
        }

        graph
    }

    /// A -> B -> C -> D chain plus a slower direct A -> D connection.
    pub fn create_sample_network() -> RoadGraph {
        build(&[
            ("A", "B", [5.0, 8.0, 10.0, 15.0]),
            ("B", "C", [3.0, 4.0, 6.0, 9.0]),
            ("C", "D", [2.0, 3.0, 5.0, 8.0]),
            ("A", "D", [15.0, 20.0, 25.0, 30.0]),
        ])
    }

    fn get_iberian_network_records() -> Vec<Record> {
        vec![
            ("Madrid", "Zaragoza", [3.0, 3.5, 5.0, 6.0]),
            ("Zaragoza", "Madrid", [3.0, 3.5, 5.0, 6.0]),
            ("Zaragoza", "Barcelona", [3.0, 3.4, 4.0, 5.5]),
            ("Barcelona", "Zaragoza", [3.0, 3.4, 4.0, 5.5]),
            ("Madrid", "Valencia", [3.5, 4.0, 4.5, 6.0]),
            ("Valencia", "Madrid", [3.5, 4.0, 4.5, 6.0]),
            ("Valencia", "Barcelona", [3.5, 4.5, 4.0, 7.0]),
            ("Barcelona", "Valencia", [3.5, 4.5, 4.0, 7.0]),
            ("Madrid", "Sevilla", [5.0, 5.5, 5.5, 7.0]),
            ("Sevilla", "Madrid", [5.0, 5.5, 5.5, 7.0]),
            ("Madrid", "Bilbao", [4.0, 4.5, 7.0, 8.0]),
            ("Bilbao", "Zaragoza", [3.0, 3.5, 6.0, 6.5]),
            ("Porto", "Lisboa", [3.0, 3.5, 3.5, 5.0]),
            ("Lisboa", "Porto", [3.0, 3.5, 3.5, 5.0]),
            ("Lisboa", "Sevilla", [4.5, 5.0, 5.0, 6.0]),
            ("Porto", "Madrid", [5.5, 6.0, 8.0, 9.0]),
        ]
    }

    /// Six mutually reachable Spanish cities fed one-way from a Portuguese pair.
    ///
    /// Strongly connected components: {Barcelona, Bilbao, Madrid, Sevilla, Valencia,
    /// Zaragoza} and {Lisboa, Porto}.
    pub fn create_iberian_network() -> RoadGraph {
        build(&get_iberian_network_records())
    }
}
