use logistica_routing::{
    UNREACHABLE,
    center::{find_center, strongly_connected_components},
    error::GraphError,
    matrix::{adjacency_matrix, all_pairs_distances},
    routing::shortest_path,
    weather::{Weather, WeatherProfiles},
};

mod setup;

#[test]
fn test_every_weight_follows_weather() {
    let mut graph = setup::iberian_network();

    for weather in Weather::ALL {
        graph.set_weather(weather);

        for connection in graph.connections() {
            assert_eq!(connection.weight, connection.profiles.weight(weather));
        }
    }
}

#[test]
fn test_set_weather_is_idempotent() {
    let mut once = setup::sample_network();
    once.set_weather(Weather::Snow);

    let mut twice = setup::sample_network();
    twice.set_weather(Weather::Snow);
    twice.set_weather(Weather::Snow);

    let once: Vec<_> = once.connections().collect();
    let twice: Vec<_> = twice.connections().collect();
    assert_eq!(once, twice);
}

#[test]
fn test_shortest_route_under_normal_and_rain() {
    let mut graph = setup::sample_network();

    let normal = shortest_path(&graph, "A", "D").unwrap();
    assert_eq!(normal.cities(), &["A", "B", "C", "D"]);
    assert_eq!(normal.cost(), 10.0);

    graph.set_weather_by_name("rain").unwrap();
    assert_eq!(graph.connection("A", "B").unwrap().weight, 8.0);

    let rain = shortest_path(&graph, "A", "D").unwrap();
    assert_eq!(rain.cities(), &["A", "B", "C", "D"]);
    assert_eq!(rain.cost(), 15.0);
}

#[test]
fn test_unknown_weather_keeps_current_selection() {
    let mut graph = setup::sample_network();
    graph.set_weather(Weather::Storm);

    assert_eq!(
        graph.set_weather_by_name("fog"),
        Err(GraphError::InvalidWeatherProfile("fog".to_string()))
    );
    assert_eq!(graph.weather(), Weather::Storm);
}

#[test]
fn test_route_cost_is_sum_of_active_weights() {
    let mut graph = setup::iberian_network();

    for weather in Weather::ALL {
        graph.set_weather(weather);
        let path = shortest_path(&graph, "Lisboa", "Bilbao").unwrap();

        let recomputed: f64 = path
            .cities()
            .windows(2)
            .map(|pair| graph.connection(&pair[0], &pair[1]).unwrap().weight)
            .sum();
        assert!((path.cost() - recomputed).abs() < 1e-9);
    }
}

#[test]
fn test_removing_connection() {
    let mut graph = setup::sample_network();
    graph.remove_edge("A", "B").unwrap();

    assert_eq!(
        shortest_path(&graph, "A", "B"),
        Err(GraphError::NoPath {
            from: "A".to_string(),
            to: "B".to_string()
        })
    );

    graph
        .add_edge("D", "B", WeatherProfiles::new(4.0, 5.0, 6.0, 7.0))
        .unwrap();
    let detour = shortest_path(&graph, "A", "B").unwrap();
    assert_eq!(detour.cities(), &["A", "D", "B"]);
    assert_eq!(detour.cost(), 19.0);

    assert_eq!(
        graph.remove_edge("A", "B"),
        Err(GraphError::EdgeNotFound {
            from: "A".to_string(),
            to: "B".to_string()
        })
    );
}

#[test]
fn test_all_pairs_consistency() {
    let mut graph = setup::iberian_network();
    graph.set_weather(Weather::Storm);

    let distances = all_pairs_distances(&graph);

    assert_eq!(distances.len(), graph.city_count());
    for city in graph.cities() {
        assert_eq!(distances.weight(city, city).unwrap(), 0.0);
    }
    for connection in graph.connections() {
        let distance = distances.weight(connection.from, connection.to).unwrap();
        assert!(distance <= connection.weight);
    }
}

#[test]
fn test_adjacency_and_distances_disagree_on_indirect_routes() {
    let graph = setup::iberian_network();

    let adjacency = adjacency_matrix(&graph);
    let distances = all_pairs_distances(&graph);

    for (from, to, direct) in adjacency.entries() {
        let distance = distances.weight(from, to).unwrap();
        let has_edge = from == to || graph.connection(from, to).is_some();

        if has_edge {
            assert_ne!(direct, UNREACHABLE);
        } else {
            assert_eq!(direct, UNREACHABLE);
        }

        let disagree = direct != distance;
        let indirect_only = !has_edge && distance != UNREACHABLE;
        let shortcut = has_edge && distance < direct;
        assert_eq!(disagree, indirect_only || shortcut, "{from} -> {to}");
    }

    assert_eq!(adjacency.weight("Porto", "Barcelona").unwrap(), UNREACHABLE);
    assert_eq!(distances.weight("Porto", "Barcelona").unwrap(), 11.5);
}

#[test]
fn test_center_stays_in_largest_component() {
    let mut graph = setup::iberian_network();
    let largest = strongly_connected_components(&graph).remove(0);

    for weather in Weather::ALL {
        graph.set_weather(weather);
        let center = find_center(&graph).unwrap();

        assert!(!center.is_strongly_connected());
        assert_eq!(center.component(), largest.as_slice());
        assert!(largest.iter().any(|city| city == center.city()));
    }
}

#[test]
fn test_matrix_rejects_unknown_city() {
    let graph = setup::sample_network();

    assert_eq!(
        adjacency_matrix(&graph).weight("A", "Z"),
        Err(GraphError::UnknownNode("Z".to_string()))
    );
}
