use comfy_table::{Table, presets::UTF8_FULL};
use logistica_routing::{matrix::CityMatrix, routing::RoutingPath, weather::Weight};

pub fn format_weight(weight: Weight) -> String {
    if weight.is_infinite() {
        "∞".to_string()
    } else {
        format!("{weight:.2}")
    }
}

pub fn format_hours(weight: Weight) -> String {
    format!("{weight:.2} h")
}

/// Cities as both header and first column; unreachable entries show as `∞`.
pub fn matrix_table(matrix: &CityMatrix) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let mut header = vec![String::new()];
    header.extend(matrix.cities().iter().cloned());
    table.set_header(header);

    for (city, row) in matrix.rows() {
        let mut cells = vec![city.to_string()];
        cells.extend(row.iter().map(|&weight| format_weight(weight)));
        table.add_row(cells);
    }

    table
}

pub fn route_lines(path: &RoutingPath) -> String {
    format!(
        "Route ({}): {}\nTotal time: {}",
        path.weather(),
        path.cities().join(" -> "),
        format_hours(path.cost())
    )
}

#[cfg(test)]
mod tests {
    use logistica_routing::{
        matrix::adjacency_matrix, parsers::road_file::parse_road_network, routing::shortest_path,
    };

    use super::*;

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(3.456), "3.46");
        assert_eq!(format_weight(0.0), "0.00");
        assert_eq!(format_weight(f64::INFINITY), "∞");
        assert_eq!(format_hours(11.5), "11.50 h");
    }

    #[test]
    fn test_matrix_table() {
        let graph = parse_road_network("A B 5 8 10 15\nB C 3 4 6 9\n").unwrap();

        let table = matrix_table(&adjacency_matrix(&graph)).to_string();

        assert!(table.contains("5.00"));
        assert!(table.contains("3.00"));
        assert!(table.contains('∞'));
        assert_eq!(table.matches("0.00").count(), 3);
    }

    #[test]
    fn test_route_lines() {
        let graph = parse_road_network("A B 5 8 10 15\nB C 3 4 6 9\n").unwrap();
        let path = shortest_path(&graph, "A", "C").unwrap();

        assert_eq!(
            route_lines(&path),
            "Route (normal): A -> B -> C\nTotal time: 8.00 h"
        );
    }
}
