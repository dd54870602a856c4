use tracing::debug;

use crate::graph::{CityId, RoadGraph};

const UNVISITED: usize = usize::MAX;

/// Iterative Tarjan bookkeeping.
struct Tarjan {
    index_counter: usize,
    indices: Vec<usize>,
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    components: Vec<Vec<CityId>>,
}

impl Tarjan {
    fn new(size: usize) -> Self {
        Tarjan {
            index_counter: 0,
            indices: vec![UNVISITED; size],
            lowlink: vec![0; size],
            on_stack: vec![false; size],
            stack: Vec::with_capacity(size),
            components: Vec::new(),
        }
    }

    fn visit(&mut self, node: usize) {
        self.indices[node] = self.index_counter;
        self.lowlink[node] = self.index_counter;
        self.index_counter += 1;
        self.stack.push(node);
        self.on_stack[node] = true;
    }

    fn pop_component(&mut self, root: usize) {
        let mut component = Vec::new();

        while let Some(member) = self.stack.pop() {
            self.on_stack[member] = false;
            component.push(CityId::new(member));
            if member == root {
                break;
            }
        }

        self.components.push(component);
    }

    fn run(mut self, graph: &RoadGraph) -> Vec<Vec<CityId>> {
        // (node, position in its out-edge list)
        let mut call_stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..graph.city_count() {
            if self.indices[root] != UNVISITED {
                continue;
            }

            self.visit(root);
            call_stack.push((root, 0));

            while let Some(frame) = call_stack.last_mut() {
                let node = frame.0;
                let out_edges = graph.out_edge_ids(CityId::new(node));

                if let Some(&edge_id) = out_edges.get(frame.1) {
                    frame.1 += 1;
                    let next = graph.edge(edge_id).end_city().get();

                    if self.indices[next] == UNVISITED {
                        self.visit(next);
                        call_stack.push((next, 0));
                    } else if self.on_stack[next] {
                        self.lowlink[node] = self.lowlink[node].min(self.indices[next]);
                    }
                } else {
                    call_stack.pop();

                    if let Some(&(parent, _)) = call_stack.last() {
                        self.lowlink[parent] = self.lowlink[parent].min(self.lowlink[node]);
                    }

                    if self.lowlink[node] == self.indices[node] {
                        self.pop_component(node);
                    }
                }
            }
        }

        self.components
    }
}

/// Strongly connected components as city ids, each sorted by city name, components
/// ordered by their first member's name.
pub(crate) fn city_components(graph: &RoadGraph) -> Vec<Vec<CityId>> {
    let mut components = Tarjan::new(graph.city_count()).run(graph);

    for component in components.iter_mut() {
        component.sort_unstable_by(|a, b| graph.city_name(*a).cmp(graph.city_name(*b)));
    }
    components.sort_unstable_by(|a, b| graph.city_name(a[0]).cmp(graph.city_name(b[0])));

    debug!(components = components.len(), "Computed strongly connected components");

    components
}

/// Strongly connected components by city name.
///
/// Members of each component are sorted and components are ordered by their first member.
pub fn strongly_connected_components(graph: &RoadGraph) -> Vec<Vec<String>> {
    city_components(graph)
        .into_iter()
        .map(|component| {
            component
                .into_iter()
                .map(|city| graph.city_name(city).to_string())
                .collect()
        })
        .collect()
}
