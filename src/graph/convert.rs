//! Conversion from petgraph graphs

use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;

use crate::graph::{Graph, VertexDescription};

/// Build a top-level [`Graph`] from a petgraph `DiGraph`.
///
/// Vertices are added in node-index order, followed by one directed edge per
/// graph edge in edge-index order. `describe_node` maps a node weight to its
/// vertex; `edge_style` maps an edge weight to its style (empty for none).
pub fn from_digraph<N, E, F, S>(
    name: &str,
    graph: &DiGraph<N, E>,
    mut describe_node: F,
    mut edge_style: S,
) -> Graph
where
    F: FnMut(&N) -> VertexDescription,
    S: FnMut(&E) -> String,
{
    let mut dot = Graph::new(name);

    let vertices: Vec<VertexDescription> = graph
        .node_indices()
        .map(|idx| describe_node(&graph[idx]))
        .collect();
    for vertex in &vertices {
        dot.add_vertex(vertex);
    }

    for edge in graph.edge_references() {
        let style = edge_style(edge.weight());
        dot.add_edge(
            &vertices[edge.source().index()],
            &vertices[edge.target().index()],
            true,
            &style,
        );
    }

    dot
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_digraph() {
        let graph: DiGraph<&str, ()> = DiGraph::new();
        let dot = from_digraph("empty", &graph, |n| VertexDescription::new(n), |_| String::new());

        assert_eq!(dot.to_dot_string().unwrap(), "digraph empty {\n}");
    }

    #[test]
    fn test_nodes_then_edges() {
        let mut graph = DiGraph::new();
        let core = graph.add_node("core");
        let app = graph.add_node("app");
        let cli = graph.add_node("cli");
        graph.add_edge(app, core, "normal");
        graph.add_edge(cli, app, "dev");

        let dot = from_digraph(
            "workspaces",
            &graph,
            |name| VertexDescription::new(name).with_shape("box"),
            |kind| {
                if *kind == "dev" {
                    "dashed".to_string()
                } else {
                    String::new()
                }
            },
        );

        assert_eq!(
            dot.to_dot_string().unwrap(),
            "digraph workspaces {\n\
             core [shape=\"box\" ]\n\
             app [shape=\"box\" ]\n\
             cli [shape=\"box\" ]\n\
             app -> core\n\
             cli -> app [ style=\"dashed\" ]\n\
             }"
        );
    }
}
