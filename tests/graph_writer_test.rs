//! Tests for writing graphs through the public API

use std::io::{Cursor, Write};

use dot_scribe::common::ConfigBuilder;
use dot_scribe::config::{ErrorPrecedence, RenderOptions};
use dot_scribe::graph::{EdgeDescription, Element, Graph, Literal, VertexDescription};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn render(graph: &Graph) -> String {
    let mut output = Cursor::new(Vec::new());
    graph.write(&mut output).unwrap();
    String::from_utf8(output.into_inner()).unwrap()
}

#[test]
fn test_empty_top_level_graph() {
    assert_eq!(render(&Graph::new("G")), "digraph G {\n}");
}

#[test]
fn test_nested_subgraph_with_rank() {
    let mut subgraph = Graph::subgraph("S");
    subgraph.add_vertex(&VertexDescription::new("a"));

    let mut graph = Graph::new("G").with_rank("same");
    graph.add_subgraph(subgraph);

    assert_eq!(
        render(&graph),
        "digraph G {\nrank=\"same\"\nsubgraph S {\na []\n}\n}"
    );
}

#[test]
fn test_insertion_order_is_rendering_order() {
    let a = VertexDescription::new("A");
    let b = VertexDescription::new("B");

    let mut graph = Graph::new("G");
    graph.add_vertex(&a);
    graph.add_edge(&a, &b, true, "");
    graph.add_vertex(&b);

    let output = render(&graph);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines, vec!["digraph G {", "A []", "A -> B", "B []", "}"]);
}

#[test]
fn test_subgraph_flag_controls_header() {
    let mut nested = Graph::new("N");
    nested.add_comment("written as a digraph block");

    let mut graph = Graph::new("G");
    graph.add_subgraph(nested.clone());

    nested.set_subgraph(true);
    graph.add_subgraph(nested);

    assert_eq!(
        render(&graph),
        "digraph G {\n\
         digraph N {\n/* written as a digraph block */\n}\n\
         subgraph N {\n/* written as a digraph block */\n}\n\
         }"
    );
}

#[test]
fn test_deep_nesting_is_not_indented() {
    let mut innermost = Graph::subgraph("c");
    innermost.add_vertex(&VertexDescription::new("x"));
    let mut middle = Graph::subgraph("b");
    middle.add_subgraph(innermost);
    let mut outer = Graph::new("a");
    outer.add_subgraph(middle);

    assert_eq!(
        render(&outer),
        "digraph a {\nsubgraph b {\nsubgraph c {\nx []\n}\n}\n}"
    );
}

#[test]
fn test_vertex_mutation_after_add_is_not_rendered() {
    let mut a = VertexDescription::new("a");
    let b = VertexDescription::new("b");

    let mut graph = Graph::new("G");
    graph.add_vertex(&a);
    graph.add_edge(&a, &b, false, "dotted");

    a.shape = "box".to_string();
    graph.add_vertex(&a);

    assert_eq!(
        render(&graph),
        "digraph G {\na []\na -- b [ style=\"dotted\" ]\na [shape=\"box\" ]\n}"
    );
}

#[test]
fn test_prebuilt_elements() {
    let a = VertexDescription::new("a");
    let b = VertexDescription::new("b");
    let edge = EdgeDescription::builder()
        .with_from(&a)
        .with_to(&b)
        .with_directed(true)
        .build()
        .unwrap();

    let mut graph = Graph::new("G");
    graph.add_element(Literal::new("rankdir=LR"));
    graph.add_element(Element::Edge(edge));

    assert_eq!(render(&graph), "digraph G {\nrankdir=LR\na -> b\n}");
}

#[test]
fn test_output_is_appended_to_existing_stream() {
    let mut output = Vec::new();
    output.write_all(b"// header\n").unwrap();

    Graph::new("G").write(&mut output).unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), "// header\ndigraph G {\n}");
}

#[test]
fn test_write_to_file_with_options_from_toml() {
    let mut config = NamedTempFile::new().unwrap();
    config
        .write_all(b"error-precedence = \"first-wins\"\n")
        .unwrap();
    let options = RenderOptions::parse_file(config.path()).unwrap();
    assert_eq!(
        options,
        RenderOptions::builder()
            .with_error_precedence(ErrorPrecedence::FirstWins)
            .build()
            .unwrap()
    );

    let mut graph = Graph::new("G");
    graph.add_vertex(&VertexDescription::new("a").with_color("red"));

    let mut dot_file = NamedTempFile::new().unwrap();
    graph.write_with(dot_file.as_file_mut(), &options).unwrap();

    let written = std::fs::read_to_string(dot_file.path()).unwrap();
    assert_eq!(written, "digraph G {\na [color=\"red\" ]\n}");
}
