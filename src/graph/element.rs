//! Graph body elements

use std::io::Write;

use crate::config::RenderOptions;
use crate::error::DotError;
use crate::graph::{EdgeDescription, Graph, VertexDescription};

/// A line written exactly as given, such as a comment or an empty line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Literal {
    line: String,
}

impl Literal {
    pub fn new(line: &str) -> Self {
        Self {
            line: line.to_string(),
        }
    }

    /// A `/* text */` comment line
    pub fn comment(text: &str) -> Self {
        Self {
            line: format!("/* {text} */"),
        }
    }

    /// An empty line; the enclosing graph supplies the line break
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn write(&self, output: &mut dyn Write) -> Result<(), DotError> {
        output.write_all(self.line.as_bytes())?;
        Ok(())
    }
}

/// One entry in a graph body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Literal(Literal),
    Vertex(VertexDescription),
    Edge(EdgeDescription),
    Graph(Graph),
}

impl Element {
    pub fn write(&self, output: &mut dyn Write) -> Result<(), DotError> {
        self.write_with(output, &RenderOptions::default())
    }

    /// Write the element, passing `options` down to nested graphs
    pub fn write_with(
        &self,
        output: &mut dyn Write,
        options: &RenderOptions,
    ) -> Result<(), DotError> {
        match self {
            Element::Literal(literal) => literal.write(output),
            Element::Vertex(vertex) => vertex.write(output),
            Element::Edge(edge) => edge.write(output),
            Element::Graph(graph) => graph.write_with(output, options),
        }
    }

    pub fn to_dot_string(&self) -> Result<String, DotError> {
        crate::graph::renderer::render_to_string(|output| self.write(output))
    }
}

impl From<Literal> for Element {
    fn from(literal: Literal) -> Self {
        Element::Literal(literal)
    }
}

impl From<VertexDescription> for Element {
    fn from(vertex: VertexDescription) -> Self {
        Element::Vertex(vertex)
    }
}

impl From<EdgeDescription> for Element {
    fn from(edge: EdgeDescription) -> Self {
        Element::Edge(edge)
    }
}

impl From<Graph> for Element {
    fn from(graph: Graph) -> Self {
        Element::Graph(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_written_verbatim() {
        let literal = Literal::new("  rankdir=LR; \"odd\" ");
        let mut output = Vec::new();
        literal.write(&mut output).unwrap();

        assert_eq!(output, b"  rankdir=LR; \"odd\" ");
    }

    #[test]
    fn test_comment_and_blank() {
        assert_eq!(Literal::comment("hello").line(), "/* hello */");
        assert_eq!(Literal::blank().line(), "");
        assert_eq!(
            Element::from(Literal::blank()).to_dot_string().unwrap(),
            ""
        );
    }

    #[test]
    fn test_dispatch_to_each_variant() {
        let a = VertexDescription::new("a");
        let b = VertexDescription::new("b");

        let elements: Vec<Element> = vec![
            Literal::comment("c").into(),
            a.clone().into(),
            EdgeDescription::new(&a, &b, false, "").into(),
            Graph::subgraph("S").into(),
        ];

        let rendered: Vec<String> = elements
            .iter()
            .map(|e| e.to_dot_string().unwrap())
            .collect();

        assert_eq!(
            rendered,
            vec!["/* c */", "a []", "a -- b", "subgraph S {\n}"]
        );
    }
}
