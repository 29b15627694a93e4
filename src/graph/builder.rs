//! Graph construction
//!
//! A [`Graph`] is built by appending elements in the order they should be
//! written. Everything added is copied in: later changes to the caller's
//! vertices never show up in elements already added.

use crate::graph::{EdgeDescription, Element, Literal, VertexDescription};

/// A DOT graph or subgraph block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    name: String,
    body: Vec<Element>,
    is_subgraph: bool,
    rank: String,
}

impl Graph {
    /// A top-level graph with an empty body and no rank
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            body: Vec::new(),
            is_subgraph: false,
            rank: String::new(),
        }
    }

    /// A graph that writes itself as a `subgraph` block
    pub fn subgraph(name: &str) -> Self {
        Self {
            is_subgraph: true,
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &[Element] {
        &self.body
    }

    pub fn is_subgraph(&self) -> bool {
        self.is_subgraph
    }

    pub fn rank(&self) -> &str {
        &self.rank
    }

    pub fn set_subgraph(&mut self, is_subgraph: bool) {
        self.is_subgraph = is_subgraph;
    }

    /// Set the `rank` attribute; an empty rank is not written
    pub fn set_rank(&mut self, rank: &str) {
        self.rank = rank.to_string();
    }

    pub fn with_rank(mut self, rank: &str) -> Self {
        self.set_rank(rank);
        self
    }

    pub fn add_comment(&mut self, text: &str) {
        self.body.push(Literal::comment(text).into());
    }

    pub fn add_blank_line(&mut self) {
        self.body.push(Literal::blank().into());
    }

    pub fn add_vertex(&mut self, vertex: &VertexDescription) {
        self.body.push(vertex.clone().into());
    }

    pub fn add_edge(
        &mut self,
        from: &VertexDescription,
        to: &VertexDescription,
        directed: bool,
        style: &str,
    ) {
        self.body
            .push(EdgeDescription::new(from, to, directed, style).into());
    }

    /// Nest `subgraph` in this graph's body. Its own subgraph flag decides
    /// which header it is written with.
    pub fn add_subgraph(&mut self, subgraph: Graph) {
        self.body.push(subgraph.into());
    }

    pub fn add_element(&mut self, element: impl Into<Element>) {
        self.body.push(element.into());
    }
}
