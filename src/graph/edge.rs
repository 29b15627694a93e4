//! Edge descriptions

use std::io::Write;

use crate::common::missing_field;
use crate::constants::syntax::{DIRECTED_EDGE, UNDIRECTED_EDGE};
use crate::error::DotError;
use crate::graph::VertexDescription;

/// A connection between two vertices.
///
/// The endpoints are snapshots taken when the edge is built; only their ids
/// are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeDescription {
    pub from: VertexDescription,
    pub to: VertexDescription,
    directed: bool,

    pub style: String,
}

impl EdgeDescription {
    pub fn new(
        from: &VertexDescription,
        to: &VertexDescription,
        directed: bool,
        style: &str,
    ) -> Self {
        Self {
            from: from.clone(),
            to: to.clone(),
            directed,
            style: style.to_string(),
        }
    }

    pub fn builder() -> EdgeDescriptionBuilder {
        EdgeDescriptionBuilder::new()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// The edge line without a line break, e.g. `a -> b [ style="dashed" ]`
    pub fn render(&self) -> String {
        let connector = if self.directed {
            DIRECTED_EDGE
        } else {
            UNDIRECTED_EDGE
        };

        let mut line = format!("{} {} {}", self.from.id(), connector, self.to.id());
        if !self.style.is_empty() {
            line.push_str(&format!(" [ style=\"{}\" ]", self.style));
        }
        line
    }

    pub fn write(&self, output: &mut dyn Write) -> Result<(), DotError> {
        output.write_all(self.render().as_bytes())?;
        Ok(())
    }
}

pub struct EdgeDescriptionBuilder {
    from: Option<VertexDescription>,
    to: Option<VertexDescription>,
    directed: Option<bool>,
    style: Option<String>,
}

impl Default for EdgeDescriptionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeDescriptionBuilder {
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            directed: None,
            style: None,
        }
    }

    pub fn with_from(mut self, from: &VertexDescription) -> Self {
        self.from = Some(from.clone());
        self
    }

    pub fn with_to(mut self, to: &VertexDescription) -> Self {
        self.to = Some(to.clone());
        self
    }

    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = Some(directed);
        self
    }

    pub fn with_style(mut self, style: &str) -> Self {
        self.style = Some(style.to_string());
        self
    }
}

impl crate::common::ConfigBuilder for EdgeDescriptionBuilder {
    type Config = EdgeDescription;

    fn build(self) -> Result<Self::Config, DotError> {
        Ok(EdgeDescription {
            from: self.from.ok_or_else(|| missing_field("from"))?,
            to: self.to.ok_or_else(|| missing_field("to"))?,
            directed: self.directed.unwrap_or(false),
            style: self.style.unwrap_or_default(),
        })
    }
}
