//! # Dot Scribe - Write Graphviz DOT Text
//!
//! Dot Scribe builds a graph description in memory and writes it out as DOT
//! text for Graphviz and other tools that read the DOT language. It does no
//! parsing, layout or drawing.
//!
//! ## Main Components
//!
//! - **Graph**: a named, ordered body of elements, written as a `digraph` or
//!   `subgraph` block
//! - **VertexDescription / EdgeDescription**: nodes with a fixed set of
//!   display attributes, and connections between them
//! - **Config**: render options, from a builder, TOML or the environment
//! - **Error**: a single `DotError` with miette diagnostics
//!
//! ## Usage
//!
//! ### Example: Clustering Related Nodes
//!
//! ```
//! use dot_scribe::graph::{Graph, VertexDescription};
//!
//! # fn main() -> Result<(), dot_scribe::error::DotError> {
//! let api = VertexDescription::new("api").with_label("<<b>API</b>>");
//! let db = VertexDescription::new("db")
//!     .with_shape("cylinder")
//!     .with_peripheries(2);
//!
//! let mut storage = Graph::subgraph("storage").with_rank("same");
//! storage.add_vertex(&db);
//!
//! let mut graph = Graph::new("services");
//! graph.add_comment("generated");
//! graph.add_vertex(&api);
//! graph.add_subgraph(storage);
//! graph.add_blank_line();
//! graph.add_edge(&api, &db, true, "dashed");
//!
//! let mut output = Vec::new();
//! graph.write(&mut output)?;
//!
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "digraph services {\n\
//!      /* generated */\n\
//!      api [label=<<b>API</b>> ]\n\
//!      subgraph storage {\n\
//!      rank=\"same\"\n\
//!      db [shape=\"cylinder\" peripheries=\"2\" ]\n\
//!      }\n\
//!      \n\
//!      api -> db [ style=\"dashed\" ]\n\
//!      }"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Exporting a petgraph Graph
//!
//! ```
//! use dot_scribe::graph::{VertexDescription, from_digraph};
//! use petgraph::graph::DiGraph;
//!
//! # fn main() -> Result<(), dot_scribe::error::DotError> {
//! let mut deps = DiGraph::new();
//! let core = deps.add_node("core");
//! let app = deps.add_node("app");
//! deps.add_edge(app, core, ());
//!
//! let graph = from_digraph("deps", &deps, |n| VertexDescription::new(n), |_| String::new());
//!
//! std::fs::write(
//!     std::env::temp_dir().join("deps.dot"),
//!     graph.to_dot_string()?,
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Choosing the Error Precedence
//!
//! ```no_run
//! use dot_scribe::config::RenderOptions;
//! use dot_scribe::graph::Graph;
//!
//! # fn main() -> miette::Result<()> {
//! let options = RenderOptions::parse_file("render.toml".as_ref())?.with_env_overrides()?;
//!
//! let graph = Graph::new("G");
//! graph.write_with(&mut std::io::stdout(), &options)?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;

// Public modules
pub mod common;
pub mod config;
pub mod error;
pub mod graph;
