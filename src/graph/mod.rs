//! # DOT Graph Model and Serialization
//!
//! This module holds the in-memory model of a DOT document and the code that
//! writes it out as text.
//!
//! ## Components
//!
//! ### Model
//! - **Graph**: a named, ordered body of elements; top-level or subgraph
//! - **Element**: one entry of a graph body (literal, vertex, edge, subgraph)
//! - **VertexDescription**: a node id plus a fixed set of display attributes
//! - **EdgeDescription**: a connection between two vertex snapshots
//! - **Literal**: a raw line such as a comment or blank line
//!
//! ### Serialization
//! - Every element writes itself to a `std::io::Write`; the graph writes its
//!   header, optional rank, each body element followed by a line break, and
//!   the closing brace
//! - `from_digraph` turns a petgraph `DiGraph` into a `Graph`
//!
//! ## Example
//!
//! ```
//! use dot_scribe::graph::{Graph, VertexDescription};
//!
//! # fn main() -> Result<(), dot_scribe::error::DotError> {
//! let core = VertexDescription::new("core").with_shape("box");
//! let app = VertexDescription::new("app");
//!
//! let mut graph = Graph::new("deps");
//! graph.add_comment("workspaces");
//! graph.add_vertex(&core);
//! graph.add_vertex(&app);
//! graph.add_edge(&app, &core, true, "");
//!
//! assert_eq!(
//!     graph.to_dot_string()?,
//!     "digraph deps {\n/* workspaces */\ncore [shape=\"box\" ]\napp []\napp -> core\n}"
//! );
//! # Ok(())
//! # }
//! ```

// Helper macro for write operations that converts IO errors
macro_rules! write_out {
    ($dst:expr, $($arg:tt)*) => {
        write!($dst, $($arg)*).map_err($crate::error::DotError::from)
    };
}

mod builder;
mod convert;
mod edge;
mod element;
mod renderer;
mod vertex;

pub use builder::Graph;
pub use convert::from_digraph;
pub use edge::{EdgeDescription, EdgeDescriptionBuilder};
pub use element::{Element, Literal};
pub use vertex::VertexDescription;
