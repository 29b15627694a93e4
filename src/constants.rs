//! DOT syntax constants
//!
//! Keywords and glyphs written by the serializer, plus the configuration
//! keys read by [`crate::config`].

/// Graph block syntax
pub mod syntax {
    /// Header keyword for a top-level graph
    pub const DIGRAPH: &str = "digraph";

    /// Header keyword for a nested graph block
    pub const SUBGRAPH: &str = "subgraph";

    /// Connector between the endpoints of a directed edge
    pub const DIRECTED_EDGE: &str = "->";

    /// Connector between the endpoints of an undirected edge
    pub const UNDIRECTED_EDGE: &str = "--";

    /// Written after every body element
    pub const LINE_BREAK: &str = "\n";

    /// Closes a graph block, no trailing newline
    pub const CLOSE_BLOCK: &str = "}";
}

/// Configuration sources
pub mod config {
    /// Environment variable overriding the error precedence
    pub const ERROR_PRECEDENCE_ENV: &str = "DOT_SCRIBE_ERROR_PRECEDENCE";
}
