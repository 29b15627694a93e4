//! # Configuration Module
//!
//! Options that change how a graph is written. Options are plain values with
//! a builder, and can also be read from a TOML document or file and then
//! overridden from the environment.
//!
//! ## Example
//!
//! ```
//! use dot_scribe::common::ConfigBuilder;
//! use dot_scribe::config::{ErrorPrecedence, RenderOptions};
//!
//! # fn main() -> Result<(), dot_scribe::error::DotError> {
//! let from_builder = RenderOptions::builder()
//!     .with_error_precedence(ErrorPrecedence::FirstWins)
//!     .build()?;
//!
//! let from_toml = RenderOptions::from_toml_str(
//!     "render.toml",
//!     r#"error-precedence = "first-wins""#,
//! )?;
//!
//! assert_eq!(from_builder, from_toml);
//! # Ok(())
//! # }
//! ```

pub mod render;

pub use render::{ErrorPrecedence, RenderOptions, RenderOptionsBuilder};
