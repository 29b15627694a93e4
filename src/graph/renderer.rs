use std::io::Write;

use crate::config::RenderOptions;
use crate::constants::syntax::{CLOSE_BLOCK, DIGRAPH, LINE_BREAK, SUBGRAPH};
use crate::error::DotError;
use crate::graph::Graph;

/// Run `write` against an in-memory buffer and return the text
pub(crate) fn render_to_string<F>(write: F) -> Result<String, DotError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), DotError>,
{
    let mut output = Vec::new();
    write(&mut output)?;
    Ok(String::from_utf8(output)?)
}

impl Graph {
    /// Write the graph with the default [`RenderOptions`]
    pub fn write(&self, output: &mut dyn Write) -> Result<(), DotError> {
        self.write_with(output, &RenderOptions::default())
    }

    /// Write the graph block: header, optional rank, every body element
    /// followed by a line break, then `}` with no trailing newline.
    ///
    /// Nothing is flushed. If a write fails the output holds whatever was
    /// written before the failure.
    pub fn write_with(
        &self,
        output: &mut dyn Write,
        options: &RenderOptions,
    ) -> Result<(), DotError> {
        let keyword = if self.is_subgraph() { SUBGRAPH } else { DIGRAPH };
        write_out!(output, "{} {} {{\n", keyword, self.name())?;

        if !self.rank().is_empty() {
            write_out!(output, "rank=\"{}\"\n", self.rank())?;
        }

        for element in self.body() {
            let element_result = element.write_with(output, options);
            // The line break is attempted even after a failed element
            let line_break_result = output
                .write_all(LINE_BREAK.as_bytes())
                .map_err(DotError::from);
            options
                .error_precedence
                .resolve(element_result, line_break_result)?;
        }

        output.write_all(CLOSE_BLOCK.as_bytes())?;
        Ok(())
    }

    pub fn to_dot_string(&self) -> Result<String, DotError> {
        render_to_string(|output| self.write(output))
    }

    pub fn to_dot_string_with(&self, options: &RenderOptions) -> Result<String, DotError> {
        render_to_string(|output| self.write_with(output, options))
    }
}
