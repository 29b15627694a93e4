//! Render options configuration

use std::env::VarError;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use crate::constants::config::ERROR_PRECEDENCE_ENV;
use crate::error::DotError;

/// Which error is reported when writing a body element and the line break
/// after it both fail
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPrecedence {
    /// The line-break error masks the element error
    #[default]
    LastWins,
    /// The element error is reported and the line-break error is dropped
    FirstWins,
}

impl ErrorPrecedence {
    /// Combine the outcome of an element write with the outcome of the line
    /// break that follows it.
    pub fn resolve(
        self,
        element: Result<(), DotError>,
        line_break: Result<(), DotError>,
    ) -> Result<(), DotError> {
        match self {
            ErrorPrecedence::LastWins => {
                line_break?;
                element
            }
            ErrorPrecedence::FirstWins => {
                element?;
                line_break
            }
        }
    }
}

impl fmt::Display for ErrorPrecedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPrecedence::LastWins => write!(f, "last-wins"),
            ErrorPrecedence::FirstWins => write!(f, "first-wins"),
        }
    }
}

impl FromStr for ErrorPrecedence {
    type Err = DotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "last-wins" => Ok(ErrorPrecedence::LastWins),
            "first-wins" => Ok(ErrorPrecedence::FirstWins),
            other => Err(DotError::ConfigurationError {
                message: format!(
                    "Unknown error precedence '{other}', expected 'last-wins' or 'first-wins'"
                ),
            }),
        }
    }
}

/// Options applied while writing a graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct RenderOptions {
    pub error_precedence: ErrorPrecedence,
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }

    /// Parse options from a TOML document. `source_name` is only used to
    /// label diagnostics.
    pub fn from_toml_str(source_name: &str, content: &str) -> Result<Self, DotError> {
        toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            DotError::TomlParseError(Box::new(crate::error::TomlParseError {
                file: source_name.to_string(),
                source_code: NamedSource::new(source_name, content.to_string()),
                span,
                source: e,
            }))
        })
    }

    pub fn parse_file(path: &Path) -> Result<Self, DotError> {
        let content = std::fs::read_to_string(path).map_err(|e| DotError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_toml_str(&path.display().to_string(), &content)
    }

    /// Apply `DOT_SCRIBE_ERROR_PRECEDENCE` on top of these options, if set
    pub fn with_env_overrides(self) -> Result<Self, DotError> {
        match std::env::var(ERROR_PRECEDENCE_ENV) {
            Ok(value) => self.with_error_precedence_value(&value),
            Err(VarError::NotPresent) => Ok(self),
            Err(VarError::NotUnicode(value)) => Err(DotError::ConfigurationError {
                message: format!(
                    "{ERROR_PRECEDENCE_ENV} is not valid UTF-8: {}",
                    value.to_string_lossy()
                ),
            }),
        }
    }

    fn with_error_precedence_value(mut self, value: &str) -> Result<Self, DotError> {
        self.error_precedence = value.parse()?;
        Ok(self)
    }
}

#[derive(Default)]
pub struct RenderOptionsBuilder {
    error_precedence: Option<ErrorPrecedence>,
}

impl RenderOptionsBuilder {
    pub fn new() -> Self {
        Self {
            error_precedence: None,
        }
    }

    pub fn with_error_precedence(mut self, error_precedence: ErrorPrecedence) -> Self {
        self.error_precedence = Some(error_precedence);
        self
    }
}

impl crate::common::ConfigBuilder for RenderOptionsBuilder {
    type Config = RenderOptions;

    fn build(self) -> Result<Self::Config, DotError> {
        Ok(RenderOptions {
            error_precedence: self.error_precedence.unwrap_or_default(),
        })
    }
}
