use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(dot_scribe::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum DotError {
    #[error("IO error")]
    #[diagnostic(
        code(dot_scribe::io_error),
        help("The output stream rejected a write; the DOT text written so far is incomplete")
    )]
    Io(#[from] std::io::Error),

    #[error("Rendered DOT text is not valid UTF-8")]
    #[diagnostic(
        code(dot_scribe::utf8_error),
        help("This is likely an internal error - please report it")
    )]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(dot_scribe::file_read_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(dot_scribe::config_error),
        help("Check your render options and environment")
    )]
    ConfigurationError { message: String },
}
