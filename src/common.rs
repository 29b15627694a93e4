//! Common functionality shared across the crate

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::DotError>;
}

/// Build the `ConfigurationError` reported when a builder is missing a field
pub(crate) fn missing_field(field: &str) -> crate::error::DotError {
    crate::error::DotError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}
