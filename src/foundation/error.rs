/// Convenience result type used across gradfield.
pub type GradFieldResult<T> = Result<T, GradFieldError>;

/// Top-level error taxonomy used by material, kernel and shading APIs.
#[derive(thiserror::Error, Debug)]
pub enum GradFieldError {
    /// Caller contract violations, such as mismatched position/value lengths.
    #[error("validation error: {0}")]
    Validation(String),

    /// Degenerate or non-finite gradient parameters.
    #[error("configuration error: {0}")]
    Config(String),

    /// Kernel respecialization failed or no usable kernel is available.
    #[error("kernel error: {0}")]
    Kernel(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GradFieldError {
    /// Build a [`GradFieldError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GradFieldError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`GradFieldError::Kernel`] value.
    pub fn kernel(msg: impl Into<String>) -> Self {
        Self::Kernel(msg.into())
    }

    /// Build a [`GradFieldError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
