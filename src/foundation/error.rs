/// Convenience result type used across the crate.
pub type DanceResult<T> = Result<T, DanceError>;

/// Top-level error taxonomy used by the scheduler, movers and boundary loaders.
#[derive(thiserror::Error, Debug)]
pub enum DanceError {
    /// Invalid user-provided waypoint data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration values outside their documented ranges.
    #[error("config error: {0}")]
    Config(String),

    /// Scheduler or mover preconditions violated at runtime.
    #[error("schedule error: {0}")]
    Schedule(String),

    /// Errors when serializing or deserializing boundary documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DanceError {
    /// Build a [`DanceError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DanceError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`DanceError::Schedule`] value.
    pub fn schedule(msg: impl Into<String>) -> Self {
        Self::Schedule(msg.into())
    }

    /// Build a [`DanceError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
