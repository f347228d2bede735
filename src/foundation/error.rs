/// Convenience result type used across Plotline.
pub type PlotlineResult<T> = Result<T, PlotlineError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum PlotlineError {
    /// Expression text that does not compile.
    #[error("parse error: {0}")]
    Parse(String),

    /// Errors while evaluating a compiled expression or its derivatives.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Invalid user-provided data (viewport bounds, equation references).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlotlineError {
    /// Build a [`PlotlineError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`PlotlineError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`PlotlineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PlotlineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
