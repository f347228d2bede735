use std::fmt;

use crate::foundation::error::PlotlineError;

/// Parse/compile failure with a byte offset into the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprError {
    /// Byte offset of the failure in the expression source.
    pub offset: usize,
    /// Human-readable description.
    pub message: String,
}

impl ExprError {
    pub(crate) fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expr error at byte {}: {}", self.offset, self.message)
    }
}

impl std::error::Error for ExprError {}

impl From<ExprError> for PlotlineError {
    fn from(e: ExprError) -> Self {
        PlotlineError::parse(e.to_string())
    }
}
