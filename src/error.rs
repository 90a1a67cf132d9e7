//! Error types for the analysis library.
//!
//! Insufficient history is never an error: the analyzer encodes it as a
//! normal "no suggestion" result. Errors are reserved for inputs that would
//! silently corrupt the statistics if allowed through.

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Error type for analysis operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// A caller-supplied parameter failed precondition checks.
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// The analyzer policy itself is degenerate (e.g. an empty interval band).
    #[error("Invalid analyzer policy: {reason}")]
    InvalidPolicy {
        /// Why the policy was rejected
        reason: String,
    },
}

impl AnalysisError {
    /// Create an invalid-parameter error.
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Create an invalid-policy error.
    pub fn invalid_policy(reason: impl Into<String>) -> Self {
        Self::InvalidPolicy {
            reason: reason.into(),
        }
    }
}
