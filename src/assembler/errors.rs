//! Error types for trace generation
//!
//! [`TraceError`] separates two classes of failure:
//!
//! - user errors ([`TraceError::Parse`]) that the interactive surface reports
//!   and recovers from, and
//! - configuration or programming errors ([`TraceError::NotFound`],
//!   [`TraceError::ShapeMismatch`], [`TraceError::InvariantViolation`]): a
//!   caller asked for an unregistered id, or a registry entry or tracer is
//!   wrong. These are never patched over with a synthetic trace.
//!
//! Front ends offering a fixed menu of ids never produce `NotFound`; the CLI
//! validates the id against the registry while parsing its arguments.

use crate::parser::ParseError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    /// Malformed input text
    #[error("invalid input: {0}")]
    Parse(#[from] ParseError),

    /// No algorithm registered under this identifier
    #[error("unknown algorithm '{id}'")]
    NotFound { id: String },

    /// The registry pairs a shape with a tracer that cannot consume it
    #[error("algorithm '{algorithm}' declares {shape} input but its tracer expects {tracer}")]
    ShapeMismatch {
        algorithm: String,
        shape: String,
        tracer: String,
    },

    /// A tracer produced a trace that breaks the trace contract
    #[error("trace from '{algorithm}' is invalid{}: {reason}", at_step(.step))]
    InvariantViolation {
        algorithm: String,
        step: Option<usize>,
        reason: String,
    },
}

fn at_step(step: &Option<usize>) -> String {
    step.map(|s| format!(" at step {}", s)).unwrap_or_default()
}

impl TraceError {
    /// Whether the caller can fix this by changing their input
    pub fn is_user_error(&self) -> bool {
        matches!(self, TraceError::Parse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = TraceError::from(ParseError::InvalidNumber {
            token: "x".to_string(),
            position: 2,
            column: 3,
        });
        assert_eq!(
            err.to_string(),
            "invalid input: invalid number 'x' at position 2 (column 3)"
        );
        assert!(err.is_user_error());

        let err = TraceError::InvariantViolation {
            algorithm: "bubble-sort".to_string(),
            step: Some(4),
            reason: "terminal flag set early".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "trace from 'bubble-sort' is invalid at step 4: terminal flag set early"
        );
        assert!(!err.is_user_error());

        let err = TraceError::NotFound {
            id: "bogo-sort".to_string(),
        };
        assert_eq!(err.to_string(), "unknown algorithm 'bogo-sort'");
        assert!(!err.is_user_error());
    }
}
