//! Runtime error types for the Bojro evaluator.

use thiserror::Error;

/// A runtime fault. The first one stops execution and is reported as a
/// single `Error: <message>` output line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Read or assignment of a name that was never declared.
    #[error("{0} is not defined")]
    UndefinedVariable(String),
    /// Operator applied to operands it does not accept.
    #[error("{0}")]
    TypeMismatch(String),
    /// The run evaluated more nodes than its step limit allows.
    #[error("step limit exceeded")]
    StepLimitExceeded,
    /// The run printed more lines than its output limit allows.
    #[error("output limit exceeded")]
    OutputLimitExceeded,
}

impl EvalError {
    /// The output line this fault is reported as.
    pub fn to_output_line(&self) -> String {
        format!("Error: {self}")
    }
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
