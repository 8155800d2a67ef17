use thiserror::Error;

use crate::literal::Literal;

/// Typed errors produced while reducing an expression tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Cannot {operation} operands of type {left} and {right}")]
    InvalidOperation {
        operation: String,
        left: String,
        right: String,
    },
}

impl EvalError {
    pub(crate) fn invalid_subtraction(left: &Literal, right: &Literal) -> Self {
        EvalError::InvalidOperation {
            operation: "subtract".to_string(),
            left: left.type_name().to_string(),
            right: right.type_name().to_string(),
        }
    }
}
