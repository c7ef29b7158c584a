use thiserror::Error;

use super::op::UnaryOp;
use super::stack::Underflow;

/// Reasons a numeric entry is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no number was entered")]
    EmptyInput,

    #[error("{0:?} is not a valid number")]
    InvalidNumber(String),
}

/// Reasons an operation on the stack is rejected.
///
/// Whichever variant is returned, the stack holds what it held before the
/// operation was attempted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OperationError {
    #[error("insufficient operands")]
    InsufficientOperands(#[from] Underflow),

    #[error("division by zero")]
    DivisionByZero,

    #[error("{operand} is outside the domain of {op}")]
    InvalidDomain { op: UnaryOp, operand: f64 },

    #[error("unknown operator {0:?}")]
    UnknownOperator(String),
}
