//! Error handling for numtower operations

use numtower_types::Value;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Wrong number of arguments in function {operation} ({actual} provided, {expected} expected)")]
    Arity { operation: &'static str, actual: usize, expected: usize },
    #[error("Function {operation}({}) not supported", .operands.join(", "))]
    UnsupportedType { operation: &'static str, operands: Vec<&'static str> },
    #[error("{0}")]
    Domain(String),
    #[error("Dimension mismatch ({left} != {right})")]
    ShapeMismatch { left: usize, right: usize },
    #[error("Container nesting exceeds depth limit of {limit}")]
    DepthExceeded { limit: usize },
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

pub type MathResult<T> = Result<T, MathError>;

/// Which operand of a binary operator an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left hand side"),
            Side::Right => write!(f, "right hand side"),
        }
    }
}

impl MathError {
    pub fn unsupported(operation: &'static str, operands: &[&Value]) -> Self {
        MathError::UnsupportedType { operation, operands: operands.iter().map(|v| v.type_name()).collect() }
    }
    pub fn domain(msg: impl Into<String>) -> Self { MathError::Domain(msg.into()) }
    pub fn units_mismatch() -> Self { MathError::domain("units do not match") }
    pub fn undefined_unit_value(side: Side, operator: &str) -> Self {
        MathError::Domain(format!("unit on {} of operator {} has an undefined value", side, operator))
    }
    pub fn is_domain(&self) -> bool { matches!(self, MathError::Domain(_)) }
}
