//! # numtower-ops - Dispatch and element-wise evaluation of numeric operations
//!
//! Operations accept any [`Value`](numtower_types::Value): reals, booleans,
//! Precise decimals, complex numbers, physical units, text and nested
//! containers. The dispatcher picks one branch per operand pair, promoting
//! mixed operands to a common kind, and maps over containers element by
//! element.
//!
//! ```rust
//! use numtower_ops::prelude::*;
//!
//! let math = Math::new();
//! let sum = math.call("add", &[Value::numbers(&[1.0, 2.0]), Value::number(5.0)]).unwrap();
//! assert_eq!(sum, Value::numbers(&[6.0, 7.0]));
//! assert_eq!(abs(&Value::complex(3.0, 4.0)).unwrap(), Value::number(5.0));
//! ```

pub mod error;
pub mod config;
pub mod dispatch;
pub mod mapper;
pub mod op;
pub mod prim;
pub mod registry;

pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::config::MathConfig;
    pub use crate::dispatch::Branch;
    pub use crate::op::{BinaryOp, BranchResult, Dispatcher, UnaryOp};
    pub use crate::prim::{abs, add, cos, edivide, emultiply, sin, subtract, tan, unary_minus};
    pub use crate::registry::Math;
    pub use numtower_types::prelude::*;
}

pub use error::{MathError, MathResult};
pub use registry::Math;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test] fn test_add_scalars() { assert_eq!(add(&Value::number(3.0), &Value::number(4.0)).unwrap(), Value::number(7.0)); }
    #[test] fn test_add_complex() { assert_eq!(add(&Value::complex(1.0, 2.0), &Value::complex(3.0, 4.0)).unwrap(), Value::complex(4.0, 6.0)); }
    #[test] fn test_add_sequences() { assert_eq!(add(&Value::numbers(&[1.0, 2.0, 3.0]), &Value::numbers(&[4.0, 5.0, 6.0])).unwrap(), Value::numbers(&[5.0, 7.0, 9.0])); }
    #[test] fn test_add_broadcast() { assert_eq!(add(&Value::numbers(&[1.0, 2.0]), &Value::number(5.0)).unwrap(), Value::numbers(&[6.0, 7.0])); }
    #[test] fn test_abs_real() { assert_eq!(abs(&Value::number(-5.0)).unwrap(), Value::number(5.0)); }
    #[test] fn test_abs_complex() { assert_eq!(abs(&Value::complex(3.0, 4.0)).unwrap(), Value::number(5.0)); }
    #[test] fn test_shape_mismatch() { assert!(matches!(add(&Value::numbers(&[1.0, 2.0]), &Value::numbers(&[1.0, 2.0, 3.0])), Err(MathError::ShapeMismatch { left: 2, right: 3 }))); }
    #[test] fn test_abs_text() { assert!(matches!(abs(&Value::text("x")), Err(MathError::UnsupportedType { operation: "abs", .. }))); }
    #[test] fn test_add_arity() { assert!(matches!(Math::new().call("add", &[Value::number(1.0)]), Err(MathError::Arity { actual: 1, expected: 2, .. }))); }
    #[test] fn test_tan_angle() { assert!(tan(&Value::unit(Unit::angle(0.5))).is_ok()); }
    #[test] fn test_tan_length() { assert!(tan(&Value::unit(Unit::length(0.5))).unwrap_err().is_domain()); }
    #[test] fn test_add_text() { assert_eq!(Math::new().add(&Value::text("a"), &Value::bool(true)).unwrap(), Value::text("atrue")); }
    #[test] fn test_unary_minus_matrix() { assert!(unary_minus(&Value::matrix(vec![vec![Value::number(1.0)]])).unwrap().is_matrix()); }
    #[test] fn test_precise_sum() { assert_eq!(add(&Value::precise(Decimal::new(1, 1)), &Value::precise(Decimal::new(2, 1))).unwrap().to_string(), "0.3"); }
}
