//! # numtower-types
//!
//! Value model for the numtower operation library.
//!
//! Every operation in `numtower-ops` receives its operands as [`Value`]s.
//! A value is one of a closed set of numeric kinds:
//!
//! - native reals and booleans (booleans count as 0/1 in arithmetic)
//! - arbitrary-precision decimals
//! - complex numbers
//! - physical units, compared by their base dimensions
//! - text, used for concatenation
//! - sequence containers, plain or matrix-tagged, nested to any depth
//!
//! [`classify`] maps a value to its [`Variant`], which is what the
//! dispatcher branches on.
//!
//! ## Example
//!
//! ```rust
//! use numtower_types::prelude::*;
//!
//! let m = Value::matrix(vec![
//!     vec![Value::number(1.0), Value::number(2.0)],
//!     vec![Value::number(3.0), Value::number(4.0)],
//! ]);
//! assert_eq!(classify(&m), Variant::Container);
//! assert_eq!(m.as_container().unwrap().shape(), vec![2, 2]);
//! ```

pub mod value;
pub mod container;
pub mod unit;
pub mod classify;
pub mod ser;

/// Prelude - common imports
pub mod prelude {
    pub use crate::value::Value;
    pub use crate::container::{Container, ContainerKind};
    pub use crate::unit::{BaseDimension, Dimensions, Unit};
    pub use crate::classify::{classify, Variant};
    pub use num_complex::Complex64;
    pub use rust_decimal::Decimal;
}

pub use classify::{classify, Variant};
pub use value::Value;
