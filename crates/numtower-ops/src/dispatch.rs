//! Operand-pair dispatch and promotion
//!
//! Binary operations walk the operand kinds in a fixed priority order:
//!
//! | # | operands                                | branch      |
//! |---|-----------------------------------------|-------------|
//! | 1 | Scalar × Scalar                         | `Scalar`    |
//! | 2 | Scalar × Complex, Complex × Scalar      | `Complex`   |
//! | 3 | Complex × Complex                       | `Complex`   |
//! | 4 | PhysicalUnit × PhysicalUnit             | `Units`     |
//! | 5 | Precise × (Precise or Scalar), Scalar × Precise | `Precise` |
//! | 6 | Text × anything, anything × Text        | `Text`      |
//! | 7 | Container × anything, anything × Container | `Container` |
//! | 8 | anything else                           | `Unsupported` |
//!
//! Numeric promotions come before text so mixed numeric operands never get
//! stringified, and containers come last so each element goes back through
//! the whole table.

use crate::error::{MathError, MathResult, Side};
use crate::mapper::Mapper;
use num_complex::Complex64;
use numtower_types::unit::Unit;
use numtower_types::{classify, Value, Variant};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// Computation branch chosen for an operand pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Scalar,
    Complex,
    Units,
    Precise,
    Text,
    Container,
    Unsupported,
}

/// The priority table. Arm order is the priority order.
pub fn binary_branch(x: Variant, y: Variant) -> Branch {
    use numtower_types::Variant::*;
    match (x, y) {
        (Scalar, Scalar) => Branch::Scalar,
        (Scalar, Complex) | (Complex, Scalar) => Branch::Complex,
        (Complex, Complex) => Branch::Complex,
        (PhysicalUnit, PhysicalUnit) => Branch::Units,
        (Precise, Precise) | (Precise, Scalar) | (Scalar, Precise) => Branch::Precise,
        (Text, _) | (_, Text) => Branch::Text,
        (Container, _) | (_, Container) => Branch::Container,
        _ => Branch::Unsupported,
    }
}

/// Operand pair after promotion to a common representation
#[derive(Debug, Clone, PartialEq)]
pub enum Binary<'a> {
    Scalar(f64, f64),
    Complex(Complex64, Complex64),
    Units(&'a Unit, &'a Unit),
    /// Promoted on demand with [`promote_precise`]
    Precise(&'a Value, &'a Value),
    Text(String, String),
    Container,
    Unsupported,
}

impl Binary<'_> {
    pub fn branch(&self) -> Branch {
        match self {
            Binary::Scalar(..) => Branch::Scalar,
            Binary::Complex(..) => Branch::Complex,
            Binary::Units(..) => Branch::Units,
            Binary::Precise(..) => Branch::Precise,
            Binary::Text(..) => Branch::Text,
            Binary::Container => Branch::Container,
            Binary::Unsupported => Branch::Unsupported,
        }
    }
}

/// Single operand, unwrapped for its branch
#[derive(Debug, Clone, PartialEq)]
pub enum Unary<'a> {
    Scalar(f64),
    Precise(Decimal),
    Complex(Complex64),
    Unit(&'a Unit),
    Text(&'a str),
    Container,
    Unsupported,
}

fn promote_complex(v: &Value) -> Option<Complex64> {
    match v {
        Value::Complex(z) => Some(*z),
        _ => v.coerce_real().map(|re| Complex64::new(re, 0.0)),
    }
}

/// Precise form of a Precise or scalar operand
pub fn promote_precise(v: &Value) -> MathResult<Decimal> {
    match v {
        Value::Precise(d) => Ok(*d),
        _ => {
            let x = v.coerce_real().ok_or_else(|| MathError::domain(format!("cannot convert {} to Precise", v.type_name())))?;
            Decimal::from_f64(x).ok_or_else(|| MathError::domain(format!("cannot convert {} to Precise", v)))
        }
    }
}

/// Classify both operands, pick the branch and promote them into it.
///
/// Containers turned into text are checked against the mapper's depth limit
/// first.
pub fn resolve_binary<'a>(x: &'a Value, y: &'a Value, mapper: &Mapper) -> MathResult<Binary<'a>> {
    let branch = binary_branch(classify(x), classify(y));
    Ok(match branch {
        Branch::Scalar => match (x.coerce_real(), y.coerce_real()) {
            (Some(a), Some(b)) => Binary::Scalar(a, b),
            _ => Binary::Unsupported,
        },
        Branch::Complex => match (promote_complex(x), promote_complex(y)) {
            (Some(a), Some(b)) => Binary::Complex(a, b),
            _ => Binary::Unsupported,
        },
        Branch::Units => match (x, y) {
            (Value::Unit(a), Value::Unit(b)) => Binary::Units(a, b),
            _ => Binary::Unsupported,
        },
        Branch::Precise => Binary::Precise(x, y),
        Branch::Text => {
            mapper.check_depth(x)?;
            mapper.check_depth(y)?;
            Binary::Text(x.to_string(), y.to_string())
        }
        Branch::Container => Binary::Container,
        Branch::Unsupported => Binary::Unsupported,
    })
}

pub fn resolve_unary(x: &Value) -> Unary<'_> {
    match x {
        Value::Number(f) => Unary::Scalar(f.0),
        Value::Bool(b) => Unary::Scalar(if *b { 1.0 } else { 0.0 }),
        Value::Precise(d) => Unary::Precise(*d),
        Value::Complex(z) => Unary::Complex(*z),
        Value::Unit(u) => Unary::Unit(u),
        Value::Text(s) => Unary::Text(s),
        Value::Container(_) => Unary::Container,
        Value::Null => Unary::Unsupported,
    }
}

/// Values of two units about to be combined by `operator`.
///
/// The units must share base dimensions and both carry a value.
pub fn unit_values(a: &Unit, b: &Unit, operator: &str) -> MathResult<(f64, f64)> {
    if !a.equal_base(b) {
        return Err(MathError::units_mismatch());
    }
    let left = a.value().ok_or_else(|| MathError::undefined_unit_value(Side::Left, operator))?;
    let right = b.value().ok_or_else(|| MathError::undefined_unit_value(Side::Right, operator))?;
    Ok((left, right))
}
