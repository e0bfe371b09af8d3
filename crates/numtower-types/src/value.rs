//! Runtime values for numtower

use crate::container::{Container, ContainerKind};
use crate::unit::Unit;
use num_complex::Complex64;
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operand value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Number(#[serde(with = "crate::ser::number")] OrderedFloat<f64>),
    Bool(bool),
    Precise(Decimal),
    Complex(#[serde(with = "crate::ser::complex")] Complex64),
    Unit(Unit),
    Text(String),
    Container(Container),
    Null,
}

impl Value {
    pub fn number(f: f64) -> Self { Value::Number(OrderedFloat(f)) }
    pub fn bool(b: bool) -> Self { Value::Bool(b) }
    pub fn precise(d: Decimal) -> Self { Value::Precise(d) }
    /// Complex from its parts. The parts are taken as given: finiteness is
    /// not checked here or on arithmetic results.
    pub fn complex(re: f64, im: f64) -> Self { Value::Complex(Complex64::new(re, im)) }
    pub fn unit(u: Unit) -> Self { Value::Unit(u) }
    pub fn text(s: impl Into<String>) -> Self { Value::Text(s.into()) }
    pub fn null() -> Self { Value::Null }
    pub fn sequence(items: Vec<Value>) -> Self { Value::Container(Container::sequence(items)) }
    pub fn numbers(data: &[f64]) -> Self { Value::sequence(data.iter().copied().map(Value::number).collect()) }

    /// Matrix-tagged container whose rows are plain sequences
    pub fn matrix(rows: Vec<Vec<Value>>) -> Self {
        Value::Container(Container::matrix(rows.into_iter().map(Value::sequence).collect()))
    }

    pub fn is_number(&self) -> bool { matches!(self, Value::Number(_)) }
    pub fn is_bool(&self) -> bool { matches!(self, Value::Bool(_)) }
    pub fn is_scalar(&self) -> bool { matches!(self, Value::Number(_) | Value::Bool(_)) }
    pub fn is_container(&self) -> bool { matches!(self, Value::Container(_)) }
    pub fn is_matrix(&self) -> bool { matches!(self, Value::Container(c) if c.is_matrix()) }

    pub fn as_number(&self) -> Option<f64> { match self { Value::Number(f) => Some(f.0), _ => None } }
    pub fn as_bool(&self) -> Option<bool> { match self { Value::Bool(b) => Some(*b), _ => None } }
    pub fn as_precise(&self) -> Option<Decimal> { match self { Value::Precise(d) => Some(*d), _ => None } }
    pub fn as_complex(&self) -> Option<Complex64> { match self { Value::Complex(z) => Some(*z), _ => None } }
    pub fn as_unit(&self) -> Option<&Unit> { match self { Value::Unit(u) => Some(u), _ => None } }
    pub fn as_text(&self) -> Option<&str> { match self { Value::Text(s) => Some(s), _ => None } }
    pub fn as_container(&self) -> Option<&Container> { match self { Value::Container(c) => Some(c), _ => None } }

    /// Real value of a scalar; booleans count as 0 and 1
    pub fn coerce_real(&self) -> Option<f64> {
        match self {
            Value::Number(f) => Some(f.0),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
            Value::Precise(_) => "Precise",
            Value::Complex(_) => "Complex",
            Value::Unit(_) => "Unit",
            Value::Text(_) => "string",
            Value::Container(c) => match c.kind() {
                ContainerKind::Sequence => "Array",
                ContainerKind::Matrix => "Matrix",
            },
            Value::Null => "null",
        }
    }
}

impl From<f64> for Value { fn from(f: f64) -> Self { Value::number(f) } }
impl From<bool> for Value { fn from(b: bool) -> Self { Value::Bool(b) } }
impl From<&str> for Value { fn from(s: &str) -> Self { Value::Text(s.to_string()) } }
impl From<String> for Value { fn from(s: String) -> Self { Value::Text(s) } }
impl From<Decimal> for Value { fn from(d: Decimal) -> Self { Value::Precise(d) } }
impl From<Complex64> for Value { fn from(z: Complex64) -> Self { Value::Complex(z) } }
impl From<Unit> for Value { fn from(u: Unit) -> Self { Value::Unit(u) } }
impl From<Container> for Value { fn from(c: Container) -> Self { Value::Container(c) } }

/// Shortest textual form of a float, with `Infinity`/`NaN` spelled out.
///
/// Magnitudes below 1e-6 or from 1e21 up switch to exponent form (`1e+21`,
/// `1.5e-7`); zero prints as `0` whatever its sign.
pub(crate) struct FormatNumber(pub f64);

impl fmt::Display for FormatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        if x.is_nan() {
            return write!(f, "NaN");
        }
        if x.is_infinite() {
            return write!(f, "{}", if x > 0.0 { "Infinity" } else { "-Infinity" });
        }
        if x == 0.0 {
            return write!(f, "0");
        }
        let magnitude = x.abs();
        if !(1e-6..1e21).contains(&magnitude) {
            let exp = format!("{:e}", x);
            return match exp.split_once('e') {
                Some((mantissa, e)) if !e.starts_with('-') => write!(f, "{}e+{}", mantissa, e),
                _ => write!(f, "{}", exp),
            };
        }
        write!(f, "{}", x)
    }
}

fn fmt_complex(z: &Complex64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let (re, im) = (z.re, z.im);
    if im == 0.0 {
        return write!(f, "{}", FormatNumber(re));
    }
    if re == 0.0 {
        return match im {
            i if i == 1.0 => write!(f, "i"),
            i if i == -1.0 => write!(f, "-i"),
            i => write!(f, "{}i", FormatNumber(i)),
        };
    }
    match im {
        i if i == 1.0 => write!(f, "{} + i", FormatNumber(re)),
        i if i == -1.0 => write!(f, "{} - i", FormatNumber(re)),
        i if i > 0.0 => write!(f, "{} + {}i", FormatNumber(re), FormatNumber(i)),
        i => write!(f, "{} - {}i", FormatNumber(re), FormatNumber(-i)),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(x) => write!(f, "{}", FormatNumber(x.0)),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Precise(d) => write!(f, "{}", d),
            Value::Complex(z) => fmt_complex(z, f),
            Value::Unit(u) => write!(f, "{}", u),
            Value::Text(s) => write!(f, "{}", s),
            Value::Container(c) => write!(f, "{}", c),
            Value::Null => write!(f, "null"),
        }
    }
}
