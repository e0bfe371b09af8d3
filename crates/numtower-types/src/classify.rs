//! Operand classification
//!
//! Maps any [`Value`] to exactly one numeric [`Variant`]. The categories are
//! disjoint, so the order of the arms below carries no meaning; priority is
//! decided later by the resolver.

use crate::value::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Native real number or boolean
    Scalar,
    /// Arbitrary-precision number
    Precise,
    Complex,
    PhysicalUnit,
    Text,
    /// Plain or matrix-tagged sequence
    Container,
    Unsupported,
}

pub fn classify(v: &Value) -> Variant {
    match v {
        Value::Number(_) | Value::Bool(_) => Variant::Scalar,
        Value::Precise(_) => Variant::Precise,
        Value::Complex(_) => Variant::Complex,
        Value::Unit(_) => Variant::PhysicalUnit,
        Value::Text(_) => Variant::Text,
        Value::Container(_) => Variant::Container,
        Value::Null => Variant::Unsupported,
    }
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Scalar => "Scalar",
            Variant::Precise => "Precise",
            Variant::Complex => "Complex",
            Variant::PhysicalUnit => "PhysicalUnit",
            Variant::Text => "Text",
            Variant::Container => "Container",
            Variant::Unsupported => "Unsupported",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Variant::Scalar | Variant::Precise | Variant::Complex)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Value {
    pub fn variant(&self) -> Variant { classify(self) }
}
