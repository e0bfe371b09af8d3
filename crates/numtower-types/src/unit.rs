//! Physical units
//!
//! A unit carries its value in SI base units together with the exponent
//! vector of its base dimensions. Two units are compatible when their
//! dimension vectors are equal; nothing beyond that equality is modelled.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of base dimensions tracked per unit
pub const BASE_DIMENSION_COUNT: usize = 9;

/// Base dimensions, in exponent-vector order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseDimension {
    Mass,
    Length,
    Time,
    Current,
    Temperature,
    LuminousIntensity,
    AmountOfSubstance,
    Angle,
    Bit,
}

impl BaseDimension {
    pub const ALL: [BaseDimension; BASE_DIMENSION_COUNT] = [
        BaseDimension::Mass,
        BaseDimension::Length,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::LuminousIntensity,
        BaseDimension::AmountOfSubstance,
        BaseDimension::Angle,
        BaseDimension::Bit,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Exponents of the base dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dimensions(pub [i8; BASE_DIMENSION_COUNT]);

impl Dimensions {
    pub const DIMENSIONLESS: Dimensions = Dimensions([0; BASE_DIMENSION_COUNT]);

    /// Dimensions of a single base unit, e.g. `Dimensions::of(BaseDimension::Angle)`
    pub const fn of(base: BaseDimension) -> Self {
        let mut exps = [0; BASE_DIMENSION_COUNT];
        exps[base as usize] = 1;
        Dimensions(exps)
    }

    pub fn exponent(&self, base: BaseDimension) -> i8 {
        self.0[base.index()]
    }

    pub fn is_dimensionless(&self) -> bool {
        *self == Dimensions::DIMENSIONLESS
    }
}

/// A value annotated with physical base dimensions.
///
/// Units are plain values: every "modification" returns a new `Unit` and
/// leaves the receiver untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    #[serde(with = "crate::ser::optional_real")]
    value: Option<f64>,
    dimensions: Dimensions,
    symbol: String,
    fix_prefix: bool,
}

impl Unit {
    pub fn new(value: Option<f64>, dimensions: Dimensions, symbol: impl Into<String>) -> Self {
        Unit { value, dimensions, symbol: symbol.into(), fix_prefix: false }
    }

    /// A unit with no numeric value, e.g. the bare `cm` in `5 inch to cm`
    pub fn undefined(dimensions: Dimensions, symbol: impl Into<String>) -> Self {
        Unit::new(None, dimensions, symbol)
    }

    pub fn angle(radians: f64) -> Self {
        Unit::new(Some(radians), Dimensions::of(BaseDimension::Angle), "rad")
    }

    pub fn length(metres: f64) -> Self {
        Unit::new(Some(metres), Dimensions::of(BaseDimension::Length), "m")
    }

    pub fn mass(kilograms: f64) -> Self {
        Unit::new(Some(kilograms), Dimensions::of(BaseDimension::Mass), "kg")
    }

    pub fn time(seconds: f64) -> Self {
        Unit::new(Some(seconds), Dimensions::of(BaseDimension::Time), "s")
    }

    pub fn with_fixed_prefix(mut self, fixed: bool) -> Self {
        self.fix_prefix = fixed;
        self
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Whether the display prefix is locked (set by explicit conversions)
    pub fn is_prefix_fixed(&self) -> bool {
        self.fix_prefix
    }

    /// Compatibility test: equal base dimension vectors
    pub fn equal_base(&self, other: &Unit) -> bool {
        self.dimensions == other.dimensions
    }

    pub fn has_base(&self, dimensions: Dimensions) -> bool {
        self.dimensions == dimensions
    }

    /// Copy of this unit carrying `value`, with the prefix lock cleared
    pub fn with_value(&self, value: f64) -> Unit {
        Unit { value: Some(value), dimensions: self.dimensions, symbol: self.symbol.clone(), fix_prefix: false }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(v) => write!(f, "{} {}", crate::value::FormatNumber(v), self.symbol),
            None => write!(f, "{}", self.symbol),
        }
    }
}
