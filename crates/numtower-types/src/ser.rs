//! JSON interchange for values
//!
//! Values, units and containers round-trip through `serde_json`; a matrix
//! keeps its kind tag on the way through.

use crate::value::{FormatNumber, Value};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Serialization error
#[derive(Error, Debug)]
pub enum SerError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SerError>;

/// Serialize value to pretty JSON
pub fn to_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Serialize value to compact JSON (no whitespace)
pub fn to_json_compact(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Deserialize value from JSON string
pub fn from_json(json: &str) -> Result<Value> {
    Ok(serde_json::from_str(json)?)
}

/// Deserialize value from JSON bytes
pub fn from_json_bytes(bytes: &[u8]) -> Result<Value> {
    Ok(serde_json::from_slice(bytes)?)
}

/// A float that keeps `Infinity`, `-Infinity` and `NaN` as strings, since
/// JSON numbers cannot hold them
#[derive(Debug, Clone, Copy)]
pub(crate) struct Real(pub f64);

impl Serialize for Real {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            s.serialize_f64(self.0)
        } else {
            s.serialize_str(&FormatNumber(self.0).to_string())
        }
    }
}

impl<'de> Deserialize<'de> for Real {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }
        match Repr::deserialize(d)? {
            Repr::Number(x) => Ok(Real(x)),
            Repr::Text(s) => match s.as_str() {
                "Infinity" => Ok(Real(f64::INFINITY)),
                "-Infinity" => Ok(Real(f64::NEG_INFINITY)),
                "NaN" => Ok(Real(f64::NAN)),
                _ => Err(de::Error::custom(format!("invalid number: {}", s))),
            },
        }
    }
}

/// `serde(with)` adapter for the `Number` payload
pub(crate) mod number {
    use super::Real;
    use ordered_float::OrderedFloat;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(x: &OrderedFloat<f64>, s: S) -> Result<S::Ok, S::Error> {
        Real(x.0).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<OrderedFloat<f64>, D::Error> {
        Real::deserialize(d).map(|r| OrderedFloat(r.0))
    }
}

/// `serde(with)` adapter for the `Complex` payload, written as `[re, im]`
pub(crate) mod complex {
    use super::Real;
    use num_complex::Complex64;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(z: &Complex64, s: S) -> Result<S::Ok, S::Error> {
        (Real(z.re), Real(z.im)).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Complex64, D::Error> {
        <(Real, Real)>::deserialize(d).map(|(re, im)| Complex64::new(re.0, im.0))
    }
}

/// `serde(with)` adapter for an optional unit value
pub(crate) mod optional_real {
    use super::Real;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(x: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
        x.map(Real).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Option::<Real>::deserialize(d).map(|x| x.map(|r| r.0))
    }
}
