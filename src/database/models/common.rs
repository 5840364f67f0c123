//! Common shared models.

use std::fmt;

use mongodb::bson::Bson;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A nightly price.
///
/// The sample dataset stores prices as Decimal128, while `$avg` may yield a
/// double or a decimal depending on its inputs, so every numeric BSON form is
/// accepted and read as `f64`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Price(pub f64);

impl Price {
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert a numeric BSON value, returning `None` for anything else.
    pub fn from_bson(value: &Bson) -> Option<Self> {
        match value {
            Bson::Double(v) => Some(Self(*v)),
            Bson::Int32(v) => Some(Self(f64::from(*v))),
            // i64 -> f64 may round for huge values, same as the server's $avg
            Bson::Int64(v) => Some(Self(*v as f64)),
            Bson::Decimal128(d) => d.to_string().parse().ok().map(Self),
            _ => None,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Bson::deserialize(deserializer)?;
        Self::from_bson(&value)
            .ok_or_else(|| D::Error::custom(format!("expected a numeric price, got {value}")))
    }
}
