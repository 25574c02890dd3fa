use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::fmt::Formatter;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Discriminator(pub u16);

impl Serialize for Discriminator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:0>4}", self.0))
    }
}

impl<'de> Deserialize<'de> for Discriminator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        if let Some(i) = value.as_u64() {
            return Ok(Discriminator(i as u16));
        }

        if let Some(s) = value.as_str() {
            return Ok(Discriminator(s.parse().map_err(Error::custom)?));
        }

        Err(Error::custom("discriminator was not a string or integer"))
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:0>4}", self.0)
    }
}
