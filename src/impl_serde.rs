//! Serde support, behind the `serde` feature
//!
//! Values serialize as base-ten strings: the digit layout is an
//! internal detail of the radix parameter, and a string survives
//! readers that cannot hold big integers natively. Deserialization also
//! accepts native integers for convenience.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::BigInt;

impl<const BASE: u32> Serialize for BigInt<BASE> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, const BASE: u32> Deserialize<'de> for BigInt<BASE> {
    fn deserialize<D>(deserializer: D) -> Result<BigInt<BASE>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(BigIntVisitor::<BASE>)
    }
}

struct BigIntVisitor<const BASE: u32>;

impl<'de, const BASE: u32> de::Visitor<'de> for BigIntVisitor<BASE> {
    type Value = BigInt<BASE>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string containing a base ten integer")
    }

    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        s.parse().map_err(E::custom)
    }

    fn visit_i64<E>(self, n: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(n))
    }

    fn visit_u64<E>(self, n: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(n))
    }
}


#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn serializes_as_decimal_string() {
        let value: BigInt = "-123456789012345678901234567890".parse().unwrap();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"-123456789012345678901234567890\"");
    }

    #[test]
    fn round_trips_through_json() {
        let value: BigInt<1024> = "987654321987654321".parse().unwrap();
        let json = serde_json::to_string(&value).unwrap();
        let back: BigInt<1024> = serde_json::from_str(&json).unwrap();
        assert_eq!(value, back);
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<BigInt>("\"12x\"").is_err());
    }
}
