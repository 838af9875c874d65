//! Serde support: a [BitVector] is written as its `'0'`/`'1'` string, MSB first.
//!
//! Deserialization parses at natural length, so the round trip preserves the exact
//! bit sequence including leading `false` bits.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::bit_vector::BitVector;

impl Serialize for BitVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BitVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;

        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::capacity::Capacity;

    use super::*;

    #[test]
    fn test_serialize_as_string() {
        let bv = BitVector::from_str_with_capacity("101", Capacity::Fixed(5)).unwrap();
        assert_eq!(serde_json::to_string(&bv).unwrap(), "\"00101\"");
    }

    #[test]
    fn test_deserialize_from_string() {
        let bv: BitVector = serde_json::from_str("\"0110\"").unwrap();
        assert_eq!(bv.as_slice(), &[false, true, true, false]);
    }

    #[test]
    fn test_deserialize_invalid_character() {
        let err = serde_json::from_str::<BitVector>("\"01a0\"").unwrap_err();
        assert!(err.to_string().contains("invalid bit character 'a' at position 2"));
    }

    #[test]
    fn test_capacity_round_trip() {
        let json = serde_json::to_string(&Capacity::Fixed(8)).unwrap();
        assert_eq!(json, "{\"Fixed\":8}");
        assert_eq!(serde_json::from_str::<Capacity>(&json).unwrap(), Capacity::Fixed(8));
    }
}
