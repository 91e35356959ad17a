// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serde helpers for `f64` fields that may hold NaN or infinities.
//!
//! Formats like JSON have no literal for non-finite numbers, so they are
//! written as the strings `"NaN"`, `"inf"` and `"-inf"`. Reading also
//! accepts `null` as NaN, which is what `serde_json` emits for a plain
//! non-finite `f64`. Use with `#[serde(with = "crate::model::float")]`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

const NAN: &str = "NaN";
const INFINITY: &str = "inf";
const NEG_INFINITY: &str = "-inf";

pub fn serialize<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
    if value.is_nan() {
        s.serialize_str(NAN)
    } else if value.is_infinite() && value.is_sign_positive() {
        s.serialize_str(INFINITY)
    } else if value.is_infinite() {
        s.serialize_str(NEG_INFINITY)
    } else {
        s.serialize_f64(*value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(f64),
    Text(String),
}

pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    match Option::<Repr>::deserialize(d)? {
        None => Ok(f64::NAN),
        Some(Repr::Number(n)) => Ok(n),
        Some(Repr::Text(text)) => match text.to_lowercase().as_str() {
            "nan" => Ok(f64::NAN),
            "inf" | "+inf" | "infinity" => Ok(f64::INFINITY),
            "-inf" | "-infinity" => Ok(f64::NEG_INFINITY),
            _ => Err(D::Error::custom(format!("invalid float '{text}'"))),
        },
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Weighted {
        #[serde(with = "crate::model::float")]
        weight: f64,
    }

    fn roundtrip(weight: f64) -> f64 {
        let json = serde_json::to_string(&Weighted { weight }).unwrap();
        serde_json::from_str::<Weighted>(&json).unwrap().weight
    }

    #[test]
    fn finite_values_stay_numbers() {
        let json = serde_json::to_string(&Weighted { weight: 0.25 }).unwrap();
        assert_eq!(json, r#"{"weight":0.25}"#);
        assert_eq!(roundtrip(-3.5), -3.5);
    }

    #[test]
    fn non_finite_values_roundtrip() {
        assert!(roundtrip(f64::NAN).is_nan());
        assert_eq!(roundtrip(f64::INFINITY), f64::INFINITY);
        assert_eq!(roundtrip(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn null_reads_as_nan() {
        let read: Weighted = serde_json::from_str(r#"{"weight":null}"#).unwrap();
        assert!(read.weight.is_nan());
    }

    #[test]
    fn integers_read_as_floats() {
        let read: Weighted = serde_json::from_str(r#"{"weight":1}"#).unwrap();
        assert_eq!(read.weight, 1.0);
    }

    #[test]
    fn unknown_text_is_rejected() {
        assert!(serde_json::from_str::<Weighted>(r#"{"weight":"heavy"}"#).is_err());
    }
}
