//! Tagged-text wire format for the Unity client
//!
//! The external client cannot read the JSON call frames, so values cross as
//! tagged ASCII with the same `.EOF` framing the binary bridge uses. A
//! payload is a tag naming the shape followed by the rendered value.
//! Observations are denormalized (times 13, truncated) before they leave
//! the process; the client works in raw card ranks. Only the integer-list
//! tag has a decode path, and foreign input decodes to an empty list rather
//! than an error.

use chefshat_core::observation::CARD_SCALE;
use chefshat_core::Observation;

/// Tag for a space-separated integer list.
pub const TAG_INT_LIST: &str = "__list__int__";
/// Tag for a boolean, rendered as 1 or 0.
pub const TAG_BOOL: &str = "__bool__";
/// Tag for raw text.
pub const TAG_STRING: &str = "__string__";

/// A value the external client can consume.
#[derive(Debug, Clone, PartialEq)]
pub enum UnityValue {
    /// Integer list: observations going out, action selections coming back.
    Ints(Vec<i64>),
    Bool(bool),
    Text(String),
}

impl UnityValue {
    /// Denormalize an observation into the integer list the client expects.
    pub fn from_observation(observation: &Observation) -> Self {
        Self::Ints(
            observation
                .as_slice()
                .iter()
                .map(|&v| (v * CARD_SCALE) as i64)
                .collect(),
        )
    }

    /// Render the tagged payload. Framing adds the terminator.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            UnityValue::Ints(values) => {
                let body = values
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("{}{}", TAG_INT_LIST, body).into_bytes()
            }
            UnityValue::Bool(value) => {
                format!("{}{}", TAG_BOOL, if *value { 1 } else { 0 }).into_bytes()
            }
            UnityValue::Text(text) => format!("{}{}", TAG_STRING, text).into_bytes(),
        }
    }
}

/// Decode an integer-list payload.
///
/// Unrecognized tags, non-UTF-8 bytes, and non-numeric tokens all decode to
/// an empty list; the bridge never fails loudly on foreign input. One bad
/// token voids the whole payload, so a partly-corrupt selection can never
/// slip through a downstream length check.
pub fn decode_int_list(payload: &[u8]) -> Vec<i64> {
    let Ok(text) = std::str::from_utf8(payload) else {
        return Vec::new();
    };
    let Some(body) = text.strip_prefix(TAG_INT_LIST) else {
        return Vec::new();
    };
    let values: Option<Vec<i64>> = body
        .split_whitespace()
        .map(|token| token.parse().ok())
        .collect();
    values.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_tags() {
        assert_eq!(
            UnityValue::Ints(vec![1, 2, 3]).encode(),
            b"__list__int__1 2 3".to_vec()
        );
        assert_eq!(UnityValue::Bool(true).encode(), b"__bool__1".to_vec());
        assert_eq!(UnityValue::Bool(false).encode(), b"__bool__0".to_vec());
        assert_eq!(
            UnityValue::Text("ready".to_string()).encode(),
            b"__string__ready".to_vec()
        );
    }

    #[test]
    fn test_int_list_round_trip() {
        let value = UnityValue::Ints(vec![0, 5, 12, -1]);
        assert_eq!(decode_int_list(&value.encode()), vec![0, 5, 12, -1]);

        let empty = UnityValue::Ints(Vec::new());
        assert_eq!(decode_int_list(&empty.encode()), Vec::<i64>::new());
    }

    #[test]
    fn test_decode_tolerates_foreign_input() {
        assert!(decode_int_list(b"__bool__1").is_empty());
        assert!(decode_int_list(b"no tag at all").is_empty());
        assert!(decode_int_list(&[0xff, 0xfe]).is_empty());
    }

    #[test]
    fn test_one_bad_token_voids_the_payload() {
        assert!(decode_int_list(b"__list__int__1 x 3").is_empty());

        // A corrupt payload still carrying a full selection's worth of
        // parseable integers must not survive either.
        let mut payload = String::from(TAG_INT_LIST);
        payload.push_str("junk");
        for _ in 0..200 {
            payload.push_str(" 0");
        }
        assert!(decode_int_list(payload.as_bytes()).is_empty());
    }

    #[test]
    fn test_observation_scaling() {
        // A hand card of rank 5 crosses as the integer 5.
        let observation = Observation::from_parts(&[], &[5], &[]).unwrap();
        let UnityValue::Ints(values) = UnityValue::from_observation(&observation) else {
            panic!("observation must encode as an integer list");
        };
        assert_eq!(values.len(), chefshat_core::OBSERVATION_SIZE);
        assert_eq!(values[11], 5);
        assert_eq!(values[0], 0);
        // The whole vector scales, mask included: a legal bit crosses as 13.
        let observation = Observation::from_parts(&[], &[], &[199]).unwrap();
        let UnityValue::Ints(values) = UnityValue::from_observation(&observation) else {
            panic!("observation must encode as an integer list");
        };
        assert_eq!(values[28 + 199], 13);
    }
}
