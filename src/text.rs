//! Plain-text descriptor encoding.
//!
//! A descriptor is written as one decimal token per coordinate separated by
//! single spaces. Tokens use the shortest representation that parses back
//! to the same `f32`, so `decode(encode(d)) == d` exactly for finite input.
//!
//! The decoder splits on any whitespace, which also accepts files written
//! with a trailing separator after the last coordinate.

use crate::descriptor::Descriptor;
use crate::error::{DescriptorError, ParseFailure, Result};

/// Encodes a descriptor of length `dimension` as text.
///
/// NaN and infinite coordinates are rejected with `NonFinite`, since
/// [`decode`] would refuse to read them back.
pub fn encode(dimension: usize, descriptor: &[f32]) -> Result<String> {
    if descriptor.len() != dimension {
        return Err(DescriptorError::mismatch(dimension, descriptor.len()));
    }
    if let Some(err) = DescriptorError::first_non_finite(descriptor) {
        return Err(err);
    }

    let tokens: Vec<String> = descriptor.iter().map(f32::to_string).collect();
    Ok(tokens.join(" "))
}

/// Decodes a descriptor of length `dimension` from text.
pub fn decode(dimension: usize, text: &str) -> Result<Descriptor> {
    decode_tokens(dimension, text).map_err(|failure| {
        tracing::debug!(dimension, %failure, "rejected serialized descriptor");
        DescriptorError::Parse(failure)
    })
}

fn decode_tokens(dimension: usize, text: &str) -> std::result::Result<Descriptor, ParseFailure> {
    let found = text.split_whitespace().count();
    if found != dimension {
        return Err(ParseFailure::TokenCount {
            expected: dimension,
            found,
        });
    }

    let mut descriptor = Vec::with_capacity(dimension);
    for (index, token) in text.split_whitespace().enumerate() {
        let value: f32 = token.parse().map_err(|_| ParseFailure::InvalidToken {
            index,
            token: token.to_string(),
        })?;
        if !value.is_finite() {
            return Err(ParseFailure::NonFinite {
                index,
                token: token.to_string(),
            });
        }
        descriptor.push(value);
    }
    Ok(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_uses_single_spaces() {
        let s = encode(4, &[1.0, 2.5, -3.0, 0.0]).unwrap();
        assert_eq!(s, "1 2.5 -3 0");
    }

    #[test]
    fn round_trip_is_exact() {
        let d = vec![0.1_f32, 1.0 / 3.0, -1e-30, 123_456.79, f32::MAX];
        let s = encode(5, &d).unwrap();
        assert_eq!(decode(5, &s).unwrap(), d);
    }

    #[test]
    fn decode_tolerates_extra_whitespace() {
        let d = decode(3, "  1 2\t3 \n").unwrap();
        assert_eq!(d, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn decode_rejects_wrong_token_count() {
        assert_eq!(
            decode(3, "1 2"),
            Err(DescriptorError::Parse(ParseFailure::TokenCount {
                expected: 3,
                found: 2
            }))
        );
    }

    #[test]
    fn decode_rejects_garbage_token() {
        assert_eq!(
            decode(3, "1 x 3"),
            Err(DescriptorError::Parse(ParseFailure::InvalidToken {
                index: 1,
                token: "x".to_string()
            }))
        );
    }

    #[test]
    fn decode_rejects_non_finite() {
        assert!(matches!(
            decode(2, "NaN 1"),
            Err(DescriptorError::Parse(ParseFailure::NonFinite { index: 0, .. }))
        ));
        assert!(matches!(
            decode(2, "1 inf"),
            Err(DescriptorError::Parse(ParseFailure::NonFinite { index: 1, .. }))
        ));
    }

    #[test]
    fn encode_rejects_non_finite() {
        assert_eq!(
            encode(2, &[f32::NAN, 1.0]),
            Err(DescriptorError::NonFinite { index: 0 })
        );
        assert_eq!(
            encode(2, &[1.0, f32::INFINITY]),
            Err(DescriptorError::NonFinite { index: 1 })
        );
        assert_eq!(
            encode(2, &[f32::NEG_INFINITY, 1.0]),
            Err(DescriptorError::NonFinite { index: 0 })
        );
    }

    #[test]
    fn encode_output_always_decodes() {
        let d = [f32::MIN_POSITIVE, -0.0, f32::MIN, 7.5];
        let s = encode(4, &d).unwrap();
        assert_eq!(decode(4, &s).unwrap(), d.to_vec());
    }

    #[test]
    fn encode_rejects_wrong_length() {
        assert!(matches!(
            encode(3, &[1.0]),
            Err(DescriptorError::DimensionMismatch {
                expected: 3,
                actual: 1
            })
        ));
    }
}
