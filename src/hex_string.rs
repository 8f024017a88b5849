//! Validated hex input.

use crate::decoder::{DecodeError, HexFault};
use std::fmt;

/// A string of hex digit pairs that is known to describe whole bytes.
///
/// Digits are case-insensitive. The original text is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexString {
    text: String,
    bytes: Vec<u8>,
}

impl HexString {
    /// Validate `text` and convert its digit pairs to bytes.
    pub fn parse(text: &str) -> Result<Self, DecodeError> {
        let bytes = ::hex::decode(text).map_err(|err| malformed(text, err))?;
        Ok(Self {
            text: text.to_string(),
            bytes,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Display for HexString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn malformed(text: &str, err: ::hex::FromHexError) -> DecodeError {
    match err {
        ::hex::FromHexError::InvalidHexCharacter { c, index } => {
            // `c` is the raw byte widened to a char and `index` a byte offset;
            // recover the real character and count characters instead.
            let start = floor_char_boundary(text, index);
            let c = text[start..].chars().next().unwrap_or(c);
            DecodeError::MalformedHex {
                index: text[..start].chars().count(),
                reason: HexFault::InvalidDigit(c),
            }
        }
        ::hex::FromHexError::OddLength | ::hex::FromHexError::InvalidStringLength => {
            DecodeError::MalformedHex {
                index: text.chars().count().saturating_sub(1),
                reason: HexFault::OddLength,
            }
        }
    }
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    index = index.min(text.len());
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Encode text as lowercase hex of its UTF-8 bytes.
pub fn encode_text(text: &str) -> String {
    ::hex::encode(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_case_pairs() {
        let hex = HexString::parse("48656C6c6F").unwrap();
        assert_eq!(hex.bytes(), b"Hello");
        assert_eq!(hex.byte_len(), 5);
        assert_eq!(hex.as_str(), "48656C6c6F");
        assert_eq!(hex.to_string(), "48656C6c6F");
    }

    #[test]
    fn empty_input_is_valid() {
        let hex = HexString::parse("").unwrap();
        assert!(hex.is_empty());
    }

    #[test]
    fn odd_length_points_at_dangling_digit() {
        assert_eq!(
            HexString::parse("414").unwrap_err(),
            DecodeError::MalformedHex {
                index: 2,
                reason: HexFault::OddLength
            }
        );
        assert_eq!(
            HexString::parse("4").unwrap_err(),
            DecodeError::MalformedHex {
                index: 0,
                reason: HexFault::OddLength
            }
        );
    }

    #[test]
    fn invalid_digit_reports_index_and_char() {
        assert_eq!(
            HexString::parse("41zz").unwrap_err(),
            DecodeError::MalformedHex {
                index: 2,
                reason: HexFault::InvalidDigit('z')
            }
        );
    }

    #[test]
    fn invalid_multibyte_digit_reports_real_char() {
        // "é" is two bytes, so the overall length stays even.
        let err = HexString::parse("41é").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedHex {
                index: 2,
                reason: HexFault::InvalidDigit('é')
            }
        );
    }

    #[test]
    fn indices_count_characters_not_bytes() {
        // Three bytes: '4' then the two-byte "é".
        assert_eq!(
            HexString::parse("4é").unwrap_err(),
            DecodeError::MalformedHex {
                index: 1,
                reason: HexFault::OddLength
            }
        );
        // "é" starts at byte 1 and char 1; the pair boundary splits it.
        assert_eq!(
            HexString::parse("4é1").unwrap_err(),
            DecodeError::MalformedHex {
                index: 1,
                reason: HexFault::InvalidDigit('é')
            }
        );
    }

    #[test]
    fn encode_text_is_lowercase_utf8_hex() {
        assert_eq!(encode_text("Hello"), "48656c6c6f");
        assert_eq!(encode_text("♥"), "e299a5");
        assert_eq!(encode_text(""), "");
    }
}
