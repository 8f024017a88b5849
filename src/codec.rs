//! Byte-to-text conversion used by the decoder once a sequence has been sliced.
//!
//! The decoder never packs code points itself; it hands each byte sequence to a
//! [`TextCodec`] and appends whatever text comes back.

use clap::ValueEnum;
use std::borrow::Cow;
use thiserror::Error;

/// Rejection reported by a codec for a byte sequence it cannot turn into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", describe(.valid_up_to, .error_len))]
pub struct EncodingError {
    /// Bytes at the start of the input that formed valid text.
    pub valid_up_to: usize,
    /// Length of the invalid run, or `None` when the input ended mid-sequence.
    pub error_len: Option<usize>,
}

fn describe(valid_up_to: &usize, error_len: &Option<usize>) -> String {
    match error_len {
        Some(len) => format!("invalid utf-8 sequence of {len} bytes from index {valid_up_to}"),
        None => format!("incomplete utf-8 byte sequence from index {valid_up_to}"),
    }
}

impl From<std::str::Utf8Error> for EncodingError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self {
            valid_up_to: err.valid_up_to(),
            error_len: err.error_len(),
        }
    }
}

/// Converts raw bytes into text.
pub trait TextCodec: Send + Sync {
    fn decode<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>, EncodingError>;

    /// Short name used in reports and trace events.
    fn label(&self) -> &'static str;
}

/// UTF-8 codecs backed by the standard library decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Utf8Codec {
    /// Reject anything that is not well-formed UTF-8.
    #[default]
    Strict,
    /// Replace malformed input with U+FFFD instead of failing.
    Lossy,
}

impl TextCodec for Utf8Codec {
    fn decode<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>, EncodingError> {
        match self {
            Utf8Codec::Strict => Ok(Cow::Borrowed(std::str::from_utf8(bytes)?)),
            Utf8Codec::Lossy => Ok(String::from_utf8_lossy(bytes)),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Utf8Codec::Strict => "strict",
            Utf8Codec::Lossy => "lossy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_accepts_well_formed_sequences() {
        assert_eq!(Utf8Codec::Strict.decode(b"A").unwrap(), "A");
        assert_eq!(Utf8Codec::Strict.decode(&[0xC3, 0xA9]).unwrap(), "é");
        assert_eq!(Utf8Codec::Strict.decode(&[0xE2, 0x99, 0xA5]).unwrap(), "♥");
        assert_eq!(
            Utf8Codec::Strict.decode(&[0xF0, 0x9F, 0xA6, 0x80]).unwrap(),
            "🦀"
        );
    }

    #[test]
    fn strict_rejects_bad_continuation_byte() {
        let err = Utf8Codec::Strict.decode(&[0xE2, 0x41, 0x42]).unwrap_err();
        assert_eq!(err.valid_up_to, 0);
        assert_eq!(err.error_len, Some(1));
        assert_eq!(
            err.to_string(),
            "invalid utf-8 sequence of 1 bytes from index 0"
        );
    }

    #[test]
    fn strict_reports_incomplete_sequence() {
        let err = Utf8Codec::Strict.decode(&[0x41, 0xE2, 0x99]).unwrap_err();
        assert_eq!(err.valid_up_to, 1);
        assert_eq!(err.error_len, None);
        assert!(err.to_string().starts_with("incomplete utf-8"));
    }

    #[test]
    fn lossy_substitutes_replacement_characters() {
        assert_eq!(Utf8Codec::Lossy.decode(&[0xE2, 0x41, 0x42]).unwrap(), "\u{FFFD}AB");
        assert_eq!(Utf8Codec::Lossy.decode(&[0xF8]).unwrap(), "\u{FFFD}");
    }

    #[test]
    fn labels_match_cli_values() {
        assert_eq!(Utf8Codec::Strict.label(), "strict");
        assert_eq!(Utf8Codec::Lossy.label(), "lossy");
        assert_eq!(Utf8Codec::default(), Utf8Codec::Strict);
    }
}
