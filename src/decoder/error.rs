use crate::codec::EncodingError;
use std::fmt;
use thiserror::Error;

/// Why a hex string could not be turned into bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexFault {
    OddLength,
    InvalidDigit(char),
}

impl fmt::Display for HexFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexFault::OddLength => write!(f, "odd number of hex digits"),
            HexFault::InvalidDigit(c) => write!(f, "invalid hex digit {c:?}"),
        }
    }
}

/// Failures surfaced while turning hex into text.
///
/// `index` on [`DecodeError::MalformedHex`] counts characters of the input; every other
/// `offset` counts decoded bytes (one byte per hex pair).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("malformed hex at index {index}: {reason}")]
    MalformedHex { index: usize, reason: HexFault },

    #[error("byte 0x{byte:02X} at offset {offset} is a continuation byte, not a leading byte")]
    UnexpectedContinuationByte { byte: u8, offset: usize },

    #[error("byte 0x{byte:02X} at offset {offset} can only start an overlong encoding")]
    OverlongLeadingByte { byte: u8, offset: usize },

    #[error(
        "sequence at offset {offset} needs {expected} bytes but only {available} remain"
    )]
    TruncatedSequence {
        offset: usize,
        expected: usize,
        available: usize,
    },

    #[error("bytes {} at offset {offset} are not valid text: {source}", hex::encode_upper(.sequence))]
    InvalidEncoding {
        offset: usize,
        sequence: Vec<u8>,
        #[source]
        source: EncodingError,
    },

    #[error("input has {len} hex digits, limit is {max}")]
    InputTooLong { len: usize, max: usize },
}

impl DecodeError {
    /// Stable label for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::MalformedHex { .. } => "malformed_hex",
            DecodeError::UnexpectedContinuationByte { .. } => "unexpected_continuation_byte",
            DecodeError::OverlongLeadingByte { .. } => "overlong_leading_byte",
            DecodeError::TruncatedSequence { .. } => "truncated_sequence",
            DecodeError::InvalidEncoding { .. } => "invalid_encoding",
            DecodeError::InputTooLong { .. } => "input_too_long",
        }
    }

    /// Where the failure was detected, if it has a position.
    pub fn offset(&self) -> Option<usize> {
        match self {
            DecodeError::MalformedHex { index, .. } => Some(*index),
            DecodeError::UnexpectedContinuationByte { offset, .. }
            | DecodeError::OverlongLeadingByte { offset, .. }
            | DecodeError::TruncatedSequence { offset, .. }
            | DecodeError::InvalidEncoding { offset, .. } => Some(*offset),
            DecodeError::InputTooLong { .. } => None,
        }
    }
}

/// A failed decode together with the text produced before the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct PartialDecode {
    pub prefix: String,
    #[source]
    pub error: DecodeError,
}

impl From<DecodeError> for PartialDecode {
    fn from(error: DecodeError) -> Self {
        Self {
            prefix: String::new(),
            error,
        }
    }
}
