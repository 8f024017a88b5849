//! Hex-to-text decoding, one UTF-8 sequence at a time.
//!
//! Each step reads a leading byte, works out how many bytes its sequence
//! spans, slices those bytes and hands them to a [`TextCodec`]. The scan is
//! linear and stops at the first failure.

mod error;

pub use error::{DecodeError, HexFault, PartialDecode};

use crate::codec::{TextCodec, Utf8Codec};
use crate::config::DEFAULT_MAX_HEX_LEN;
use crate::hex_string::HexString;
use clap::ValueEnum;
use std::borrow::Cow;

/// Decode with the default strict decoder.
pub fn decode(hex: &str) -> Result<String, DecodeError> {
    HexToUtf8Decoder::new().decode(hex)
}

/// Number of bytes in a UTF-8 sequence, as announced by its leading byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceLength {
    One,
    Two,
    Three,
    Four,
}

impl SequenceLength {
    pub fn bytes(self) -> usize {
        match self {
            SequenceLength::One => 1,
            SequenceLength::Two => 2,
            SequenceLength::Three => 3,
            SequenceLength::Four => 4,
        }
    }
}

/// Reasons a byte cannot start a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidLead {
    /// 0x80..=0xBF only ever follows a leading byte.
    Continuation,
    /// 0xC0 and 0xC1 could only start an overlong two-byte form.
    Overlong,
}

impl InvalidLead {
    fn into_error(self, byte: u8, offset: usize) -> DecodeError {
        match self {
            InvalidLead::Continuation => DecodeError::UnexpectedContinuationByte { byte, offset },
            InvalidLead::Overlong => DecodeError::OverlongLeadingByte { byte, offset },
        }
    }
}

/// Classify a leading byte by the length of the sequence it starts.
///
/// Only the leading byte is inspected. 0xF5..=0xFF are still classified as
/// four-byte leads; rejecting them is up to the codec.
pub fn classify_length(byte: u8) -> Result<SequenceLength, InvalidLead> {
    match byte {
        0x00..=0x7F => Ok(SequenceLength::One),
        0x80..=0xBF => Err(InvalidLead::Continuation),
        0xC0..=0xC1 => Err(InvalidLead::Overlong),
        0xC2..=0xDF => Ok(SequenceLength::Two),
        0xE0..=0xEF => Ok(SequenceLength::Three),
        0xF0..=0xFF => Ok(SequenceLength::Four),
    }
}

/// Take `expected` bytes starting at `offset`.
pub fn slice_sequence(bytes: &[u8], offset: usize, expected: usize) -> Result<&[u8], DecodeError> {
    let available = bytes.len().saturating_sub(offset);
    if available < expected {
        return Err(DecodeError::TruncatedSequence {
            offset,
            expected,
            available,
        });
    }
    Ok(&bytes[offset..offset + expected])
}

/// How a whole input is handed to the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DecodeMode {
    /// Classify and decode one sequence at a time.
    #[default]
    PerChar,
    /// Convert every pair to bytes first, then decode the buffer in one call.
    Packed,
}

impl DecodeMode {
    pub fn label(self) -> &'static str {
        match self {
            DecodeMode::PerChar => "per_char",
            DecodeMode::Packed => "packed",
        }
    }
}

/// Turns hex strings into text through a [`TextCodec`].
#[derive(Debug, Clone)]
pub struct HexToUtf8Decoder<C = Utf8Codec> {
    codec: C,
    max_hex_len: Option<usize>,
}

impl HexToUtf8Decoder {
    pub fn new() -> Self {
        Self::with_codec(Utf8Codec::Strict)
    }
}

impl Default for HexToUtf8Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TextCodec> HexToUtf8Decoder<C> {
    pub fn with_codec(codec: C) -> Self {
        Self {
            codec,
            max_hex_len: Some(DEFAULT_MAX_HEX_LEN),
        }
    }

    /// Cap the number of hex digits accepted per input; `None` removes the cap.
    pub fn with_max_hex_len(mut self, max_hex_len: Option<usize>) -> Self {
        self.max_hex_len = max_hex_len;
        self
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    pub fn max_hex_len(&self) -> Option<usize> {
        self.max_hex_len
    }

    pub fn decode(&self, hex: &str) -> Result<String, DecodeError> {
        self.decode_with_prefix(hex).map_err(|partial| partial.error)
    }

    /// Like [`decode`](Self::decode), but a failure keeps the text decoded so far.
    pub fn decode_with_prefix(&self, hex: &str) -> Result<String, PartialDecode> {
        let hex = self.parse(hex)?;
        self.decode_hex(&hex)
    }

    pub fn decode_hex(&self, hex: &HexString) -> Result<String, PartialDecode> {
        self.check_len(hex.as_str().len())?;
        let bytes = hex.bytes();
        let mut output = String::with_capacity(bytes.len());
        let mut offset = 0;
        while offset < bytes.len() {
            match self.decode_sequence(bytes, offset) {
                Ok((text, len)) => {
                    output.push_str(&text);
                    offset += len;
                }
                Err(error) => {
                    tracing::debug!(
                        offset,
                        kind = error.kind(),
                        codec = self.codec.label(),
                        "per-char decode failed"
                    );
                    return Err(PartialDecode {
                        prefix: output,
                        error,
                    });
                }
            }
        }
        Ok(output)
    }

    /// Decode every byte in a single codec call.
    pub fn decode_packed(&self, hex: &str) -> Result<String, DecodeError> {
        self.decode_packed_with_prefix(hex)
            .map_err(|partial| partial.error)
    }

    pub fn decode_packed_with_prefix(&self, hex: &str) -> Result<String, PartialDecode> {
        let hex = self.parse(hex)?;
        let bytes = hex.bytes();
        match self.codec.decode(bytes) {
            Ok(text) => Ok(text.into_owned()),
            Err(source) => {
                let offset = source.valid_up_to.min(bytes.len());
                let end = source
                    .error_len
                    .map_or(bytes.len(), |len| (offset + len).min(bytes.len()));
                tracing::debug!(
                    offset,
                    codec = self.codec.label(),
                    "packed decode failed"
                );
                let prefix = self
                    .codec
                    .decode(&bytes[..offset])
                    .map(Cow::into_owned)
                    .unwrap_or_default();
                Err(PartialDecode {
                    prefix,
                    error: DecodeError::InvalidEncoding {
                        offset,
                        sequence: bytes[offset..end].to_vec(),
                        source,
                    },
                })
            }
        }
    }

    pub fn decode_mode(&self, hex: &str, mode: DecodeMode) -> Result<String, PartialDecode> {
        match mode {
            DecodeMode::PerChar => self.decode_with_prefix(hex),
            DecodeMode::Packed => self.decode_packed_with_prefix(hex),
        }
    }

    fn parse(&self, hex: &str) -> Result<HexString, DecodeError> {
        self.check_len(hex.len())?;
        HexString::parse(hex)
    }

    fn check_len(&self, len: usize) -> Result<(), DecodeError> {
        match self.max_hex_len {
            Some(max) if len > max => Err(DecodeError::InputTooLong { len, max }),
            _ => Ok(()),
        }
    }

    fn decode_sequence<'a>(
        &self,
        bytes: &'a [u8],
        offset: usize,
    ) -> Result<(Cow<'a, str>, usize), DecodeError> {
        let lead = bytes[offset];
        let len = classify_length(lead)
            .map_err(|invalid| invalid.into_error(lead, offset))?
            .bytes();
        let sequence = slice_sequence(bytes, offset, len)?;
        tracing::trace!(offset, lead, len, "classified sequence");
        let text = self
            .codec
            .decode(sequence)
            .map_err(|source| DecodeError::InvalidEncoding {
                offset,
                sequence: sequence.to_vec(),
                source,
            })?;
        Ok((text, len))
    }
}
