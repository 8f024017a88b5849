pub mod codec;
pub mod config;
pub mod decoder;
pub mod hex_string;
pub mod input;
pub mod output;
pub mod telemetry;
pub mod utf8_safe;

pub use codec::{EncodingError, TextCodec, Utf8Codec};
pub use decoder::{
    classify_length, decode, slice_sequence, DecodeError, DecodeMode, HexFault,
    HexToUtf8Decoder, InvalidLead, PartialDecode, SequenceLength,
};
pub use hex_string::{encode_text, HexString};
