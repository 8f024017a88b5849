//! Command-line parsing and validation helpers.

mod defaults;
mod validation;

use clap::Parser;
use std::path::PathBuf;

use crate::codec::Utf8Codec;
use crate::decoder::{DecodeMode, HexToUtf8Decoder};

pub use defaults::{DEFAULT_MAX_HEX_LEN, DEMO_INPUTS, DIAGNOSTIC_ECHO_CHARS};

/// CLI options for hexutf8.
#[derive(Debug, Parser, Clone)]
#[command(about = "Decode hex byte pairs into UTF-8 text", author, version)]
pub struct AppConfig {
    /// Hex strings to decode (read from stdin when none are given)
    #[arg(value_name = "HEX")]
    pub inputs: Vec<String>,

    /// Read newline-separated inputs from a file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Decode one sequence at a time, or the whole buffer at once
    #[arg(long, value_enum, default_value_t = DecodeMode::PerChar)]
    pub mode: DecodeMode,

    /// How byte sequences are turned into text
    #[arg(long, value_enum, default_value_t = Utf8Codec::Strict)]
    pub codec: Utf8Codec,

    /// Maximum hex digits accepted per input
    #[arg(long = "max-hex-len", default_value_t = DEFAULT_MAX_HEX_LEN)]
    pub max_hex_len: usize,

    /// Emit one JSON report per input
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Stop after the first input that fails to decode
    #[arg(long = "fail-fast", default_value_t = false)]
    pub fail_fast: bool,

    /// Treat inputs as text and print their UTF-8 bytes as hex
    #[arg(long, default_value_t = false)]
    pub encode: bool,

    /// Decode the built-in sample strings with both modes
    #[arg(long, default_value_t = false)]
    pub demo: bool,

    /// Enable trace logging to a file
    #[arg(long = "logs", env = "HEXUTF8_LOGS", default_value_t = false)]
    pub logs: bool,

    /// File that receives JSON trace events
    #[arg(long = "trace-log", env = "HEXUTF8_TRACE_LOG", value_name = "PATH")]
    pub trace_log: Option<PathBuf>,

    /// Disable all logging (overrides --logs)
    #[arg(long = "no-logs", env = "HEXUTF8_NO_LOGS", default_value_t = false)]
    pub no_logs: bool,
}

impl AppConfig {
    pub fn logging_enabled(&self) -> bool {
        self.logs && !self.no_logs
    }

    /// Build the decoder described by the CLI flags.
    pub fn decoder(&self) -> HexToUtf8Decoder {
        HexToUtf8Decoder::with_codec(self.codec).with_max_hex_len(Some(self.max_hex_len))
    }
}
