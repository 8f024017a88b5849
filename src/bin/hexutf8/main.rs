//! hexutf8 entrypoint: decode hex byte pairs into UTF-8 text.
//!
//! Inputs come from arguments, `--file`, or stdin (one per line). Each input
//! produces one line of output: the decoded text, a diagnostic naming the
//! failure, or a JSON report with `--json`.

use anyhow::{Context, Result};
use hexutf8::config::AppConfig;
use hexutf8::decoder::{DecodeMode, HexToUtf8Decoder};
use hexutf8::hex_string::encode_text;
use hexutf8::input::collect_inputs;
use hexutf8::output::{DecodeReport, EncodeReport};
use hexutf8::telemetry::init_tracing;
use hexutf8::TextCodec;
use std::io::{self, Write};
use std::process::ExitCode;

/// Exit status when at least one input failed to decode.
const EXIT_DECODE_FAILED: u8 = 1;
/// Exit status for configuration and I/O errors.
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_DECODE_FAILED),
        Err(err) => {
            eprintln!("hexutf8: {err:#}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn run() -> Result<bool> {
    let config = AppConfig::parse_args()?;
    let trace_log = init_tracing(&config);
    tracing::debug!(
        trace_log = ?trace_log,
        mode = config.mode.label(),
        codec = config.codec.label(),
        max_hex_len = config.max_hex_len,
        "hexutf8 started"
    );

    let inputs = collect_inputs(&config, io::stdin().lock())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let all_ok = if config.encode {
        write_encoded(&config, &inputs, &mut out)?;
        true
    } else {
        write_decoded(&config, &config.decoder(), &inputs, &mut out)?
    };
    out.flush().context("failed to flush stdout")?;
    Ok(all_ok)
}

fn write_encoded(config: &AppConfig, inputs: &[String], out: &mut impl Write) -> Result<()> {
    for input in inputs {
        let hex = encode_text(input);
        if config.json {
            let line = serde_json::to_string(&EncodeReport { input, hex })?;
            writeln!(out, "{line}")?;
        } else {
            writeln!(out, "{hex}")?;
        }
    }
    Ok(())
}

fn write_decoded(
    config: &AppConfig,
    decoder: &HexToUtf8Decoder,
    inputs: &[String],
    out: &mut impl Write,
) -> Result<bool> {
    // The demo shows both strategies side by side.
    let modes: &[DecodeMode] = if config.demo {
        &[DecodeMode::PerChar, DecodeMode::Packed]
    } else {
        std::slice::from_ref(&config.mode)
    };

    let mut all_ok = true;
    for input in inputs {
        for &mode in modes {
            let result = decoder.decode_mode(input, mode);
            let report = DecodeReport::new(input, mode, decoder.codec().label(), result);
            if config.json {
                writeln!(out, "{}", report.to_json_line()?)?;
            } else {
                writeln!(out, "{}", report.render_text())?;
            }
            if !report.ok {
                all_ok = false;
                if config.fail_fast {
                    tracing::debug!("stopping after first failure");
                    return Ok(false);
                }
            }
        }
    }
    Ok(all_ok)
}
