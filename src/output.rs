//! Rendering decode results for the terminal or for machine consumers.
//!
//! JSON reports are newline-delimited, one object per input.

use crate::config::DIAGNOSTIC_ECHO_CHARS;
use crate::decoder::{DecodeError, DecodeMode, PartialDecode};
use crate::utf8_safe::ellipsize_middle;
use serde::Serialize;

/// Outcome of decoding one input.
#[derive(Debug, Clone, Serialize)]
pub struct DecodeReport<'a> {
    pub input: &'a str,
    pub mode: &'static str,
    pub codec: &'static str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
    /// Text decoded before the failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

impl From<&DecodeError> for ErrorReport {
    fn from(err: &DecodeError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
            offset: err.offset(),
        }
    }
}

impl<'a> DecodeReport<'a> {
    pub fn new(
        input: &'a str,
        mode: DecodeMode,
        codec: &'static str,
        result: Result<String, PartialDecode>,
    ) -> Self {
        let mut report = Self {
            input,
            mode: mode.label(),
            codec,
            ok: result.is_ok(),
            text: None,
            error: None,
            prefix: None,
        };
        match result {
            Ok(text) => report.text = Some(text),
            Err(partial) => {
                report.error = Some(ErrorReport::from(&partial.error));
                report.prefix = Some(partial.prefix);
            }
        }
        report
    }

    /// Decoded text, or a diagnostic naming the input and the failure.
    pub fn render_text(&self) -> String {
        match (&self.text, &self.error) {
            (Some(text), _) => text.clone(),
            (None, Some(error)) => diagnostic(self.input, &error.message),
            (None, None) => String::new(),
        }
    }

    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Hex produced by `--encode`.
#[derive(Debug, Clone, Serialize)]
pub struct EncodeReport<'a> {
    pub input: &'a str,
    pub hex: String,
}

/// Format a failure the way it is shown in place of decoded text.
pub fn diagnostic(input: &str, message: &str) -> String {
    format!(
        "UTF-8 decoding failed for {}.\n{message}",
        ellipsize_middle(input, DIAGNOSTIC_ECHO_CHARS)
    )
}
