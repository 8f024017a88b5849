//! Gathering inputs from arguments, files, and stdin.

use crate::config::{AppConfig, DEMO_INPUTS};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};

/// How input lines are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Hex digits; surrounding whitespace is not part of the input.
    Hex,
    /// Text for `--encode`; every character except the line terminator counts.
    Text,
}

impl InputKind {
    pub fn for_config(config: &AppConfig) -> Self {
        if config.encode {
            InputKind::Text
        } else {
            InputKind::Hex
        }
    }

    fn normalize<'a>(self, line: &'a str) -> &'a str {
        match self {
            InputKind::Hex => line.trim(),
            InputKind::Text => line.strip_suffix('\r').unwrap_or(line),
        }
    }
}

/// Read one input per line, skipping lines that are empty once normalized.
pub fn read_lines<R: BufRead>(reader: R, kind: InputKind) -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read input line {}", idx + 1))?;
        let normalized = kind.normalize(&line);
        if !normalized.is_empty() {
            inputs.push(normalized.to_string());
        }
    }
    Ok(inputs)
}

/// Resolve every input the CLI should process, in order.
///
/// Positional arguments come first, then the `--file` contents. `stdin` is only
/// read when neither was given.
pub fn collect_inputs<R: BufRead>(config: &AppConfig, stdin: R) -> Result<Vec<String>> {
    if config.demo {
        return Ok(DEMO_INPUTS.iter().map(|s| s.to_string()).collect());
    }

    let kind = InputKind::for_config(config);
    let mut inputs: Vec<String> = match kind {
        InputKind::Hex => config.inputs.iter().map(|s| s.trim().to_string()).collect(),
        InputKind::Text => config.inputs.clone(),
    };
    if let Some(path) = &config.file {
        let file = File::open(path)
            .with_context(|| format!("failed to open input file '{}'", path.display()))?;
        inputs.extend(read_lines(BufReader::new(file), kind)?);
    }
    if config.inputs.is_empty() && config.file.is_none() {
        inputs = read_lines(stdin, kind)?;
    }
    tracing::debug!(count = inputs.len(), ?kind, "collected inputs");
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::env;
    use std::fs;
    use std::io::Cursor;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_input_file(contents: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let path = env::temp_dir().join(format!("hexutf8_input_{}_{nanos}.txt", std::process::id()));
        fs::write(&path, contents).expect("write temp input file");
        path
    }

    #[test]
    fn read_lines_trims_and_skips_blank_lines() {
        let inputs = read_lines(Cursor::new("  4142 \n\n\te299a5\r\n   \n"), InputKind::Hex).unwrap();
        assert_eq!(inputs, vec!["4142".to_string(), "e299a5".to_string()]);
    }

    #[test]
    fn text_lines_keep_surrounding_whitespace() {
        let inputs = read_lines(Cursor::new(" a \r\n\n\tb\n   \n"), InputKind::Text).unwrap();
        assert_eq!(
            inputs,
            vec![" a ".to_string(), "\tb".to_string(), "   ".to_string()]
        );
    }

    #[test]
    fn encode_arguments_are_not_trimmed() {
        let cfg = AppConfig::parse_from(["test-app", "--encode", " a ", "b"]);
        let inputs = collect_inputs(&cfg, Cursor::new("")).unwrap();
        assert_eq!(inputs, vec![" a ".to_string(), "b".to_string()]);
    }

    #[test]
    fn file_lines_follow_positional_arguments() {
        let path = temp_input_file("  4142  \n\n\te299a5\r\n   \n48656c6c6f\n");
        let cfg = AppConfig::parse_from(["test-app", "--file", path.to_str().unwrap(), "41"]);
        let inputs = collect_inputs(&cfg, Cursor::new("ignored\n")).unwrap();
        assert_eq!(
            inputs,
            vec![
                "41".to_string(),
                "4142".to_string(),
                "e299a5".to_string(),
                "48656c6c6f".to_string(),
            ]
        );
        let _ = fs::remove_file(path);
    }

    #[test]
    fn arguments_take_precedence_over_stdin() {
        let cfg = AppConfig::parse_from(["test-app", "41", " 42 "]);
        let inputs = collect_inputs(&cfg, Cursor::new("ignored\n")).unwrap();
        assert_eq!(inputs, vec!["41".to_string(), "42".to_string()]);
    }

    #[test]
    fn falls_back_to_stdin() {
        let cfg = AppConfig::parse_from(["test-app"]);
        let inputs = collect_inputs(&cfg, Cursor::new("48656c6c6f\n")).unwrap();
        assert_eq!(inputs, vec!["48656c6c6f".to_string()]);
    }

    #[test]
    fn demo_uses_built_in_samples() {
        let cfg = AppConfig::parse_from(["test-app", "--demo"]);
        let inputs = collect_inputs(&cfg, Cursor::new("41\n")).unwrap();
        assert_eq!(inputs.len(), DEMO_INPUTS.len());
        assert_eq!(inputs[0], DEMO_INPUTS[0]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let cfg = AppConfig::parse_from([
            "test-app",
            "--file",
            "/nonexistent/hexutf8/inputs.txt",
        ]);
        let err = collect_inputs(&cfg, Cursor::new("")).unwrap_err();
        assert!(err.to_string().contains("failed to open input file"));
    }
}
