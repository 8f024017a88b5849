use super::defaults::{MAX_HEX_LEN_HARD_LIMIT, MIN_HEX_LEN};
use super::AppConfig;
use anyhow::{bail, Context, Result};
use clap::Parser;

impl AppConfig {
    /// Parse CLI arguments and validate them right away.
    pub fn parse_args() -> Result<Self> {
        let mut config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Check CLI values and normalize paths.
    pub fn validate(&mut self) -> Result<()> {
        if !(MIN_HEX_LEN..=MAX_HEX_LEN_HARD_LIMIT).contains(&self.max_hex_len) {
            bail!(
                "--max-hex-len must be between {MIN_HEX_LEN} and {MAX_HEX_LEN_HARD_LIMIT}, got {}",
                self.max_hex_len
            );
        }

        if self.demo && (!self.inputs.is_empty() || self.file.is_some()) {
            bail!("--demo cannot be combined with HEX arguments or --file");
        }
        if self.demo && self.encode {
            bail!("--demo cannot be combined with --encode");
        }

        if let Some(file) = &mut self.file {
            if !file.is_file() {
                bail!("--file '{}' is not a readable file", file.display());
            }
            *file = file
                .canonicalize()
                .with_context(|| format!("failed to canonicalize input file '{}'", file.display()))?;
        }

        Ok(())
    }
}
