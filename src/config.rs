//! Runtime configuration.
//!
//! Defaults, overridden by `SUBNET_CALC_*` environment variables (a `.env`
//! file is loaded by `main`), overridden by command line flags.

use clap::ValueEnum;
use std::error::Error;

pub const ENV_FORMAT: &str = "SUBNET_CALC_FORMAT";
pub const ENV_COLOR: &str = "SUBNET_CALC_COLOR";
pub const ENV_SEPARATOR: &str = "SUBNET_CALC_SEPARATOR";

/// How results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Coloured human readable report.
    #[default]
    Text,
    /// One JSON object per input.
    Json,
    /// Header plus one row per input.
    Csv,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    pub color: bool,
    /// Thousands separator for host counts.
    pub separator: char,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: OutputFormat::Text,
            color: true,
            separator: ',',
        }
    }
}

impl Config {
    /// Build from defaults and the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from defaults and whatever `lookup` returns for each variable.
    pub fn from_vars<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(format) = lookup(ENV_FORMAT) {
            config.format = OutputFormat::from_str(format.trim(), true)
                .map_err(|e| format!("Invalid {ENV_FORMAT}: {e}"))?;
        }
        if let Some(color) = lookup(ENV_COLOR) {
            config.color = parse_bool(&color)
                .ok_or_else(|| format!("Invalid {ENV_COLOR}: '{color}' is not a boolean"))?;
        }
        if let Some(separator) = lookup(ENV_SEPARATOR) {
            config.separator = parse_separator(&separator)
                .ok_or_else(|| format!("Invalid {ENV_SEPARATOR}: expected one character, got '{separator}'"))?;
        }

        log::debug!("Config from environment: {config:?}");
        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_separator(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
