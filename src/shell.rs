//! Command line shell around the calculator.
//!
//! Batch mode calculates each positional argument; with no arguments lines
//! are read from stdin until EOF or `quit`.

use crate::config::{Config, OutputFormat};
use crate::output::{csv_header, render};
use clap::Parser;
use std::error::Error;
use std::io::{BufRead, Write};

/// Shown for an empty line in interactive mode.
pub const USAGE_HINT: &str =
    "Please enter an IP address with CIDR notation (e.g., 192.168.1.10/24)";

/// IPv4 subnet calculator.
#[derive(Parser, Debug)]
#[command(name = "subnet-calc", version, about)]
pub struct Cli {
    /// Addresses in CIDR notation, e.g. 192.168.1.10/24. Reads stdin when empty.
    pub inputs: Vec<String>,

    /// Output format [default: text, or SUBNET_CALC_FORMAT]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Thousands separator for host counts [default: ',', or SUBNET_CALC_SEPARATOR]
    #[arg(short, long)]
    pub separator: Option<char>,
}

impl Cli {
    /// Layer the command line flags over `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.no_color {
            config.color = false;
        }
        if let Some(separator) = self.separator {
            config.separator = separator;
        }
        config
    }
}

/// Calculate every input and write the results to `out`.
///
/// Returns the number of inputs that failed to parse.
pub fn run_batch<W: Write>(
    inputs: &[String],
    config: &Config,
    out: &mut W,
) -> Result<usize, Box<dyn Error>> {
    log::info!("#Start run_batch() with {} inputs", inputs.len());
    if config.format == OutputFormat::Csv {
        writeln!(out, "{}", csv_header())?;
    }

    let mut failures = 0;
    for (i, input) in inputs.iter().enumerate() {
        let result = crate::calculate(input);
        if let Err(e) = &result {
            log::warn!("Rejected input {input:?}: {e}");
            failures += 1;
        }
        writeln!(out, "{}", render(i + 1, input, &result, config)?)?;
    }
    Ok(failures)
}

/// Read one input per line from `reader` until EOF, `quit` or `exit`.
///
/// Returns the number of inputs that failed to parse.
pub fn run_interactive<R: BufRead, W: Write>(
    reader: R,
    config: &Config,
    out: &mut W,
) -> Result<usize, Box<dyn Error>> {
    log::info!("#Start run_interactive()");
    if config.format == OutputFormat::Csv {
        writeln!(out, "{}", csv_header())?;
    }

    let mut failures = 0;
    let mut j = 0;
    for line in reader.lines() {
        let line = line?;
        let input = line.trim();
        match input {
            "" => {
                writeln!(out, "{USAGE_HINT}")?;
                continue;
            }
            "quit" | "exit" => break,
            _ => {}
        }
        j += 1;
        let result = crate::calculate(input);
        if let Err(e) = &result {
            log::warn!("Rejected input {input:?}: {e}");
            failures += 1;
        }
        writeln!(out, "{}", render(j, input, &result, config)?)?;
        out.flush()?;
    }
    log::info!("#End run_interactive() after {j} inputs");
    Ok(failures)
}
