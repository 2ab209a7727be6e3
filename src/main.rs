//! Strtoi - strtol-family integer parsing
//!
//! Main CLI entry point for parsing integers and inspecting width kinds.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use strtoi::{parse_dynamic, DynParseResult, OutputFormat, StrtoiConfig, WidthKind};

#[derive(Parser)]
#[command(name = "strtoi")]
#[command(version)]
#[command(about = "Parse integers with strtol semantics for any integer width", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported integer kinds and their ranges
    Kinds,

    /// Parse inputs and report value, consumed length and status
    Parse {
        /// Strings to parse (use `--` before inputs starting with '-')
        #[arg(value_name = "INPUT", allow_hyphen_values = true)]
        inputs: Vec<String>,

        /// Base: 0 to detect from prefix, or 2..=36
        #[arg(short, long)]
        base: Option<u32>,

        /// Target integer kind (i8..i128, isize, u8..u128, usize)
        #[arg(short, long)]
        kind: Option<WidthKind>,

        /// Emit one JSON object per input
        #[arg(long)]
        json: bool,

        /// Also read inputs from stdin, one per line
        #[arg(long)]
        stdin: bool,

        /// Config file (default: strtoi.toml in the current directory or a parent)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    base: u32,
    #[serde(flatten)]
    result: DynParseResult,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Kinds => cmd_kinds(),
        Commands::Parse {
            inputs,
            base,
            kind,
            json,
            stdin,
            config,
            verbose,
        } => cmd_parse(inputs, base, kind, json, stdin, config, verbose),
    }
}

fn cmd_kinds() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{:<6} {:>4} {:>6}  {:>41}  {:>40}", "kind", "bits", "signed", "min", "max")?;
    for kind in WidthKind::ALL {
        writeln!(
            out,
            "{:<6} {:>4} {:>6}  {:>41}  {:>40}",
            kind.name(),
            kind.bits(),
            kind.is_signed(),
            kind.min_value(),
            kind.max_value()
        )?;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_parse(
    mut inputs: Vec<String>,
    base: Option<u32>,
    kind: Option<WidthKind>,
    json: bool,
    read_stdin: bool,
    config_path: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let config = match &config_path {
        Some(path) => StrtoiConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => StrtoiConfig::load_from_cwd().context("Failed to load strtoi.toml")?,
    };

    let base = base.unwrap_or(config.parse.base);
    let kind = kind.unwrap_or(config.parse.kind);
    let format = if json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    if read_stdin {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read stdin")?;
            inputs.push(line);
        }
    }

    if inputs.is_empty() {
        bail!("No inputs given (pass strings or --stdin)");
    }

    if verbose {
        eprintln!(
            "Parsing {} input(s) as {} in base {}{}",
            inputs.len(),
            kind,
            base,
            if base == 0 { " (auto)" } else { "" }
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0usize;

    for input in &inputs {
        let result = parse_dynamic(input, base, kind);
        if !result.is_ok() {
            failures += 1;
            if verbose {
                eprintln!("  [{}] {:?}", result.status, input);
            }
        }

        match format {
            OutputFormat::Json => {
                let report = Report {
                    input,
                    base,
                    result,
                };
                writeln!(out, "{}", serde_json::to_string(&report)?)?;
            }
            OutputFormat::Text if config.output.show_status => {
                writeln!(
                    out,
                    "{:?} -> {} consumed={} status={}",
                    input, result.value, result.consumed, result.status
                )?;
            }
            OutputFormat::Text => writeln!(out, "{}", result.value)?,
        }
    }

    if failures > 0 {
        bail!("{} of {} input(s) did not parse cleanly", failures, inputs.len());
    }
    Ok(())
}
