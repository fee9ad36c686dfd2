//! Ell console
//!
//! Converts one command and prints the result:
//! - `ell 10 cm in m` converts the arguments
//! - `ell` with no command reads one line from stdin
//! - `ell --list` prints the available units
//!
//! Logs go to stderr (`RUST_LOG`, default `warn`); stdout carries only results.

use clap::Parser;
use ell::{Converter, DiscoveryConfig, PLUGIN_PATH_ENV};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Convert lengths between units: `<length> <unit> in <unit>`
#[derive(Parser, Debug)]
#[command(name = "ell")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Command to convert, e.g. `10 cm in m`. Read from stdin when omitted.
    #[arg(value_name = "COMMAND", num_args = 1.., trailing_var_arg = true, allow_negative_numbers = true)]
    command: Vec<String>,

    /// Print the available units and exit
    #[arg(short, long)]
    list: bool,

    /// Plugin location to scan for `*.units.json` files (repeatable).
    /// Replaces the default locations and ELL_PLUGIN_PATH.
    #[arg(short = 'p', long = "plugin-dir", value_name = "DIR")]
    plugin_dirs: Vec<PathBuf>,
}

impl Cli {
    fn discovery_config(&self) -> DiscoveryConfig {
        if self.plugin_dirs.is_empty() {
            DiscoveryConfig::from_env()
        } else {
            DiscoveryConfig::new().with_plugin_dirs(&self.plugin_dirs)
        }
    }
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = cli.discovery_config();
    info!(dirs = ?config.plugin_dirs, env = PLUGIN_PATH_ENV, "discovering units");

    let converter = match Converter::with_config(config) {
        Ok(c) => c,
        Err(e) => {
            error!(code = e.code(), "{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &converter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("I/O error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, converter: &Converter) -> io::Result<()> {
    let mut stdout = io::stdout().lock();

    if cli.list {
        for unit in converter.available_units() {
            writeln!(stdout, "{}", unit)?;
        }
        return Ok(());
    }

    let output = if cli.command.is_empty() {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        converter.convert_command(&line)
    } else {
        converter.convert_args(Some(cli.command.as_slice()))
    };

    writeln!(stdout, "{}", output)?;
    stdout.flush()
}
