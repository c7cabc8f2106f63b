//! Babel CLI - convert BIP39 seed phrases to pronounceable babel strings
//!
//! Input may be given as an argument or piped on stdin. Errors go to stderr
//! and the process exits nonzero.

use anyhow::Result;
use babel_cli::{run, Cli, CliConfig};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("babel={level},babel_cli={level},babel_core={level}").into()
        }))
        .init();

    let config = CliConfig::load_or_default(cli.config.as_deref())?;
    let output = run(&cli, &config)?;
    println!("{}", output);

    Ok(())
}
