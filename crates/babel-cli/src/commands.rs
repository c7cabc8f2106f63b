//! CLI command implementations

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use babel_core::{
    checksum_bits, decode_to_entropy, entropy_to_mnemonic, format_babel, parse_mnemonic,
    BabelCodec, Entropy, Error, Separator,
};
use clap::{ArgAction, Parser, Subcommand};

use crate::config::CliConfig;

/// Babel - pronounceable BIP39 seed phrases
#[derive(Parser, Debug)]
#[command(name = "babel")]
#[command(about = "Convert BIP39 seed phrases to pronounceable babel strings and back", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a seed phrase to a babel string
    Encode {
        /// Seed phrase in quotes; read from stdin when omitted
        mnemonic: Option<String>,

        /// Insert separators for readability
        /// (also on when BABEL_FORMAT is 1, true, yes or on)
        #[arg(
            short,
            long,
            env = "BABEL_FORMAT",
            value_parser = clap::builder::BoolishValueParser::new()
        )]
        format: bool,

        /// Separator: hyphen, dot, space or underscore
        #[arg(long)]
        separator: Option<Separator>,

        /// Syllables per group when formatting
        #[arg(long)]
        group: Option<usize>,
    },

    /// Convert a babel string back to its seed phrase
    Decode {
        /// Babel string, separators allowed; read from stdin when omitted
        babel: Option<String>,
    },

    /// Show the entropy, checksum and sizes behind a seed phrase or babel string
    Inspect {
        /// Seed phrase or babel string; read from stdin when omitted
        input: Option<String>,
    },
}

/// Run a parsed command and return the text to print
pub fn run(cli: &Cli, config: &CliConfig) -> Result<String> {
    let codec = BabelCodec::new();

    match &cli.command {
        Commands::Encode {
            mnemonic,
            format,
            separator,
            group,
        } => {
            let mnemonic = resolve_input(mnemonic.as_deref())?;
            let babel = codec
                .encode(&mnemonic)
                .context("Failed to encode seed phrase")?;

            if *format || config.always_format {
                let format = config.effective_format(*separator, *group);
                Ok(format_babel(&babel, &format))
            } else {
                Ok(babel)
            }
        }

        Commands::Decode { babel } => {
            let babel = resolve_input(babel.as_deref())?;
            let mnemonic = codec
                .decode(&babel)
                .context("Failed to decode babel string")?;
            Ok(mnemonic)
        }

        Commands::Inspect { input } => {
            let input = resolve_input(input.as_deref())?;
            let (kind, entropy) = detect(&input)?;
            inspect(kind, &entropy, &codec)
        }
    }
}

/// Use the argument if present, otherwise read all of stdin
fn resolve_input(arg: Option<&str>) -> Result<String> {
    let raw = match arg {
        Some(value) => value.to_string(),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("No input given");
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputKind {
    Mnemonic,
    Babel,
}

/// Try the input as a mnemonic first, then as a babel string.
///
/// A checksum failure is reported as is: the words were all valid, so the
/// input was meant as a mnemonic.
fn detect(input: &str) -> Result<(InputKind, Entropy)> {
    match parse_mnemonic(input) {
        Ok(entropy) => Ok((InputKind::Mnemonic, entropy)),
        Err(mnemonic_err @ (Error::InvalidWordCount(_) | Error::UnknownWord { .. })) => {
            match decode_to_entropy(input) {
                Ok(entropy) => Ok((InputKind::Babel, entropy)),
                Err(babel_err) => bail!(
                    "Input is neither a seed phrase ({}) nor a babel string ({})",
                    mnemonic_err,
                    babel_err
                ),
            }
        }
        Err(e) => Err(e).context("Invalid seed phrase"),
    }
}

fn inspect(kind: InputKind, entropy: &Entropy, codec: &BabelCodec) -> Result<String> {
    let count = entropy.word_count();
    let checksum = checksum_bits(entropy);
    let mnemonic = entropy_to_mnemonic(entropy).join(" ");
    let babel = codec.encode_entropy(entropy)?;

    let kind = match kind {
        InputKind::Mnemonic => "seed phrase",
        InputKind::Babel => "babel string",
    };

    let lines = [
        format!("Input:          {}", kind),
        format!("Words:          {}", count.words()),
        format!("Entropy bits:   {}", count.entropy_bits()),
        format!("Checksum bits:  {} ({})", count.checksum_bits(), checksum),
        format!(
            "Babel units:    {} ({} pad bits)",
            count.babel_units(),
            count.pad_bits()
        ),
        format!("Entropy (hex):  {}", hex::encode(entropy.as_bytes())),
        format!("Seed phrase:    {}", mnemonic),
        format!("Babel string:   {}", babel),
    ];
    Ok(lines.join("\n"))
}
