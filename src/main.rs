use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

use scytale::config::Settings;
use scytale::fs::{finish_output, resolve_message, write_output, Source};
use scytale::{CipherEngine, KeyWrap, Mode, Scheme};

#[derive(Parser, Debug)]
#[command(version, about = "Encrypt or decrypt text with a classical cipher", long_about = None)]
struct Args {
    /// Choose whether to encrypt or decrypt
    action: Mode,

    #[command(flatten)]
    cipher: CipherChoice,

    /// File to encrypt or decrypt, or the message itself
    #[arg(short, long = "fow", value_name = "FILE_OR_WORD")]
    fow: String,

    /// File the result is written to (printed when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Key for the polyalphabetic, transposition and rail fence ciphers
    #[arg(short, long, allow_hyphen_values = true)]
    key: Option<String>,

    /// Keep spaces in the result
    #[arg(long)]
    keep_spaces: bool,

    /// Wrap the polyalphabetic key cursor after N letters instead of the key length
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    key_wrap: Option<u32>,

    /// Settings file to use instead of the per-user one
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
struct CipherChoice {
    /// Use the Caesar cipher
    #[arg(short, long)]
    caesar: bool,

    /// Use the simple substitution cipher
    #[arg(short, long)]
    sub: bool,

    /// Use the polyalphabetic (Vigenère) cipher
    #[arg(short, long)]
    poly_alpha: bool,

    /// Use the columnar transposition cipher
    #[arg(short, long)]
    trans: bool,

    /// Use the rail fence cipher
    #[arg(short, long)]
    rail: bool,
}

impl CipherChoice {
    fn scheme(&self) -> Scheme {
        if self.caesar {
            Scheme::Caesar
        } else if self.sub {
            Scheme::Substitution
        } else if self.poly_alpha {
            Scheme::Vigenere
        } else if self.trans {
            Scheme::Transposition
        } else {
            Scheme::RailFence
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let settings = Settings::load(args.config.as_deref())?;

    let scheme = args.cipher.scheme();
    info!("{} cipher was chosen", scheme);
    // Reject a bad key before touching any input file.
    let key = scheme.parse_key(args.key.as_deref())?;

    let key_wrap = args
        .key_wrap
        .map(|n| KeyWrap::Fixed(n as usize))
        .unwrap_or(settings.key_wrap);
    let engine = CipherEngine::with_key_wrap(key_wrap);

    let (message, source) = resolve_message(&args.fow)?;
    if source == Source::Literal {
        debug!("Treating '{}' as the message", args.fow);
    }

    let action = args.action;
    let result = engine
        .transform(scheme, action, &message, &key)
        .with_context(|| format!("Failed to {} with the {} cipher", action, scheme))?;
    let result = finish_output(scheme, result, settings.strip_spaces && !args.keep_spaces);

    match args.output.or(settings.default_output) {
        Some(path) => write_output(&path, &result)?,
        None => println!("{}", result),
    }

    Ok(())
}
