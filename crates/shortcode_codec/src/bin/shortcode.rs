//! # Shortcode Tool
//!
//! Command-line tool to generate and read shortcodes.
//!
//! Logs go to stderr and follow `RUST_LOG` (e.g. `RUST_LOG=shortcode_codec=debug`).

use std::process::ExitCode;

use chrono::NaiveDate;
use shortcode_codec::{CodecConfig, ShortcodeCodec};
use tracing_subscriber::EnvFilter;

/// Environment variable naming a configuration file.
const CONFIG_ENV: &str = "SHORTCODE_CONFIG";

const USAGE: &str = "\
Usage:
  shortcode encode <store_id> <transaction_id> [--date YYYY-MM-DD] [--config <file.toml>]
  shortcode decode <shortcode> [--config <file.toml>]
  shortcode config [--config <file.toml>]

Without --config, the file named by SHORTCODE_CONFIG is used, else the
built-in reference format.";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Encode {
        store_id: u64,
        transaction_id: u64,
        date: Option<NaiveDate>,
    },
    Decode {
        shortcode: String,
    },
    ShowConfig,
}

/// A fully parsed command line.
#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    command: Command,
    config: Option<String>,
}

/// Values of the flags that take one.
#[derive(Debug, Default)]
struct Flags<'a> {
    config: Option<&'a str>,
    date: Option<&'a str>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    match run(&args, std::env::var(CONFIG_ENV).ok()) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

/// Runs one command and returns the text to print.
///
/// `env_config` is the value of `SHORTCODE_CONFIG`, if set.
fn run(args: &[String], env_config: Option<String>) -> Result<String, String> {
    let invocation = parse_invocation(args)?;
    let config = resolve_config(invocation.config.as_deref(), env_config)?;
    let codec = ShortcodeCodec::new(config).map_err(|e| e.to_string())?;

    match invocation.command {
        Command::Encode {
            store_id,
            transaction_id,
            date,
        } => match date {
            Some(date) => codec.encode_on(store_id, transaction_id, date),
            None => codec.encode(store_id, transaction_id),
        }
        .map_err(|e| e.to_string()),
        Command::Decode { shortcode } => {
            let decoded = codec.decode(&shortcode).map_err(|e| e.to_string())?;
            Ok(format!(
                "Store ID:       {}\nTransaction ID: {}\nDate:           {}",
                decoded.store_id, decoded.transaction_id, decoded.date
            ))
        }
        Command::ShowConfig => {
            let text = codec.config().to_toml_string().map_err(|e| e.to_string())?;
            Ok(format!(
                "{}\n# {} symbols per code, seeds {:?}",
                text.trim_end(),
                codec.total_length(),
                codec.seed_range()
            ))
        }
    }
}

fn parse_invocation(args: &[String]) -> Result<Invocation, String> {
    let (positional, flags) = split_args(args)?;
    let Some((&name, rest)) = positional.split_first() else {
        return Err(format!("missing command\n\n{USAGE}"));
    };

    let command = match (name, rest) {
        ("encode", [store_id, transaction_id]) => Command::Encode {
            store_id: parse_id("store id", store_id)?,
            transaction_id: parse_id("transaction id", transaction_id)?,
            date: flags.date.map(parse_date).transpose()?,
        },
        ("decode", [shortcode]) => Command::Decode {
            shortcode: shortcode.trim().to_string(),
        },
        ("config", []) => Command::ShowConfig,
        ("encode" | "decode" | "config", _) => {
            return Err(format!("wrong number of arguments for {name}\n\n{USAGE}"));
        }
        _ => return Err(format!("unknown command {name:?}\n\n{USAGE}")),
    };

    if flags.date.is_some() && !matches!(command, Command::Encode { .. }) {
        return Err(format!("--date only applies to encode, not {name}"));
    }

    Ok(Invocation {
        command,
        config: flags.config.map(str::to_string),
    })
}

/// Separates positional arguments from flags and their values.
fn split_args(args: &[String]) -> Result<(Vec<&str>, Flags<'_>), String> {
    let mut positional = Vec::new();
    let mut flags = Flags::default();
    let mut iter = args.iter().map(String::as_str);

    while let Some(arg) = iter.next() {
        if !arg.starts_with("--") {
            positional.push(arg);
            continue;
        }
        let slot = match arg {
            "--config" => &mut flags.config,
            "--date" => &mut flags.date,
            _ => return Err(format!("unknown flag {arg:?}\n\n{USAGE}")),
        };
        let value = match iter.next() {
            Some(value) if !value.starts_with("--") => value,
            _ => return Err(format!("{arg} needs a value")),
        };
        if slot.replace(value).is_some() {
            return Err(format!("{arg} given more than once"));
        }
    }

    Ok((positional, flags))
}

fn parse_id(name: &str, raw: &str) -> Result<u64, String> {
    raw.trim()
        .parse()
        .map_err(|_| format!("{name} must be a non-negative integer, got {raw:?}"))
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| format!("invalid date {raw:?}: {e}"))
}

/// `--config` wins over `SHORTCODE_CONFIG`, which wins over the reference format.
fn resolve_config(flag: Option<&str>, env_config: Option<String>) -> Result<CodecConfig, String> {
    let path = flag
        .map(str::to_string)
        .or_else(|| env_config.filter(|path| !path.is_empty()));
    match path {
        Some(path) => CodecConfig::load(&path).map_err(|e| e.to_string()),
        None => Ok(CodecConfig::default()),
    }
}
