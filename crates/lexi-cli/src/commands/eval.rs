//! Implementation of the `lexi eval` command.

use std::collections::BTreeMap;
use std::path::PathBuf;

use lexi::{Args, I18n, Value};
use serde::Serialize;

use super::load_config;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Catalog file (.json)
    #[arg(long, required = true)]
    pub catalog: PathBuf,

    /// Dotted key to render
    #[arg(long, required = true)]
    pub key: String,

    /// Locale tag, matched against the catalog (defaults to its default locale)
    #[arg(long)]
    pub locale: Option<String>,

    /// Variables in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Plural count
    #[arg(long, allow_hyphen_values = true)]
    pub count: Option<String>,

    /// Fail on missing keys instead of printing the key
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub locale: String,
    pub key: String,
    pub result: String,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((name.to_string(), value.to_string()))
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let config = load_config(&args.catalog)?;
    let requested = args
        .locale
        .clone()
        .unwrap_or_else(|| config.default_locale().to_string());
    let i18n = I18n::new(config, &requested);

    let vars: BTreeMap<String, Value> = args
        .params
        .into_iter()
        .map(|(name, value)| (name, Value::parse_lossy(&value)))
        .collect();
    let translation_args = Args::builder()
        .vars(vars)
        .maybe_count(args.count.as_deref().map(Value::parse_lossy))
        .build();

    let result = if args.strict {
        i18n.try_t(&args.key, &translation_args)
    } else {
        i18n.t(&args.key, &translation_args)
    };

    match result {
        Ok(result) => {
            if args.json {
                let output = EvalResult {
                    locale: i18n.locale().to_string(),
                    key: args.key,
                    result,
                };
                let json = serde_json::to_string_pretty(&output)
                    .map_err(|e| miette::miette!("Cannot serialize result: {}", e))?;
                println!("{}", json);
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "locale": i18n.locale(),
                    "key": args.key,
                    "error": e.to_string(),
                });
                eprintln!("{:#}", output);
            } else {
                eprintln!("Evaluation error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
