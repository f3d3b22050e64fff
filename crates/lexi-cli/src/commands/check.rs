//! Implementation of the `lexi check` command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use lexi::parser::{find_foreign_key, find_unbalanced_tag};
use lexi::{Entry, I18nConfig, ValueTree};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::debug;

use super::load_error_report;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Catalog files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// A suspicious entry that loads but may not render as intended.
#[derive(Debug, Serialize)]
struct Warning {
    locale: String,
    key: String,
    message: String,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    error: Option<String>,
    warnings: Vec<Warning>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut reports = Vec::new();
    let mut any_error = false;

    for path in &args.files {
        let report = check_file(path, args.json);
        any_error |= report.error.is_some();
        reports.push(report);
    }

    if args.json {
        let json = serde_json::to_string_pretty(&reports)
            .map_err(|e| miette::miette!("Cannot serialize report: {}", e))?;
        println!("{}", json);
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    if any_error {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

fn check_file(path: &Path, json: bool) -> FileReport {
    let file = path.display().to_string();
    let content = match read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            return FileReport {
                file,
                error: Some(format!("cannot read file: {e}")),
                warnings: Vec::new(),
            };
        }
    };

    match I18nConfig::from_json_source(&content, path) {
        Ok(config) => {
            let warnings = catalog_warnings(&config);
            debug!(file = %file, warnings = warnings.len(), "checked catalog");
            FileReport {
                file,
                error: None,
                warnings,
            }
        }
        Err(err) => {
            debug!(file = %file, error = %err, "catalog failed to load");
            let message = err.to_string();
            if !json {
                eprintln!("{:?}", load_error_report(path, &content, err));
            }
            FileReport {
                file,
                error: Some(message),
                warnings: Vec::new(),
            }
        }
    }
}

fn print_report(report: &FileReport) {
    for warning in &report.warnings {
        println!(
            "{} {}: '{}' in locale '{}': {}",
            "warning".if_supports_color(Stream::Stdout, |t| t.yellow()),
            report.file,
            warning.key,
            warning.locale,
            warning.message
        );
    }
    if report.error.is_some() {
        println!(
            "{} {}",
            "✗".if_supports_color(Stream::Stdout, |t| t.red()),
            report.file
        );
    } else {
        println!(
            "{} {}",
            "✓".if_supports_color(Stream::Stdout, |t| t.green()),
            report.file
        );
    }
}

/// Collect warnings for every locale of a loaded catalog.
fn catalog_warnings(config: &I18nConfig) -> Vec<Warning> {
    let mut warnings = Vec::new();
    for (locale, tree) in config.catalog().iter() {
        tree_warnings(locale, tree, "", tree, &mut warnings);
    }
    warnings
}

fn tree_warnings(
    locale: &str,
    root: &ValueTree,
    prefix: &str,
    tree: &ValueTree,
    out: &mut Vec<Warning>,
) {
    for (key, entry) in tree.iter() {
        let path = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        };
        let warn = |message: String| Warning {
            locale: locale.to_string(),
            key: path.clone(),
            message,
        };
        match entry {
            Entry::Tree(subtree) => tree_warnings(locale, root, &path, subtree, out),
            Entry::Text(template) => {
                out.extend(template_warnings(root, template).into_iter().map(warn));
            }
            Entry::Plural(set) => {
                if set.fallback().is_none() {
                    out.push(warn(
                        "plural set has no fallback rule, so it fails without a count".to_string(),
                    ));
                }
                for rule in set.rules() {
                    out.extend(template_warnings(root, rule.template()).into_iter().map(warn));
                }
            }
        }
    }
}

/// Problems in one template: unclosed tags and `$t(...)` references that
/// cannot be resolved in the same locale.
fn template_warnings(root: &ValueTree, template: &str) -> Vec<String> {
    let mut messages = Vec::new();
    if let Some(tag) = find_unbalanced_tag(template) {
        messages.push(format!("tag <{tag}> is never closed"));
    }
    let mut rest = template;
    while let Some(found) = find_foreign_key(rest) {
        let reference = match found {
            Ok(reference) => reference,
            Err(e) => {
                messages.push(e.to_string());
                break;
            }
        };
        let target = reference.path();
        match root.resolve(&target) {
            None => messages.push(format!("references missing key '{target}'")),
            Some(Entry::Tree(_)) => messages.push(format!("references namespace '{target}'")),
            Some(_) => {}
        }
        rest = &rest[reference.end..];
    }
    messages
}
