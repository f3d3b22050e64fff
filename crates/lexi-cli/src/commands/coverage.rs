//! Coverage command implementation.

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Args;
use lexi::{Catalog, ValueTree};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use super::load_config;
use crate::output::table::{format_coverage_table, LocaleCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Catalog file (.json).
    #[arg(long)]
    pub catalog: PathBuf,

    /// List every missing key after the table.
    #[arg(long)]
    pub list_missing: bool,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    locale: String,
    translated: usize,
    total: usize,
    percent: f64,
    missing: Vec<String>,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let config = load_config(&args.catalog)?;
    let (total, coverage_data) = compute_coverage(config.catalog(), config.default_locale());

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                locale: c.locale.clone(),
                translated: c.translated,
                total,
                percent: c.percent(total),
                missing: c.missing.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        let table = format_coverage_table(total, &coverage_data);
        println!("{}", table);

        if args.list_missing {
            print_missing(&coverage_data);
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

fn print_missing(coverage: &[LocaleCoverage]) {
    for row in coverage.iter().filter(|row| !row.missing.is_empty()) {
        println!("\nMissing in {}:", row.locale);
        for key in &row.missing {
            println!("  - {key}");
        }
    }
}

/// Count, for every non-default locale, the default locale's leaf keys it
/// also defines. Returns the default locale's key count and one row per
/// other locale.
fn compute_coverage(catalog: &Catalog, default_locale: &str) -> (usize, Vec<LocaleCoverage>) {
    let source_keys = catalog
        .tree(default_locale)
        .map(ValueTree::leaf_keys)
        .unwrap_or_default();

    let coverage = catalog
        .iter()
        .filter(|(locale, _)| *locale != default_locale)
        .map(|(locale, tree)| {
            let present: BTreeSet<String> = tree.leaf_keys().into_iter().collect();
            let missing: Vec<String> = source_keys
                .iter()
                .filter(|key| !present.contains(*key))
                .cloned()
                .collect();
            LocaleCoverage {
                locale: locale.to_string(),
                translated: source_keys.len() - missing.len(),
                missing,
            }
        })
        .collect();

    (source_keys.len(), coverage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexi::I18nConfig;

    #[test]
    fn counts_missing_leaf_keys() {
        let config = I18nConfig::from_json_str(
            r#"{
                "default_locale": "en",
                "locales": {
                    "en": { "a": "A", "b": { "c": "C" }, "n": [["N"]] },
                    "fr": { "a": "A", "extra": "X" },
                    "de": { "a": "A", "b": { "c": "C" }, "n": [["N"]] }
                }
            }"#,
        )
        .unwrap();
        let (total, rows) = compute_coverage(config.catalog(), config.default_locale());
        assert_eq!(total, 3);

        let locales: Vec<_> = rows.iter().map(|r| r.locale.as_str()).collect();
        assert_eq!(locales, vec!["de", "fr"]);
        assert!(rows[0].missing.is_empty());
        assert_eq!(rows[1].translated, 1);
        assert_eq!(rows[1].missing, vec!["b.c", "n"]);
    }
}
