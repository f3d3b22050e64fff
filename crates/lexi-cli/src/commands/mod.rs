//! CLI command implementations.

mod check;
mod coverage;
mod eval;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use eval::{run_eval, EvalArgs};

use std::fs::read_to_string;
use std::path::Path;

use lexi::{I18nConfig, LoadError};
use tracing::debug;

use crate::output::LexiDiagnostic;

/// Read and load a catalog file, turning JSON errors into source-annotated
/// diagnostics.
pub(crate) fn load_config(path: &Path) -> miette::Result<I18nConfig> {
    let content = read_to_string(path)
        .map_err(|e| miette::miette!("Cannot read catalog file {}: {}", path.display(), e))?;
    let config = I18nConfig::from_json_source(&content, path)
        .map_err(|e| load_error_report(path, &content, e))?;
    debug!(
        path = %path.display(),
        locales = config.catalog().len(),
        default = config.default_locale(),
        "loaded catalog"
    );
    Ok(config)
}

/// Convert a load error into a report, with source context where available.
pub(crate) fn load_error_report(path: &Path, content: &str, err: LoadError) -> miette::Report {
    match LexiDiagnostic::from_load_error(path, content, &err) {
        Some(diagnostic) => diagnostic.into(),
        None => miette::Report::from_err(err),
    }
}
