//! Coverage table rendering.

use comfy_table::{presets, CellAlignment, ContentArrangement, Table};

/// Missing keys shown inline before the cell is summarized.
const MISSING_PREVIEW: usize = 3;

/// Coverage data for a single locale.
pub struct LocaleCoverage {
    /// Locale id (e.g., "fr", "fr-CA").
    pub locale: String,
    /// Number of default-locale keys this locale translates.
    pub translated: usize,
    /// Dotted keys missing from this locale.
    pub missing: Vec<String>,
}

impl LocaleCoverage {
    /// Share of `total` keys translated, as a percentage. An empty default
    /// locale counts as fully covered.
    pub fn percent(&self, total: usize) -> f64 {
        if total == 0 {
            100.0
        } else {
            self.translated as f64 * 100.0 / total as f64
        }
    }

    /// The first few missing keys, then a count of the rest.
    fn missing_preview(&self) -> String {
        if self.missing.is_empty() {
            return "-".to_string();
        }
        let shown = self.missing.iter().take(MISSING_PREVIEW).cloned();
        let hidden = self.missing.len().saturating_sub(MISSING_PREVIEW);
        let mut parts: Vec<String> = shown.collect();
        if hidden > 0 {
            parts.push(format!("+{hidden} more"));
        }
        parts.join(", ")
    }
}

/// Build the coverage table: one row per locale with its translated count,
/// percentage and a preview of missing keys.
pub fn format_coverage_table(total: usize, coverage: &[LocaleCoverage]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_HORIZONTAL_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Locale", "Keys", "%", "Missing keys"]);

    for row in coverage {
        table.add_row(vec![
            row.locale.clone(),
            format!("{}/{total}", row.translated),
            format!("{:.1}", row.percent(total)),
            row.missing_preview(),
        ]);
    }

    for index in [1, 2] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}
