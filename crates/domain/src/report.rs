// crates/domain/src/report.rs
use std::{fmt::Write as _, path::Path};

use crate::model::ScanResult;

/// Renders the scan report for `root`. Pure: re-derives nothing and
/// validates nothing; the aggregate is printed as handed in.
pub fn render(root: &Path, result: &ScanResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Scanned directory: {}", root.display());
    let _ = writeln!(out, "Total files: {}", result.file_count());

    let histogram = result.histogram();
    if !histogram.is_empty() {
        let _ = writeln!(out, "File types:");
        for row in histogram.ranked() {
            let noun = if row.count == 1 { "file" } else { "files" };
            let _ = writeln!(out, "  {}: {} {noun}", row.label, row.count);
        }
    }

    let _ = writeln!(out, "Total size: {}", result.total_size().to_human());
    out
}
