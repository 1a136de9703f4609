// crates/core/src/output.rs
use std::{io::Write, path::Path};

use file_stats_domain::{ScanResult, report};
use file_stats_shared_kernel::Result;
use serde::Serialize;

use crate::presentation::cli::OutputFormat;

#[derive(Debug, Serialize)]
struct JsonOutput {
    root: String,
    files: Vec<JsonFile>,
    by_extension: Vec<JsonByExt>,
    summary: JsonSummary,
}

#[derive(Debug, Serialize)]
struct JsonFile {
    file: String,
    size: u64,
}

#[derive(Debug, Serialize)]
struct JsonByExt {
    ext: String,
    count: usize,
}

#[derive(Debug, Serialize)]
struct JsonSummary {
    files: usize,
    total_size: u64,
    total_size_human: String,
}

/// Emits the scan report for `root` to `writer` in the requested format.
pub fn emit(
    writer: &mut impl Write,
    root: &Path,
    result: &ScanResult,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => emit_table(writer, root, result),
        OutputFormat::Json => emit_json(writer, root, result),
    }
}

fn emit_table(writer: &mut impl Write, root: &Path, result: &ScanResult) -> Result<()> {
    write!(writer, "{}", report::render(root, result))?;
    Ok(())
}

fn emit_json(writer: &mut impl Write, root: &Path, result: &ScanResult) -> Result<()> {
    let files = result
        .files()
        .iter()
        .map(|record| JsonFile {
            file: record.path.display().to_string(),
            size: record.size.bytes(),
        })
        .collect();

    let by_extension = result
        .histogram()
        .ranked()
        .into_iter()
        .map(|row| JsonByExt { ext: row.label.as_str().to_string(), count: row.count })
        .collect();

    let output = JsonOutput {
        root: root.display().to_string(),
        files,
        by_extension,
        summary: JsonSummary {
            files: result.file_count(),
            total_size: result.total_size().bytes(),
            total_size_human: result.total_size().to_human(),
        },
    };

    let rendered = serde_json::to_string_pretty(&output)?;
    writeln!(writer, "{rendered}")?;
    Ok(())
}
