// crates/domain/src/model.rs
use std::path::PathBuf;

use file_stats_shared_kernel::{ExtensionLabel, FileSize};

use crate::histogram::ExtensionHistogram;

/// A file discovered during a scan together with its size on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub size: FileSize,
}

/// Aggregate produced by one complete scan.
///
/// All mutation goes through [`push`](Self::push), which updates the
/// record list, the histogram and the size total together: the histogram
/// total always equals the record count and the size total always equals
/// the sum of record sizes.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    files: Vec<FileRecord>,
    histogram: ExtensionHistogram,
    total_size: FileSize,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: FileRecord) {
        self.histogram.record(ExtensionLabel::of_path(&record.path));
        self.total_size += record.size;
        self.files.push(record);
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn histogram(&self) -> &ExtensionHistogram {
        &self.histogram
    }

    pub fn total_size(&self) -> FileSize {
        self.total_size
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
