use std::path::Path;

use file_stats_domain::{FileRecord, ScanResult};
use file_stats_ports::filesystem::{FileEnumerator, FileProbe};
use file_stats_shared_kernel::{FileSize, Result};

/// Use case: one complete traversal of a directory tree producing the
/// scan aggregate.
pub struct ScanDirectory<'a> {
    enumerator: &'a dyn FileEnumerator,
}

impl<'a> ScanDirectory<'a> {
    pub fn new(enumerator: &'a dyn FileEnumerator) -> Self {
        Self { enumerator }
    }

    pub fn run(&self, root: &Path) -> Result<ScanResult> {
        let probes = self.enumerator.collect(root)?;
        Ok(accumulate(probes))
    }
}

fn accumulate(probes: Vec<FileProbe>) -> ScanResult {
    let mut result = ScanResult::new();
    for probe in probes {
        match probe {
            FileProbe::Accessible { path, size } => {
                result.push(FileRecord { path, size: FileSize::new(size) });
            }
            // Skipped files contribute no record, no count, no total.
            FileProbe::Skipped { .. } => {}
        }
    }
    result
}
