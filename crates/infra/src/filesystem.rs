// crates/infra/src/filesystem.rs
use std::path::{Path, PathBuf};

use file_stats_ports::filesystem::{FileEnumerator, FileProbe, SkipReason};
use file_stats_shared_kernel::{DomainError, Result};
use ignore::WalkBuilder;

/// Filesystem adapter implementing the `FileEnumerator` port with a
/// sequential recursive walk.
#[derive(Debug, Default)]
pub struct WalkEnumerator;

impl WalkEnumerator {
    pub fn new() -> Self {
        Self
    }
}

impl FileEnumerator for WalkEnumerator {
    fn collect(&self, root: &Path) -> Result<Vec<FileProbe>> {
        if !root.is_dir() {
            return Err(DomainError::InvalidDirectory { path: root.to_path_buf() }.into());
        }

        let mut builder = WalkBuilder::new(root);
        // Every reachable file is in scope: no hidden-file filtering and
        // no ignore-file semantics.
        builder
            .hidden(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .parents(false)
            .follow_links(false);

        let mut probes = Vec::new();
        for entry in builder.build() {
            let entry = match entry {
                Ok(entry) => entry,
                // Unreadable subdirectories degrade to nothing, like
                // unreadable files.
                Err(_) => continue,
            };
            let Some(file_type) = entry.file_type() else { continue };
            if file_type.is_dir() {
                continue;
            }
            if let Some(probe) = probe_file(entry.into_path()) {
                probes.push(probe);
            }
        }

        // Walk order is filesystem-dependent; sort so repeated scans of an
        // unmodified tree render identically.
        probes.sort_by(|a, b| a.path().cmp(b.path()));
        Ok(probes)
    }
}

// Symlinks land here too; `metadata` follows them, so a link to a regular
// file counts with its target's size.
fn probe_file(path: PathBuf) -> Option<FileProbe> {
    match std::fs::metadata(&path) {
        Ok(meta) if meta.is_file() => Some(FileProbe::Accessible { size: meta.len(), path }),
        // Symlink to a directory or a special file: nothing to record.
        Ok(_) => None,
        Err(err) => {
            let reason = SkipReason::classify(&err);
            Some(FileProbe::Skipped { path, reason })
        }
    }
}
