// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use file_stats_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Outcome of probing a single file during a walk.
///
/// Skips are data, not errors: an inaccessible file contributes nothing to
/// the aggregate and never aborts the scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileProbe {
    Accessible { path: PathBuf, size: u64 },
    Skipped { path: PathBuf, reason: SkipReason },
}

impl FileProbe {
    pub fn path(&self) -> &Path {
        match self {
            Self::Accessible { path, .. } | Self::Skipped { path, .. } => path,
        }
    }
}

/// Why a discovered file was left out of the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    PermissionDenied,
    /// The file disappeared between discovery and stat.
    Vanished,
    Unreadable,
}

impl SkipReason {
    pub fn classify(err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            std::io::ErrorKind::NotFound => Self::Vanished,
            _ => Self::Unreadable,
        }
    }
}

/// Port for enumerating the files reachable from a scan root.
pub trait FileEnumerator: Send + Sync {
    /// Walks `root` recursively. Fails only when `root` itself does not
    /// name an existing directory; everything below it degrades to
    /// [`FileProbe::Skipped`] entries instead of erroring.
    fn collect(&self, root: &Path) -> Result<Vec<FileProbe>>;
}
