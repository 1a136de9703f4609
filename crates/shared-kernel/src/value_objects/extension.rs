// crates/shared-kernel/src/value_objects/extension.rs
use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

/// Sentinel label for files whose name carries no extension.
pub const NO_EXTENSION_LABEL: &str = "no-extension";

/// Lowercased, dot-prefixed extension label derived from a file name, or
/// the `no-extension` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ExtensionLabel(String);

impl ExtensionLabel {
    pub fn no_extension() -> Self {
        Self(NO_EXTENSION_LABEL.to_string())
    }

    /// Classifies a file name. Only the final suffix counts
    /// (`archive.tar.gz` is `.gz`), and leading dots never start an
    /// extension, so `.gitignore` carries none.
    pub fn of_file_name(name: &str) -> Self {
        let stem = name.trim_start_matches('.');
        let leading = name.len() - stem.len();
        match stem.rfind('.') {
            Some(idx) => Self(name[leading + idx..].to_lowercase()),
            None => Self::no_extension(),
        }
    }

    /// Classifies the final component of `path`; non UTF-8 names are lossy
    /// converted before the suffix is taken.
    pub fn of_path(path: &Path) -> Self {
        path.file_name()
            .map(|name| Self::of_file_name(&name.to_string_lossy()))
            .unwrap_or_else(Self::no_extension)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_no_extension(&self) -> bool {
        self.0 == NO_EXTENSION_LABEL
    }
}

impl fmt::Display for ExtensionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
