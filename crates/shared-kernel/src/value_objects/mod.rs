// crates/shared-kernel/src/value_objects/mod.rs
mod extension;
mod file_size;

pub use extension::{ExtensionLabel, NO_EXTENSION_LABEL};
pub use file_size::FileSize;
