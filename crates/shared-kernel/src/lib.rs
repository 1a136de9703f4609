// crates/shared-kernel/src/lib.rs
pub use error::{
    DomainError, DomainResult, FileStatsError, InfraResult, InfrastructureError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{ExtensionLabel, FileSize, NO_EXTENSION_LABEL};
