// crates/domain/src/lib.rs
pub mod histogram;
pub mod model;
pub mod report;

pub use histogram::{ExtensionHistogram, HistogramRow};
pub use model::{FileRecord, ScanResult};
