// crates/core/src/lib.rs
pub mod bootstrap;
pub mod output;
pub mod presentation;

pub use bootstrap::{run, run_with_config};
