// crates/core/src/presentation.rs
pub mod cli;
