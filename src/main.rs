// src/main.rs
use anyhow::Result;

fn main() -> Result<()> {
    file_stats_core::run()
}
