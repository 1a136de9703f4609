// crates/core/src/bootstrap.rs
use std::path::PathBuf;

use anyhow::Result;
use file_stats_infra::{console::StdinPrompt, filesystem::WalkEnumerator};
use file_stats_ports::console::PathPrompt;
use file_stats_usecase::ScanDirectory;

use crate::{
    output,
    presentation::cli::{self, Config},
};

/// Parses the command line and runs one scan.
pub fn run() -> Result<()> {
    let config = cli::load_config();
    run_with_config(config)
}

pub fn run_with_config(config: Config) -> Result<()> {
    let root = match config.root {
        Some(root) => root,
        None => prompted_root(&StdinPrompt::new())?,
    };

    let enumerator = WalkEnumerator::new();
    let result = ScanDirectory::new(&enumerator).run(&root)?;

    if result.is_empty() {
        println!("No files found under '{}'", root.display());
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    output::emit(&mut stdout, &root, &result, config.format)?;
    Ok(())
}

/// Interactive fallback: one line from the prompt, empty input meaning the
/// current directory.
fn prompted_root(prompt: &dyn PathPrompt) -> Result<PathBuf> {
    let line = prompt.prompt_for_root()?;
    if line.is_empty() {
        println!("Using default path '.'");
        Ok(PathBuf::from("."))
    } else {
        Ok(PathBuf::from(line))
    }
}
