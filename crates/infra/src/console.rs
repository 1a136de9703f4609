// crates/infra/src/console.rs
use std::io::{BufRead, Write};

use file_stats_ports::console::PathPrompt;
use file_stats_shared_kernel::{InfraResult, InfrastructureError};

/// Interactive prompt on stdin/stdout, used when no path argument was
/// given.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl StdinPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl PathPrompt for StdinPrompt {
    fn prompt_for_root(&self) -> InfraResult<String> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "File statistics tool")?;
        writeln!(stdout, "{}", "=".repeat(30))?;
        write!(stdout, "Directory to scan (default '.', press Enter to accept): ")?;
        stdout.flush()?;

        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|source| InfrastructureError::PromptRead { source })?;
        Ok(line.trim().to_string())
    }
}
