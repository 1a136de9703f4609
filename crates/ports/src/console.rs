// crates/ports/src/console.rs
use file_stats_shared_kernel::InfraResult;

/// Port supplying a scan root when none was given on the command line.
///
/// Keeps the interactive fallback out of the core flow so the flow tests
/// without a terminal.
pub trait PathPrompt {
    /// Returns the trimmed line the user entered; empty means "use the
    /// default".
    fn prompt_for_root(&self) -> InfraResult<String>;
}
