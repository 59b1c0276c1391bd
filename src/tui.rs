use std::path::PathBuf;

use anyhow::Result;

#[derive(Clone, Debug, Default)]
pub struct TuiRunOptions {
    /// Append a JSONL trace of the session to this file.
    pub trace: Option<PathBuf>,
    pub state_dir: Option<PathBuf>,
    pub server: Option<String>,
    pub tokenid: Option<String>,
    /// Keep the session in memory only; nothing is read from or written to the credential store.
    pub ephemeral: bool,
}

pub fn run() -> Result<()> {
    crate::tui_shell::run()
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
