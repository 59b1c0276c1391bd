use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bookstep::model::{AppConfig, AuthenticationRecord};
use bookstep::providers::AuthenticationContext;
use bookstep::store::{KeyValueStore, LocalStore, MemoryKeyValueStore};

use crate::Commands;

#[derive(Parser)]
#[command(name = "bookstep")]
#[command(about = "Pick a Door43 repository and book, step by step", long_about = None)]
pub(crate) struct Cli {
    /// State directory holding config.json and the saved login
    #[arg(long = "state-dir", value_name = "DIR", global = true)]
    state_dir: Option<PathBuf>,

    /// Server base URL (overrides config.json)
    #[arg(long, global = true)]
    server: Option<String>,

    /// Access token name (overrides config.json)
    #[arg(long, global = true)]
    tokenid: Option<String>,

    /// Keep the login in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Write a JSONL session trace (TUI only)
    #[arg(long, value_name = "PATH")]
    trace: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            bookstep::tui::run_with_options(bookstep::tui::TuiRunOptions {
                trace: cli.trace,
                state_dir: cli.state_dir,
                server: cli.server,
                tokenid: cli.tokenid,
                ephemeral: cli.ephemeral,
            })?;
        }
        Some(command) => {
            if cli.trace.is_some() {
                anyhow::bail!("`--trace` is only supported when running the TUI (no subcommand)");
            }
            let ctx = CliContext::open(
                cli.state_dir,
                cli.server.as_deref(),
                cli.tokenid.as_deref(),
                cli.ephemeral,
            )?;
            crate::cli_exec::handle_command(&ctx, command)?
        }
    }

    Ok(())
}

/// Everything a subcommand needs: the state directory, the effective
/// configuration (file plus flags) and the credential store.
pub(crate) struct CliContext {
    pub(crate) store: LocalStore,
    pub(crate) config: AppConfig,
    ephemeral: bool,
}

impl CliContext {
    fn open(
        state_dir: Option<PathBuf>,
        server: Option<&str>,
        tokenid: Option<&str>,
        ephemeral: bool,
    ) -> Result<Self> {
        let store = match state_dir {
            Some(dir) => LocalStore::open(&dir)?,
            None => LocalStore::open_default()?,
        };
        let mut config = store.read_config()?;
        config.apply_overrides(server, tokenid);
        Ok(Self {
            store,
            config,
            ephemeral,
        })
    }

    pub(crate) fn auth(&self) -> AuthenticationContext<Box<dyn KeyValueStore>> {
        let kv: Box<dyn KeyValueStore> = if self.ephemeral {
            Box::new(MemoryKeyValueStore::new())
        } else {
            Box::new(self.store.auth_store())
        };
        AuthenticationContext::new(
            self.config.server_config(),
            bookstep::store::CredentialAdapter::new(kv),
        )
    }
}

/// Saved login for the configured server, or a hint to log in.
pub(crate) fn require_login(
    ctx: &CliContext,
) -> Result<(AuthenticationContext<Box<dyn KeyValueStore>>, AuthenticationRecord)> {
    use bookstep::providers::AuthProvider;

    let mut auth = ctx.auth();
    auth.load_saved().context("read saved login")?;
    let record = auth
        .current()
        .cloned()
        .context("not logged in (run `bookstep login --username ...`)")?;
    Ok((auth, record))
}
