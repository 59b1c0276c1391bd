use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

mod config_file;
mod credentials;
mod kv;

pub use self::credentials::{AUTH_KEY, CredentialAdapter, SaveOutcome};
pub use self::kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};

const APP_DIR: &str = "bookstep";
const AUTH_STORE_FILE: &str = "auth-store.json";
const CONFIG_FILE: &str = "config.json";

/// The per-user state directory holding `config.json` and the credential store.
#[derive(Clone, Debug)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn default_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("locate user config directory")?;
        Ok(base.join(APP_DIR))
    }

    pub fn open(root: &Path) -> Result<Self> {
        fs::create_dir_all(root)
            .with_context(|| format!("create state directory {}", root.display()))?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn open_default() -> Result<Self> {
        Self::open(&Self::default_dir()?)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn auth_store(&self) -> FileKeyValueStore {
        FileKeyValueStore::new(self.root.join(AUTH_STORE_FILE))
    }

    pub fn credentials(&self) -> CredentialAdapter<FileKeyValueStore> {
        CredentialAdapter::new(self.auth_store())
    }
}

pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}
