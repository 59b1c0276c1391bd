//! Capability boundaries the wizard reads its state from.
//!
//! The wizard never talks to the server or the credential store directly; it
//! asks these providers, which own the session, the selected repository and
//! the selected file path.

use anyhow::Result;

use crate::model::{AuthenticationRecord, RepositoryRef};
use crate::store::SaveOutcome;

mod auth;
mod file;
mod repository;

pub use self::auth::AuthenticationContext;
pub use self::file::FileContext;
pub use self::repository::RepositoryContext;

pub trait AuthProvider {
    fn current(&self) -> Option<&AuthenticationRecord>;

    /// Signs in and persists the session (best-effort). Persistence problems
    /// come back as a `SaveOutcome`, never as an error.
    fn login(&mut self, username: &str, password: &str, remember: bool) -> Result<SaveOutcome>;

    fn logout(&mut self) -> SaveOutcome;

    fn current_user(&self) -> Option<&str> {
        self.current().map(|a| a.user.name())
    }
}

pub trait RepoProvider {
    fn current(&self) -> Option<&RepositoryRef>;
    fn select(&mut self, repo: RepositoryRef);
    fn clear(&mut self);
}

pub trait FileProvider {
    fn current_path(&self) -> Option<&str>;
    fn set_path(&mut self, path: Option<String>);
}
