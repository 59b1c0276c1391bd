use anyhow::Result;

use crate::model::{AuthenticationRecord, ServerConfig};
use crate::remote::GiteaClient;
use crate::store::{CredentialAdapter, KeyValueStore, SaveOutcome};

use super::AuthProvider;

/// Holds the signed-in session; memory is authoritative, the store is a cache.
pub struct AuthenticationContext<S> {
    config: ServerConfig,
    adapter: CredentialAdapter<S>,
    state: Option<AuthenticationRecord>,
}

impl<S: KeyValueStore> AuthenticationContext<S> {
    pub fn new(config: ServerConfig, adapter: CredentialAdapter<S>) -> Self {
        Self {
            config,
            adapter,
            state: None,
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Restores a saved session issued by the configured server.
    ///
    /// Returns whether a session was restored; read failures are returned
    /// for the caller to log and leave the context signed out.
    pub fn load_saved(&mut self) -> Result<bool> {
        let Some(record) = self.adapter.load()? else {
            return Ok(false);
        };
        if record.config.server.trim_end_matches('/') != self.config.server {
            return Ok(false);
        }
        self.state = Some(record);
        Ok(true)
    }

    /// Replaces the session and mirrors it into the credential store.
    pub fn set_authentication(&mut self, record: Option<AuthenticationRecord>) -> SaveOutcome {
        self.state = record;
        self.adapter.save(self.state.as_ref())
    }

    /// Client for the configured server, authenticated when signed in.
    pub fn client(&self) -> Result<GiteaClient> {
        match self.state.as_ref() {
            Some(record) => GiteaClient::for_record(record),
            None => GiteaClient::new(&self.config.server, None),
        }
    }
}

impl<S: KeyValueStore> AuthProvider for AuthenticationContext<S> {
    fn current(&self) -> Option<&AuthenticationRecord> {
        self.state.as_ref()
    }

    fn login(&mut self, username: &str, password: &str, remember: bool) -> Result<SaveOutcome> {
        let client = GiteaClient::new(&self.config.server, None)?;
        let mut record = client.login(username, password, &self.config.tokenid)?;
        record.remember = remember;
        Ok(self.set_authentication(Some(record)))
    }

    fn logout(&mut self) -> SaveOutcome {
        self.set_authentication(None)
    }
}

#[cfg(test)]
#[path = "../tests/providers/auth_tests.rs"]
mod tests;
