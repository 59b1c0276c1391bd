use anyhow::{Context, Result};

use crate::model::AuthenticationRecord;

use super::KeyValueStore;

pub const AUTH_KEY: &str = "authentication";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Removed,
    Failed(String),
}

impl SaveOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, SaveOutcome::Failed(_))
    }
}

/// Best-effort persistence of the signed-in session under one key.
///
/// `save` never returns an error: the in-memory session stays authoritative
/// and the caller only logs the outcome.
#[derive(Debug)]
pub struct CredentialAdapter<S> {
    store: S,
}

impl<S: KeyValueStore> CredentialAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load(&self) -> Result<Option<AuthenticationRecord>> {
        let Some(value) = self.store.get(AUTH_KEY).context("read stored authentication")? else {
            return Ok(None);
        };
        if value.is_null() {
            return Ok(None);
        }
        let record: AuthenticationRecord =
            serde_json::from_value(value).context("parse stored authentication")?;
        Ok(Some(record))
    }

    pub fn save(&self, record: Option<&AuthenticationRecord>) -> SaveOutcome {
        match self.try_save(record) {
            Ok(outcome) => outcome,
            Err(err) => SaveOutcome::Failed(format!("{:#}", err)),
        }
    }

    fn try_save(&self, record: Option<&AuthenticationRecord>) -> Result<SaveOutcome> {
        match record {
            Some(record) if record.remember => {
                let value =
                    serde_json::to_value(record).context("serialize authentication record")?;
                self.store
                    .set(AUTH_KEY, value)
                    .context("write stored authentication")?;
                Ok(SaveOutcome::Saved)
            }
            _ => {
                self.store
                    .remove(AUTH_KEY)
                    .context("remove stored authentication")?;
                Ok(SaveOutcome::Removed)
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/store/credentials_tests.rs"]
mod tests;
