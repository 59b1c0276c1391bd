use serde_json::Value;

use super::*;
use crate::model::{AccessToken, RemoteUser};
use crate::store::MemoryKeyValueStore;

const SERVER: &str = "https://git.example.com";

fn server_config() -> ServerConfig {
    ServerConfig {
        server: SERVER.to_string(),
        tokenid: "bookstep".to_string(),
    }
}

fn record(server: &str) -> AuthenticationRecord {
    AuthenticationRecord {
        user: RemoteUser {
            id: 3,
            login: "jane".to_string(),
            full_name: String::new(),
            email: String::new(),
            avatar_url: String::new(),
        },
        token: AccessToken {
            id: 11,
            name: "bookstep".to_string(),
            sha1: "feedbeef".to_string(),
        },
        config: ServerConfig {
            server: server.to_string(),
            tokenid: "bookstep".to_string(),
        },
        remember: true,
    }
}

struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<Value>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: Value) -> Result<()> {
        anyhow::bail!("read-only")
    }

    fn remove(&self, _key: &str) -> Result<()> {
        anyhow::bail!("read-only")
    }
}

#[test]
fn set_authentication_persists_and_logout_clears() {
    let mut ctx = AuthenticationContext::new(
        server_config(),
        CredentialAdapter::new(MemoryKeyValueStore::new()),
    );
    assert!(ctx.current().is_none());

    assert_eq!(
        ctx.set_authentication(Some(record(SERVER))),
        SaveOutcome::Saved
    );
    assert_eq!(ctx.current_user(), Some("jane"));

    assert_eq!(ctx.logout(), SaveOutcome::Removed);
    assert!(ctx.current().is_none());
    assert!(!ctx.load_saved().unwrap());
}

#[test]
fn saved_session_is_restored_for_the_same_server() {
    let store = MemoryKeyValueStore::new();
    CredentialAdapter::new(&store).save(Some(&record(SERVER)));

    let mut ctx = AuthenticationContext::new(server_config(), CredentialAdapter::new(&store));
    assert!(ctx.load_saved().unwrap());
    assert_eq!(ctx.current(), Some(&record(SERVER)));
}

#[test]
fn saved_session_for_another_server_is_ignored() {
    let store = MemoryKeyValueStore::new();
    CredentialAdapter::new(&store).save(Some(&record("https://other.example.com")));

    let mut ctx = AuthenticationContext::new(server_config(), CredentialAdapter::new(&store));
    assert!(!ctx.load_saved().unwrap());
    assert!(ctx.current().is_none());
}

#[test]
fn failed_persistence_keeps_the_in_memory_session() {
    let mut ctx = AuthenticationContext::new(server_config(), CredentialAdapter::new(ReadOnlyStore));
    let outcome = ctx.set_authentication(Some(record(SERVER)));
    assert!(outcome.is_failed());
    assert_eq!(ctx.current_user(), Some("jane"));

    assert!(ctx.logout().is_failed());
    assert!(ctx.current().is_none());
}

#[test]
fn client_carries_the_session_token() {
    let mut ctx = AuthenticationContext::new(
        server_config(),
        CredentialAdapter::new(MemoryKeyValueStore::new()),
    );
    assert!(!ctx.client().unwrap().has_token());
    ctx.set_authentication(Some(record(SERVER)));
    assert!(ctx.client().unwrap().has_token());
}

#[test]
fn login_validates_inputs_before_any_request() {
    let mut ctx = AuthenticationContext::new(
        server_config(),
        CredentialAdapter::new(MemoryKeyValueStore::new()),
    );
    let err = ctx.login("  ", "secret", true).unwrap_err();
    assert!(err.to_string().contains("missing username"));
    let err = ctx.login("jane", "", true).unwrap_err();
    assert!(err.to_string().contains("missing password"));
    assert!(ctx.current().is_none());
}
