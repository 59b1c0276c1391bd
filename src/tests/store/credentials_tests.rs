use serde_json::Value;

use super::*;
use crate::model::{AccessToken, RemoteUser, ServerConfig};
use crate::store::MemoryKeyValueStore;

fn record(remember: bool) -> AuthenticationRecord {
    AuthenticationRecord {
        user: RemoteUser {
            id: 7,
            login: "jane".to_string(),
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            avatar_url: String::new(),
        },
        token: AccessToken {
            id: 42,
            name: "bookstep".to_string(),
            sha1: "0123abcd".to_string(),
        },
        config: ServerConfig {
            server: "https://git.example.com".to_string(),
            tokenid: "bookstep".to_string(),
        },
        remember,
    }
}

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<Value>> {
        anyhow::bail!("disk on fire")
    }

    fn set(&self, _key: &str, _value: Value) -> Result<()> {
        anyhow::bail!("disk on fire")
    }

    fn remove(&self, _key: &str) -> Result<()> {
        anyhow::bail!("disk on fire")
    }
}

#[test]
fn save_then_load_returns_the_record() {
    let adapter = CredentialAdapter::new(MemoryKeyValueStore::new());
    assert_eq!(adapter.save(Some(&record(true))), SaveOutcome::Saved);
    assert_eq!(adapter.load().unwrap(), Some(record(true)));
}

#[test]
fn save_none_removes_the_stored_record() {
    let adapter = CredentialAdapter::new(MemoryKeyValueStore::new());
    adapter.save(Some(&record(true)));
    assert_eq!(adapter.save(None), SaveOutcome::Removed);
    assert_eq!(adapter.load().unwrap(), None);
}

#[test]
fn unremembered_record_is_not_written() {
    let adapter = CredentialAdapter::new(MemoryKeyValueStore::new());
    adapter.save(Some(&record(true)));
    assert_eq!(adapter.save(Some(&record(false))), SaveOutcome::Removed);
    assert_eq!(adapter.load().unwrap(), None);
}

#[test]
fn save_failures_are_reported_not_raised() {
    let adapter = CredentialAdapter::new(BrokenStore);
    let outcome = adapter.save(Some(&record(true)));
    assert!(outcome.is_failed());
    match outcome {
        SaveOutcome::Failed(msg) => assert!(msg.contains("disk on fire")),
        other => panic!("unexpected outcome {:?}", other),
    }
    assert!(adapter.save(None).is_failed());
}

#[test]
fn load_surfaces_read_and_parse_errors() {
    assert!(CredentialAdapter::new(BrokenStore).load().is_err());

    let store = MemoryKeyValueStore::new();
    store
        .set(AUTH_KEY, serde_json::json!({ "user": "not a user" }))
        .unwrap();
    let err = CredentialAdapter::new(store).load().unwrap_err();
    assert!(format!("{:#}", err).contains("parse stored authentication"));
}

#[test]
fn null_value_reads_as_absent() {
    let store = MemoryKeyValueStore::new();
    store.set(AUTH_KEY, Value::Null).unwrap();
    assert_eq!(CredentialAdapter::new(store).load().unwrap(), None);
}
