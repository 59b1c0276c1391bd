use super::*;

#[test]
fn missing_config_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    let cfg = store.read_config().unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.server, crate::model::DEFAULT_SERVER);
}

#[test]
fn written_config_is_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    let mut cfg = AppConfig::default();
    cfg.server = "http://127.0.0.1:3000/".to_string();
    cfg.reference_urls = vec!["http://127.0.0.1:3000/en_tn.tsv".to_string()];
    store.write_config(&cfg).unwrap();

    let back = store.read_config().unwrap();
    assert_eq!(back, cfg);
    assert_eq!(back.server_config().server, "http://127.0.0.1:3000");
}

#[test]
fn partial_config_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    std::fs::write(store.config_path(), br#"{ "version": 1, "tokenid": "custom" }"#).unwrap();
    let cfg = store.read_config().unwrap();
    assert_eq!(cfg.tokenid, "custom");
    assert_eq!(cfg.app_name, crate::model::DEFAULT_APP_NAME);
}

#[test]
fn unknown_config_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    std::fs::write(store.config_path(), br#"{ "version": 9 }"#).unwrap();
    assert!(store.read_config().is_err());
}

#[test]
fn overrides_replace_only_given_values() {
    let mut cfg = AppConfig::default();
    cfg.apply_overrides(Some("http://127.0.0.1:3000/"), Some("  "));
    assert_eq!(cfg.server, "http://127.0.0.1:3000");
    assert_eq!(cfg.tokenid, crate::model::DEFAULT_TOKENID);

    cfg.apply_overrides(None, Some("ci"));
    assert_eq!(cfg.server, "http://127.0.0.1:3000");
    assert_eq!(cfg.tokenid, "ci");
}
