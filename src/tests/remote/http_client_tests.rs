use super::*;

#[test]
fn server_url_is_normalized_and_joined() {
    let c = GiteaClient::new(" https://git.example.com/ ", None).unwrap();
    assert_eq!(c.server(), "https://git.example.com");
    assert_eq!(c.url("/api/v1/user"), "https://git.example.com/api/v1/user");
}

#[test]
fn auth_header_uses_token_scheme() {
    let c = GiteaClient::new("https://git.example.com", Some("abc".to_string())).unwrap();
    assert!(c.has_token());
    assert_eq!(c.auth().as_deref(), Some("token abc"));
}

#[test]
fn blank_token_means_anonymous() {
    let c = GiteaClient::new("https://git.example.com", Some("  ".to_string())).unwrap();
    assert!(!c.has_token());
    assert_eq!(c.auth(), None);
}

#[test]
fn empty_server_is_rejected() {
    assert!(GiteaClient::new("  ", None).is_err());
}
