use serde::{Deserialize, Serialize};

use super::config::ServerConfig;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUser {
    pub id: u64,
    pub login: String,

    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar_url: String,
}

impl RemoteUser {
    pub fn name(&self) -> &str {
        &self.login
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub id: u64,
    pub name: String,

    /// Plaintext token value; only returned by the server when the token is created.
    #[serde(default)]
    pub sha1: String,
}

/// A signed-in session: who the user is and the token issued for this app.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationRecord {
    pub user: RemoteUser,
    pub token: AccessToken,
    pub config: ServerConfig,

    /// When false the record lives only in memory for this session.
    #[serde(default = "default_remember")]
    pub remember: bool,
}

impl AuthenticationRecord {
    pub fn token_value(&self) -> &str {
        &self.token.sha1
    }
}

fn default_remember() -> bool {
    true
}
