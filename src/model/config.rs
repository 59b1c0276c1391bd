use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER: &str = "https://git.door43.org";
pub const DEFAULT_TOKENID: &str = "bookstep";
pub const DEFAULT_APP_NAME: &str = "Book Stepper";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub version: u32,

    /// Gitea-compatible server base URL (no trailing slash).
    #[serde(default = "default_server")]
    pub server: String,

    /// Name of the access token this app creates on login.
    #[serde(default = "default_tokenid")]
    pub tokenid: String,

    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Reference resources fetched once at startup.
    #[serde(default)]
    pub reference_urls: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: default_server(),
            tokenid: default_tokenid(),
            app_name: default_app_name(),
            reference_urls: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Command-line overrides; blank values are ignored.
    pub fn apply_overrides(&mut self, server: Option<&str>, tokenid: Option<&str>) {
        if let Some(server) = server.map(str::trim).filter(|s| !s.is_empty()) {
            self.server = server.trim_end_matches('/').to_string();
        }
        if let Some(tokenid) = tokenid.map(str::trim).filter(|s| !s.is_empty()) {
            self.tokenid = tokenid.to_string();
        }
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            server: self.server.trim_end_matches('/').to_string(),
            tokenid: self.tokenid.clone(),
        }
    }
}

/// Server endpoint and token name an authentication record was issued for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub server: String,
    pub tokenid: String,
}

fn default_server() -> String {
    DEFAULT_SERVER.to_string()
}

fn default_tokenid() -> String {
    DEFAULT_TOKENID.to_string()
}

fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}
