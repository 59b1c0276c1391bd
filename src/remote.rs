//! Thin blocking client for the Gitea REST API.

use anyhow::{Context, Result};

use crate::model::{AuthenticationRecord, RemoteUser, RepositoryRef, TreeListing};

mod auth_session;
mod http_client;
mod repos;
mod tree;
mod types;

pub use self::types::{Repo, RepoOwner, RepoSearchResponse};

pub struct GiteaClient {
    server: String,
    token: Option<String>,
    client: reqwest::blocking::Client,
}

impl GiteaClient {
    pub fn new(server: &str, token: Option<String>) -> Result<Self> {
        let server = server.trim().trim_end_matches('/').to_string();
        if server.is_empty() {
            anyhow::bail!("missing server url");
        }
        let client = reqwest::blocking::Client::builder()
            .user_agent("bookstep")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            server,
            token: token.filter(|t| !t.trim().is_empty()),
            client,
        })
    }

    pub fn for_record(record: &AuthenticationRecord) -> Result<Self> {
        Self::new(&record.config.server, Some(record.token_value().to_string()))
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}
