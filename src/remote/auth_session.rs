use crate::model::{AccessToken, ServerConfig};

use super::types::{CreateTokenRequest, TOKEN_SCOPES};
use super::*;

impl GiteaClient {
    /// Exchanges a username/password for a fresh access token named `tokenid`.
    ///
    /// Any older token with the same name is deleted first so repeated
    /// logins do not pile up tokens on the server.
    pub fn login(
        &self,
        username: &str,
        password: &str,
        tokenid: &str,
    ) -> Result<AuthenticationRecord> {
        let username = username.trim();
        if username.is_empty() {
            anyhow::bail!("login: missing username");
        }
        if password.is_empty() {
            anyhow::bail!("login: missing password");
        }
        let tokenid = tokenid.trim();
        if tokenid.is_empty() {
            anyhow::bail!("login: missing token name");
        }

        let tokens_url = self.url(&format!("/api/v1/users/{}/tokens", username));

        let resp = self
            .client
            .get(&tokens_url)
            .basic_auth(username, Some(password))
            .send()
            .context("list tokens")?;
        let existing: Vec<AccessToken> = self
            .ensure_login_ok(resp, "list tokens")?
            .json()
            .context("parse token list")?;

        for stale in existing.iter().filter(|t| t.name == tokenid) {
            let resp = self
                .client
                .delete(format!("{}/{}", tokens_url, stale.id))
                .basic_auth(username, Some(password))
                .send()
                .context("delete stale token")?;
            self.ensure_login_ok(resp, "delete stale token")?;
        }

        let resp = self
            .client
            .post(&tokens_url)
            .basic_auth(username, Some(password))
            .json(&CreateTokenRequest {
                name: tokenid,
                scopes: TOKEN_SCOPES,
            })
            .send()
            .context("create token")?;
        let token: AccessToken = self
            .ensure_login_ok(resp, "create token")?
            .json()
            .context("parse created token")?;
        if token.sha1.trim().is_empty() {
            anyhow::bail!("login: server did not return a token value");
        }

        let authed = GiteaClient::new(&self.server, Some(token.sha1.clone()))?;
        let user = authed.current_user()?;

        Ok(AuthenticationRecord {
            user,
            token,
            config: ServerConfig {
                server: self.server.clone(),
                tokenid: tokenid.to_string(),
            },
            remember: true,
        })
    }

    pub fn current_user(&self) -> Result<RemoteUser> {
        let resp = self
            .get(&self.url("/api/v1/user"))
            .send()
            .context("current user")?;
        let user: RemoteUser = self
            .ensure_ok(resp, "current user")?
            .json()
            .context("parse current user")?;
        Ok(user)
    }

    fn ensure_login_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            anyhow::bail!("login: invalid username or password");
        }
        self.ensure_ok(resp, label)
    }
}
