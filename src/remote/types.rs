//! DTOs for Gitea API requests/responses.

use crate::model::RepositoryRef;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RepoOwner {
    #[serde(default)]
    pub id: u64,
    pub login: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Repo {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub owner: RepoOwner,

    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub default_branch: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub empty: bool,
}

impl Repo {
    pub fn into_ref(self, server: &str) -> RepositoryRef {
        let branch = if self.default_branch.trim().is_empty() {
            "master".to_string()
        } else {
            self.default_branch
        };
        let tree_url = RepositoryRef::tree_url_for(server, &self.owner.login, &self.name, &branch);
        RepositoryRef {
            owner: self.owner.login,
            name: self.name,
            full_name: self.full_name,
            description: self.description,
            default_branch: branch,
            html_url: self.html_url,
            tree_url,
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct RepoSearchResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub data: Vec<Repo>,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct CreateTokenRequest<'a> {
    pub(super) name: &'a str,
    pub(super) scopes: &'a [&'a str],
}

pub(super) const TOKEN_SCOPES: &[&str] = &["read:repository", "read:user"];
