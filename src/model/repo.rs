use serde::{Deserialize, Serialize};

/// A repository the user picked in the Repository step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
    pub full_name: String,

    #[serde(default)]
    pub description: String,

    pub default_branch: String,

    #[serde(default)]
    pub html_url: String,

    /// Endpoint listing the top-level tree of `default_branch`.
    pub tree_url: String,
}

impl RepositoryRef {
    pub fn tree_url_for(server: &str, owner: &str, name: &str, branch: &str) -> String {
        format!(
            "{}/api/v1/repos/{}/{}/git/trees/{}",
            server.trim_end_matches('/'),
            owner,
            name,
            branch
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    #[serde(default)]
    pub mode: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub sha: String,
    #[serde(default)]
    pub url: String,
}

impl TreeEntry {
    pub fn is_blob(&self) -> bool {
        self.kind == "blob"
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeListing {
    #[serde(default)]
    pub sha: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub tree: Vec<TreeEntry>,
    #[serde(default)]
    pub truncated: bool,
}
