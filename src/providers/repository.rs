use crate::model::RepositoryRef;

use super::RepoProvider;

#[derive(Clone, Debug, Default)]
pub struct RepositoryContext {
    repository: Option<RepositoryRef>,
    default_owner: Option<String>,
    query: String,
}

impl RepositoryContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owner whose repositories are listed first; follows the signed-in user.
    pub fn default_owner(&self) -> Option<&str> {
        self.default_owner.as_deref()
    }

    /// Changing the owner drops a selection made under another session.
    pub fn set_default_owner(&mut self, owner: Option<String>) -> bool {
        if self.default_owner == owner {
            return false;
        }
        self.default_owner = owner;
        self.repository = None;
        true
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }
}

impl RepoProvider for RepositoryContext {
    fn current(&self) -> Option<&RepositoryRef> {
        self.repository.as_ref()
    }

    fn select(&mut self, repo: RepositoryRef) {
        self.repository = Some(repo);
    }

    fn clear(&mut self) {
        self.repository = None;
    }
}

#[cfg(test)]
#[path = "../tests/providers/repository_tests.rs"]
mod tests;
