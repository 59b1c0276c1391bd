use super::*;

const PAGE_LIMIT: &str = "50";

impl GiteaClient {
    pub fn owner_repos(&self, owner: &str) -> Result<Vec<RepositoryRef>> {
        let owner = owner.trim();
        if owner.is_empty() {
            anyhow::bail!("repos: missing owner");
        }
        let resp = self
            .get(&self.url(&format!("/api/v1/users/{}/repos", owner)))
            .query(&[("limit", PAGE_LIMIT)])
            .send()
            .context("list repos")?;
        let repos: Vec<Repo> = self
            .ensure_ok(resp, "list repos")?
            .json()
            .context("parse repo list")?;
        Ok(self.to_refs(repos))
    }

    pub fn search_repos(&self, query: &str, owner_id: Option<u64>) -> Result<Vec<RepositoryRef>> {
        let mut params = vec![
            ("q", query.trim().to_string()),
            ("limit", PAGE_LIMIT.to_string()),
        ];
        if let Some(uid) = owner_id {
            params.push(("uid", uid.to_string()));
        }
        let resp = self
            .get(&self.url("/api/v1/repos/search"))
            .query(&params)
            .send()
            .context("search repos")?;
        let found: RepoSearchResponse = self
            .ensure_ok(resp, "search repos")?
            .json()
            .context("parse repo search")?;
        Ok(self.to_refs(found.data))
    }

    pub fn get_repo(&self, owner: &str, name: &str) -> Result<RepositoryRef> {
        let resp = self
            .get(&self.url(&format!("/api/v1/repos/{}/{}", owner, name)))
            .send()
            .context("get repo")?;
        let repo: Repo = self
            .ensure_ok(resp, "get repo")?
            .json()
            .context("parse repo")?;
        Ok(repo.into_ref(&self.server))
    }

    fn to_refs(&self, repos: Vec<Repo>) -> Vec<RepositoryRef> {
        repos
            .into_iter()
            .filter(|r| !r.empty)
            .map(|r| r.into_ref(&self.server))
            .collect()
    }
}

#[cfg(test)]
#[path = "../tests/remote/repos_tests.rs"]
mod tests;
