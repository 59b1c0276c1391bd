use super::*;

impl GiteaClient {
    /// Top-level listing of a repository tree (see `RepositoryRef::tree_url`).
    pub fn get_tree(&self, tree_url: &str) -> Result<TreeListing> {
        let resp = self
            .get(tree_url)
            .query(&[("recursive", "false"), ("per_page", "1000")])
            .send()
            .context("get tree")?;
        let listing: TreeListing = self
            .ensure_ok(resp, "get tree")?
            .json()
            .context("parse tree")?;
        Ok(listing)
    }

    pub fn get_raw(&self, url: &str) -> Result<String> {
        let resp = self.get(url).send().context("get raw")?;
        self.ensure_ok(resp, "get raw")?
            .text()
            .context("read raw body")
    }
}
