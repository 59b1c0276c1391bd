use super::*;

impl App {
    /// One pass of derived-state upkeep: apply finished fetches, follow the
    /// providers, start whatever the visible step needs, refresh the panels.
    pub(in crate::tui_shell) fn tick(&mut self) {
        self.poll_fetches();
        self.sync_default_owner();
        self.sync_stepper();
        self.request_step_data();
        self.refresh_views();
    }

    fn poll_fetches(&mut self) {
        if self.repo_list.poll() {
            if let Some(err) = self.repo_list.error().map(str::to_string) {
                self.push_error(format!("repositories: {}", err));
            }
        }

        if self.tree.poll() {
            if let Some(err) = self.tree.error().map(str::to_string) {
                self.push_error(format!("book list: {}", err));
            } else if let Some(listing) = self.tree.data() {
                let n = book_files(listing).len();
                self.push_note(format!("tree loaded: {} book file(s)", n));
            }
        }
    }

    /// The repository owner follows the signed-in user; switching users
    /// drops the selected repository and the session's projects.
    fn sync_default_owner(&mut self) {
        let owner = self.signed_in_user();
        if self.repos.set_default_owner(owner) {
            self.remove_project();
            self.projects.clear();
            self.repo_list.reset();
            self.repo_view.selected = 0;
        }
    }

    pub(in crate::tui_shell) fn sync_stepper(&mut self) {
        let has_auth = self.auth.current().is_some();
        let has_repo = self.repos.current().is_some();
        let has_book = has_repo && self.project.is_some();

        let from = self.stepper.current();
        if self.stepper.sync(has_auth, has_repo, has_book) {
            let to = self.stepper.current();
            self.trace_state_change("step", from.label(), to.label());
        }
    }

    fn request_step_data(&mut self) {
        let step = self.stepper.current();

        if step == Step::Repository && !self.show_projects {
            self.request_repositories();
        } else if self.repo_list.error().is_some() {
            // Same rule as the tree: a failed list is fetched again on the next visit.
            self.repo_list.reset();
        }

        let tree_url = match step {
            Step::Book if !self.show_projects => self.repos.current().map(|r| r.tree_url.clone()),
            _ => None,
        };
        match tree_url {
            Some(url) => {
                let server = self.auth.config().server.clone();
                let token = self.auth.current().map(|r| r.token_value().to_string());
                if self.tree.request(Some(&url), move |url| {
                    GiteaClient::new(&server, token)?.get_tree(&url)
                }) {
                    self.book_view.selected = 0;
                }
            }
            // Leaving the step after a failure lets the next visit retry.
            None => {
                if self.tree.error().is_some() {
                    self.tree.reset();
                }
            }
        }
    }

    /// Lists the owner's repositories, or searches when a filter is set.
    pub(in crate::tui_shell) fn request_repositories(&mut self) {
        let Some(record) = self.auth.current() else {
            self.repo_list.request(None, |_| Ok(Vec::new()));
            return;
        };
        let server = self.auth.config().server.clone();
        let token = Some(record.token_value().to_string());
        let owner = record.user.login.clone();
        let owner_id = record.user.id;
        let query = self.repos.query().trim().to_string();

        let key = if query.is_empty() {
            format!("{}/api/v1/users/{}/repos", server, owner)
        } else {
            format!("{}/api/v1/repos/search?q={}&uid={}", server, query, owner_id)
        };
        if self.repo_list.request(Some(&key), move |_| {
            let client = GiteaClient::new(&server, token)?;
            if query.is_empty() {
                client.owner_repos(&owner)
            } else {
                client.search_repos(&query, Some(owner_id))
            }
        }) {
            self.repo_view.selected = 0;
        }
    }

    pub(in crate::tui_shell) fn refresh_views(&mut self) {
        let user = self.signed_in_user();
        let remember = self.auth.current().map(|r| r.remember);
        self.login_view.refresh(user, remember);

        let status = PanelStatus::from_fetch(&self.repo_list);
        let items = self.repo_list.data().cloned().unwrap_or_default();
        let chosen = self.repos.current().map(|r| r.full_name.clone());
        self.repo_view.refresh(
            self.repos.default_owner().map(str::to_string),
            self.repos.query().to_string(),
            items,
            status,
            chosen,
        );

        let repo = self.repos.current();
        let current_tree = repo.is_some_and(|r| self.tree.key() == Some(r.tree_url.as_str()));
        let (status, files) = if current_tree {
            let files = self.tree.data().map(book_files).unwrap_or_default();
            (PanelStatus::from_fetch(&self.tree), files)
        } else {
            (PanelStatus::Idle, Vec::new())
        };
        self.book_view.refresh(
            repo.map(|r| r.full_name.clone()),
            files,
            status,
            self.files.current_path().map(str::to_string),
        );

        self.projects_view
            .refresh(self.projects.clone(), self.project.as_ref().map(Project::label));
    }
}
