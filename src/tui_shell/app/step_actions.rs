use super::*;

impl App {
    pub(in crate::tui_shell) fn step_back(&mut self) {
        self.toggle_projects(false);
        if !self.stepper.can_back() {
            return;
        }
        let from = self.stepper.current();
        self.stepper.back();
        self.trace_state_change("step", from.label(), self.stepper.current().label());
    }

    pub(in crate::tui_shell) fn step_next(&mut self) {
        self.toggle_projects(false);
        if !self.stepper.can_next() {
            let step = self.stepper.current();
            if !self.stepper.is_complete(step.index()) {
                self.push_output(vec![format!("{} first", step.instructions())]);
            }
            return;
        }
        let from = self.stepper.current();
        self.stepper.next();
        self.trace_state_change("step", from.label(), self.stepper.current().label());
    }

    pub(in crate::tui_shell) fn select_step(&mut self, index: usize) {
        self.toggle_projects(false);
        let from = self.stepper.current();
        if self.stepper.select(index) && from != self.stepper.current() {
            self.trace_state_change("step", from.label(), self.stepper.current().label());
        }
    }

    /// Enter: the primary action of whatever is on screen.
    pub(in crate::tui_shell) fn activate(&mut self) {
        if self.show_projects {
            self.reopen_selected_project();
            return;
        }
        match self.stepper.current() {
            Step::Login => match self.signed_in_user() {
                Some(user) => self.push_output(vec![format!(
                    "signed in as {} (l: log out; n: next)",
                    user
                )]),
                None => self.start_login_wizard(),
            },
            Step::Repository => self.choose_selected_repository(),
            Step::Book => self.choose_selected_book(),
        }
    }

    fn choose_selected_repository(&mut self) {
        if self.auth.current().is_none() {
            self.push_error("log in before choosing a repository".to_string());
            return;
        }
        let Some(repo) = self.repo_view.selected_repository().cloned() else {
            self.push_output(vec!["no repository selected".to_string()]);
            return;
        };
        let same = self
            .repos
            .current()
            .is_some_and(|r| r.full_name == repo.full_name);
        if !same {
            self.remove_project();
        }
        self.push_output(vec![format!("repository: {}", repo.full_name)]);
        self.repos.select(repo);
    }

    fn choose_selected_book(&mut self) {
        let Some(repo) = self.repos.current().cloned() else {
            self.push_error("select a repository first".to_string());
            return;
        };
        let Some(file) = self.book_view.selected_file().cloned() else {
            if self.tree.is_loading() {
                self.push_output(vec!["still loading".to_string()]);
            } else if matches!(self.book_view.status(), PanelStatus::Failed(_)) {
                self.push_output(vec![
                    "the book list failed to load (b then n to try again)".to_string(),
                ]);
            } else {
                self.push_output(vec!["no book selected".to_string()]);
            }
            return;
        };

        let project = Project {
            repository: repo,
            filepath: file.path.clone(),
            opened_at: now_ts(),
        };
        self.files.set_path(Some(file.path.clone()));
        self.projects.retain(|p| p.label() != project.label());
        self.projects.push(project.clone());
        self.push_output(vec![format!("opened {} ({})", project.label(), file.code)]);
        self.project = Some(project);
    }

    pub(in crate::tui_shell) fn start_repo_filter(&mut self) {
        if self.auth.current().is_none() {
            self.push_error("log in before searching repositories".to_string());
            return;
        }
        self.toggle_projects(false);
        self.select_step(Step::Repository.index());
        let current = self.repos.query().to_string();
        self.open_text_input_modal(
            "Filter repositories",
            "search> ",
            TextInputAction::RepoFilter,
            Some(current),
            vec!["Search repositories by name (empty lists your own).".to_string()],
        );
    }

    pub(in crate::tui_shell) fn logout(&mut self) {
        let Some(user) = self.signed_in_user() else {
            self.push_output(vec!["not signed in".to_string()]);
            return;
        };
        let outcome = self.auth.logout();
        self.note_save_outcome(outcome);
        self.remove_project();
        self.projects.clear();
        self.repos.clear();
        self.repos.set_query(String::new());
        self.repo_list.reset();
        self.tree.reset();
        self.trace_state_change("auth", "signed_in", "signed_out");
        self.push_output(vec![format!("signed out {}", user)]);
    }
}
