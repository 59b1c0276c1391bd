use super::*;

impl App {
    /// Forgets the open project (and the file path shown in the bar).
    pub(in crate::tui_shell) fn remove_project(&mut self) {
        self.project = None;
        self.files.set_path(None);
    }

    pub(in crate::tui_shell) fn toggle_projects(&mut self, show: bool) {
        if self.show_projects != show {
            let (from, to) = if show {
                ("wizard", "projects")
            } else {
                ("projects", "wizard")
            };
            self.trace_state_change("view", from, to);
        }
        self.show_projects = show;
    }

    pub(in crate::tui_shell) fn app_bar_action(&mut self, action: DrawerAction) {
        self.remove_project();
        match action {
            DrawerAction::MyProjects => self.toggle_projects(true),
            DrawerAction::NewProject => self.toggle_projects(false),
        }
    }

    /// The title behaves like "My Projects".
    pub(in crate::tui_shell) fn title_action(&mut self) {
        self.app_bar_action(DrawerAction::MyProjects);
    }

    pub(in crate::tui_shell) fn reopen_selected_project(&mut self) {
        if self.auth.current().is_none() {
            self.push_error("log in before reopening a project".to_string());
            return;
        }
        let Some(project) = self.projects_view.selected_project().cloned() else {
            self.push_output(vec!["no projects yet; choose a book to start one".to_string()]);
            return;
        };
        self.repos.select(project.repository.clone());
        self.files.set_path(Some(project.filepath.clone()));
        self.push_output(vec![format!("reopened {}", project.label())]);
        self.project = Some(project);
        self.toggle_projects(false);
    }
}
