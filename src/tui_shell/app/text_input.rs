use super::*;

impl App {
    pub(in crate::tui_shell) fn submit_text_input(&mut self, action: TextInputAction, value: String) {
        match action {
            TextInputAction::LoginUsername
            | TextInputAction::LoginPassword
            | TextInputAction::LoginRemember => self.continue_login_wizard(action, value),
            TextInputAction::RepoFilter => {
                self.repos.set_query(value.trim().to_string());
                self.repo_view.selected = 0;
                if value.trim().is_empty() {
                    self.push_output(vec!["repository filter cleared".to_string()]);
                } else {
                    self.push_output(vec![format!("searching repositories: {}", value.trim())]);
                }
            }
        }
    }
}
