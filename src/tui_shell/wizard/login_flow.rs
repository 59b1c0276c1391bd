use crate::providers::AuthProvider;

use super::super::modal::parse_yes_no;
use super::super::{App, TextInputAction};
use super::LoginWizard;

impl App {
    pub(in crate::tui_shell) fn start_login_wizard(&mut self) {
        self.login_wizard = Some(LoginWizard::default());
        let server = self.auth.config().server.clone();
        self.open_text_input_modal(
            "Login",
            "username> ",
            TextInputAction::LoginUsername,
            None,
            vec![format!("Sign in to {}", server)],
        );
    }

    pub(in crate::tui_shell) fn continue_login_wizard(
        &mut self,
        action: TextInputAction,
        value: String,
    ) {
        if self.login_wizard.is_none() {
            self.push_error("login form not active".to_string());
            return;
        }

        match action {
            TextInputAction::LoginUsername => {
                if let Some(w) = self.login_wizard.as_mut() {
                    w.username = Some(value.trim().to_string());
                }
                self.open_text_input_modal(
                    "Login",
                    "password> ",
                    TextInputAction::LoginPassword,
                    None,
                    vec![format!("Password for {}", value.trim())],
                );
            }
            TextInputAction::LoginPassword => {
                if let Some(w) = self.login_wizard.as_mut() {
                    w.password = Some(value);
                }
                self.open_text_input_modal(
                    "Login",
                    "keep me logged in (Y/n)> ",
                    TextInputAction::LoginRemember,
                    Some("y".to_string()),
                    vec![
                        "Keep this login after the app closes?".to_string(),
                        "Answer n on shared machines.".to_string(),
                    ],
                );
            }
            TextInputAction::LoginRemember => {
                let remember = parse_yes_no(&value).unwrap_or(true);
                let Some(w) = self.login_wizard.take() else {
                    return;
                };
                let (Some(username), Some(password)) = (w.username, w.password) else {
                    self.push_error("login: missing username or password".to_string());
                    return;
                };
                self.finish_login(&username, &password, remember);
            }
            TextInputAction::RepoFilter => {}
        }
    }

    fn finish_login(&mut self, username: &str, password: &str, remember: bool) {
        match self.auth.login(username, password, remember) {
            Ok(outcome) => {
                self.note_save_outcome(outcome);
                let user = self.signed_in_user().unwrap_or_else(|| username.to_string());
                self.trace_state_change("auth", "signed_out", "signed_in");
                self.push_output(vec![format!("signed in as {}", user)]);
            }
            Err(err) => {
                self.push_error(format!("{:#}", err));
            }
        }
    }
}
