mod login_flow;

/// Answers collected by the login form so far.
#[derive(Clone, Debug, Default)]
pub(in crate::tui_shell) struct LoginWizard {
    pub(in crate::tui_shell) username: Option<String>,
    pub(in crate::tui_shell) password: Option<String>,
}
