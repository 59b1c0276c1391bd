use crate::fetch::{Fetch, FetchState};

pub(super) mod books;
pub(super) mod login;
pub(super) mod projects;
pub(super) mod repositories;

pub(in crate::tui_shell) use books::BookView;
pub(in crate::tui_shell) use login::LoginView;
pub(in crate::tui_shell) use projects::ProjectsView;
pub(in crate::tui_shell) use repositories::RepositoryView;

/// What a fetch-backed panel should show instead of (or above) its list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum PanelStatus {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

impl PanelStatus {
    pub(in crate::tui_shell) fn from_fetch<T: Send + 'static>(fetch: &Fetch<T>) -> Self {
        match fetch.state() {
            FetchState::Idle => PanelStatus::Idle,
            FetchState::Loading => PanelStatus::Loading,
            FetchState::Loaded(_) => PanelStatus::Ready,
            FetchState::Failed(msg) => PanelStatus::Failed(msg.clone()),
        }
    }
}

fn clamp_selection(selected: usize, len: usize) -> usize {
    selected.min(len.saturating_sub(1))
}
