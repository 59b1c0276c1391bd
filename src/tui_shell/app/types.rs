use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum EntryKind {
    Output,
    Error,
    /// Background bookkeeping (credential persistence and the like); logged, never shown as "Last".
    Note,
}

#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct ScrollEntry {
    pub(in crate::tui_shell) ts: String,
    pub(in crate::tui_shell) kind: EntryKind,
    pub(in crate::tui_shell) lines: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum TextInputAction {
    LoginUsername,
    LoginPassword,
    LoginRemember,
    RepoFilter,
}

impl TextInputAction {
    pub(in crate::tui_shell) fn is_secret(self) -> bool {
        matches!(self, TextInputAction::LoginPassword)
    }
}

/// Entries of the app bar drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum DrawerAction {
    MyProjects,
    NewProject,
}

impl DrawerAction {
    pub(in crate::tui_shell) const ALL: [DrawerAction; 2] =
        [DrawerAction::MyProjects, DrawerAction::NewProject];

    pub(in crate::tui_shell) fn label(self) -> &'static str {
        match self {
            DrawerAction::MyProjects => "My Projects",
            DrawerAction::NewProject => "New Project",
        }
    }
}

#[derive(Clone, Debug)]
pub(in crate::tui_shell) enum ModalKind {
    Viewer,
    TextInput {
        action: TextInputAction,
        prompt: String,
    },
    Drawer {
        selected: usize,
    },
}

#[derive(Debug)]
pub(in crate::tui_shell) struct Modal {
    pub(in crate::tui_shell) title: String,
    pub(in crate::tui_shell) lines: Vec<String>,
    pub(in crate::tui_shell) scroll: usize,
    pub(in crate::tui_shell) kind: ModalKind,
    pub(in crate::tui_shell) input: Input,
}
