use std::io;
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tokio::runtime::Handle;

use crate::books::book_files;
use crate::fetch::Fetch;
use crate::model::{AppConfig, Project, RepositoryRef, TreeListing};
use crate::providers::{
    AuthProvider, AuthenticationContext, FileContext, FileProvider, RepoProvider,
    RepositoryContext,
};
use crate::remote::GiteaClient;
use crate::stepper::{STEPS, Step, Stepper};
use crate::store::{KeyValueStore, SaveOutcome};

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;

use super::input::Input;
use super::modal;
use super::view::{RenderCtx, View};
use super::views::{BookView, LoginView, PanelStatus, ProjectsView, RepositoryView};
use super::wizard::LoginWizard;

mod app_bar;
mod event_loop;
mod lifecycle;
mod modal_output;
mod render;
mod runtime;
mod state;
mod step_actions;
mod text_input;
mod tick;
mod time_utils;
mod trace;
mod types;

pub(in crate::tui_shell) use self::runtime::run;
pub(in crate::tui_shell) use self::state::App;
pub(in crate::tui_shell) use self::time_utils::now_ts;
pub(in crate::tui_shell) use self::time_utils::{fmt_ts_list, fmt_ts_ui};
pub(in crate::tui_shell) use self::types::{
    DrawerAction, EntryKind, Modal, ModalKind, ScrollEntry, TextInputAction,
};

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
