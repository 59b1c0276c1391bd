use super::trace::{TraceStats, TraceWriter};
use super::*;

pub(in crate::tui_shell) struct App {
    pub(in crate::tui_shell) config: AppConfig,

    pub(in crate::tui_shell) auth: AuthenticationContext<Box<dyn KeyValueStore>>,
    pub(in crate::tui_shell) repos: RepositoryContext,
    pub(in crate::tui_shell) files: FileContext,
    pub(in crate::tui_shell) stepper: Stepper,

    pub(in crate::tui_shell) repo_list: Fetch<Vec<RepositoryRef>>,
    pub(in crate::tui_shell) tree: Fetch<TreeListing>,

    // The open project, and every project opened this session (most recent last).
    pub(in crate::tui_shell) project: Option<Project>,
    pub(in crate::tui_shell) projects: Vec<Project>,
    pub(in crate::tui_shell) show_projects: bool,

    pub(in crate::tui_shell) login_view: LoginView,
    pub(in crate::tui_shell) repo_view: RepositoryView,
    pub(in crate::tui_shell) book_view: BookView,
    pub(in crate::tui_shell) projects_view: ProjectsView,

    pub(in crate::tui_shell) login_wizard: Option<LoginWizard>,

    pub(in crate::tui_shell) trace: Option<TraceWriter>,
    pub(in crate::tui_shell) last_screen_signature: Option<String>,
    pub(in crate::tui_shell) trace_stats: TraceStats,

    // Session log; the most recent output or error is shown in the "Last" panel.
    pub(in crate::tui_shell) log: Vec<ScrollEntry>,
    pub(in crate::tui_shell) last_result: Option<ScrollEntry>,

    pub(in crate::tui_shell) modal: Option<Modal>,

    pub(in crate::tui_shell) quit: bool,
}

impl App {
    pub(in crate::tui_shell) fn new(
        config: AppConfig,
        credentials: Box<dyn KeyValueStore>,
        handle: Handle,
    ) -> Self {
        let server = config.server_config();
        Self {
            login_view: LoginView::new(&server.server),
            auth: AuthenticationContext::new(
                server,
                crate::store::CredentialAdapter::new(credentials),
            ),
            config,
            repos: RepositoryContext::new(),
            files: FileContext::new(),
            stepper: Stepper::new(),
            repo_list: Fetch::new(handle.clone()),
            tree: Fetch::new(handle),
            project: None,
            projects: Vec::new(),
            show_projects: false,
            repo_view: RepositoryView::new(),
            book_view: BookView::new(),
            projects_view: ProjectsView::new(),
            login_wizard: None,
            trace: None,
            last_screen_signature: None,
            trace_stats: TraceStats::default(),
            log: Vec::new(),
            last_result: None,
            modal: None,
            quit: false,
        }
    }

    /// The panel currently occupying the main area.
    pub(in crate::tui_shell) fn view(&self) -> &dyn View {
        if self.show_projects {
            return &self.projects_view;
        }
        match self.stepper.current() {
            Step::Login => &self.login_view,
            Step::Repository => &self.repo_view,
            Step::Book => &self.book_view,
        }
    }

    pub(in crate::tui_shell) fn view_mut(&mut self) -> &mut dyn View {
        if self.show_projects {
            return &mut self.projects_view;
        }
        match self.stepper.current() {
            Step::Login => &mut self.login_view,
            Step::Repository => &mut self.repo_view,
            Step::Book => &mut self.book_view,
        }
    }

    pub(in crate::tui_shell) fn signed_in_user(&self) -> Option<String> {
        self.auth.current_user().map(str::to_string)
    }
}
