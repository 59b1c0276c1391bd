use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::event_loop::handle_key;
use super::*;
use crate::model::{AccessToken, AuthenticationRecord, RemoteUser, ServerConfig};
use crate::store::MemoryKeyValueStore;

// Nothing listens here; background requests fail fast.
const SERVER: &str = "http://127.0.0.1:9";

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap()
}

fn test_app(rt: &tokio::runtime::Runtime) -> App {
    let mut config = AppConfig::default();
    config.server = SERVER.to_string();
    App::new(
        config,
        Box::new(MemoryKeyValueStore::new()),
        rt.handle().clone(),
    )
}

fn record() -> AuthenticationRecord {
    AuthenticationRecord {
        user: RemoteUser {
            id: 7,
            login: "jane".to_string(),
            full_name: String::new(),
            email: String::new(),
            avatar_url: String::new(),
        },
        token: AccessToken {
            id: 1,
            name: "bookstep".to_string(),
            sha1: "cafe".to_string(),
        },
        config: ServerConfig {
            server: SERVER.to_string(),
            tokenid: "bookstep".to_string(),
        },
        remember: true,
    }
}

fn repo(name: &str) -> RepositoryRef {
    RepositoryRef {
        owner: "jane".to_string(),
        name: name.to_string(),
        full_name: format!("jane/{}", name),
        description: String::new(),
        default_branch: "master".to_string(),
        html_url: String::new(),
        tree_url: RepositoryRef::tree_url_for(SERVER, "jane", name, "master"),
    }
}

fn project(name: &str) -> Project {
    Project {
        repository: repo(name),
        filepath: "en_tn_57-TIT.tsv".to_string(),
        opened_at: now_ts(),
    }
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    app.tick();
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
}

/// Ticks until `done` holds; background requests to `SERVER` fail quickly.
fn tick_until(app: &mut App, done: impl Fn(&App) -> bool) {
    let start = Instant::now();
    while !done(app) {
        assert!(
            start.elapsed() < Duration::from_secs(10),
            "background fetch did not settle"
        );
        std::thread::sleep(Duration::from_millis(10));
        app.tick();
    }
}

fn signed_in(app: &mut App) {
    app.auth.set_authentication(Some(record()));
    app.tick();
}

#[test]
fn my_projects_clears_project_and_shows_projects() {
    let rt = runtime();
    let mut app = test_app(&rt);
    app.project = Some(project("en_tn"));
    app.files.set_path(Some("en_tn_57-TIT.tsv".to_string()));

    app.app_bar_action(DrawerAction::MyProjects);
    assert!(app.project.is_none());
    assert!(app.files.current_path().is_none());
    assert!(app.show_projects);

    app.project = Some(project("en_tn"));
    app.app_bar_action(DrawerAction::NewProject);
    assert!(app.project.is_none());
    assert!(!app.show_projects);
}

#[test]
fn title_key_acts_like_my_projects() {
    let rt = runtime();
    let mut app = test_app(&rt);
    app.project = Some(project("en_tn"));

    press(&mut app, KeyCode::Char('t'));
    assert!(app.show_projects);
    assert!(app.project.is_none());

    press(&mut app, KeyCode::Esc);
    assert!(!app.show_projects);
    assert!(!app.quit);
}

#[test]
fn drawer_menu_runs_new_project() {
    let rt = runtime();
    let mut app = test_app(&rt);
    app.show_projects = true;
    app.project = Some(project("en_tn"));

    press(&mut app, KeyCode::Char('m'));
    assert!(matches!(
        app.modal.as_ref().map(|m| &m.kind),
        Some(ModalKind::Drawer { selected: 0 })
    ));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert!(app.modal.is_none());
    assert!(!app.show_projects);
    assert!(app.project.is_none());
}

#[test]
fn next_is_disabled_until_signed_in_but_steps_can_be_clicked() {
    let rt = runtime();
    let mut app = test_app(&rt);

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.stepper.active(), 0);

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.stepper.current(), Step::Book);

    press(&mut app, KeyCode::Char('b'));
    assert_eq!(app.stepper.current(), Step::Repository);
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.stepper.active(), 0);
}

#[test]
fn signing_in_moves_to_repository_and_lists_repositories() {
    let rt = runtime();
    let mut app = test_app(&rt);
    signed_in(&mut app);

    assert_eq!(app.stepper.current(), Step::Repository);
    assert_eq!(app.repos.default_owner(), Some("jane"));
    assert_eq!(
        app.repo_list.key(),
        Some("http://127.0.0.1:9/api/v1/users/jane/repos")
    );
}

#[test]
fn browsing_back_is_kept_while_nothing_changes() {
    let rt = runtime();
    let mut app = test_app(&rt);
    signed_in(&mut app);

    press(&mut app, KeyCode::Char('b'));
    app.tick();
    assert_eq!(app.stepper.current(), Step::Login);
}

#[test]
fn choosing_repository_requests_the_tree() {
    let rt = runtime();
    let mut app = test_app(&rt);
    signed_in(&mut app);

    app.repos.select(repo("en_tn"));
    app.tick();
    assert_eq!(app.stepper.current(), Step::Book);
    assert_eq!(app.tree.key(), Some(repo("en_tn").tree_url.as_str()));

    // Nothing can be opened before the listing arrives.
    press(&mut app, KeyCode::Enter);
    assert!(app.project.is_none());
    assert!(!app.stepper.is_complete(2));
}

#[test]
fn open_project_completes_the_book_step() {
    let rt = runtime();
    let mut app = test_app(&rt);
    signed_in(&mut app);
    app.repos.select(repo("en_tn"));
    app.project = Some(project("en_tn"));
    app.tick();

    assert!(app.stepper.all_complete());
    assert_eq!(app.stepper.current(), Step::Book);

    app.remove_project();
    app.tick();
    assert!(!app.stepper.is_complete(2));
}

#[test]
fn logout_returns_to_login_and_forgets_selection() {
    let rt = runtime();
    let mut app = test_app(&rt);
    signed_in(&mut app);
    app.repos.select(repo("en_tn"));
    app.project = Some(project("en_tn"));
    app.tick();

    press(&mut app, KeyCode::Char('l'));
    assert!(app.auth.current().is_none());
    assert!(app.repos.current().is_none());
    assert!(app.project.is_none());
    assert_eq!(app.stepper.current(), Step::Login);
    assert!(app.repo_list.key().is_none());
}

#[test]
fn login_form_collects_username_then_password() {
    let rt = runtime();
    let mut app = test_app(&rt);

    press(&mut app, KeyCode::Enter);
    assert!(matches!(
        app.modal.as_ref().map(|m| &m.kind),
        Some(ModalKind::TextInput {
            action: TextInputAction::LoginUsername,
            ..
        })
    ));

    type_text(&mut app, "jane");
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.login_wizard.as_ref().and_then(|w| w.username.as_deref()),
        Some("jane")
    );
    assert!(matches!(
        app.modal.as_ref().map(|m| &m.kind),
        Some(ModalKind::TextInput {
            action: TextInputAction::LoginPassword,
            ..
        })
    ));

    press(&mut app, KeyCode::Esc);
    assert!(app.modal.is_none());
    assert!(app.login_wizard.is_none());
}

#[test]
fn persistence_failures_are_logged_not_shown() {
    let rt = runtime();
    let mut app = test_app(&rt);
    app.push_output(vec!["hello".to_string()]);

    app.note_save_outcome(SaveOutcome::Failed("disk full".to_string()));

    let last = app.last_result.as_ref().map(|e| e.lines[0].clone());
    assert_eq!(last.as_deref(), Some("hello"));
    let noted = app
        .log
        .iter()
        .any(|e| e.kind == EntryKind::Note && e.lines[0].contains("disk full"));
    assert!(noted);
}

#[test]
fn quit_keys() {
    let rt = runtime();
    let mut app = test_app(&rt);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.quit);
}

#[test]
fn failed_repository_list_is_fetched_again_on_revisit() {
    let rt = runtime();
    let mut app = test_app(&rt);
    signed_in(&mut app);
    tick_until(&mut app, |a| a.repo_list.error().is_some());
    let failed_generation = app.repo_list.generation();

    // Staying on the step does not hammer the server.
    app.tick();
    assert_eq!(app.repo_list.generation(), failed_generation);

    press(&mut app, KeyCode::Char('1'));
    assert!(app.repo_list.error().is_none());
    press(&mut app, KeyCode::Char('2'));
    assert!(app.repo_list.generation() > failed_generation);
    assert!(app.repo_list.is_loading() || app.repo_list.error().is_some());
    assert_eq!(
        app.repo_list.key(),
        Some("http://127.0.0.1:9/api/v1/users/jane/repos")
    );
}

#[test]
fn failed_book_list_blocks_the_book_step_until_revisited() {
    let rt = runtime();
    let mut app = test_app(&rt);
    signed_in(&mut app);
    app.repos.select(repo("en_tn"));
    app.tick();
    assert_eq!(app.stepper.current(), Step::Book);

    tick_until(&mut app, |a| a.tree.error().is_some());
    assert!(matches!(app.book_view.status(), PanelStatus::Failed(_)));
    assert!(app.book_view.selected_file().is_none());

    press(&mut app, KeyCode::Enter);
    assert!(app.project.is_none());
    assert!(!app.stepper.is_complete(2));
    let explained = app
        .log
        .iter()
        .any(|e| e.kind == EntryKind::Output && e.lines[0].contains("failed to load"));
    assert!(explained);

    let failed_generation = app.tree.generation();
    press(&mut app, KeyCode::Char('b'));
    assert_eq!(app.stepper.current(), Step::Repository);
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.stepper.current(), Step::Book);
    assert!(app.tree.generation() > failed_generation);
    assert_eq!(app.tree.key(), Some(repo("en_tn").tree_url.as_str()));
}

#[test]
fn projects_are_not_reopened_after_logout() {
    let rt = runtime();
    let mut app = test_app(&rt);
    signed_in(&mut app);
    app.repos.select(repo("en_tn"));
    app.projects.push(project("en_tn"));
    app.tick();

    press(&mut app, KeyCode::Char('l'));
    assert!(app.projects.is_empty());

    // A stale entry must not resurrect a repository while signed out.
    app.projects.push(project("en_tn"));
    press(&mut app, KeyCode::Char('t'));
    press(&mut app, KeyCode::Enter);
    assert!(app.repos.current().is_none());
    assert!(app.project.is_none());
    assert!(!app.stepper.is_complete(1));
    assert!(!app.stepper.is_complete(2));
}

#[test]
fn switching_users_forgets_the_previous_projects() {
    let rt = runtime();
    let mut app = test_app(&rt);
    signed_in(&mut app);
    app.projects.push(project("en_tn"));

    let mut other = record();
    other.user.login = "sam".to_string();
    app.auth.set_authentication(Some(other));
    app.tick();

    assert_eq!(app.repos.default_owner(), Some("sam"));
    assert!(app.projects.is_empty());
}
