use super::*;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick();
        app.trace_screen_view_if_changed();
        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            app.trace_session_end("quit");
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

pub(in crate::tui_shell) fn handle_key(app: &mut App, key: KeyEvent) {
    app.trace_key_action(key);

    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('c') {
            app.quit = true;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit = true,
        KeyCode::Esc => {
            if app.show_projects {
                app.toggle_projects(false);
            } else {
                app.quit = true;
            }
        }

        KeyCode::Left | KeyCode::Char('b') => app.step_back(),
        KeyCode::Right | KeyCode::Char('n') => app.step_next(),
        KeyCode::Char(c @ '1'..='3') => app.select_step(c as usize - '1' as usize),

        KeyCode::Up => app.view_mut().move_up(),
        KeyCode::Down => app.view_mut().move_down(),
        KeyCode::Enter => app.activate(),

        KeyCode::Char('/') => app.start_repo_filter(),
        KeyCode::Char('l') => app.logout(),
        KeyCode::Char('m') | KeyCode::F(2) => app.open_drawer(),
        KeyCode::Char('t') | KeyCode::F(1) => app.title_action(),
        KeyCode::Char('o') => app.show_log(),
        KeyCode::Char('?') => app.show_help(),
        _ => {}
    }
}
