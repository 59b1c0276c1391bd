use crate::store::{LocalStore, MemoryKeyValueStore};

use super::*;

impl App {
    pub(in crate::tui_shell) fn load(opts: crate::tui::TuiRunOptions, handle: Handle) -> Self {
        let mut problems = Vec::new();

        let store = match opts.state_dir.as_deref() {
            Some(dir) => LocalStore::open(dir),
            None => LocalStore::open_default(),
        };
        let store = match store {
            Ok(s) => Some(s),
            Err(err) => {
                problems.push(format!("state directory unavailable: {:#}", err));
                None
            }
        };

        let mut config = match store.as_ref().map(|s| s.read_config()) {
            Some(Ok(cfg)) => cfg,
            Some(Err(err)) => {
                problems.push(format!("read config: {:#}", err));
                AppConfig::default()
            }
            None => AppConfig::default(),
        };
        config.apply_overrides(opts.server.as_deref(), opts.tokenid.as_deref());

        let credentials: Box<dyn KeyValueStore> = match store.as_ref() {
            Some(s) if !opts.ephemeral => Box::new(s.auth_store()),
            _ => Box::new(MemoryKeyValueStore::new()),
        };

        let mut app = App::new(config, credentials, handle.clone());
        app.enable_trace(opts.trace);
        for msg in problems {
            app.push_error(msg);
        }

        match app.auth.load_saved() {
            Ok(true) => {
                let user = app.signed_in_user().unwrap_or_default();
                app.push_note(format!("restored saved login for {}", user));
            }
            Ok(false) => {}
            Err(err) => app.push_note(format!("saved login ignored: {:#}", err)),
        }

        if crate::startup::initialize(&app.config, &handle) && !app.config.reference_urls.is_empty()
        {
            let n = app.config.reference_urls.len();
            app.push_note(format!("fetching {} reference resource(s)", n));
        }

        app.tick();
        app.push_output(vec![
            "Enter: act on the current step; n/b: next/back; m: menu".to_string(),
            "(Press `?` for all keys.)".to_string(),
        ]);
        app
    }
}
