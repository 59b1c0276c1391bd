use super::*;

impl App {
    fn push_entry(&mut self, kind: EntryKind, lines: Vec<String>) {
        let entry = ScrollEntry {
            ts: now_ts(),
            kind,
            lines,
        };
        self.log.push(entry.clone());
        if entry.kind != EntryKind::Note {
            self.last_result = Some(entry);
        }
    }

    pub(in crate::tui_shell) fn push_output(&mut self, lines: Vec<String>) {
        self.push_entry(EntryKind::Output, lines);
    }

    pub(in crate::tui_shell) fn push_error(&mut self, msg: String) {
        self.trace_error(&msg);
        // A rejected token means the saved session is useless; say so where the user looks.
        if msg.contains("unauthorized") && self.auth.current().is_some() {
            self.push_entry(
                EntryKind::Error,
                vec![msg, "press `l` to log out, then sign in again".to_string()],
            );
            return;
        }
        self.push_entry(EntryKind::Error, vec![msg]);
    }

    pub(in crate::tui_shell) fn push_note(&mut self, msg: String) {
        self.push_entry(EntryKind::Note, vec![msg]);
    }

    /// Credential persistence is best-effort: outcomes only reach the log and trace.
    pub(in crate::tui_shell) fn note_save_outcome(&mut self, outcome: SaveOutcome) {
        match outcome {
            SaveOutcome::Saved => self.push_note("login saved".to_string()),
            SaveOutcome::Removed => self.push_note("saved login cleared".to_string()),
            SaveOutcome::Failed(msg) => {
                self.trace_error(&format!("credential store: {}", msg));
                self.push_note(format!("credential store: {}", msg));
            }
        }
    }

    pub(in crate::tui_shell) fn open_modal(&mut self, title: impl Into<String>, lines: Vec<String>) {
        self.modal = Some(Modal {
            title: title.into(),
            lines,
            scroll: 0,
            kind: ModalKind::Viewer,
            input: Input::default(),
        });
    }

    pub(in crate::tui_shell) fn open_text_input_modal(
        &mut self,
        title: impl Into<String>,
        prompt: impl Into<String>,
        action: TextInputAction,
        initial: Option<String>,
        mut lines: Vec<String>,
    ) {
        lines.push("".to_string());
        lines.push("Enter to continue; Esc to cancel.".to_string());

        let mut input = Input::default();
        if let Some(s) = initial {
            input.set(s);
        }

        self.modal = Some(Modal {
            title: title.into(),
            lines,
            scroll: 0,
            kind: ModalKind::TextInput {
                action,
                prompt: prompt.into(),
            },
            input,
        });
    }

    pub(in crate::tui_shell) fn open_drawer(&mut self) {
        self.modal = Some(Modal {
            title: self.config.app_name.clone(),
            lines: Vec::new(),
            scroll: 0,
            kind: ModalKind::Drawer { selected: 0 },
            input: Input::default(),
        });
    }

    pub(in crate::tui_shell) fn show_log(&mut self) {
        let mut lines = Vec::new();
        for entry in &self.log {
            let tag = match entry.kind {
                EntryKind::Output => "",
                EntryKind::Error => "error: ",
                EntryKind::Note => "note: ",
            };
            for (i, l) in entry.lines.iter().enumerate() {
                if i == 0 {
                    lines.push(format!("{} {}{}", fmt_ts_ui(&entry.ts), tag, l));
                } else {
                    lines.push(format!("  {}", l));
                }
            }
        }
        if lines.is_empty() {
            lines.push("(empty)".to_string());
        }
        let scroll = lines.len().saturating_sub(1);
        self.open_modal("Log", lines);
        if let Some(m) = self.modal.as_mut() {
            m.scroll = scroll;
        }
    }

    pub(in crate::tui_shell) fn show_help(&mut self) {
        let lines = [
            "Left / b        back",
            "Right / n       next (when the step is complete)",
            "1 2 3           jump to a step",
            "Up / Down       move in the list",
            "Enter           sign in / choose repository / choose book",
            "/               filter repositories",
            "l               log out",
            "m / F2          menu (My Projects, New Project)",
            "t / F1          My Projects",
            "o               session log",
            "q / Esc         quit (Esc closes My Projects first)",
        ];
        self.open_modal("Keys", lines.iter().map(|s| s.to_string()).collect());
    }

    pub(in crate::tui_shell) fn modal_mut(&mut self) -> Option<&mut Modal> {
        self.modal.as_mut()
    }

    pub(in crate::tui_shell) fn close_modal(&mut self) {
        self.modal = None;
    }

    pub(in crate::tui_shell) fn cancel_wizards(&mut self) {
        self.login_wizard = None;
    }
}
