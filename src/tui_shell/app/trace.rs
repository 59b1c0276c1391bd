use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::json;

use super::*;

#[derive(Debug, Default)]
pub(in crate::tui_shell) struct TraceStats {
    pub(in crate::tui_shell) screen_views: u64,
    pub(in crate::tui_shell) user_actions: u64,
    pub(in crate::tui_shell) state_changes: u64,
    pub(in crate::tui_shell) system_errors: u64,
}

/// Append-only JSONL session trace, one event per line.
#[derive(Debug)]
pub(in crate::tui_shell) struct TraceWriter {
    out: BufWriter<File>,
    path: PathBuf,
    seq: u64,
}

impl TraceWriter {
    fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!(
                    "create parent directories for trace path {}",
                    path.display()
                )
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open trace file {}", path.display()))?;
        Ok(Self {
            out: BufWriter::new(file),
            path: path.to_path_buf(),
            seq: 0,
        })
    }

    fn write_event<T: Serialize>(&mut self, event: &str, payload: T) -> Result<()> {
        self.seq += 1;
        let line = json!({
            "seq": self.seq,
            "ts": now_ts(),
            "event": event,
            "payload": payload
        });
        serde_json::to_writer(&mut self.out, &line).context("serialize trace event")?;
        self.out.write_all(b"\n").context("write trace newline")?;
        self.out.flush().context("flush trace event")?;
        Ok(())
    }
}

impl App {
    pub(in crate::tui_shell) fn enable_trace(&mut self, path: Option<PathBuf>) {
        let Some(path) = path else {
            return;
        };
        match TraceWriter::open(&path) {
            Ok(mut writer) => {
                let _ = writer.write_event(
                    "session_start",
                    json!({
                        "server": self.config.server,
                        "app_name": self.config.app_name,
                        "step": self.stepper.current().label(),
                    }),
                );
                self.trace = Some(writer);
                self.push_note(format!("trace enabled: {}", path.display()));
            }
            Err(err) => {
                self.push_error(format!("trace disabled: {:#}", err));
            }
        }
    }

    pub(in crate::tui_shell) fn trace_screen_view_if_changed(&mut self) {
        if self.trace.is_none() {
            return;
        }

        let focused = if self.modal.is_some() {
            "modal"
        } else if self.show_projects {
            "projects"
        } else {
            "step"
        };
        let signature = format!(
            "{}|{}|{}|{}",
            self.stepper.current().label(),
            self.view().title(),
            focused,
            self.modal.as_ref().map(|m| m.title.as_str()).unwrap_or(""),
        );
        if self.last_screen_signature.as_ref() == Some(&signature) {
            return;
        }
        self.last_screen_signature = Some(signature);
        self.trace_stats.screen_views += 1;

        self.write_trace_event(
            "screen_view",
            json!({
                "step": self.stepper.current().label(),
                "title": self.view().title(),
                "focused_element": focused,
                "modal": self.modal.as_ref().map(|m| m.title.clone()),
                "can_back": self.stepper.can_back(),
                "can_next": self.stepper.can_next(),
            }),
        );
    }

    pub(in crate::tui_shell) fn trace_key_action(&mut self, key: KeyEvent) {
        self.trace_stats.user_actions += 1;
        self.write_trace_event(
            "user_action",
            json!({
                "source": "keyboard",
                "action": "key_press",
                "key": key_to_string(&key, self.modal.is_some()),
                "step": self.stepper.current().label(),
            }),
        );
    }

    pub(in crate::tui_shell) fn trace_state_change(&mut self, state: &str, from: &str, to: &str) {
        self.trace_stats.state_changes += 1;
        self.write_trace_event(
            "state_change",
            json!({
                "state": state,
                "from": from,
                "to": to,
                "step": self.stepper.current().label(),
            }),
        );
    }

    pub(in crate::tui_shell) fn trace_error(&mut self, msg: &str) {
        self.trace_stats.system_errors += 1;
        self.write_trace_event(
            "system_error",
            json!({
                "message": msg,
                "step": self.stepper.current().label(),
            }),
        );
    }

    pub(in crate::tui_shell) fn trace_session_end(&mut self, reason: &str) {
        self.write_trace_event(
            "session_end",
            json!({
                "reason": reason,
                "stats": {
                    "screen_views": self.trace_stats.screen_views,
                    "user_actions": self.trace_stats.user_actions,
                    "state_changes": self.trace_stats.state_changes,
                    "system_errors": self.trace_stats.system_errors
                },
                "trace_path": self.trace.as_ref().map(|w| w.path.display().to_string()),
            }),
        );
    }

    fn write_trace_event<T: Serialize>(&mut self, event: &str, payload: T) {
        let Some(writer) = self.trace.as_mut() else {
            return;
        };
        if writer.write_event(event, payload).is_err() {
            self.trace = None;
        }
    }
}

/// Typed text inside a modal may be a password, so only its presence is recorded.
fn key_to_string(key: &KeyEvent, redact_chars: bool) -> String {
    let mut parts = Vec::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("ctrl".to_string());
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("alt".to_string());
    }
    let code = match key.code {
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::F(n) => format!("f{}", n),
        KeyCode::Char(_) if redact_chars => "char".to_string(),
        KeyCode::Char(c) => c.to_string(),
        _ => "other".to_string(),
    };
    parts.push(code);
    parts.join("+")
}
