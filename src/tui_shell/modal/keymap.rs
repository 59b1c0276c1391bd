use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::{DrawerAction, Modal, ModalKind, TextInputAction};
use super::text_input_validate::{allow_empty_text_input, validate_text_input};

pub(super) enum ModalAction {
    None,
    Close,
    Drawer(DrawerAction),
    SubmitTextInput {
        action: TextInputAction,
        value: String,
    },
}

pub(super) fn map_modal_key(modal: &mut Modal, key: KeyEvent) -> ModalAction {
    match &mut modal.kind {
        ModalKind::Viewer => handle_viewer_key(modal, key),

        ModalKind::Drawer { selected } => match key.code {
            KeyCode::Esc => ModalAction::Close,
            KeyCode::Up => {
                *selected = selected.saturating_sub(1);
                ModalAction::None
            }
            KeyCode::Down => {
                *selected = (*selected + 1).min(DrawerAction::ALL.len() - 1);
                ModalAction::None
            }
            KeyCode::Enter => DrawerAction::ALL
                .get(*selected)
                .map(|a| ModalAction::Drawer(*a))
                .unwrap_or(ModalAction::None),
            _ => ModalAction::None,
        },

        ModalKind::TextInput { action, .. } => match key.code {
            KeyCode::Esc => ModalAction::Close,
            KeyCode::Enter => {
                let action = *action;
                // Passwords are taken verbatim.
                let raw = if action.is_secret() {
                    modal.input.buf.clone()
                } else {
                    modal.input.buf.trim().to_string()
                };
                if raw.is_empty() && !allow_empty_text_input(action) {
                    append_modal_error(modal, "value required".to_string());
                    return ModalAction::None;
                }

                match validate_text_input(action, &raw) {
                    Ok(()) => ModalAction::SubmitTextInput { action, value: raw },
                    Err(msg) => {
                        append_modal_error(modal, msg);
                        ModalAction::None
                    }
                }
            }
            _ => {
                apply_input_edit_key(modal, key);
                ModalAction::None
            }
        },
    }
}

fn handle_viewer_key(modal: &mut Modal, key: KeyEvent) -> ModalAction {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => ModalAction::Close,
        KeyCode::Up => {
            modal.scroll = modal.scroll.saturating_sub(1);
            ModalAction::None
        }
        KeyCode::Down => {
            if modal.scroll < modal.lines.len().saturating_sub(1) {
                modal.scroll += 1;
            }
            ModalAction::None
        }
        KeyCode::PageUp => {
            modal.scroll = modal.scroll.saturating_sub(10);
            ModalAction::None
        }
        KeyCode::PageDown => {
            modal.scroll = (modal.scroll + 10).min(modal.lines.len().saturating_sub(1));
            ModalAction::None
        }
        _ => ModalAction::None,
    }
}

fn apply_input_edit_key(modal: &mut Modal, key: KeyEvent) {
    match key.code {
        KeyCode::Backspace => modal.input.backspace(),
        KeyCode::Delete => modal.input.delete(),
        KeyCode::Left => modal.input.move_left(),
        KeyCode::Right => modal.input.move_right(),
        KeyCode::Char(c) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT)
            {
                modal.input.insert_char(c);
            }
        }
        _ => {}
    }
}

fn append_modal_error(modal: &mut Modal, msg: String) {
    modal.lines.retain(|l| !l.starts_with("error:"));
    modal.lines.push(format!("error: {}", msg));
}
