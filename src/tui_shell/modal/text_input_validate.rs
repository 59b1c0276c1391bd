use super::super::TextInputAction;

pub(super) fn allow_empty_text_input(action: TextInputAction) -> bool {
    matches!(
        action,
        TextInputAction::RepoFilter | TextInputAction::LoginRemember
    )
}

pub(super) fn validate_text_input(action: TextInputAction, value: &str) -> Result<(), String> {
    match action {
        TextInputAction::LoginUsername => {
            if value.chars().any(char::is_whitespace) {
                return Err("username cannot contain spaces".to_string());
            }
            Ok(())
        }
        TextInputAction::LoginRemember => parse_yes_no(value)
            .map(|_| ())
            .ok_or_else(|| "answer y or n".to_string()),
        TextInputAction::LoginPassword | TextInputAction::RepoFilter => Ok(()),
    }
}

/// Empty means yes.
pub(in crate::tui_shell) fn parse_yes_no(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/tui_shell/text_input_validate_tests.rs"]
mod tests;
