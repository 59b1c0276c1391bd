use super::*;
use crate::providers::{FileContext, FileProvider};

fn repo(name: &str) -> RepositoryRef {
    RepositoryRef {
        owner: "jane".to_string(),
        name: name.to_string(),
        full_name: format!("jane/{}", name),
        description: String::new(),
        default_branch: "master".to_string(),
        html_url: String::new(),
        tree_url: RepositoryRef::tree_url_for("https://git.example.com", "jane", name, "master"),
    }
}

#[test]
fn select_and_clear_repository() {
    let mut ctx = RepositoryContext::new();
    assert!(ctx.current().is_none());
    ctx.select(repo("en_tn"));
    assert_eq!(ctx.current().map(|r| r.name.as_str()), Some("en_tn"));
    ctx.clear();
    assert!(ctx.current().is_none());
}

#[test]
fn owner_change_drops_selection() {
    let mut ctx = RepositoryContext::new();
    assert!(ctx.set_default_owner(Some("jane".to_string())));
    ctx.select(repo("en_tn"));

    assert!(!ctx.set_default_owner(Some("jane".to_string())));
    assert!(ctx.current().is_some());

    assert!(ctx.set_default_owner(None));
    assert!(ctx.current().is_none());
    assert_eq!(ctx.default_owner(), None);
}

#[test]
fn file_context_ignores_blank_paths() {
    let mut files = FileContext::new();
    files.set_path(Some("en_tn_57-TIT.tsv".to_string()));
    assert_eq!(files.current_path(), Some("en_tn_57-TIT.tsv"));
    files.set_path(Some("  ".to_string()));
    assert_eq!(files.current_path(), None);
}
