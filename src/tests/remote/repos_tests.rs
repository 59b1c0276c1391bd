use super::*;

fn repo(branch: &str) -> Repo {
    Repo {
        id: 1,
        name: "en_tn".to_string(),
        full_name: "unfoldingWord/en_tn".to_string(),
        owner: RepoOwner {
            id: 9,
            login: "unfoldingWord".to_string(),
        },
        description: "translation notes".to_string(),
        default_branch: branch.to_string(),
        html_url: "https://git.example.com/unfoldingWord/en_tn".to_string(),
        empty: false,
    }
}

#[test]
fn repo_ref_carries_tree_url_for_default_branch() {
    let r = repo("main").into_ref("https://git.example.com/");
    assert_eq!(r.owner, "unfoldingWord");
    assert_eq!(r.default_branch, "main");
    assert_eq!(
        r.tree_url,
        "https://git.example.com/api/v1/repos/unfoldingWord/en_tn/git/trees/main"
    );
}

#[test]
fn missing_default_branch_falls_back_to_master() {
    let r = repo("").into_ref("https://git.example.com");
    assert_eq!(r.default_branch, "master");
    assert!(r.tree_url.ends_with("/git/trees/master"));
}

#[test]
fn empty_repositories_are_skipped() {
    let c = GiteaClient::new("https://git.example.com", None).unwrap();
    let mut empty = repo("master");
    empty.empty = true;
    empty.name = "blank".to_string();
    let refs = c.to_refs(vec![repo("master"), empty]);
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].name, "en_tn");
}

#[test]
fn search_response_tolerates_missing_fields() {
    let v: RepoSearchResponse = serde_json::from_value(serde_json::json!({
        "data": [{
            "name": "en_tn",
            "full_name": "unfoldingWord/en_tn",
            "owner": { "login": "unfoldingWord" }
        }]
    }))
    .unwrap();
    assert!(!v.ok);
    assert_eq!(v.data.len(), 1);
    assert_eq!(v.data[0].default_branch, "");
}
