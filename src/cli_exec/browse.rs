use bookstep::books::book_files;
use bookstep::model::RepositoryRef;

use super::*;

pub(super) fn handle_repos_command(
    ctx: &CliContext,
    owner: Option<String>,
    query: Option<String>,
    json: bool,
) -> Result<()> {
    let (auth, record) = require_login(ctx)?;
    let client = auth.client()?;

    let query = query.map(|q| q.trim().to_string()).filter(|q| !q.is_empty());
    let repos = match query {
        Some(q) => {
            let found = client.search_repos(&q, None)?;
            match owner.as_deref() {
                Some(o) => found.into_iter().filter(|r| r.owner == o).collect(),
                None => found,
            }
        }
        None => client.owner_repos(owner.as_deref().unwrap_or(&record.user.login))?,
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&repos).context("serialize repos json")?
        );
    } else if repos.is_empty() {
        println!("(no repositories)");
    } else {
        for r in repos {
            println!("{}\t{}", r.full_name, r.description);
        }
    }
    Ok(())
}

pub(super) fn handle_tree_command(
    ctx: &CliContext,
    owner: &str,
    repo: &str,
    branch: Option<String>,
    all: bool,
    json: bool,
) -> Result<()> {
    // A saved login is optional here; public repositories list without one.
    let client = match require_login(ctx) {
        Ok((auth, _)) => auth.client()?,
        Err(_) => GiteaClient::new(&ctx.config.server, None)?,
    };

    let tree_url = match branch {
        Some(b) => RepositoryRef::tree_url_for(client.server(), owner, repo, &b),
        None => client.get_repo(owner, repo)?.tree_url,
    };
    let listing = client.get_tree(&tree_url)?;

    if all {
        if json {
            println!(
                "{}",
                serde_json::to_string_pretty(&listing).context("serialize tree json")?
            );
        } else {
            for e in &listing.tree {
                println!("{}\t{}\t{}", e.kind, e.size, e.path);
            }
        }
        return Ok(());
    }

    let files = book_files(&listing);
    if json {
        let rows: Vec<serde_json::Value> = files
            .iter()
            .map(|f| serde_json::json!({ "book": f.code, "path": f.path, "size": f.size }))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("serialize books json")?
        );
    } else if files.is_empty() {
        println!("(no book files)");
    } else {
        for f in files {
            println!("{}\t{}", f.code, f.path);
        }
    }
    if listing.truncated {
        eprintln!("note: the server truncated this listing");
    }
    Ok(())
}
