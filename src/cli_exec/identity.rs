use std::io::{self, BufRead};

use bookstep::store::SaveOutcome;

use super::*;

pub(super) fn handle_login_command(
    ctx: &CliContext,
    username: &str,
    password: Option<String>,
    remember: bool,
) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => {
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("read password from stdin")?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    let mut auth = ctx.auth();
    let outcome = auth.login(username, &password, remember)?;
    let user = auth.current_user().unwrap_or(username).to_string();
    println!("Logged in as {} on {}", user, ctx.config.server);
    match outcome {
        SaveOutcome::Saved => {}
        SaveOutcome::Removed => println!("note: login not saved (--no-remember)"),
        SaveOutcome::Failed(msg) => eprintln!("warning: login not saved: {}", msg),
    }
    Ok(())
}

pub(super) fn handle_logout_command(ctx: &CliContext) -> Result<()> {
    let mut auth = ctx.auth();
    match auth.logout() {
        SaveOutcome::Failed(msg) => anyhow::bail!("clear saved login: {}", msg),
        _ => println!("Logged out"),
    }
    Ok(())
}

pub(super) fn handle_whoami_command(ctx: &CliContext, json: bool) -> Result<()> {
    let (auth, _) = require_login(ctx)?;
    let user = auth.client()?.current_user()?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&user).context("serialize whoami json")?
        );
    } else {
        println!("user: {}", user.login);
        if !user.full_name.is_empty() {
            println!("name: {}", user.full_name);
        }
        println!("server: {}", ctx.config.server);
    }
    Ok(())
}
