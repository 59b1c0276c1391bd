use super::*;

pub(super) fn handle_config_command(ctx: &CliContext, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show { json } => {
            let cfg = &ctx.config;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(cfg).context("serialize config json")?
                );
            } else {
                println!("state_dir: {}", ctx.store.root().display());
                println!("server: {}", cfg.server);
                println!("tokenid: {}", cfg.tokenid);
                println!("app_name: {}", cfg.app_name);
                if cfg.reference_urls.is_empty() {
                    println!("reference_urls: (none)");
                } else {
                    println!("reference_urls:");
                    for u in &cfg.reference_urls {
                        println!("  {}", u);
                    }
                }
            }
        }
        ConfigCommands::Set { key, value } => {
            // Edit the file as stored, not the flag-overridden view.
            let mut cfg = ctx.store.read_config()?;
            let value = value.trim();
            match key.as_str() {
                "server" => {
                    if value.is_empty() {
                        anyhow::bail!("server cannot be empty");
                    }
                    cfg.server = value.trim_end_matches('/').to_string();
                }
                "tokenid" => {
                    if value.is_empty() {
                        anyhow::bail!("tokenid cannot be empty");
                    }
                    cfg.tokenid = value.to_string();
                }
                "app-name" | "app_name" => cfg.app_name = value.to_string(),
                "reference-urls" | "reference_urls" => {
                    cfg.reference_urls = value
                        .split(',')
                        .map(str::trim)
                        .filter(|u| !u.is_empty())
                        .map(str::to_string)
                        .collect();
                }
                other => anyhow::bail!(
                    "unknown setting `{}` (expected server, tokenid, app-name, reference-urls)",
                    other
                ),
            }
            ctx.store.write_config(&cfg)?;
            println!("Updated {}", key);
        }
    }
    Ok(())
}
